use std::{
    fs,
    io::{self, BufRead},
};

use clap::Parser as _;
use linecalc::{Outcome, Parser};

/// linecalc evaluates arithmetic, built-in functions and variable
/// assignments. Without CONTENTS it reads standard input line by line and
/// keeps variables between lines.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells linecalc to treat CONTENTS as a path to a file.
    #[arg(short, long)]
    file: bool,

    /// Print the variables after every evaluation, even when an expression
    /// produced a value.
    #[arg(short, long)]
    vars: bool,

    contents: Option<String>,
}

fn main() {
    pretty_env_logger::init();

    let args = Args::parse();
    let mut parser = Parser::new();

    let Some(contents) = args.contents else {
        repl(&mut parser, args.vars);
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if !run(&mut parser, &script, args.vars) {
        std::process::exit(1);
    }
}

/// Feeds standard input to `parser` one line at a time. Errors are reported
/// and the loop carries on.
fn repl(parser: &mut Parser, show_vars: bool) {
    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                run(parser, &line, show_vars);
            },
            Err(e) => {
                eprintln!("Failed to read from standard input: {e}");
                std::process::exit(1);
            },
        }
    }
}

/// Evaluates `text` and prints the outcome. Returns `false` on error.
fn run(parser: &mut Parser, text: &str, show_vars: bool) -> bool {
    match parser.run(text) {
        Ok(outcome) => {
            print_outcome(&outcome);
            if show_vars && matches!(outcome, Outcome::Value(_)) {
                print_outcome(&Outcome::Variables(parser.variables()));
            }
            true
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Variables(variables) if variables.is_empty() => {},
        _ => println!("{outcome}"),
    }
}
