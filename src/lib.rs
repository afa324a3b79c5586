//! # linecalc
//!
//! linecalc is a line-oriented calculator written in Rust.
//! It evaluates arithmetic expressions with `+ - * / ^`, parentheses, a fixed
//! set of built-in functions and variables assigned with `name = expression`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::BTreeMap;

/// Provides the error type for parsing and evaluation.
///
/// This module defines the positioned error raised when text cannot be
/// tokenized, parsed or evaluated. Every error carries the line and column of
/// the token it is attributed to, and displays as
/// `error: {message} on line {line} column {column}`.
///
/// # Responsibilities
/// - Defines one variant per failure mode (syntax, name resolution, numeric
///   domain).
/// - Attaches line and column information for user feedback.
/// - Integrates with `std::error::Error`.
pub mod error;
/// Turns text into numbers.
///
/// This module ties together the tokenizer, the token cursor, the symbol table
/// and the evaluating parser. It exposes [`Parser`], the stateful entry point
/// for evaluating statements.
///
/// # Responsibilities
/// - Coordinates lexing, lookahead and evaluation.
/// - Holds the variables assigned across calls.
/// - Reports errors from every phase with source positions.
pub mod interpreter;
/// General numeric helpers.
///
/// Literal parsing and the checks that turn non-finite results into errors.
pub mod util;

pub use crate::{error::ParseError, interpreter::parser::core::Parser};

/// What a front end shows after evaluating some text.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The text ended in a bare expression with this value.
    Value(f64),
    /// The text only held assignments; these are all variables now defined.
    Variables(BTreeMap<String, f64>),
}

impl std::fmt::Display for Outcome {
    /// A value prints as itself; variables print as `name = value`, one per
    /// line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Variables(variables) => {
                for (i, (name, value)) in variables.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{name} = {value}")?;
                }
                Ok(())
            },
        }
    }
}

/// Evaluates `text` with a fresh [`Parser`].
///
/// Leading assignments are applied, then the first bare expression is
/// evaluated. If there is no bare expression the resulting variables are
/// returned instead.
///
/// # Errors
/// Returns a [`ParseError`] if the text is malformed, names something that is
/// not defined, or produces a non-finite result from finite operands.
///
/// # Examples
/// ```
/// use linecalc::{Outcome, evaluate};
///
/// assert_eq!(evaluate("2 * 2 ^ 3").unwrap(), Outcome::Value(16.0));
///
/// let Outcome::Variables(vars) = evaluate("b = 4 / 2\na = b\nc = a / 2").unwrap() else {
///     panic!("expected variables");
/// };
/// assert_eq!(vars["c"], 1.0);
///
/// // `x` is never assigned.
/// assert!(evaluate("x + 1").is_err());
/// ```
pub fn evaluate(text: &str) -> Result<Outcome, ParseError> {
    Parser::new().run(text)
}
