use std::fs::{self};

use linecalc::{Outcome, ParseError, Parser, evaluate, interpreter::lexer::TokenKind,
               interpreter::symbol::{Symbol, SymbolKind}};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_calc_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = evaluate(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_calc_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```linecalc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn value_of(src: &str) -> f64 {
    match Parser::new().parse(src) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("Script {src:?} produced no value"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn assert_value(src: &str, expected: f64) {
    let value = value_of(src);
    assert!((value - expected).abs() < 1e-12,
            "Script {src:?} gave {value}, expected {expected}");
}

fn error_of(src: &str) -> ParseError {
    match Parser::new().parse(src) {
        Ok(result) => panic!("Script {src:?} succeeded with {result:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn sum_and_subtract() {
    assert_value("1 + 1", 2.0);
    assert_value("4 + 1 + 3 + 2", 10.0);
    assert_value("3 - 1", 2.0);
    assert_value("3 - 1 + 2", 4.0);
    assert_value("3 - 1 + (4)", 6.0);
}

#[test]
fn multiply_and_divide() {
    assert_value("1 + 1 / 2", 1.5);
    assert_value("4 + 1 * 2", 6.0);
    assert_value("4 / 2", 2.0);
    assert_value("2 * 4 / 2", 4.0);
    assert_value("(5 * 3) / 2", 7.5);
    assert_value("1 * 6 / (3)", 2.0);
    assert_value("8 / 4 / 2", 1.0);
}

#[test]
fn exponentiation() {
    assert_value("2 ^ 2", 4.0);
    assert_value("2 * 2 ^ 3", 16.0);
    assert_value("2 ^ 3 * 2", 16.0);
    assert_value("2 + (2 ^ 3)", 10.0);
    assert_value("2 ^ 0", 1.0);
    assert_value("0 ^ 2", 0.0);
}

#[test]
fn chained_exponents_evaluate_left_to_right() {
    assert_value("2 ^ 3 ^ 2", 64.0);
    assert_value("2 ^ (3 ^ 2)", 512.0);
}

#[test]
fn builtin_functions() {
    assert_value("log2(1 + 1)", 1.0);
    assert_value("sqrt(2 * 2)", 2.0);
    assert_value("sqrt(4 * 4) + sqrt(4)", 6.0);
    assert_value("sqrt(4 * 4) / sqrt(4)", 2.0);
    assert_value("sqrt(sqrt(4 * 4))", 2.0);
    assert_value("log2(sqrt(4 * 4))", 2.0);
    assert_value("log10(1000)", 3.0);
    assert_value("sin(0) + cos(0)", 1.0);
    assert_value("tan(0)", 0.0);
    assert_value("tanh(0)", 0.0);
    assert_value("sqrt (16)", 4.0);
}

#[test]
fn literal_forms() {
    assert_value("1.5e2 / 3", 50.0);
    assert_value(".5 + 1.", 1.5);
    assert_value("2E-1 * 10", 2.0);
}

#[test]
fn signed_literals_fold_into_the_sum() {
    assert_value("1 -1", 0.0);
    assert_value("1+2", 3.0);
    assert_value("4-2", 2.0);
    assert_value("3 -1 * 2", 1.0);
    assert_value("-2 + 5", 3.0);
    assert_value("2 -.5", 1.5);
}

#[test]
fn signed_literal_sign_binds_looser_than_its_term() {
    assert_value("5-3^2", -4.0);
    assert_value("1-2^2", -3.0);
    assert_value("1 -2 ^ 2", -3.0);
    assert_value("x = 3\nx-2^2", -1.0);
    assert_value("10 -2 * 3 ^ 2", -8.0);
    assert_value("1 +2 ^ 3 / 4", 3.0);
}

#[test]
fn signed_literals_after_higher_operators_are_plain_literals() {
    assert_value("2 * -3", -6.0);
    assert_value("2 ^ -1", 0.5);
    assert_value("6 / -2", -3.0);
    assert_value("2 - -1", 3.0);
}

#[test]
fn whitespace_variants() {
    assert_value("1\t+\t2", 3.0);
    assert_value("   7", 7.0);
    assert_value("a = 1\r\nb = 2\r\na + b", 3.0);
}

#[test]
fn assignments_update_variables() {
    let mut parser = Parser::new();
    assert_eq!(parser.parse("a = log2(1 + 1)").unwrap(), None);
    assert_eq!(parser.variables().into_iter().collect::<Vec<_>>(),
               vec![("a".to_string(), 1.0)]);

    let mut parser = Parser::new();
    assert_eq!(parser.parse("b = sqrt(4 * 4) \n a = sqrt(b)").unwrap(), None);
    assert_eq!(parser.variables()["b"], 4.0);
    assert_eq!(parser.variables()["a"], 2.0);

    let mut parser = Parser::new();
    assert_eq!(parser.parse("b = 4 / 2 \n a = b \n c = a / 2").unwrap(), None);
    let vars = parser.variables();
    assert_eq!(vars.len(), 3);
    assert_eq!(vars["b"], 2.0);
    assert_eq!(vars["a"], 2.0);
    assert_eq!(vars["c"], 1.0);
}

#[test]
fn variables_can_be_reassigned() {
    assert_value("x = 1\nx = x + 1\nx = x * 10\nx", 20.0);
}

#[test]
fn assignments_before_expression_are_applied() {
    let mut parser = Parser::new();
    assert_eq!(parser.parse("w = 3\nh = 4\nsqrt(w ^ 2 + h ^ 2)").unwrap(), Some(5.0));
    assert_eq!(parser.variables().len(), 2);
}

#[test]
fn variables_persist_across_calls() {
    let mut parser = Parser::new();
    parser.parse("a = 3").unwrap();
    parser.parse("b = a * 2").unwrap();
    assert_eq!(parser.parse("a + b").unwrap(), Some(9.0));
}

#[test]
fn parser_instances_are_isolated() {
    let mut first = Parser::new();
    let mut second = Parser::new();

    first.parse("shared = 1").unwrap();

    assert!(matches!(second.parse("shared"), Err(ParseError::UndefinedVariable { .. })));
    assert!(second.variables().is_empty());
    assert_eq!(first.symbols().len(), second.symbols().len() + 1);
    assert!(!second.symbols().is_empty());
}

#[test]
fn variables_remember_their_assignment_line() {
    let mut parser = Parser::new();
    parser.parse("a = 1\nb = 2\na = b + 1").unwrap();

    assert_eq!(parser.symbols().get("a"), Some(&Symbol::Variable { value: 3.0, line: 3 }));
    assert_eq!(parser.symbols().get("b"), Some(&Symbol::Variable { value: 2.0, line: 2 }));
}

#[test]
fn only_the_first_bare_expression_is_evaluated() {
    let mut parser = Parser::new();
    assert_eq!(parser.parse("1 + 1\nlater = 5").unwrap(), Some(2.0));
    assert!(parser.variables().is_empty());
    assert_value("1 2", 1.0);
}

#[test]
fn empty_input_produces_nothing() {
    let mut parser = Parser::new();
    assert_eq!(parser.parse("").unwrap(), None);
    assert_eq!(parser.parse("   \n\t").unwrap(), None);
}

#[test]
fn unknown_characters_truncate_their_line() {
    assert_value("1 + 2 $ 3", 3.0);
    assert_value("1 +$ 7\n2", 3.0);
    assert!(matches!(error_of("1 + #"), ParseError::MissingToken { .. }));
}

#[test]
fn malformed_input_is_rejected() {
    for src in ["1 + 1 /", "1 +", "+", "-", "1 + ( 2", "(", ")", "*", "2 * (3 +)", "x ="] {
        assert!(Parser::new().parse(src).is_err(), "{src:?} should fail");
    }
}

#[test]
fn trailing_operator_reports_missing_operand() {
    assert_eq!(error_of("1 + 1 /"),
               ParseError::MissingToken { expected: TokenKind::Number,
                                          line:     1,
                                          column:   6, });
}

#[test]
fn unbalanced_parenthesis_reports_missing_rparen() {
    assert_eq!(error_of("1 + ( 2"),
               ParseError::MissingToken { expected: TokenKind::RParen,
                                          line:     1,
                                          column:   6, });
}

#[test]
fn bare_operator_reports_unexpected_token() {
    assert_eq!(error_of("+"),
               ParseError::UnexpectedToken { token:  "+".to_string(),
                                             line:   1,
                                             column: 0, });
    assert_eq!(error_of("a = 1\n  2 * )"),
               ParseError::UnexpectedToken { token:  ")".to_string(),
                                             line:   2,
                                             column: 6, });
}

#[test]
fn undefined_names() {
    assert_eq!(error_of("x = 1\n y + 2"),
               ParseError::UndefinedVariable { name:   "y".to_string(),
                                               line:   2,
                                               column: 1, });
    assert_eq!(error_of("foo(2)"),
               ParseError::UndefinedFunction { name:   "foo".to_string(),
                                               line:   1,
                                               column: 0, });
    assert!(matches!(error_of("SIN(0)"), ParseError::UndefinedFunction { .. }));
}

#[test]
fn assigning_to_a_builtin_is_a_kind_mismatch() {
    assert_eq!(error_of("sqrt = 3"),
               ParseError::KindMismatch { name:     "sqrt".to_string(),
                                          expected: SymbolKind::Variable,
                                          found:    SymbolKind::Function,
                                          line:     1,
                                          column:   0, });
}

#[test]
fn calling_a_variable_is_a_kind_mismatch() {
    assert_eq!(error_of("a = 1\na(2)"),
               ParseError::KindMismatch { name:     "a".to_string(),
                                          expected: SymbolKind::Function,
                                          found:    SymbolKind::Variable,
                                          line:     2,
                                          column:   0, });
}

#[test]
fn using_a_function_as_a_value_is_a_kind_mismatch() {
    assert!(matches!(error_of("sin + 1"),
                     ParseError::KindMismatch { expected: SymbolKind::Variable,
                                                found: SymbolKind::Function,
                                                .. }));
}

#[test]
fn reserved_function_without_implementation() {
    let mut parser = Parser::new();
    assert!(parser.symbols_mut().declare_function("erf"));
    assert!(!parser.symbols_mut().declare_function("sin"));

    assert_eq!(parser.parse("erf(1)"),
               Err(ParseError::UnsupportedFunction { name:   "erf".to_string(),
                                                     line:   1,
                                                     column: 0, }));
    assert!(matches!(parser.parse("erf = 1"), Err(ParseError::KindMismatch { .. })));
}

#[test]
fn numeric_domain_errors() {
    assert!(matches!(error_of("sqrt(-1)"), ParseError::NumericDomain { column: 0, .. }));
    assert!(matches!(error_of("log2(0)"), ParseError::NumericDomain { .. }));
    assert!(matches!(error_of("log10(0 - 5)"), ParseError::NumericDomain { .. }));
    assert!(matches!(error_of("1 / 0"), ParseError::NumericDomain { column: 2, .. }));
    assert!(matches!(error_of("10 ^ 400"), ParseError::NumericDomain { .. }));
}

#[test]
fn non_finite_literals_propagate() {
    assert_eq!(value_of("1e400 - 1"), f64::INFINITY);
}

#[test]
fn failed_statement_keeps_earlier_assignments() {
    let mut parser = Parser::new();
    assert!(parser.parse("a = 1\nb = 2 +").is_err());
    assert_eq!(parser.variables().len(), 1);
    assert_eq!(parser.variables()["a"], 1.0);
}

#[test]
fn error_display_format() {
    assert_eq!(error_of("1 + 1 /").to_string(),
               "error: missing token NUMBER on line 1 column 6");
    assert_eq!(error_of("sqrt = 3").to_string(),
               "error: 'sqrt' is a function and cannot be used as a variable on line 1 column 0");
}

#[test]
fn outcome_rendering() {
    assert_eq!(evaluate("2 ^ 2").unwrap().to_string(), "4");
    assert_eq!(evaluate("b = 1\na = 2").unwrap().to_string(), "a = 2\nb = 1");
    assert_eq!(evaluate("").unwrap(), Outcome::Variables(Default::default()));
}
