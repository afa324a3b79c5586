use crate::{
    interpreter::{
        cursor::TokenCursor,
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            factor::parse_factor,
            utils::{check_finite, unexpected},
        },
        symbol::SymbolTable,
    },
    util::num::parse_literal,
};

/// The binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// Computes `left op right` with IEEE 754 semantics.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

/// Maps a token kind to its binary operator, if it is one.
///
/// # Example
/// ```
/// use linecalc::interpreter::{
///     lexer::TokenKind,
///     parser::binary::{BinaryOperator, token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Pow), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(TokenKind::Number), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Mult => Some(BinaryOperator::Mul),
        TokenKind::Div => Some(BinaryOperator::Div),
        TokenKind::Pow => Some(BinaryOperator::Pow),
        _ => None,
    }
}

fn apply_binary(op: BinaryOperator, left: f64, right: f64, at: Token<'_>) -> ParseResult<f64> {
    check_finite(op.apply(left, right), &[left, right], at, || {
        format!("{left} {} {right}", op.symbol())
    })
}

/// Parses and evaluates addition and subtraction.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// The lexer glues a sign onto the digits after it, so `5-3` arrives as the
/// literals `5` and `-3`. A signed literal met where an operator is expected
/// is read as its sign used as `+` or `-`, followed by a term whose first
/// factor is the unsigned magnitude: `5-3^2` is `5 - 3 ^ 2`. Only this level
/// does it; after `*`, `/` or `^` a signed literal is just a literal.
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the first token of the expression.
/// - `symbols`: Symbol table used to resolve names.
///
/// # Returns
/// The value of the expression. The first token that cannot continue it is
/// left unconsumed.
pub fn parse_expression<'src, I>(cursor: &mut TokenCursor<'src, I>,
                                 symbols: &SymbolTable)
                                 -> ParseResult<f64>
    where I: Iterator<Item = Token<'src>>
{
    let mut value = parse_term(cursor, symbols)?;

    while let Some(token) = cursor.advance() {
        if let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let right = parse_term(cursor, symbols)?;
            value = apply_binary(op, value, right, token)?;
            continue;
        }

        if let Some((op, magnitude)) = split_signed_literal(token) {
            let base = parse_power_from(magnitude?, cursor, symbols)?;
            let right = parse_term_from(base, cursor, symbols)?;
            value = apply_binary(op, value, right, token)?;
            continue;
        }

        cursor.rollback();
        break;
    }

    Ok(value)
}

/// Splits a signed numeric literal into the operator its sign stands for and
/// its unsigned value. Returns `None` for any other token.
fn split_signed_literal(token: Token<'_>) -> Option<(BinaryOperator, ParseResult<f64>)> {
    if !token.is_signed_number() {
        return None;
    }

    let op = if token.text.starts_with('+') { BinaryOperator::Add } else { BinaryOperator::Sub };
    let magnitude = parse_literal(&token.text[1..]).ok_or_else(|| unexpected(token));
    Some((op, magnitude))
}

/// Parses and evaluates multiplication and division.
///
/// The rule is: `term := power (("*" | "/") power)*`
pub fn parse_term<'src, I>(cursor: &mut TokenCursor<'src, I>,
                           symbols: &SymbolTable)
                           -> ParseResult<f64>
    where I: Iterator<Item = Token<'src>>
{
    let head = parse_power(cursor, symbols)?;
    parse_term_from(head, cursor, symbols)
}

/// Continues a term whose first power has already been evaluated to `head`.
fn parse_term_from<'src, I>(head: f64,
                            cursor: &mut TokenCursor<'src, I>,
                            symbols: &SymbolTable)
                            -> ParseResult<f64>
    where I: Iterator<Item = Token<'src>>
{
    let mut value = head;

    while let Some(token) = cursor.advance() {
        if let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let right = parse_power(cursor, symbols)?;
            value = apply_binary(op, value, right, token)?;
            continue;
        }

        cursor.rollback();
        break;
    }

    Ok(value)
}

/// Parses and evaluates exponentiation.
///
/// Chained exponents evaluate left to right: `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
///
/// The rule is: `power := factor ("^" factor)*`
pub fn parse_power<'src, I>(cursor: &mut TokenCursor<'src, I>,
                            symbols: &SymbolTable)
                            -> ParseResult<f64>
    where I: Iterator<Item = Token<'src>>
{
    let head = parse_factor(cursor, symbols)?;
    parse_power_from(head, cursor, symbols)
}

/// Continues a power whose first factor has already been evaluated to `head`.
fn parse_power_from<'src, I>(head: f64,
                             cursor: &mut TokenCursor<'src, I>,
                             symbols: &SymbolTable)
                             -> ParseResult<f64>
    where I: Iterator<Item = Token<'src>>
{
    let mut value = head;

    while let Some(token) = cursor.advance() {
        if token.kind == TokenKind::Pow {
            let right = parse_factor(cursor, symbols)?;
            value = apply_binary(BinaryOperator::Pow, value, right, token)?;
            continue;
        }

        cursor.rollback();
        break;
    }

    Ok(value)
}
