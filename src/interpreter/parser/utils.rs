use crate::{
    error::ParseError,
    interpreter::{
        cursor::TokenCursor,
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
    util::num::lost_finiteness,
};

/// Consumes the next token, requiring it to be of kind `expected`.
///
/// # Errors
/// - `MissingToken` if the input is exhausted.
/// - `UnexpectedToken` if the next token has a different kind.
pub(in crate::interpreter::parser) fn expect<'src, I>(cursor: &mut TokenCursor<'src, I>,
                                                      expected: TokenKind)
                                                      -> ParseResult<Token<'src>>
    where I: Iterator<Item = Token<'src>>
{
    match cursor.advance() {
        Some(token) if token.kind == expected => Ok(token),
        Some(token) => Err(unexpected(token)),
        None => Err(missing(cursor, expected)),
    }
}

/// Builds an `UnexpectedToken` error positioned at `token`.
pub(in crate::interpreter::parser) fn unexpected(token: Token<'_>) -> ParseError {
    ParseError::UnexpectedToken { token:  token.text.to_string(),
                                  line:   token.line,
                                  column: token.column, }
}

/// Builds a `MissingToken` error positioned at the last token read, or at the
/// start of the input when nothing was read.
pub(in crate::interpreter::parser) fn missing<'src, I>(cursor: &TokenCursor<'src, I>,
                                                       expected: TokenKind)
                                                       -> ParseError
    where I: Iterator<Item = Token<'src>>
{
    let (line, column) = cursor.last().map_or((1, 0), |t| (t.line, t.column));

    ParseError::MissingToken { expected,
                               line,
                               column }
}

/// Rejects `result` when it stopped being finite although every operand was.
///
/// `describe` renders the operation for the error message and is only called
/// on failure.
///
/// # Errors
/// Returns `NumericDomain` positioned at `at`.
pub(in crate::interpreter::parser) fn check_finite(result: f64,
                                                   operands: &[f64],
                                                   at: Token<'_>,
                                                   describe: impl FnOnce() -> String)
                                                   -> ParseResult<f64> {
    if lost_finiteness(result, operands) {
        return Err(ParseError::NumericDomain { details: format!("{} is not a finite number",
                                                                describe()),
                                               line:    at.line,
                                               column:  at.column, });
    }
    Ok(result)
}
