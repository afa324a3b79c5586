use log::trace;

use crate::{
    error::ParseError,
    interpreter::{
        cursor::TokenCursor,
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_expression,
            core::ParseResult,
            utils::{check_finite, expect, missing, unexpected},
        },
        symbol::{Symbol, SymbolKind, SymbolTable},
    },
    util::num::parse_literal,
};

/// Parses and evaluates a factor.
///
/// The rule is:
/// `factor := NUMBER | "(" expression ")" | IDENTIFIER "(" expression ")" |
/// IDENTIFIER`
///
/// An identifier directly followed by `(` is a function call; any other
/// identifier is a variable reference.
///
/// # Errors
/// - `MissingToken` when the input ends where an operand is required.
/// - `UnexpectedToken` for an operator or `)` in operand position.
/// - Name resolution errors from calls and variable references.
pub fn parse_factor<'src, I>(cursor: &mut TokenCursor<'src, I>,
                             symbols: &SymbolTable)
                             -> ParseResult<f64>
    where I: Iterator<Item = Token<'src>>
{
    let Some(token) = cursor.advance() else {
        return Err(missing(cursor, TokenKind::Number));
    };

    match token.kind {
        TokenKind::Number => parse_literal(token.text).ok_or_else(|| unexpected(token)),
        TokenKind::LParen => {
            let value = parse_expression(cursor, symbols)?;
            expect(cursor, TokenKind::RParen)?;
            Ok(value)
        },
        TokenKind::Identifier => {
            if cursor.lookahead(1)
                     .is_some_and(|next| next.kind == TokenKind::LParen)
            {
                parse_call(token, cursor, symbols)
            } else {
                resolve_variable(token, symbols)
            }
        },
        _ => Err(unexpected(token)),
    }
}

/// Evaluates a call `name "(" expression ")"`, with the cursor positioned
/// right after `name`.
///
/// The argument is parsed before a reserved but unimplemented name is
/// reported, so syntax errors inside the parentheses surface first.
fn parse_call<'src, I>(name: Token<'src>,
                       cursor: &mut TokenCursor<'src, I>,
                       symbols: &SymbolTable)
                       -> ParseResult<f64>
    where I: Iterator<Item = Token<'src>>
{
    let builtin = match symbols.get(name.text) {
        Some(Symbol::Function(builtin)) => *builtin,
        Some(other) => {
            return Err(ParseError::KindMismatch { name:     name.text.to_string(),
                                                  expected: SymbolKind::Function,
                                                  found:    other.kind(),
                                                  line:     name.line,
                                                  column:   name.column, });
        },
        None => {
            return Err(ParseError::UndefinedFunction { name:   name.text.to_string(),
                                                       line:   name.line,
                                                       column: name.column, });
        },
    };

    expect(cursor, TokenKind::LParen)?;
    let argument = parse_expression(cursor, symbols)?;
    expect(cursor, TokenKind::RParen)?;

    let Some(builtin) = builtin else {
        return Err(ParseError::UnsupportedFunction { name:   name.text.to_string(),
                                                     line:   name.line,
                                                     column: name.column, });
    };

    trace!("calling {builtin}({argument})");
    check_finite(builtin.apply(argument), &[argument], name, || {
        format!("{builtin}({argument})")
    })
}

/// Resolves a bare identifier to the value of the variable it names.
fn resolve_variable(name: Token<'_>, symbols: &SymbolTable) -> ParseResult<f64> {
    match symbols.get(name.text) {
        Some(Symbol::Variable { value, .. }) => Ok(*value),
        Some(other) => Err(ParseError::KindMismatch { name:     name.text.to_string(),
                                                      expected: SymbolKind::Variable,
                                                      found:    other.kind(),
                                                      line:     name.line,
                                                      column:   name.column, }),
        None => Err(ParseError::UndefinedVariable { name:   name.text.to_string(),
                                                    line:   name.line,
                                                    column: name.column, }),
    }
}
