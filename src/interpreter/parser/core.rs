use std::collections::BTreeMap;

use log::debug;

use crate::{
    Outcome,
    error::ParseError,
    interpreter::{
        cursor::TokenCursor,
        lexer::{Token, TokenKind, Tokenizer},
        parser::{binary::parse_expression, utils::expect},
        symbol::SymbolTable,
    },
};

/// Result type used by every grammar rule.
pub type ParseResult<T> = Result<T, ParseError>;

/// Evaluates text against a symbol table that outlives each call.
///
/// A `Parser` owns its [`SymbolTable`]. Variables assigned by one call to
/// [`Parser::parse`] remain visible to the next, which is what makes REPL
/// style use work. Separate instances share nothing.
///
/// # Example
/// ```
/// use linecalc::Parser;
///
/// let mut parser = Parser::new();
///
/// assert_eq!(parser.parse("r = 2\nsquare = r ^ 2").unwrap(), None);
/// assert_eq!(parser.parse("square * 3").unwrap(), Some(12.0));
/// assert_eq!(parser.variables().get("r"), Some(&2.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    symbols: SymbolTable,
}

impl Parser {
    /// Creates a parser whose symbol table holds only the built-ins.
    #[must_use]
    pub fn new() -> Self {
        Self { symbols: SymbolTable::with_builtins() }
    }

    /// Runs every leading assignment in `text`, then evaluates the first bare
    /// expression.
    ///
    /// Returns `Ok(None)` when `text` contains only assignments (or nothing).
    /// Anything after the bare expression is ignored.
    ///
    /// # Errors
    /// Returns the first error met. Assignments completed before it stay
    /// applied.
    pub fn parse(&mut self, text: &str) -> ParseResult<Option<f64>> {
        debug!("parsing {text:?}");
        let mut cursor = TokenCursor::new(Tokenizer::new(text));
        parse_statements(&mut cursor, &mut self.symbols)
    }

    /// Like [`Parser::parse`], but packages the answer the way a front end
    /// shows it: the expression value, or else the variable snapshot.
    ///
    /// # Errors
    /// Same as [`Parser::parse`].
    pub fn run(&mut self, text: &str) -> ParseResult<Outcome> {
        Ok(match self.parse(text)? {
            Some(value) => Outcome::Value(value),
            None => Outcome::Variables(self.variables()),
        })
    }

    /// Snapshot of all variables, sorted by name.
    #[must_use]
    pub fn variables(&self) -> BTreeMap<String, f64> {
        self.symbols.variables()
    }

    /// The symbol table backing this parser.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Mutable access to the symbol table, e.g. to reserve function names.
    pub const fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }
}

/// Parses statements until a bare expression is evaluated or input runs out.
///
/// Grammar:
/// ```text
/// statements := assignment* expression?
/// assignment := IDENTIFIER "=" expression
/// ```
/// Two tokens of lookahead pick the branch: `IDENTIFIER "="` starts an
/// assignment, anything else an expression.
///
/// # Returns
/// The value of the bare expression, or `None` if there was none.
pub fn parse_statements<'src, I>(cursor: &mut TokenCursor<'src, I>,
                                 symbols: &mut SymbolTable)
                                 -> ParseResult<Option<f64>>
    where I: Iterator<Item = Token<'src>>
{
    while let Some(token) = cursor.lookahead(1) {
        let is_assignment = token.kind == TokenKind::Identifier
                            && cursor.lookahead(2)
                                     .is_some_and(|next| next.kind == TokenKind::Equal);

        if is_assignment {
            parse_assignment(cursor, symbols)?;
            continue;
        }

        let value = parse_expression(cursor, symbols)?;
        if let Some(rest) = cursor.lookahead(1) {
            debug!("ignoring input after the expression, starting at {rest}");
        }
        debug!("result: {value}");
        return Ok(Some(value));
    }

    Ok(None)
}

/// Parses `IDENTIFIER "=" expression` and binds the identifier to the value.
///
/// # Errors
/// - `KindMismatch` if the identifier names a function.
/// - Any error raised while evaluating the right-hand side.
pub fn parse_assignment<'src, I>(cursor: &mut TokenCursor<'src, I>,
                                 symbols: &mut SymbolTable)
                                 -> ParseResult<()>
    where I: Iterator<Item = Token<'src>>
{
    let name = expect(cursor, TokenKind::Identifier)?;
    expect(cursor, TokenKind::Equal)?;

    let value = parse_expression(cursor, symbols)?;
    symbols.assign_variable(name, value)?;

    debug!("line {}: {} = {value}", name.line, name.text);
    Ok(())
}
