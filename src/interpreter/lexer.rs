use log::debug;
use logos::Logos;

/// The kind of a lexical token.
///
/// The rules are tried at every position of a line; the numeric literal rule
/// swallows a leading sign, so `+1` is a single `Number` token while `+ 1` is
/// `Plus` followed by `Number`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `3`, `-2.5`, `.5`, `1.` or `2e10`.
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    Number,
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mult,
    /// `/`
    #[token("/")]
    Div,
    /// `^`
    #[token("^")]
    Pow,
    /// `=`
    #[token("=")]
    Equal,
    /// Spaces, tabs, feeds and carriage returns. Never leaves the tokenizer.
    #[regex(r"[ \t\f\r]+")]
    Whitespace,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::Identifier => "IDENTIFIER",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mult => "MULT",
            Self::Div => "DIV",
            Self::Pow => "POW",
            Self::Equal => "EQUAL",
            Self::Whitespace => "WHITESPACE",
        };
        f.write_str(name)
    }
}

/// A classified slice of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// What the token is.
    pub kind:   TokenKind,
    /// The exact source text of the token.
    pub text:   &'src str,
    /// Byte offset of the token within its line, starting at 0.
    pub column: usize,
    /// The line the token was found on, starting at 1.
    pub line:   usize,
}

impl Token<'_> {
    /// Returns `true` when the token is a numeric literal written with a
    /// leading `+` or `-`.
    #[must_use]
    pub fn is_signed_number(&self) -> bool {
        self.kind == TokenKind::Number && self.text.starts_with(['+', '-'])
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{} '{}' at line {} column {}",
               self.kind, self.text, self.line, self.column)
    }
}

/// Lazily turns source text into tokens, one line at a time.
///
/// The text is split on `\n` and each line gets its own lexer, so line numbers
/// increase by one per line. Whitespace is recognised and dropped. When no
/// rule matches at some position the rest of that line is abandoned and
/// tokenizing carries on with the next line.
///
/// # Example
/// ```
/// use linecalc::interpreter::lexer::{TokenKind, Tokenizer};
///
/// let kinds: Vec<TokenKind> = Tokenizer::new("a = 1\nsqrt(a)").map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Equal,
///             TokenKind::Number,
///             TokenKind::Identifier,
///             TokenKind::LParen,
///             TokenKind::Identifier,
///             TokenKind::RParen]);
/// ```
pub struct Tokenizer<'src> {
    lines:   std::iter::Enumerate<std::str::Split<'src, char>>,
    current: Option<(usize, logos::Lexer<'src, TokenKind>)>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over `source`. No work happens until the first
    /// token is requested.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lines:   source.split('\n').enumerate(),
               current: None, }
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some((line, lexer)) = self.current.as_mut() else {
                let (index, text) = self.lines.next()?;
                self.current = Some((index + 1, TokenKind::lexer(text)));
                continue;
            };

            match lexer.next() {
                Some(Ok(TokenKind::Whitespace)) => {},
                Some(Ok(kind)) => {
                    return Some(Token { kind,
                                        text: lexer.slice(),
                                        column: lexer.span().start,
                                        line: *line });
                },
                Some(Err(())) => {
                    debug!("line {line}: no token matches '{}' at column {}, dropping the rest of the line",
                           lexer.slice(),
                           lexer.span().start);
                    self.current = None;
                },
                None => self.current = None,
            }
        }
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}
