use log::trace;

use crate::interpreter::lexer::Token;

/// A replayable window over a lazy token stream.
///
/// Tokens are pulled from the underlying iterator only when the read position
/// runs past everything seen so far; each pulled token is appended to a cache
/// and never re-lexed. Moving back replays from that cache, which is what lets
/// the parser make predictive decisions with [`TokenCursor::lookahead`].
///
/// The read position counts every call to [`TokenCursor::advance`], including
/// the ones that hit the end of input, so `n` advances are always undone by
/// `n` rollbacks. Rolling back from the start is a no-op.
///
/// # Example
/// ```
/// use linecalc::interpreter::{
///     cursor::TokenCursor,
///     lexer::{TokenKind, Tokenizer},
/// };
///
/// let mut cursor = TokenCursor::new(Tokenizer::new("x = 2"));
///
/// assert_eq!(cursor.lookahead(2).map(|t| t.kind), Some(TokenKind::Equal));
/// assert_eq!(cursor.advance().map(|t| t.text), Some("x"));
/// cursor.rollback();
/// assert_eq!(cursor.advance().map(|t| t.text), Some("x"));
/// ```
pub struct TokenCursor<'src, I>
    where I: Iterator<Item = Token<'src>>
{
    source:   std::iter::Fuse<I>,
    cache:    Vec<Token<'src>>,
    position: usize,
}

impl<'src, I> TokenCursor<'src, I> where I: Iterator<Item = Token<'src>>
{
    /// Wraps a token stream. Nothing is pulled until the first advance.
    pub fn new(source: I) -> Self {
        Self { source:   source.fuse(),
               cache:    Vec::new(),
               position: 0, }
    }

    /// Returns the next token and moves past it, or `None` at end of input.
    pub fn advance(&mut self) -> Option<Token<'src>> {
        let token = if let Some(cached) = self.cache.get(self.position) {
            Some(*cached)
        } else {
            let pulled = self.source.next();
            if let Some(token) = pulled {
                trace!("pulled {token}");
                self.cache.push(token);
            }
            pulled
        };

        self.position += 1;
        token
    }

    /// Steps back by one position; the token returned by the previous
    /// [`advance`](Self::advance) becomes readable again.
    pub const fn rollback(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Returns the token `n` positions ahead without consuming anything.
    ///
    /// `lookahead(1)` is the token the next [`advance`](Self::advance) would
    /// return. `lookahead(0)` is always `None`.
    pub fn lookahead(&mut self, n: usize) -> Option<Token<'src>> {
        let mut token = None;
        for _ in 0..n {
            token = self.advance();
        }
        for _ in 0..n {
            self.rollback();
        }
        token
    }

    /// The token most recently returned by [`advance`](Self::advance), if the
    /// read position currently sits right after one.
    #[must_use]
    pub fn current(&self) -> Option<Token<'src>> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.cache.get(index))
            .copied()
    }

    /// The furthest token pulled from the stream so far.
    #[must_use]
    pub fn last(&self) -> Option<Token<'src>> {
        self.cache.last().copied()
    }

    /// Number of tokens pulled from the stream so far.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}
