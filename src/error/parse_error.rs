use crate::interpreter::{lexer::TokenKind, symbol::SymbolKind};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing and evaluating input.
///
/// Every variant carries the 1-based `line` and the 0-based `column` (byte
/// offset within the line) of the token the error is attributed to.
pub enum ParseError {
    /// Found a token of the wrong kind, or one no grammar rule accepts here.
    UnexpectedToken {
        /// The raw text of the token encountered.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the error occurred.
        column: usize,
    },
    /// Input ended while a specific token kind was still required.
    MissingToken {
        /// The token kind that was required.
        expected: TokenKind,
        /// The last known source line.
        line:     usize,
        /// The last known column.
        column:   usize,
    },
    /// A bare identifier does not resolve to any symbol.
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the error occurred.
        column: usize,
    },
    /// An identifier followed by `(` does not resolve to any symbol.
    UndefinedFunction {
        /// The name of the function.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the error occurred.
        column: usize,
    },
    /// A name was used as a function while bound as a variable, or the other
    /// way around. Assigning to a function name also lands here.
    KindMismatch {
        /// The name involved.
        name:     String,
        /// The kind the usage required.
        expected: SymbolKind,
        /// The kind the name is actually bound to.
        found:    SymbolKind,
        /// The source line where the error occurred.
        line:     usize,
        /// The column where the error occurred.
        column:   usize,
    },
    /// A function name is reserved in the symbol table but has no numeric
    /// implementation behind it.
    UnsupportedFunction {
        /// The name of the function.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the error occurred.
        column: usize,
    },
    /// Finite operands produced a NaN or infinite result.
    NumericDomain {
        /// Description of the failing operation.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The column where the error occurred.
        column:  usize,
    },
}

impl ParseError {
    /// The 1-based line the error is attributed to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::MissingToken { line, .. }
            | Self::UndefinedVariable { line, .. }
            | Self::UndefinedFunction { line, .. }
            | Self::KindMismatch { line, .. }
            | Self::UnsupportedFunction { line, .. }
            | Self::NumericDomain { line, .. } => *line,
        }
    }

    /// The 0-based column the error is attributed to.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { column, .. }
            | Self::MissingToken { column, .. }
            | Self::UndefinedVariable { column, .. }
            | Self::UndefinedFunction { column, .. }
            | Self::KindMismatch { column, .. }
            | Self::UnsupportedFunction { column, .. }
            | Self::NumericDomain { column, .. } => *column,
        }
    }

    /// The message part of the error, without position information.
    ///
    /// # Example
    /// ```
    /// use linecalc::error::ParseError;
    ///
    /// let e = ParseError::UndefinedVariable { name:   "x".to_string(),
    ///                                         line:   2,
    ///                                         column: 4, };
    /// assert_eq!(e.message(), "undefined variable 'x'");
    /// assert_eq!(e.to_string(), "error: undefined variable 'x' on line 2 column 4");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedToken { token, .. } => format!("unexpected token '{token}'"),
            Self::MissingToken { expected, .. } => format!("missing token {expected}"),
            Self::UndefinedVariable { name, .. } => format!("undefined variable '{name}'"),
            Self::UndefinedFunction { name, .. } => format!("undefined function '{name}'"),
            Self::KindMismatch { name,
                                 expected,
                                 found,
                                 .. } => {
                format!("'{name}' is a {found} and cannot be used as a {expected}")
            },
            Self::UnsupportedFunction { name, .. } => format!("unsupported function '{name}'"),
            Self::NumericDomain { details, .. } => format!("numeric domain error: {details}"),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "error: {} on line {} column {}",
               self.message(),
               self.line(),
               self.column())
    }
}

impl std::error::Error for ParseError {}
