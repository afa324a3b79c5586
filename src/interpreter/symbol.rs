use std::collections::{BTreeMap, HashMap};

use crate::{
    error::ParseError,
    interpreter::{
        builtin::{BUILTIN_FUNCTIONS, Builtin},
        lexer::Token,
    },
};

/// The two things a name can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// A callable taking one number.
    Function,
    /// A stored number.
    Variable,
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Function => f.write_str("function"),
            Self::Variable => f.write_str("variable"),
        }
    }
}

/// A named binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol {
    /// A function name. `None` marks a reserved name with no implementation.
    Function(Option<Builtin>),
    /// A variable holding `value`, last assigned on `line`.
    Variable {
        /// The stored number.
        value: f64,
        /// Line of the assignment that produced `value`.
        line:  usize,
    },
}

impl Symbol {
    /// Which kind of binding this is.
    #[must_use]
    pub const fn kind(&self) -> SymbolKind {
        match self {
            Self::Function(_) => SymbolKind::Function,
            Self::Variable { .. } => SymbolKind::Variable,
        }
    }
}

/// Maps names to symbols for one parser instance.
///
/// Starts out holding the built-in functions and only ever grows: names are
/// never removed. A function name can never be turned into a variable, while a
/// variable can be reassigned freely.
///
/// # Example
/// ```
/// use linecalc::interpreter::symbol::{SymbolKind, SymbolTable};
///
/// let table = SymbolTable::with_builtins();
///
/// assert_eq!(table.get("sqrt").map(|s| s.kind()), Some(SymbolKind::Function));
/// assert!(table.variables().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl SymbolTable {
    /// Creates a table seeded with every name in [`BUILTIN_FUNCTIONS`].
    #[must_use]
    pub fn with_builtins() -> Self {
        let symbols = BUILTIN_FUNCTIONS.iter()
                                       .map(|name| {
                                           ((*name).to_string(),
                                            Symbol::Function(Builtin::from_name(name)))
                                       })
                                       .collect();
        Self { symbols }
    }

    /// Looks up a name. Names are case sensitive.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Reserves `name` as a function without an implementation.
    ///
    /// Calls to a reserved name fail with an unsupported-function error and
    /// assignments to it fail like assignments to any function. Returns
    /// `false`, leaving the table untouched, if the name is already bound.
    pub fn declare_function(&mut self, name: &str) -> bool {
        if self.symbols.contains_key(name) {
            return false;
        }
        self.symbols.insert(name.to_string(), Symbol::Function(None));
        true
    }

    /// Binds the identifier in `name` to a variable holding `value`.
    ///
    /// # Errors
    /// Returns `KindMismatch`, positioned at `name`, if the identifier is
    /// bound to a function.
    pub fn assign_variable(&mut self, name: Token<'_>, value: f64) -> Result<(), ParseError> {
        if let Some(existing @ Symbol::Function(_)) = self.symbols.get(name.text) {
            return Err(ParseError::KindMismatch { name:     name.text.to_string(),
                                                  expected: SymbolKind::Variable,
                                                  found:    existing.kind(),
                                                  line:     name.line,
                                                  column:   name.column, });
        }

        self.symbols.insert(name.text.to_string(),
                            Symbol::Variable { value,
                                               line: name.line });
        Ok(())
    }

    /// Snapshot of every variable, sorted by name. Functions are left out.
    #[must_use]
    pub fn variables(&self) -> BTreeMap<String, f64> {
        self.symbols
            .iter()
            .filter_map(|(name, symbol)| match symbol {
                Symbol::Variable { value, .. } => Some((name.clone(), *value)),
                Symbol::Function(_) => None,
            })
            .collect()
    }

    /// Number of bound names, built-ins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false` for a table created with the built-ins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
