/// The lexer module tokenizes source text for the parser.
///
/// The tokenizer reads raw text line by line and produces a lazy stream of
/// tokens: numbers, identifiers, parentheses, operators and `=`. Each token
/// carries its line and column.
///
/// # Responsibilities
/// - Splits input into lines and tokenizes each one on demand.
/// - Recognises and drops whitespace.
/// - Abandons the rest of a line at the first unrecognised character.
pub mod lexer;
/// The cursor module buffers tokens for lookahead and rollback.
///
/// Wraps the lazy token stream in a cache so the parser can peek several
/// tokens ahead and step back without tokenizing anything twice.
pub mod cursor;
/// The symbol module maps names to functions and variables.
///
/// # Responsibilities
/// - Seeds every table with the built-in functions.
/// - Stores variable values assigned by the parser.
/// - Refuses to turn a function name into a variable.
pub mod symbol;
/// The builtin module defines the fixed set of unary numeric functions.
pub mod builtin;
/// The parser module evaluates statements while it parses them.
///
/// A recursive-descent grammar where every rule returns a number instead of
/// building a tree. Assignments update the symbol table as they are parsed.
///
/// # Responsibilities
/// - Implements precedence and associativity of `+ - * / ^`.
/// - Resolves function calls and variable references.
/// - Reports errors with the line and column of the offending token.
pub mod parser;
