/// Parsing and evaluation errors.
///
/// Defines the single error type raised while tokenizing, parsing and
/// evaluating a line of input. Because evaluation happens during descent,
/// syntax mistakes, unresolved names and numeric domain failures all share one
/// positioned error.
pub mod parse_error;

pub use parse_error::ParseError;
