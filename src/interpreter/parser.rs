/// Statement-level parsing and the `Parser` entry point.
///
/// Drives the statement loop: assignments are applied to the symbol table
/// one after another until a bare expression is found, whose value ends the
/// call.
pub mod core;

/// Additive, multiplicative and exponent rules.
///
/// Implements the three left-associative binary precedence levels, including
/// the folding of signed numeric literals at the additive level.
pub mod binary;

/// The highest-precedence rule.
///
/// Numeric literals, parenthesised expressions, built-in function calls and
/// variable references.
pub mod factor;

/// Shared helpers for the grammar rules.
///
/// Token expectations, error construction with source positions and checked
/// numeric application.
pub mod utils;
