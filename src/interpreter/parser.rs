/// Parser state and entry points.
///
/// Holds the lookahead and nesting depth, the shared result type, and the
/// function that evaluates a whole source text.
pub mod core;

/// Binary operator levels.
///
/// Implements the additive, multiplicative and exponent rules and applies
/// each operator as soon as both operands are known.
pub mod binary;

/// Unary and primary expressions.
///
/// Handles prefix signs, numeric literals and parenthesized groups.
pub mod unary;
