/// The lexer module tokenizes source text on demand.
///
/// The lexer reads the raw source text and produces one token at a time with
/// its 1-based position, skipping whitespace and `#` comments. This is the
/// first stage of evaluation.
///
/// # Responsibilities
/// - Recognizes numbers, operators and parentheses.
/// - Scans numeric literals with maximal munch, as integers or reals.
/// - Reports unrecognized characters as invalid tokens.
pub mod lexer;
/// The parser module evaluates expressions while it parses them.
///
/// The parser pulls tokens from the lexer and applies each grammar rule by
/// computing its value directly. No syntax tree is built.
///
/// # Responsibilities
/// - Implements operator precedence and associativity.
/// - Stops at the first error and reports its position.
/// - Bounds recursion depth on deeply nested input.
pub mod parser;
/// The value module defines the numeric data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its arithmetic.
/// - Promotes mixed integer and real operands to real.
/// - Renders values and results as text.
pub mod value;
