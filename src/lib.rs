//! # calc
//!
//! calc evaluates arithmetic expressions written in plain text files.
//! It supports `+`, `-`, `*`, `/`, right-associative `**`, unary signs,
//! parentheses and `#` comments, with exact integer arithmetic that promotes
//! to floating-point where needed. Failures are reported as the 1-based
//! position of the first offending character.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::EvalOptions,
    interpreter::{lexer::normalize_source, parser::core::evaluate_source},
};

/// Reads inputs, evaluates them, and writes result files.
///
/// This module is the file-level layer around the evaluator. It discovers
/// input files, names output directories and files, and writes one result
/// line per input.
///
/// # Responsibilities
/// - Lists `*.txt` inputs of a directory without descending into it.
/// - Derives output directory and file names from the input name.
/// - Evaluates independent inputs in parallel.
pub mod batch;
/// Evaluation limits and output naming settings.
pub mod config;
/// Provides the error types for evaluation and file processing.
///
/// Evaluation failures carry a kind and a position; only the position is
/// shown to users. File processing failures wrap the underlying I/O error.
pub mod error;
/// Orchestrates the evaluation of one expression.
///
/// This module ties together lexing, parsing, evaluation and value
/// formatting.
///
/// # Responsibilities
/// - Coordinates the lexer, the evaluating parser, and the value model.
/// - Provides the entry point that evaluates a source text.
/// - Renders values and errors as output lines.
pub mod interpreter;
/// General utilities for numeric conversion and formatting.
pub mod util;

pub use crate::{
    error::{ErrorKind, EvalError},
    interpreter::{
        parser::core::EvalResult,
        value::{core::Value, format::render},
    },
};

/// Evaluates the expression held in `source`.
///
/// The buffer is taken as raw bytes; each byte is one position. Uses the
/// default [`EvalOptions`].
///
/// # Errors
/// Returns the first error encountered, with its 1-based position.
///
/// # Examples
/// ```
/// use calc::{Value, evaluate};
///
/// assert_eq!(evaluate(b"2 ** 3 ** 2"), Ok(Value::Real(512.0)));
/// assert_eq!(evaluate(b"# comment\n3 + 4"), Ok(Value::Integer(7)));
///
/// // `(1 + 2` ends before the closing parenthesis.
/// assert_eq!(evaluate(b"(1 + 2").unwrap_err().position, 7);
/// ```
pub fn evaluate(source: &[u8]) -> EvalResult<Value> {
    evaluate_with(source, &EvalOptions::default())
}

/// Evaluates the expression held in `source` with explicit limits.
///
/// # Errors
/// Returns the first error encountered, with its 1-based position.
///
/// # Examples
/// ```
/// use calc::{ErrorKind, config::EvalOptions, evaluate_with};
///
/// let options = EvalOptions { max_depth: 3 };
/// let err = evaluate_with(b"((((1))))", &options).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::NestingTooDeep);
/// assert_eq!(err.position, 4);
/// ```
pub fn evaluate_with(source: &[u8], options: &EvalOptions) -> EvalResult<Value> {
    let text = normalize_source(source);
    evaluate_source(&text, options)
}
