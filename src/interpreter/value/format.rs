use crate::{
    interpreter::{parser::core::EvalResult, value::core::Value},
    util::num::{SIGNIFICANT_DIGITS, format_general, nearest_integral},
};

impl std::fmt::Display for Value {
    /// Writes the canonical text of a value.
    ///
    /// Integers print their digits. Reals within `1e-12` of an integer in the
    /// `i64` range print as that integer, so `2 ** 3` prints `8`. Other reals
    /// print with up to 15 significant digits.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => match nearest_integral(*r) {
                Some(n) => write!(f, "{n}"),
                None => f.write_str(&format_general(*r, SIGNIFICANT_DIGITS)),
            },
        }
    }
}

/// Renders the output line for an evaluation result.
///
/// A value renders as its canonical text, an error as `ERROR:<position>`.
/// The line always ends with `\n`.
///
/// # Example
/// ```
/// use calc::{evaluate, render};
///
/// assert_eq!(render(&evaluate(b"2 ** 3")), "8\n");
/// assert_eq!(render(&evaluate(b"5 / (2 - 2)")), "ERROR:3\n");
/// ```
#[must_use]
pub fn render(result: &EvalResult<Value>) -> String {
    match result {
        Ok(value) => format!("{value}\n"),
        Err(err) => format!("ERROR:{}\n", err.position),
    }
}
