/// Numeric conversion and formatting helpers.
///
/// This module holds the conversions between `i64` and `f64` used by the value
/// model, the test that decides whether a real prints as an integer, and a
/// `%g`-style general formatter for everything else.
pub mod num;
