/// The numeric value model.
///
/// Defines `Value`, an exact integer or a double, and the arithmetic between
/// them, including promotion of mixed operands to real.
pub mod core;
/// Canonical text output.
///
/// Implements `Display` for `Value` and renders full evaluation results as
/// output lines.
pub mod format;
