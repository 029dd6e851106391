/// Batch errors.
///
/// Defines the errors raised while discovering inputs, reading them, and
/// writing result files. These never describe a problem with an expression.
pub mod batch_error;
/// Evaluation errors.
///
/// Defines the single error shape produced by the evaluator: the kind of
/// failure and the 1-based position where it was detected.
pub mod eval_error;

pub use batch_error::BatchError;
pub use eval_error::{ErrorKind, EvalError};
