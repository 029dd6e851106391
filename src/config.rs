//! Evaluation limits and batch output settings.
//!
//! Configuration only describes limits and naming; the parser and the batch
//! runner enforce them.

use std::path::PathBuf;

/// Default limit on nested parentheses, unary signs and `**` chains.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default tag appended to output directory and file names.
pub const DEFAULT_TAG: &str = "calc";

/// User name used when `$USER` is unset or empty.
pub const FALLBACK_USER: &str = "user";

/// Limits applied while evaluating one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalOptions {
    /// Maximum nesting depth before evaluation fails with
    /// `ErrorKind::NestingTooDeep`.
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Settings for reading inputs and writing result files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Output directory. When `None`, it is derived from the input name.
    pub output_dir: Option<PathBuf>,
    /// Tag used in derived directory and file names.
    pub tag:        String,
    /// User name used in the derived output directory.
    pub user:       String,
    /// Limits passed to every evaluation.
    pub eval:       EvalOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { output_dir: None,
               tag:        DEFAULT_TAG.to_string(),
               user:       current_user(),
               eval:       EvalOptions::default(), }
    }
}

/// Returns `$USER`, or [`FALLBACK_USER`] if it is unset or empty.
#[must_use]
pub fn current_user() -> String {
    std::env::var("USER").ok()
                         .filter(|user| !user.is_empty())
                         .unwrap_or_else(|| FALLBACK_USER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = BatchOptions::default();
        assert_eq!(options.output_dir, None);
        assert_eq!(options.tag, DEFAULT_TAG);
        assert_eq!(options.eval.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!options.user.is_empty());
    }
}
