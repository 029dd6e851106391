/// Classifies why evaluation of a buffer stopped.
///
/// The kind is diagnostic only. Every kind is reported to the user in the same
/// `ERROR:<position>` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unrecognized character, or a `.` that does not start a number.
    Lexical,
    /// A missing operand, an unmatched `(`, or trailing tokens.
    Syntax,
    /// The right operand of `/` evaluated to zero.
    DivisionByZero,
    /// Parentheses, signs or `**` chains nested beyond the configured limit.
    NestingTooDeep,
}

/// The first failure encountered while evaluating a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalError {
    /// What went wrong.
    pub kind:     ErrorKind,
    /// 1-based byte offset of the offending token. End of input is reported
    /// as `len + 1`.
    pub position: usize,
}

impl EvalError {
    /// Builds an error of the given kind at `position`.
    #[must_use]
    pub const fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical => write!(f, "unrecognized input"),
            Self::Syntax => write!(f, "syntax error"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NestingTooDeep => write!(f, "expression nested too deeply"),
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error at position {}: {}.", self.position, self.kind)
    }
}

impl std::error::Error for EvalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_position_and_kind() {
        let err = EvalError::new(ErrorKind::DivisionByZero, 3);
        assert_eq!(err.to_string(), "Error at position 3: division by zero.");
    }

    #[test]
    fn kinds_render_distinctly() {
        let rendered: Vec<String> = [ErrorKind::Lexical,
                                     ErrorKind::Syntax,
                                     ErrorKind::DivisionByZero,
                                     ErrorKind::NestingTooDeep].iter()
                                                               .map(ToString::to_string)
                                                               .collect();
        for (i, a) in rendered.iter().enumerate() {
            for b in &rendered[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
