use crate::{
    config::EvalOptions,
    error::{ErrorKind, EvalError},
    interpreter::{
        lexer::{Lexeme, Scanner},
        parser::binary::parse_additive,
        value::core::Value,
    },
};

/// Result type used by the parser and the value model.
///
/// The first failure short-circuits every enclosing rule through `?`, so once
/// an error exists no later step can replace it.
pub type EvalResult<T> = Result<T, EvalError>;

/// Parse state for one buffer: the token source, one token of lookahead and
/// the current nesting depth.
pub struct Parser<'src> {
    scanner:   Scanner<'src>,
    current:   Lexeme,
    position:  usize,
    depth:     usize,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser with the first token already loaded.
    #[must_use]
    pub fn new(source: &'src str, options: &EvalOptions) -> Self {
        let mut scanner = Scanner::new(source);
        let (current, position) = scanner.advance();
        Self { scanner,
               current,
               position,
               depth: 0,
               max_depth: options.max_depth }
    }

    /// The lookahead lexeme.
    #[must_use]
    pub const fn current(&self) -> Lexeme {
        self.current
    }

    /// 1-based position of the lookahead lexeme.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Moves the lookahead to the next lexeme.
    pub fn advance(&mut self) {
        (self.current, self.position) = self.scanner.advance();
    }

    /// Builds the error for finding the lookahead where it does not belong.
    ///
    /// Invalid characters are lexical errors; anything else, including end of
    /// input, is a syntax error.
    #[must_use]
    pub const fn unexpected(&self) -> EvalError {
        let kind = match self.current {
            Lexeme::Invalid => ErrorKind::Lexical,
            Lexeme::Token(_) | Lexeme::End => ErrorKind::Syntax,
        };
        EvalError::new(kind, self.position)
    }

    /// Enters one nesting level opened by the lookahead token.
    ///
    /// # Errors
    /// Returns `ErrorKind::NestingTooDeep` at the lookahead position if the
    /// configured limit is already reached.
    pub const fn enter(&mut self) -> EvalResult<()> {
        if self.depth >= self.max_depth {
            return Err(EvalError::new(ErrorKind::NestingTooDeep, self.position));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves the innermost nesting level.
    pub const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Parses and evaluates a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `parser`: Parser positioned at the first token of the expression.
///
/// # Returns
/// The value of the expression.
pub fn parse_expression(parser: &mut Parser<'_>) -> EvalResult<Value> {
    parse_additive(parser)
}

/// Evaluates a complete source text.
///
/// The text must hold exactly one expression; any token left after it is an
/// error at that token's position.
///
/// # Errors
/// Returns the first lexical, syntax, division or nesting error encountered.
///
/// # Example
/// ```
/// use calc::{
///     config::EvalOptions,
///     interpreter::{parser::core::evaluate_source, value::core::Value},
/// };
///
/// let options = EvalOptions::default();
/// assert_eq!(evaluate_source("1 + 2 * 3", &options), Ok(Value::Integer(7)));
/// assert_eq!(evaluate_source("3 + 4 5", &options).unwrap_err().position, 7);
/// ```
pub fn evaluate_source(source: &str, options: &EvalOptions) -> EvalResult<Value> {
    let mut parser = Parser::new(source, options);
    let value = parse_expression(&mut parser)?;

    match parser.current() {
        Lexeme::End => Ok(value),
        Lexeme::Token(_) | Lexeme::Invalid => Err(parser.unexpected()),
    }
}
