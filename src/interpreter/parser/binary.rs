use crate::interpreter::{
    lexer::{Lexeme, Token},
    parser::{
        core::{EvalResult, Parser},
        unary::parse_unary,
    },
    value::core::Value,
};

/// Binary arithmetic operators, in the order of the grammar levels that
/// consume them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `**`
    Pow,
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `parser`: Parser positioned at the first operand.
///
/// # Returns
/// The value of the sum.
pub fn parse_additive(parser: &mut Parser<'_>) -> EvalResult<Value> {
    let mut left = parse_multiplicative(parser)?;
    while let Some(op @ (BinaryOperator::Add | BinaryOperator::Sub)) = lookahead_operator(parser) {
        let position = parser.position();
        parser.advance();
        let right = parse_multiplicative(parser)?;
        left = apply_binary(op, left, right, position)?;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. A division is checked
/// only after its right operand has been fully evaluated, and a zero divisor
/// is reported at the `/` token.
///
/// The rule is: `multiplicative := exponent (("*" | "/") exponent)*`
///
/// # Parameters
/// - `parser`: Parser positioned at the first operand.
///
/// # Returns
/// The value of the product or quotient.
pub fn parse_multiplicative(parser: &mut Parser<'_>) -> EvalResult<Value> {
    let mut left = parse_exponent(parser)?;
    while let Some(op @ (BinaryOperator::Mul | BinaryOperator::Div)) = lookahead_operator(parser) {
        let position = parser.position();
        parser.advance();
        let right = parse_exponent(parser)?;
        left = apply_binary(op, left, right, position)?;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ** b ** c` parses as
/// `a ** (b ** c)`. Its operands are unary expressions, so a sign binds to
/// the base: `-2 ** 2` is `(-2) ** 2`.
///
/// The rule is: `exponent := unary ("**" exponent)?`
///
/// # Parameters
/// - `parser`: Parser positioned at the base.
///
/// # Returns
/// The value of the power, always real when `**` is present.
pub fn parse_exponent(parser: &mut Parser<'_>) -> EvalResult<Value> {
    let base = parse_unary(parser)?;
    if lookahead_operator(parser) != Some(BinaryOperator::Pow) {
        return Ok(base);
    }

    let position = parser.position();
    parser.enter()?;
    parser.advance();
    let exponent = parse_exponent(parser)?;
    parser.leave();
    apply_binary(BinaryOperator::Pow, base, exponent, position)
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use calc::interpreter::{
///     lexer::Token,
///     parser::binary::{BinaryOperator, token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(Token::DoubleStar), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Position of the operator token, used for division errors.
///
/// # Errors
/// Returns `ErrorKind::DivisionByZero` at `position` for `/` with a zero
/// right operand.
pub fn apply_binary(op: BinaryOperator,
                    left: Value,
                    right: Value,
                    position: usize)
                    -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => left.divide(right, position),
        BinaryOperator::Pow => Ok(left.pow(right)),
    }
}

fn lookahead_operator(parser: &Parser<'_>) -> Option<BinaryOperator> {
    match parser.current() {
        Lexeme::Token(token) => token_to_binary_operator(token),
        Lexeme::Invalid | Lexeme::End => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::EvalOptions,
        error::{ErrorKind, EvalError},
        interpreter::parser::core::evaluate_source,
    };

    fn eval(source: &str) -> EvalResult<Value> {
        evaluate_source(source, &EvalOptions::default())
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(eval("10 - 4 - 3"), Ok(Value::Integer(3)));
    }

    #[test]
    fn division_is_left_associative() {
        assert_eq!(eval("8 / 4 / 2"), Ok(Value::Real(1.0)));
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(eval("2 ** 3 ** 2"), Ok(Value::Real(512.0)));
    }

    #[test]
    fn sign_binds_to_the_base() {
        assert_eq!(eval("-2 ** 2"), Ok(Value::Real(4.0)));
        assert_eq!(eval("2 ** -1"), Ok(Value::Real(0.5)));
    }

    #[test]
    fn power_binds_tighter_than_product() {
        assert_eq!(eval("3 * 2 ** 2"), Ok(Value::Real(12.0)));
    }

    #[test]
    fn division_by_zero_reports_operator_after_right_operand() {
        assert_eq!(eval("1 / 0 + ("), Err(EvalError::new(ErrorKind::DivisionByZero, 3)));
        assert_eq!(eval("1 / (0 + ("), Err(EvalError::new(ErrorKind::Syntax, 11)));
    }

    #[test]
    fn zero_exponent_results_are_not_errors() {
        assert_eq!(eval("0 ** -1"), Ok(Value::Real(f64::INFINITY)));
        assert_eq!(eval("0 ** 0"), Ok(Value::Real(1.0)));
    }
}
