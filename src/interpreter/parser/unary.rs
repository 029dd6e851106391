use crate::interpreter::{
    lexer::{Lexeme, Token},
    parser::core::{EvalResult, Parser, parse_expression},
    value::core::Value,
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (identity)
/// - `-`  (numeric negation)
///
/// Unary operators are right-associative, so an input like `-+-x` is parsed
/// as `-(+(-x))`. Negation keeps the operand's kind.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `parser`: Parser positioned at the operator or operand.
///
/// # Returns
/// The value of the operand with all signs applied.
pub(crate) fn parse_unary(parser: &mut Parser<'_>) -> EvalResult<Value> {
    let negate = match parser.current() {
        Lexeme::Token(Token::Plus) => false,
        Lexeme::Token(Token::Minus) => true,
        _ => return parse_primary(parser),
    };

    parser.enter()?;
    parser.advance();
    let operand = parse_unary(parser)?;
    parser.leave();

    Ok(if negate { -operand } else { operand })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `parser`: Parser positioned at the start of a primary expression.
///
/// # Returns
/// The literal or grouped value.
///
/// # Errors
/// An invalid character is a lexical error at its position. End of input or
/// any other token is a syntax error at its position.
pub(crate) fn parse_primary(parser: &mut Parser<'_>) -> EvalResult<Value> {
    match parser.current() {
        Lexeme::Token(Token::Number(value)) => {
            parser.advance();
            Ok(value)
        },
        Lexeme::Token(Token::LParen) => parse_grouping(parser),
        _ => Err(parser.unexpected()),
    }
}

/// Parses a parenthesized expression.
///
/// After the inner expression, the lookahead must be `)`. Otherwise the
/// error is reported at whatever was found there, or at `len + 1` if the
/// input ran out.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping(parser: &mut Parser<'_>) -> EvalResult<Value> {
    parser.enter()?;
    parser.advance();
    let inner = parse_expression(parser)?;

    if parser.current() != Lexeme::Token(Token::RParen) {
        return Err(parser.unexpected());
    }
    parser.advance();
    parser.leave();

    Ok(inner)
}
