use std::borrow::Cow;

use logos::Logos;

use crate::interpreter::value::core::Value;

/// Stand-in for bytes outside ASCII. It matches no token, so each such byte
/// becomes one invalid token, and comments still skip over it.
const NON_ASCII_PLACEHOLDER: char = '\u{7f}';

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `1.` or `2e-10`.
    ///
    /// Only the first character is matched here; [`scan_number`] extends the
    /// token to the longest valid literal.
    #[regex(r"[0-9]", scan_number)]
    #[token(".", scan_number)]
    Number(Value),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `# Comments` running to the end of the line.
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Spaces, tabs, carriage returns and newlines.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Ignored,
}

/// One step of the token stream.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Lexeme {
    /// A recognized token.
    Token(Token),
    /// A byte that starts no token, or a `.` that starts no number.
    Invalid,
    /// The input is exhausted.
    End,
}

/// Pull-based token source that reports 1-based positions.
///
/// Every byte of the input, newlines included, advances the position by one.
/// End of input is reported at `len + 1`.
pub struct Scanner<'src> {
    lexer: logos::Lexer<'src, Token>,
    len:   usize,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned before the first byte of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer(source),
               len:   source.len(), }
    }

    /// Produces the next lexeme and its 1-based starting position.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::lexer::{Lexeme, Scanner, Token};
    ///
    /// let mut scanner = Scanner::new("# note\n2 ** x");
    /// assert!(matches!(scanner.advance(), (Lexeme::Token(Token::Number(_)), 8)));
    /// assert_eq!(scanner.advance(), (Lexeme::Token(Token::DoubleStar), 10));
    /// assert_eq!(scanner.advance(), (Lexeme::Invalid, 13));
    /// assert_eq!(scanner.advance(), (Lexeme::End, 14));
    /// ```
    pub fn advance(&mut self) -> (Lexeme, usize) {
        match self.lexer.next() {
            Some(Ok(token)) => (Lexeme::Token(token), self.lexer.span().start + 1),
            Some(Err(())) => (Lexeme::Invalid, self.lexer.span().start + 1),
            None => (Lexeme::End, self.len + 1),
        }
    }
}

/// Maps a raw byte buffer onto text the lexer can scan, one character per
/// byte.
///
/// ASCII input is borrowed unchanged. Any other byte is replaced with a
/// placeholder that lexes as an invalid token, which keeps positions equal to
/// byte offsets.
///
/// # Example
/// ```
/// use calc::interpreter::lexer::normalize_source;
///
/// assert_eq!(normalize_source(b"1 + 2"), "1 + 2");
/// assert_eq!(normalize_source("1 × 2".as_bytes()).len(), "1 × 2".len());
/// ```
#[must_use]
pub fn normalize_source(source: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(source) {
        Ok(text) if text.is_ascii() => Cow::Borrowed(text),
        _ => Cow::Owned(source.iter()
                              .map(|&b| if b.is_ascii() { char::from(b) } else { NON_ASCII_PLACEHOLDER })
                              .collect()),
    }
}

/// Extends a number token to the longest literal starting at its first
/// character.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the first character of the
///   literal.
///
/// # Returns
/// - `Some(Value)`: The literal value.
/// - `None`: If no digits follow a leading `.`.
fn scan_number(lex: &mut logos::Lexer<Token>) -> Option<Value> {
    let start = lex.span().start;
    let len = literal_len(&lex.source().as_bytes()[start..]);
    if len == 0 {
        return None;
    }
    lex.bump(len - lex.slice().len());
    literal_value(lex.slice())
}

/// Returns the length of the longest decimal literal at the start of `bytes`.
///
/// Accepted forms are `digits [. digits*] [exponent]` and
/// `. digits [exponent]`, where an exponent is `e` or `E`, an optional sign,
/// and at least one digit. An incomplete exponent is left unconsumed.
fn literal_len(bytes: &[u8]) -> usize {
    let digits_from = |from: usize| {
        bytes.get(from..)
             .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let integral = digits_from(0);
    let mut end = integral;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        end += 1 + fraction;
    }
    if integral == 0 && fraction == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digits_from(exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }
    end
}

/// Converts literal text to a value.
///
/// Text with a `.` or an exponent is real. Otherwise it is an integer, unless
/// it overflows `i64`, in which case it is the nearest real.
fn literal_value(text: &str) -> Option<Value> {
    if text.contains(['.', 'e', 'E']) {
        return text.parse().ok().map(Value::Real);
    }
    match text.parse::<i64>() {
        Ok(n) => Some(Value::Integer(n)),
        Err(_) => text.parse().ok().map(Value::Real),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<(Lexeme, usize)> {
        let mut scanner = Scanner::new(source);
        let mut out = Vec::new();
        loop {
            let step = scanner.advance();
            out.push(step);
            if step.0 == Lexeme::End {
                return out;
            }
        }
    }

    fn number(source: &str) -> Value {
        match Scanner::new(source).advance() {
            (Lexeme::Token(Token::Number(value)), 1) => value,
            other => panic!("expected a number at 1 in {source:?}, got {other:?}"),
        }
    }

    #[test]
    fn operators_carry_positions() {
        assert_eq!(lex_all("(1+2)*3**4/5-6").iter().map(|(_, p)| *p).collect::<Vec<_>>(),
                   vec![1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn double_star_needs_adjacent_stars() {
        let kinds: Vec<Lexeme> = lex_all("2 * * 3").into_iter().map(|(l, _)| l).collect();
        assert_eq!(kinds[1], Lexeme::Token(Token::Star));
        assert_eq!(kinds[2], Lexeme::Token(Token::Star));
    }

    #[test]
    fn integer_and_real_literals() {
        assert_eq!(number("42"), Value::Integer(42));
        assert_eq!(number("3.25"), Value::Real(3.25));
        assert_eq!(number(".5"), Value::Real(0.5));
        assert_eq!(number("7."), Value::Real(7.0));
        assert_eq!(number("2e3"), Value::Real(2000.0));
        assert_eq!(number("1.5E-2"), Value::Real(0.015));
    }

    #[test]
    fn integer_overflow_falls_back_to_real() {
        assert_eq!(number("9223372036854775807"), Value::Integer(i64::MAX));
        assert_eq!(number("9223372036854775808"), Value::Real(9_223_372_036_854_775_808.0));
    }

    #[test]
    fn incomplete_exponent_is_not_consumed() {
        let steps = lex_all("1e+");
        assert_eq!(steps[0], (Lexeme::Token(Token::Number(Value::Integer(1))), 1));
        assert_eq!(steps[1], (Lexeme::Invalid, 2));
        assert_eq!(steps[2], (Lexeme::Token(Token::Plus), 3));
    }

    #[test]
    fn lone_dot_is_invalid() {
        assert_eq!(lex_all(" . ")[0], (Lexeme::Invalid, 2));
        assert_eq!(lex_all(".e5")[0], (Lexeme::Invalid, 1));
    }

    #[test]
    fn comments_run_to_end_of_line() {
        let steps = lex_all("# one\n  # two\n5 # trailing");
        assert_eq!(steps, vec![(Lexeme::Token(Token::Number(Value::Integer(5))), 15),
                               (Lexeme::End, 27)]);
    }

    #[test]
    fn every_whitespace_byte_counts() {
        assert_eq!(lex_all("\r\n\t 8")[0].1, 5);
    }

    #[test]
    fn non_ascii_bytes_keep_byte_positions() {
        let text = normalize_source("é+1".as_bytes());
        let steps = lex_all(&text);
        assert_eq!(steps[0], (Lexeme::Invalid, 1));
        assert_eq!(steps[1], (Lexeme::Invalid, 2));
        assert_eq!(steps[2], (Lexeme::Token(Token::Plus), 3));
    }

    #[test]
    fn invalid_utf8_is_scanned_bytewise() {
        let text = normalize_source(b"# \xff\xfe\n1");
        assert_eq!(lex_all(&text)[0], (Lexeme::Token(Token::Number(Value::Integer(1))), 6));
    }
}
