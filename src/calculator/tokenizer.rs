//! Splits the expression buffer into numbers and operators.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use super::{CalcError, Number};

/// One of the four arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The character this operator is written as in the buffer.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(Number),
    Operator(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
        }
    }
}

/// Tokenize an expression. Whitespace between tokens is ignored.
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if let Some(op) = Operator::from_symbol(c) {
            chars.next();
            tokens.push(Token::Operator(op));
        } else if c.is_ascii_digit() || c == '.' {
            let end = scan_number(&mut chars, input.len());
            tokens.push(Token::Number(parse_number(&input[start..end])?));
        } else {
            return Err(CalcError::malformed(format!("unexpected character {c:?}")));
        }
    }

    Ok(tokens)
}

/// Advance past a number literal: digits with at most one `.`, then an
/// optional exponent. Returns the byte offset just past the literal.
fn scan_number(chars: &mut Peekable<CharIndices<'_>>, len: usize) -> usize {
    let mut seen_dot = false;
    while let Some(&(_, c)) = chars.peek() {
        if c.is_ascii_digit() || (c == '.' && !seen_dot) {
            seen_dot |= c == '.';
            chars.next();
        } else {
            break;
        }
    }

    if let Some(&(_, 'e' | 'E')) = chars.peek() {
        // Only consume the exponent marker when digits follow it
        let mut lookahead = chars.clone();
        lookahead.next();
        if let Some(&(_, '+' | '-')) = lookahead.peek() {
            lookahead.next();
        }
        if lookahead.peek().is_some_and(|&(_, c)| c.is_ascii_digit()) {
            while lookahead.peek().is_some_and(|&(_, c)| c.is_ascii_digit()) {
                lookahead.next();
            }
            *chars = lookahead;
        }
    }

    chars.peek().map_or(len, |&(i, _)| i)
}

fn parse_number(text: &str) -> Result<Number, CalcError> {
    let is_decimal = text.contains(['.', 'e', 'E']);
    if !is_decimal && text.starts_with('0') && text.bytes().any(|b| b != b'0') {
        // Zero-padded integers like `07` are rejected; `00` is plain zero
        return Err(CalcError::malformed(format!(
            "leading zeros in integer {text:?}"
        )));
    }
    if !is_decimal && let Ok(i) = text.parse::<i64>() {
        return Ok(Number::Integer(i));
    }
    // Decimals, and integer literals too large for i64
    text.parse::<f64>()
        .map(Number::Decimal)
        .map_err(|_| CalcError::malformed(format!("invalid number {text:?}")))
}
