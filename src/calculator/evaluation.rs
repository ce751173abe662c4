//! Two-level arithmetic evaluation.
//!
//! The whole buffer is parsed before anything is evaluated, so a syntax error
//! anywhere wins over a division by zero earlier in the expression.
//!
//! ```text
//! expr  := term (('+' | '-') term)*
//! term  := unary (('*' | '/') unary)*
//! unary := ('+' | '-') unary | NUMBER
//! ```

use super::tokenizer::{Operator, Token, tokenize};
use super::{CalcError, Number};

#[derive(Clone, Debug, PartialEq)]
enum Expr {
    Literal(Number),
    Negate(Box<Expr>),
    Binary {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
    },
}

impl Expr {
    fn binary(left: Expr, op: Operator, right: Expr) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    fn evaluate(&self) -> Result<Number, CalcError> {
        match self {
            Self::Literal(n) => Ok(*n),
            Self::Negate(inner) => Ok(-inner.evaluate()?),
            Self::Binary { left, op, right } => {
                let lhs = left.evaluate()?;
                let rhs = right.evaluate()?;
                match op {
                    Operator::Add => Ok(lhs + rhs),
                    Operator::Subtract => Ok(lhs - rhs),
                    Operator::Multiply => Ok(lhs * rhs),
                    Operator::Divide => lhs.divide(rhs),
                }
            }
        }
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<Expr, CalcError> {
        if self.tokens.is_empty() {
            return Err(CalcError::malformed("empty expression"));
        }
        let expr = self.expr()?;
        match self.peek() {
            None => Ok(expr),
            Some(token) => Err(CalcError::malformed(format!("unexpected {token}"))),
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    /// Consume the next token if it is one of `ops`.
    fn eat_operator(&mut self, ops: &[Operator]) -> Option<Operator> {
        match self.peek() {
            Some(Token::Operator(op)) if ops.contains(&op) => {
                self.pos += 1;
                Some(op)
            }
            _ => None,
        }
    }

    fn expr(&mut self) -> Result<Expr, CalcError> {
        let mut left = self.term()?;
        while let Some(op) = self.eat_operator(&[Operator::Add, Operator::Subtract]) {
            let right = self.term()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expr, CalcError> {
        let mut left = self.unary()?;
        while let Some(op) = self.eat_operator(&[Operator::Multiply, Operator::Divide]) {
            let right = self.unary()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, CalcError> {
        match self.eat_operator(&[Operator::Add, Operator::Subtract]) {
            Some(Operator::Subtract) => Ok(Expr::Negate(Box::new(self.unary()?))),
            Some(_) => self.unary(),
            None => self.literal(),
        }
    }

    fn literal(&mut self) -> Result<Expr, CalcError> {
        match self.peek() {
            Some(Token::Number(n)) => {
                self.pos += 1;
                Ok(Expr::Literal(n))
            }
            Some(token) => Err(CalcError::malformed(format!("unexpected {token}"))),
            None => Err(CalcError::malformed("unexpected end of expression")),
        }
    }
}

/// Evaluate an arithmetic expression over `+ - * /`.
pub fn evaluate_expression(input: &str) -> Result<Number, CalcError> {
    let tokens = tokenize(input)?;
    Parser::new(&tokens).parse()?.evaluate()
}
