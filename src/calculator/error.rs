//! Failure modes of evaluating the expression buffer.

use thiserror::Error;

/// Shown after any evaluation or percent failure other than division by zero.
pub const ERROR_MESSAGE: &str = "Error";

/// Shown when an evaluation divides by zero.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "÷0 Error";

/// Error raised while tokenizing, parsing or evaluating the buffer.
///
/// These never reach the UI as errors: [`CalculatorState`](super::CalculatorState)
/// turns each one into a display message and clears the buffer.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalcError {
    /// The buffer is not a valid arithmetic expression (empty, trailing
    /// operator, stray character, doubled operator).
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
    /// A division had a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// Percent was applied to a buffer that is not a single number.
    #[error("malformed number: {0:?}")]
    MalformedNumber(String),
}

impl CalcError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedExpression(reason.into())
    }

    /// The text the display shows for this error.
    pub fn display_message(&self) -> &'static str {
        match self {
            Self::DivisionByZero => DIVIDE_BY_ZERO_MESSAGE,
            Self::MalformedExpression(_) | Self::MalformedNumber(_) => ERROR_MESSAGE,
        }
    }
}
