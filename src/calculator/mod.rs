//! Calculator logic, independent of the UI.
//!
//! This module provides:
//! - The expression buffer state machine driven by button presses
//! - A tokenizer and a two-level `+ - * /` evaluator
//! - Number formatting for the display
//! - Copying the display to the clipboard

mod clipboard;
mod error;
mod evaluation;
mod number;
mod state;
mod tokenizer;

pub use clipboard::copy_to_clipboard;
pub use error::{CalcError, DIVIDE_BY_ZERO_MESSAGE, ERROR_MESSAGE};
pub use evaluation::evaluate_expression;
pub use number::{Number, format_number};
pub use state::CalculatorState;
pub use tokenizer::{Operator, Token, tokenize};
