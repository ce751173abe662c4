//! The expression buffer and the display text derived from it.

use tracing::debug;

use super::{CalcError, Number, evaluate_expression, format_number};
use crate::keypad::{ButtonRole, ButtonSpec};

/// Calculator state driven by button presses.
///
/// `expression` is whatever has been typed (or the last result); it is never
/// validated until `=` or `%` is pressed. `display` is what the user sees and
/// is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    expression: String,
    display: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// An empty buffer showing `0`.
    pub fn new() -> Self {
        Self {
            expression: String::new(),
            display: "0".to_string(),
        }
    }

    /// The text typed so far, or the last result.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The text shown to the user; never empty.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Apply a button press.
    pub fn press(&mut self, button: &ButtonSpec) {
        match button.role {
            ButtonRole::Clear => self.clear(),
            ButtonRole::Backspace => self.backspace(),
            ButtonRole::SignToggle => self.toggle_sign(),
            ButtonRole::Percent => self.percent(),
            ButtonRole::Equals => self.evaluate(),
            role => {
                if let Some(c) = role.input_char() {
                    self.append(c);
                }
            }
        }
        debug!(
            label = button.label,
            expression = %self.expression,
            display = %self.display,
            "button pressed"
        );
    }

    /// Empty the buffer and reset the display to `0`.
    pub fn clear(&mut self) {
        self.expression.clear();
        self.display = "0".to_string();
    }

    /// Drop the last typed character.
    pub fn backspace(&mut self) {
        self.expression.pop();
        self.mirror_expression();
    }

    /// Flip a leading minus sign. Does nothing on an empty or `0` buffer.
    pub fn toggle_sign(&mut self) {
        if self.expression.is_empty() || self.expression == "0" {
            return;
        }
        if self.expression.starts_with('-') {
            self.expression.remove(0);
        } else {
            self.expression.insert(0, '-');
        }
        self.mirror_expression();
    }

    /// Replace a plain number in the buffer with its value divided by 100.
    pub fn percent(&mut self) {
        match self.expression.trim().parse::<f64>() {
            Ok(value) => {
                let value = value / 100.0;
                self.expression = Number::Decimal(value).to_string();
                self.display = format_number(value);
            }
            Err(_) => self.fail(CalcError::MalformedNumber(self.expression.clone())),
        }
    }

    /// Evaluate the buffer, leaving the result in it for chaining.
    pub fn evaluate(&mut self) {
        match evaluate_expression(&self.expression) {
            Ok(result) => {
                debug!(expression = %self.expression, %result, "evaluated");
                self.display = result.format_for_display();
                self.expression = result.to_string();
            }
            Err(err) => self.fail(err),
        }
    }

    /// Append a digit, decimal point or operator character.
    pub fn append(&mut self, c: char) {
        self.expression.push(c);
        self.mirror_expression();
    }

    fn mirror_expression(&mut self) {
        self.display = if self.expression.is_empty() {
            "0".to_string()
        } else {
            self.expression.clone()
        };
    }

    fn fail(&mut self, err: CalcError) {
        debug!(expression = %self.expression, error = %err, "calculation failed");
        self.display = err.display_message().to_string();
        self.expression.clear();
    }
}
