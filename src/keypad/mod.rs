//! The calculator keypad: a fixed 5×4 grid of buttons.

mod button;

pub use button::{ButtonRole, ButtonSpec, Palette};

use crate::calculator::Operator;

pub const COLUMNS: usize = 4;

/// Button rows in display order.
pub static LAYOUT: [[ButtonSpec; COLUMNS]; 5] = [
    [
        ButtonSpec::new("C", ButtonRole::Clear),
        ButtonSpec::new("±", ButtonRole::SignToggle),
        ButtonSpec::new("%", ButtonRole::Percent),
        ButtonSpec::operator("÷", Operator::Divide),
    ],
    [
        ButtonSpec::digit("7", 7),
        ButtonSpec::digit("8", 8),
        ButtonSpec::digit("9", 9),
        ButtonSpec::operator("×", Operator::Multiply),
    ],
    [
        ButtonSpec::digit("4", 4),
        ButtonSpec::digit("5", 5),
        ButtonSpec::digit("6", 6),
        ButtonSpec::operator("−", Operator::Subtract),
    ],
    [
        ButtonSpec::digit("1", 1),
        ButtonSpec::digit("2", 2),
        ButtonSpec::digit("3", 3),
        ButtonSpec::operator("+", Operator::Add),
    ],
    [
        ButtonSpec::digit("0", 0),
        ButtonSpec::new(".", ButtonRole::DecimalPoint),
        ButtonSpec::new("⌫", ButtonRole::Backspace),
        ButtonSpec::new("=", ButtonRole::Equals),
    ],
];

/// All buttons in row-major order.
pub fn buttons() -> impl Iterator<Item = &'static ButtonSpec> {
    LAYOUT.iter().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_labels() {
        let labels: Vec<&str> = buttons().map(|b| b.label).collect();
        assert_eq!(
            labels,
            [
                "C", "±", "%", "÷", "7", "8", "9", "×", "4", "5", "6", "−", "1", "2", "3", "+",
                "0", ".", "⌫", "="
            ]
        );
    }

    #[test]
    fn test_labels_unique() {
        let mut labels: Vec<&str> = buttons().map(|b| b.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 20);
    }

    #[test]
    fn test_digit_labels_match_roles() {
        for button in buttons() {
            if let ButtonRole::Digit(d) = button.role {
                assert_eq!(button.label, d.to_string());
            }
        }
    }
}
