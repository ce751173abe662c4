//! Static descriptors for the calculator buttons.

use crate::calculator::Operator;

/// What a button does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonRole {
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Clear,
    Backspace,
    SignToggle,
    Percent,
    Equals,
}

/// Colour family a button is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Palette {
    /// Operators and equals.
    Accent,
    /// Clear, sign toggle and percent.
    Function,
    /// Digits, decimal point and backspace.
    Numeric,
}

impl ButtonRole {
    pub fn palette(self) -> Palette {
        match self {
            Self::Operator(_) | Self::Equals => Palette::Accent,
            Self::Clear | Self::SignToggle | Self::Percent => Palette::Function,
            Self::Digit(_) | Self::DecimalPoint | Self::Backspace => Palette::Numeric,
        }
    }

    /// The character appended to the expression buffer, if this role appends
    /// one at all.
    pub fn input_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::DecimalPoint => Some('.'),
            Self::Operator(op) => Some(op.symbol()),
            Self::Clear | Self::Backspace | Self::SignToggle | Self::Percent | Self::Equals => {
                None
            }
        }
    }
}

/// A single keypad button: the label drawn on it and what it does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub role: ButtonRole,
}

impl ButtonSpec {
    pub const fn new(label: &'static str, role: ButtonRole) -> Self {
        Self { label, role }
    }

    pub const fn digit(label: &'static str, digit: u8) -> Self {
        Self::new(label, ButtonRole::Digit(digit))
    }

    pub const fn operator(label: &'static str, op: Operator) -> Self {
        Self::new(label, ButtonRole::Operator(op))
    }

    pub fn palette(&self) -> Palette {
        self.role.palette()
    }

    /// Look up a keypad button by its label.
    pub fn from_label(label: &str) -> Option<&'static ButtonSpec> {
        super::buttons().find(|button| button.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lookup() {
        assert_eq!(ButtonRole::Equals.palette(), Palette::Accent);
        assert_eq!(
            ButtonRole::Operator(Operator::Divide).palette(),
            Palette::Accent
        );
        assert_eq!(ButtonRole::Clear.palette(), Palette::Function);
        assert_eq!(ButtonRole::SignToggle.palette(), Palette::Function);
        assert_eq!(ButtonRole::Percent.palette(), Palette::Function);
        assert_eq!(ButtonRole::Digit(7).palette(), Palette::Numeric);
        assert_eq!(ButtonRole::DecimalPoint.palette(), Palette::Numeric);
        assert_eq!(ButtonRole::Backspace.palette(), Palette::Numeric);
    }

    #[test]
    fn test_input_chars() {
        assert_eq!(ButtonRole::Digit(0).input_char(), Some('0'));
        assert_eq!(ButtonRole::Digit(9).input_char(), Some('9'));
        assert_eq!(ButtonRole::DecimalPoint.input_char(), Some('.'));
        assert_eq!(
            ButtonRole::Operator(Operator::Multiply).input_char(),
            Some('*')
        );
        assert_eq!(ButtonRole::Equals.input_char(), None);
        assert_eq!(ButtonRole::Backspace.input_char(), None);
    }

    #[test]
    fn test_from_label() {
        let button = ButtonSpec::from_label("×").unwrap();
        assert_eq!(button.role, ButtonRole::Operator(Operator::Multiply));
        assert_eq!(
            ButtonSpec::from_label("−").unwrap().role,
            ButtonRole::Operator(Operator::Subtract)
        );
        assert!(ButtonSpec::from_label("*").is_none());
        assert!(ButtonSpec::from_label("").is_none());
    }
}
