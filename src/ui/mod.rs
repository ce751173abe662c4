pub mod calculator;
pub mod display;
pub mod keypad;
pub mod theme;

pub use calculator::{CalculatorView, open_window};
pub use theme::{CalculatorTheme, init_theme, theme};
