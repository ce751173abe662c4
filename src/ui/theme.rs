//! Colours and metrics for the calculator window.

use crate::config::{HexColor, ThemeConfig};
use crate::keypad::{COLUMNS, LAYOUT, Palette};
use gpui::{Hsla, Pixels, SharedString, Size, px, rgb, size};
use std::sync::OnceLock;
use tracing::warn;

static THEME: OnceLock<CalculatorTheme> = OnceLock::new();

/// Normal and pressed background of one button palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonColors {
    pub background: Hsla,
    pub active: Hsla,
}

/// Colours and metrics used by every calculator element.
#[derive(Clone, Debug)]
pub struct CalculatorTheme {
    pub font_family: SharedString,
    pub window_background: Hsla,
    pub display_background: Hsla,
    pub text_color: Hsla,
    accent: ButtonColors,
    function: ButtonColors,
    numeric: ButtonColors,

    pub window_padding: Pixels,
    pub display_height: Pixels,
    pub display_padding_x: Pixels,
    pub display_text_size: Pixels,
    pub button_size: Pixels,
    pub button_gap: Pixels,
    pub button_radius: Pixels,
    pub button_text_size: Pixels,
}

fn hsla(color: HexColor) -> Hsla {
    rgb(color.0).into()
}

impl CalculatorTheme {
    /// Build the theme from the `[theme]` config table.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            font_family: SharedString::from(config.font_family.clone()),
            window_background: hsla(config.window_background),
            display_background: hsla(config.display_background),
            text_color: hsla(config.text),
            accent: ButtonColors {
                background: hsla(config.accent),
                active: hsla(config.accent_active),
            },
            function: ButtonColors {
                background: hsla(config.function),
                active: hsla(config.function_active),
            },
            numeric: ButtonColors {
                background: hsla(config.numeric),
                active: hsla(config.numeric_active),
            },

            window_padding: px(10.0),
            display_height: px(80.0),
            display_padding_x: px(15.0),
            display_text_size: px(28.0),
            button_size: px(72.0),
            button_gap: px(10.0),
            button_radius: px(8.0),
            button_text_size: px(18.0),
        }
    }

    /// Colours for the buttons of `palette`.
    pub fn button_colors(&self, palette: Palette) -> ButtonColors {
        match palette {
            Palette::Accent => self.accent,
            Palette::Function => self.function,
            Palette::Numeric => self.numeric,
        }
    }

    /// Fixed window size fitting the display and the whole keypad.
    pub fn window_size(&self) -> Size<Pixels> {
        let columns = COLUMNS as f32;
        let rows = LAYOUT.len() as f32;
        let width = self.button_size * columns
            + self.button_gap * (columns - 1.0)
            + self.window_padding * 2.0;
        // The display sits one gap above the first keypad row
        let height = self.display_height
            + self.button_size * rows
            + self.button_gap * rows
            + self.window_padding * 2.0;
        size(width, height)
    }
}

impl Default for CalculatorTheme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

/// Install the theme. Must run before the window opens; later calls are
/// ignored.
pub fn init_theme(theme: CalculatorTheme) {
    if THEME.set(theme).is_err() {
        warn!("Theme already initialised, ignoring");
    }
}

/// The active theme, falling back to the defaults if none was installed.
pub fn theme() -> &'static CalculatorTheme {
    THEME.get_or_init(CalculatorTheme::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_colors_follow_config() {
        let config = ThemeConfig {
            accent: HexColor(0x00ff00),
            ..ThemeConfig::default()
        };
        let theme = CalculatorTheme::from_config(&config);
        assert_eq!(
            theme.button_colors(Palette::Accent).background,
            hsla(HexColor(0x00ff00))
        );
        assert_eq!(
            theme.button_colors(Palette::Function).active,
            hsla(HexColor(0x707070))
        );
        assert_ne!(
            theme.button_colors(Palette::Numeric).background,
            theme.button_colors(Palette::Numeric).active
        );
    }

    #[test]
    fn test_window_size() {
        let theme = CalculatorTheme::default();
        let window = theme.window_size();
        assert_eq!(window.width, px(338.0));
        assert_eq!(window.height, px(510.0));
    }
}
