//! The read-only display above the keypad.

use crate::ui::theme::theme;
use gpui::{Div, FontWeight, SharedString, Stateful, div, prelude::*};

/// Render the display showing `text`, right aligned.
///
/// Callers attach the click handler; the element already carries an id.
pub fn render_display(text: &str) -> Stateful<Div> {
    let t = theme();

    div()
        .id("display")
        .w_full()
        .h(t.display_height)
        .flex_shrink_0()
        .flex()
        .flex_row()
        .items_center()
        .justify_end()
        .px(t.display_padding_x)
        .bg(t.display_background)
        .text_color(t.text_color)
        .text_size(t.display_text_size)
        .font_weight(FontWeight::BOLD)
        .whitespace_nowrap()
        .overflow_hidden()
        .text_ellipsis()
        .cursor_pointer()
        .child(SharedString::from(text.to_string()))
}
