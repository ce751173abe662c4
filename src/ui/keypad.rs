//! Rendering of the 5×4 button grid.

use crate::keypad::{ButtonSpec, LAYOUT};
use crate::ui::calculator::CalculatorView;
use crate::ui::theme::theme;
use gpui::{ClickEvent, Context, Div, FontWeight, SharedString, Stateful, div, prelude::*};

/// Render one button with its palette colours.
fn render_button(button: &ButtonSpec) -> Stateful<Div> {
    let t = theme();
    let colors = t.button_colors(button.palette());

    div()
        .id(button.label)
        .w(t.button_size)
        .h(t.button_size)
        .flex_shrink_0()
        .flex()
        .items_center()
        .justify_center()
        .rounded(t.button_radius)
        .bg(colors.background)
        .active(move |style| style.bg(colors.active))
        .text_color(t.text_color)
        .text_size(t.button_text_size)
        .font_weight(FontWeight::BOLD)
        .cursor_pointer()
        .child(SharedString::from(button.label))
}

/// Render the keypad, wiring each button to the calculator view.
pub fn render_keypad(cx: &Context<CalculatorView>) -> Div {
    let t = theme();

    div()
        .flex()
        .flex_col()
        .gap(t.button_gap)
        .children(LAYOUT.iter().map(|row| {
            div()
                .flex()
                .flex_row()
                .gap(t.button_gap)
                .children(row.iter().map(|button| {
                    render_button(button).on_click(cx.listener(
                        move |this, _: &ClickEvent, _window, cx| this.press(button, cx),
                    ))
                }))
        }))
}
