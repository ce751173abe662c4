//! The calculator window and the view entity that owns the calculator state.

use crate::calculator::{CalculatorState, copy_to_clipboard};
use crate::config::WindowConfig;
use crate::keypad::ButtonSpec;
use crate::ui::display::render_display;
use crate::ui::keypad::render_keypad;
use crate::ui::theme::theme;
use gpui::{
    App, Bounds, ClickEvent, Context, SharedString, TitlebarOptions, Window, WindowBounds,
    WindowOptions, div, prelude::*,
};
use tracing::{debug, info, warn};

pub struct CalculatorView {
    state: CalculatorState,
}

impl Default for CalculatorView {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorView {
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
        }
    }

    pub(crate) fn press(&mut self, button: &ButtonSpec, cx: &mut Context<Self>) {
        self.state.press(button);
        cx.notify();
    }

    fn copy_display(&self) {
        let text = self.state.display();
        match copy_to_clipboard(text) {
            Ok(()) => debug!(text, "Copied display to clipboard"),
            Err(err) => warn!("{err:#}"),
        }
    }
}

impl Render for CalculatorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme();

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap(t.button_gap)
            .p(t.window_padding)
            .bg(t.window_background)
            .font_family(t.font_family.clone())
            .child(
                render_display(self.state.display()).on_click(cx.listener(
                    |this, _: &ClickEvent, _window, _cx| this.copy_display(),
                )),
            )
            .child(render_keypad(cx))
    }
}

/// Open the fixed-size calculator window, centred on the primary display.
pub fn open_window(config: &WindowConfig, cx: &mut App) -> anyhow::Result<()> {
    let window_size = theme().window_size();
    let bounds = Bounds::centered(None, window_size, cx);

    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(config.title.clone())),
                ..Default::default()
            }),
            is_resizable: false,
            window_min_size: Some(window_size),
            ..Default::default()
        },
        |_window, cx| cx.new(|_cx| CalculatorView::new()),
    )?;

    info!(title = %config.title, "Calculator window opened");
    Ok(())
}
