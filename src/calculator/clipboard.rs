//! Copying the display to the system clipboard.

use anyhow::Context;
use arboard::Clipboard;

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = Clipboard::new().context("failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("failed to copy to clipboard")
}
