use anyhow::{anyhow, Context, Result};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use tc_core::ClipboardError;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

/// Flatten an error chain into the string carried by [`ClipboardError`].
pub(crate) fn describe(err: &anyhow::Error) -> String {
    format!("{err:#}")
}

/// Text access shared by the `clipboard-rs` backed adapter.
pub struct CommonClipboardImpl;

impl CommonClipboardImpl {
    pub fn open() -> Result<ClipboardContext> {
        map_clipboard_err(ClipboardContext::new()).context("ClipboardContext::new failed")
    }

    pub fn read_text(ctx: &ClipboardContext) -> std::result::Result<String, ClipboardError> {
        if !ctx.has(ContentFormat::Text) {
            return Err(ClipboardError::NotText);
        }

        map_clipboard_err(ctx.get_text())
            .context("get_text failed")
            .map_err(|e| ClipboardError::Read(describe(&e)))
    }

    pub fn write_text(
        ctx: &ClipboardContext,
        text: &str,
    ) -> std::result::Result<(), ClipboardError> {
        map_clipboard_err(ctx.set_text(text.to_owned()))
            .context("set_text failed")
            .map_err(|e| ClipboardError::Write(describe(&e)))
    }
}
