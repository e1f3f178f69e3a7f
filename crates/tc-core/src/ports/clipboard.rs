//! Clipboard port - abstracts system clipboard access

use super::errors::ClipboardError;

/// Plain-text access to the system clipboard.
///
/// Implementations live in the platform layer. Both calls are blocking and
/// are made at most once per run.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ClipboardPort: Send + Sync {
    /// Read the current clipboard content as text.
    fn read_text(&self) -> Result<String, ClipboardError>;

    /// Replace the clipboard content with `text`.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
