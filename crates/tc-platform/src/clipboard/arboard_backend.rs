use std::sync::Mutex;

use arboard::Clipboard;
use tc_core::{ClipboardError, ClipboardPort};
use tracing::{debug, debug_span};

/// Clipboard implementation using arboard
pub struct ArboardClipboard {
    inner: Mutex<Clipboard>,
}

impl ArboardClipboard {
    pub const BACKEND: &'static str = "arboard";

    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self {
            inner: Mutex::new(clipboard),
        })
    }
}

fn map_read_err(err: arboard::Error) -> ClipboardError {
    match err {
        arboard::Error::ContentNotAvailable => ClipboardError::NotText,
        arboard::Error::ClipboardNotSupported => ClipboardError::Unavailable(err.to_string()),
        other => ClipboardError::Read(other.to_string()),
    }
}

impl ClipboardPort for ArboardClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        let span = debug_span!("platform.arboard.read_text");
        span.in_scope(|| {
            let mut clipboard = self
                .inner
                .lock()
                .map_err(|_| ClipboardError::Read("clipboard handle poisoned".into()))?;
            let text = clipboard.get_text().map_err(map_read_err)?;

            debug!(len = text.len(), "Read text from system clipboard");
            Ok(text)
        })
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let span = debug_span!("platform.arboard.write_text", len = text.len());
        span.in_scope(|| {
            let mut clipboard = self
                .inner
                .lock()
                .map_err(|_| ClipboardError::Write("clipboard handle poisoned".into()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Write(e.to_string()))?;

            debug!("Wrote text to system clipboard");
            Ok(())
        })
    }
}
