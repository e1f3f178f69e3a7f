use std::sync::{Arc, Mutex};

use clipboard_rs::ClipboardContext;
use tc_core::{ClipboardError, ClipboardPort};
use tracing::{debug, debug_span};

use super::common::{describe, CommonClipboardImpl};

/// Clipboard implementation using clipboard-rs
pub struct ClipboardRsClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl ClipboardRsClipboard {
    pub const BACKEND: &'static str = "clipboard-rs";

    pub fn new() -> Result<Self, ClipboardError> {
        let context =
            CommonClipboardImpl::open().map_err(|e| ClipboardError::Unavailable(describe(&e)))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }
}

impl ClipboardPort for ClipboardRsClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        let span = debug_span!("platform.clipboard_rs.read_text");
        span.in_scope(|| {
            let ctx = self
                .inner
                .lock()
                .map_err(|_| ClipboardError::Read("clipboard context poisoned".into()))?;
            let text = CommonClipboardImpl::read_text(&ctx)?;

            debug!(len = text.len(), "Read text from system clipboard");
            Ok(text)
        })
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let span = debug_span!("platform.clipboard_rs.write_text", len = text.len());
        span.in_scope(|| {
            let ctx = self
                .inner
                .lock()
                .map_err(|_| ClipboardError::Write("clipboard context poisoned".into()))?;
            CommonClipboardImpl::write_text(&ctx, text)?;

            debug!("Wrote text to system clipboard");
            Ok(())
        })
    }
}
