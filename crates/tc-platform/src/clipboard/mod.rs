//! System clipboard adapters.
//!
//! `clipboard-rs` is the primary backend. `arboard` is kept as a fallback for
//! hosts where `clipboard-rs` cannot open a context.

mod arboard_backend;
mod common;
mod rs_backend;

pub use arboard_backend::ArboardClipboard;
pub use rs_backend::ClipboardRsClipboard;

use tc_core::{ClipboardError, ClipboardPort};
use tracing::{info, warn};

/// The clipboard adapter the binary wires into the use case.
pub struct SystemClipboard {
    backend: &'static str,
    inner: Box<dyn ClipboardPort>,
}

impl SystemClipboard {
    /// Open the first clipboard backend that works on this host.
    pub fn open() -> Result<Self, ClipboardError> {
        Self::open_with(
            || ClipboardRsClipboard::new().map(|c| Box::new(c) as Box<dyn ClipboardPort>),
            || ArboardClipboard::new().map(|c| Box::new(c) as Box<dyn ClipboardPort>),
        )
    }

    fn open_with<P, F>(primary: P, fallback: F) -> Result<Self, ClipboardError>
    where
        P: FnOnce() -> Result<Box<dyn ClipboardPort>, ClipboardError>,
        F: FnOnce() -> Result<Box<dyn ClipboardPort>, ClipboardError>,
    {
        let primary_err = match primary() {
            Ok(inner) => return Ok(Self::from_port(ClipboardRsClipboard::BACKEND, inner)),
            Err(err) => err,
        };
        warn!(
            error = %primary_err,
            "clipboard-rs backend unavailable, falling back to arboard"
        );

        match fallback() {
            Ok(inner) => Ok(Self::from_port(ArboardClipboard::BACKEND, inner)),
            Err(err) => Err(ClipboardError::Unavailable(format!(
                "{}: {primary_err}; {}: {err}",
                ClipboardRsClipboard::BACKEND,
                ArboardClipboard::BACKEND
            ))),
        }
    }

    fn from_port(backend: &'static str, inner: Box<dyn ClipboardPort>) -> Self {
        info!(backend, "Opened system clipboard");
        Self { backend, inner }
    }

    pub fn backend(&self) -> &'static str {
        self.backend
    }
}

impl ClipboardPort for SystemClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        self.inner.read_text()
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.inner.write_text(text)
    }
}
