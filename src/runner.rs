//! The single try/report step the binary performs.

use std::sync::Arc;

use anyhow::Context;
use tc_app::{ConversionReport, ConvertClipboardUseCase};
use tc_core::{ClipboardError, ClipboardPort};
use tracing::error;

pub const SUCCESS_MESSAGE: &str = "Conversion complete! The result has been copied to the clipboard.";
pub const CLIPBOARD_HINT: &str =
    "Make sure a system clipboard is available (an X11/Wayland session on Linux).";

/// How a run ended. Either way the process exits cleanly.
#[derive(Debug)]
pub enum RunOutcome {
    Converted(ConversionReport),
    Failed(anyhow::Error),
}

impl RunOutcome {
    /// Lines to show the user, in order.
    pub fn messages(&self) -> Vec<String> {
        match self {
            RunOutcome::Converted(_) => vec![SUCCESS_MESSAGE.to_string()],
            RunOutcome::Failed(err) => vec![
                format!("Error while processing: {err:#}"),
                CLIPBOARD_HINT.to_string(),
            ],
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Converted(_))
    }

    /// Print the outcome to the console.
    pub fn report(&self) {
        for line in self.messages() {
            println!("{line}");
        }
    }
}

/// Open the clipboard, convert it and capture the outcome. Never panics on
/// clipboard failures.
pub fn run<F>(open_clipboard: F) -> RunOutcome
where
    F: FnOnce() -> Result<Arc<dyn ClipboardPort>, ClipboardError>,
{
    let result = open_clipboard()
        .context("failed to open clipboard")
        .and_then(|clipboard| ConvertClipboardUseCase::new(clipboard).execute());

    match result {
        Ok(report) => RunOutcome::Converted(report),
        Err(err) => {
            error!(error = %format!("{err:#}"), "Clipboard conversion failed");
            RunOutcome::Failed(err)
        }
    }
}
