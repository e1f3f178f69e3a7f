//! Rewrite the LaTeX math delimiters held in the system clipboard.

use std::sync::Arc;

use anyhow::{Context, Result};
use tc_core::{latex, ClipboardPort};
use tracing::{debug, info, info_span};

use crate::models::ConversionReport;

/// Use case: read clipboard text, rewrite its delimiters, write it back.
///
/// The clipboard is read exactly once and written exactly once. The write
/// happens even when nothing changed.
pub struct ConvertClipboardUseCase {
    clipboard: Arc<dyn ClipboardPort>,
}

impl ConvertClipboardUseCase {
    pub fn new(clipboard: Arc<dyn ClipboardPort>) -> Self {
        Self { clipboard }
    }

    /// Execute the use case.
    pub fn execute(&self) -> Result<ConversionReport> {
        let _span = info_span!("usecase.convert_clipboard.execute").entered();

        let input = self
            .clipboard
            .read_text()
            .context("failed to read clipboard")?;
        debug!(len = input.len(), "Read clipboard text");

        let translation = latex::translate_with_stats(&input);
        let report = ConversionReport::from_translation(&input, &translation);
        debug!(
            inline = report.inline,
            display = report.display,
            "Translated math delimiters"
        );

        self.clipboard
            .write_text(&translation.text)
            .context("failed to write clipboard")?;

        info!(
            replaced = report.replaced(),
            changed = report.changed(),
            "Clipboard converted"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;
    use tc_core::ports::MockClipboardPort;
    use tc_core::ClipboardError;

    fn use_case(mock: MockClipboardPort) -> ConvertClipboardUseCase {
        ConvertClipboardUseCase::new(Arc::new(mock))
    }

    #[test]
    fn reads_once_translates_and_writes_once() {
        let mut seq = Sequence::new();
        let mut mock = MockClipboardPort::new();
        mock.expect_read_text()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok("a\\(b\\)c\\[d\\]e".to_string()));
        mock.expect_write_text()
            .withf(|text: &str| text == "a$b$c$$d$$e")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let report = use_case(mock).execute().unwrap();

        assert_eq!(report.inline, 2);
        assert_eq!(report.display, 2);
        assert!(report.changed());
    }

    #[test]
    fn unchanged_text_is_still_written_back() {
        let mut mock = MockClipboardPort::new();
        mock.expect_read_text()
            .times(1)
            .returning(|| Ok("no math".to_string()));
        mock.expect_write_text()
            .withf(|text: &str| text == "no math")
            .times(1)
            .returning(|_| Ok(()));

        let report = use_case(mock).execute().unwrap();
        assert!(!report.changed());
    }

    #[test]
    fn read_failure_skips_write() {
        let mut mock = MockClipboardPort::new();
        mock.expect_read_text()
            .times(1)
            .returning(|| Err(ClipboardError::Unavailable("no display".into())));
        mock.expect_write_text().never();

        let err = use_case(mock).execute().unwrap_err();

        assert_eq!(err.to_string(), "failed to read clipboard");
        let cause = err.downcast_ref::<ClipboardError>().unwrap();
        assert!(cause.is_unavailable());
    }

    #[test]
    fn write_failure_is_reported() {
        let mut mock = MockClipboardPort::new();
        mock.expect_read_text()
            .times(1)
            .returning(|| Ok("\\(x\\)".to_string()));
        mock.expect_write_text()
            .times(1)
            .returning(|_| Err(ClipboardError::Write("owner lost".into())));

        let err = use_case(mock).execute().unwrap_err();

        assert_eq!(
            format!("{err:#}"),
            "failed to write clipboard: clipboard write failed: owner lost"
        );
    }

    #[test]
    fn non_text_clipboard_is_an_error() {
        let mut mock = MockClipboardPort::new();
        mock.expect_read_text()
            .times(1)
            .returning(|| Err(ClipboardError::NotText));
        mock.expect_write_text().never();

        let err = use_case(mock).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClipboardError>(),
            Some(ClipboardError::NotText)
        ));
    }
}
