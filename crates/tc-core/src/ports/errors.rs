use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard read failed: {0}")]
    Read(String),

    #[error("clipboard write failed: {0}")]
    Write(String),

    #[error("clipboard does not contain text")]
    NotText,
}

impl ClipboardError {
    /// True when no clipboard backend could be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ClipboardError::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_backend_detail() {
        let err = ClipboardError::Unavailable("no display".into());
        assert_eq!(err.to_string(), "clipboard unavailable: no display");
        assert!(err.is_unavailable());

        let err = ClipboardError::Write("owner lost".into());
        assert_eq!(err.to_string(), "clipboard write failed: owner lost");
        assert!(!err.is_unavailable());
    }

    #[test]
    fn not_text_has_fixed_message() {
        assert_eq!(
            ClipboardError::NotText.to_string(),
            "clipboard does not contain text"
        );
    }
}
