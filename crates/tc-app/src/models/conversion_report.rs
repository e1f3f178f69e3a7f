use std::fmt;

use tc_core::Translation;

/// What a single clipboard conversion did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionReport {
    /// `\(` / `\)` delimiters replaced.
    pub inline: usize,
    /// `\[` / `\]` delimiters replaced.
    pub display: usize,
    /// Byte length of the text read from the clipboard.
    pub input_len: usize,
    /// Byte length of the text written back.
    pub output_len: usize,
}

impl ConversionReport {
    pub fn from_translation(input: &str, translation: &Translation<'_>) -> Self {
        Self {
            inline: translation.inline,
            display: translation.display,
            input_len: input.len(),
            output_len: translation.text.len(),
        }
    }

    pub fn replaced(&self) -> usize {
        self.inline + self.display
    }

    pub fn changed(&self) -> bool {
        self.replaced() > 0
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} inline and {} display delimiter(s) replaced",
            self.inline, self.display
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::translate_with_stats;

    #[test]
    fn report_reflects_translation() {
        let input = "a\\(b\\)c\\[d\\]e";
        let translation = translate_with_stats(input);
        let report = ConversionReport::from_translation(input, &translation);

        assert_eq!(report.inline, 2);
        assert_eq!(report.display, 2);
        assert_eq!(report.replaced(), 4);
        assert!(report.changed());
        assert_eq!(report.input_len, 13);
        assert_eq!(report.output_len, "a$b$c$$d$$e".len());
    }

    #[test]
    fn untouched_text_is_not_changed() {
        let input = "plain";
        let report = ConversionReport::from_translation(input, &translate_with_stats(input));
        assert!(!report.changed());
        assert_eq!(report.input_len, report.output_len);
    }

    #[test]
    fn display_summarises_counts() {
        let report = ConversionReport {
            inline: 3,
            display: 1,
            ..Default::default()
        };
        assert_eq!(
            report.to_string(),
            "3 inline and 1 display delimiter(s) replaced"
        );
    }
}
