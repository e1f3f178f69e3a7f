use std::borrow::Cow;

use super::rules::{MathKind, DELIMITER_RULES};

/// Result of rewriting a piece of text, with per-kind replacement counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation<'a> {
    pub text: Cow<'a, str>,
    /// Number of `\(` and `\)` replaced.
    pub inline: usize,
    /// Number of `\[` and `\]` replaced.
    pub display: usize,
}

impl Translation<'_> {
    pub fn replaced(&self) -> usize {
        self.inline + self.display
    }

    pub fn is_unchanged(&self) -> bool {
        self.replaced() == 0
    }
}

/// Rewrites `\(`, `\)`, `\[`, `\]` into `$`, `$`, `$$`, `$$`.
///
/// Returns the input borrowed when nothing had to change.
///
/// ```
/// use tc_core::latex::translate;
///
/// assert_eq!(translate("a\\(b\\)c\\[d\\]e"), "a$b$c$$d$$e");
/// assert_eq!(translate("\\n"), "\\n");
/// ```
pub fn translate(input: &str) -> Cow<'_, str> {
    translate_with_stats(input).text
}

/// Same rewrite as [`translate`], also counting what was replaced.
pub fn translate_with_stats(input: &str) -> Translation<'_> {
    let mut translation = Translation {
        text: Cow::Borrowed(input),
        inline: 0,
        display: 0,
    };

    // Every pattern starts with a backslash.
    if !input.contains('\\') {
        return translation;
    }

    for rule in &DELIMITER_RULES {
        let hits = translation.text.matches(rule.pattern).count();
        if hits == 0 {
            continue;
        }

        translation.text = Cow::Owned(translation.text.replace(rule.pattern, rule.replacement));
        match rule.kind {
            MathKind::Inline => translation.inline += hits,
            MathKind::Display => translation.display += hits,
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        inline = translation.inline,
        display = translation.display,
        "translated latex delimiters"
    );

    translation
}

/// Whether `input` holds any delimiter [`translate`] would rewrite.
pub fn contains_delimiters(input: &str) -> bool {
    input.contains('\\') && DELIMITER_RULES.iter().any(|rule| input.contains(rule.pattern))
}
