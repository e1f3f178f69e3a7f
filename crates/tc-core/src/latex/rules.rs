use std::fmt;

/// Which kind of math region a delimiter opens or closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathKind {
    /// `\( ... \)`, rendered as `$ ... $`.
    Inline,
    /// `\[ ... \]`, rendered as `$$ ... $$`.
    Display,
}

impl fmt::Display for MathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathKind::Inline => write!(f, "inline"),
            MathKind::Display => write!(f, "display"),
        }
    }
}

/// A single literal substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub kind: MathKind,
}

/// Substitutions in application order.
pub const DELIMITER_RULES: [DelimiterRule; 4] = [
    DelimiterRule {
        pattern: "\\(",
        replacement: "$",
        kind: MathKind::Inline,
    },
    DelimiterRule {
        pattern: "\\)",
        replacement: "$",
        kind: MathKind::Inline,
    },
    DelimiterRule {
        pattern: "\\[",
        replacement: "$$",
        kind: MathKind::Display,
    },
    DelimiterRule {
        pattern: "\\]",
        replacement: "$$",
        kind: MathKind::Display,
    },
];
