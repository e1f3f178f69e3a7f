//! LaTeX math delimiter rewriting.
//!
//! Rewrites the bracket-style LaTeX math delimiters into the dollar-style
//! delimiters understood by Markdown renderers:
//!
//! | LaTeX | Markdown |
//! |-------|----------|
//! | `\(`  | `$`      |
//! | `\)`  | `$`      |
//! | `\[`  | `$$`     |
//! | `\]`  | `$$`     |
//!
//! The rewrite is purely textual. Code spans, escaped backslashes and nesting
//! are not taken into account.

mod rules;
mod translator;

pub use rules::{DelimiterRule, MathKind, DELIMITER_RULES};
pub use translator::{contains_delimiters, translate, translate_with_stats, Translation};
