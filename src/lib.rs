//! texclip
//!
//! Rewrites LaTeX math delimiters found in the clipboard into Markdown math
//! delimiters, in place.

pub mod bootstrap;
pub mod runner;

pub use runner::{run, RunOutcome};
