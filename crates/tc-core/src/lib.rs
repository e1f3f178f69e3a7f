//! # tc-core
//!
//! Core domain models and business logic for texclip.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod latex;
pub mod ports;

// Re-export commonly used types at the crate root
pub use latex::{translate, translate_with_stats, MathKind, Translation};
pub use ports::{ClipboardError, ClipboardPort};
