//! # tc-platform
//!
//! Platform-specific implementations for texclip.
//!
//! This crate contains the infrastructure implementations that talk to the
//! operating system clipboard.

pub mod clipboard;

pub use clipboard::SystemClipboard;
