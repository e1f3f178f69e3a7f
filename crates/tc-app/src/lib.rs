//! # tc-app
//!
//! Application layer for texclip: use cases orchestrating the core domain
//! through its ports.

pub mod models;
pub mod usecases;

pub use models::ConversionReport;
pub use usecases::ConvertClipboardUseCase;
