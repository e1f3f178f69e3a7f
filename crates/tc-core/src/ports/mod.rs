//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The use case only ever sees these
//! traits, so it can be exercised without a real system clipboard.

pub mod clipboard;
pub mod errors;

pub use clipboard::ClipboardPort;
#[cfg(any(test, feature = "testing"))]
pub use clipboard::MockClipboardPort;
pub use errors::ClipboardError;
