//! Tracing configuration for texclip
//!
//! Diagnostics go to stderr so that stdout only carries the status line
//! meant for the user.
//!
//! ## Behavior
//!
//! - **Development**: debug level for the texclip crates
//! - **Production**: warn level, so a normal run prints nothing but the status line
//! - **Environment filter**: `RUST_LOG` overrides the defaults

use std::io;

use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "warn" };
    vec![
        level.to_string(),
        format!("tc_core={level}"),
        format!("tc_app={level}"),
        format!("tc_platform={level}"),
        // clipboard backends log every selection event at debug
        "clipboard_rs=warn".to_string(),
        "arboard=warn".to_string(),
    ]
}

/// Initialize the tracing subscriber.
///
/// Call once from `main` before any clipboard access.
///
/// ## Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let is_dev = is_development();

    let filter_directives = build_filter_directives(is_dev);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
