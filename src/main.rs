use std::sync::Arc;

use tc_core::ClipboardPort;
use tc_platform::SystemClipboard;

fn main() {
    if let Err(err) = texclip_lib::bootstrap::tracing::init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    let outcome = texclip_lib::run(|| {
        SystemClipboard::open().map(|clipboard| Arc::new(clipboard) as Arc<dyn ClipboardPort>)
    });
    outcome.report();
}
