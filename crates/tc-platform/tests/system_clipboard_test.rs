//! Tests against the real system clipboard.
//!
//! These need a desktop session (X11/Wayland, macOS or Windows) and clobber
//! the user's clipboard, so they only run with `--ignored`.

use tc_core::ClipboardPort;
use tc_platform::clipboard::{ArboardClipboard, ClipboardRsClipboard};
use tc_platform::SystemClipboard;

fn round_trip(port: &dyn ClipboardPort) {
    let text = "texclip \\(x\\) probe";
    port.write_text(text).expect("write clipboard");
    assert_eq!(port.read_text().expect("read clipboard"), text);
}

#[test]
#[ignore = "requires a system clipboard"]
fn system_clipboard_round_trip() {
    let clipboard = SystemClipboard::open().expect("open clipboard");
    round_trip(&clipboard);
}

#[test]
#[ignore = "requires a system clipboard"]
fn clipboard_rs_round_trip() {
    let clipboard = ClipboardRsClipboard::new().expect("open clipboard-rs");
    round_trip(&clipboard);
}

#[test]
#[ignore = "requires a system clipboard"]
fn arboard_round_trip() {
    let clipboard = ArboardClipboard::new().expect("open arboard");
    round_trip(&clipboard);
}
