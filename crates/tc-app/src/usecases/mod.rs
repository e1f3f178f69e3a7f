pub mod convert_clipboard;

pub use convert_clipboard::ConvertClipboardUseCase;
