pub mod dispatch;
pub mod set_clipboard_watch;

pub use set_clipboard_watch::{SetClipboardWatch, SetClipboardWatchError};
