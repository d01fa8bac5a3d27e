pub mod clipboard_runtime;

pub use clipboard_runtime::ClipboardRuntimePort;
