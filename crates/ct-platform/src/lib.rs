//! ClipTrans platform layer
//!
//! Owns the operating-system clipboard: reading and writing text, observing
//! changes and forwarding them to the dispatch core through
//! [`ClipboardChangeHandler`](ct_core::ports::ClipboardChangeHandler).

pub mod adapters;
pub mod clipboard;
pub mod ipc;
pub mod ports;
pub mod runtime;

pub use adapters::InMemoryWatcherControl;
pub use clipboard::{ClipboardChangeForwarder, LocalClipboard, NativeClipboardObserver};
pub use runtime::PlatformRuntime;
