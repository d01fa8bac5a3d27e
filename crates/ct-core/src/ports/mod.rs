//! Port interfaces for the dispatch core
//!
//! Ports define the contract between the dispatch logic (use cases) and the
//! collaborators it treats as black boxes: normalizer, translation provider,
//! rule store, clipboard and watcher control. Implementations live in the
//! platform and infrastructure crates.

mod clipboard;
mod clipboard_change_handler;
pub mod normalizer;
pub mod rule_store;
pub mod translation;
pub mod watcher_control;

#[cfg(any(test, feature = "test-utils"))]
pub mod tests;

pub use clipboard::SystemClipboardPort;
pub use clipboard_change_handler::ClipboardChangeHandler;
pub use normalizer::TextNormalizerPort;
pub use rule_store::{RuleStoreError, RuleStorePort};
pub use translation::{TranslationError, TranslationPort};
pub use watcher_control::{WatcherControlError, WatcherControlPort};
