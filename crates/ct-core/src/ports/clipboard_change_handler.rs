//! Clipboard change handler port
//!
//! The platform layer calls this for every clipboard notification it
//! delivers. The app layer implements it.

use anyhow::Result;

/// Callback handler for clipboard change events.
///
/// The text is already read by the platform layer and is still raw
/// (not normalized).
#[async_trait::async_trait]
pub trait ClipboardChangeHandler: Send + Sync {
    async fn on_clipboard_changed(&self, text: String) -> Result<()>;
}
