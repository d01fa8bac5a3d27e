use anyhow::Result;

/// Access to the operating system clipboard (text only).
pub trait SystemClipboardPort: Send + Sync {
    /// Read the current clipboard text. `None` when the clipboard holds no text.
    fn read_text(&self) -> Result<Option<String>>;

    fn write_text(&self, text: &str) -> Result<()>;
}
