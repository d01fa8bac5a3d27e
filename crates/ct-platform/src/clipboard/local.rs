use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use ct_core::ports::SystemClipboardPort;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

/// Plain-text access to the system clipboard through `clipboard-rs`.
pub struct LocalClipboard {
    inner: Mutex<ClipboardContext>,
}

impl LocalClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Mutex::new(context),
        })
    }

    fn context(&self) -> Result<MutexGuard<'_, ClipboardContext>> {
        self.inner
            .lock()
            .map_err(|e| anyhow!("Failed to lock clipboard: {}", e))
    }
}

impl SystemClipboardPort for LocalClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        let ctx = self.context()?;
        if !ctx.has(ContentFormat::Text) {
            return Ok(None);
        }
        map_clipboard_err(ctx.get_text()).map(Some)
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let ctx = self.context()?;
        map_clipboard_err(ctx.set_text(text.to_string()))
    }
}
