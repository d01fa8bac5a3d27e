/// Commands accepted by the [`PlatformRuntime`](crate::PlatformRuntime).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCommand {
    /// Begin observing clipboard changes.
    StartClipboardWatcher,
    /// Stop observing; later changes are dropped at the runtime.
    StopClipboardWatcher,
    /// Replace the clipboard content with plain text.
    WriteClipboard { text: String },
    /// Read the current clipboard text and hand it to the change handler.
    ReadClipboard,
    Shutdown,
}
