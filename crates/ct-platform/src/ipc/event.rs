// Events describe facts observed by the platform, never what to do next.

/// Events flowing from platform sources into the runtime loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Runtime loop is ready.
    Started,

    /// Runtime loop exited.
    Stopped,

    /// The system clipboard now holds `text`.
    ClipboardChanged { text: String },

    /// One-off failure from a platform source.
    Error { message: String },
}
