use async_trait::async_trait;

/// Port for controlling the clipboard watcher lifecycle.
///
/// 剪贴板监控器生命周期控制端口。
///
/// The dispatch core only flips intent through this port; the platform side
/// decides how observation is actually started or stopped.
///
/// # Behavior / 行为
/// - `start_watcher()` should be idempotent.
/// - `stop_watcher()` should be idempotent.
#[async_trait]
pub trait WatcherControlPort: Send + Sync {
    /// Request the clipboard watcher to start.
    async fn start_watcher(&self) -> Result<(), WatcherControlError>;

    /// Request the clipboard watcher to stop.
    async fn stop_watcher(&self) -> Result<(), WatcherControlError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WatcherControlError {
    #[error("Failed to send start command: {0}")]
    StartFailed(String),

    #[error("Failed to send stop command: {0}")]
    StopFailed(String),

    #[error("Watcher channel closed")]
    ChannelClosed,
}
