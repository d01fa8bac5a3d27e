use async_trait::async_trait;
use ct_core::ports::{WatcherControlError, WatcherControlPort};
use tokio::sync::mpsc::error::SendError;

use crate::ipc::PlatformCommand;
use crate::runtime::event_bus::PlatformCommandSender;

/// Watcher control that turns intents into [`PlatformCommand`]s.
///
/// 通过进程内 channel 发送监控器命令。
///
/// Delivery only means the runtime will see the command; the runtime applies
/// it in order with every other command.
pub struct InMemoryWatcherControl {
    cmd_tx: PlatformCommandSender,
}

impl InMemoryWatcherControl {
    pub fn new(cmd_tx: PlatformCommandSender) -> Self {
        Self { cmd_tx }
    }

    async fn send(
        &self,
        command: PlatformCommand,
        on_error: fn(String) -> WatcherControlError,
    ) -> Result<(), WatcherControlError> {
        self.cmd_tx
            .send(command)
            .await
            .map_err(|err: SendError<PlatformCommand>| {
                if self.cmd_tx.is_closed() {
                    WatcherControlError::ChannelClosed
                } else {
                    on_error(err.to_string())
                }
            })
    }
}

#[async_trait]
impl WatcherControlPort for InMemoryWatcherControl {
    async fn start_watcher(&self) -> Result<(), WatcherControlError> {
        self.send(
            PlatformCommand::StartClipboardWatcher,
            WatcherControlError::StartFailed,
        )
        .await
    }

    async fn stop_watcher(&self) -> Result<(), WatcherControlError> {
        self.send(
            PlatformCommand::StopClipboardWatcher,
            WatcherControlError::StopFailed,
        )
        .await
    }
}
