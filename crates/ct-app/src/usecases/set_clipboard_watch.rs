//! Use case for turning clipboard observation on or off
//! 开关剪贴板监听的用例

use std::sync::Arc;

use ct_core::ports::{WatcherControlError, WatcherControlPort};
use tracing::{info, info_span, Instrument};

#[derive(Debug, thiserror::Error)]
pub enum SetClipboardWatchError {
    #[error("Failed to start clipboard watcher: {0}")]
    StartFailed(#[source] WatcherControlError),

    #[error("Failed to stop clipboard watcher: {0}")]
    StopFailed(#[source] WatcherControlError),
}

/// Forwards a watch intent to the [`WatcherControlPort`].
///
/// Both directions are idempotent on the port side, so callers may repeat the
/// same intent freely.
pub struct SetClipboardWatch {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl SetClipboardWatch {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self, watching: bool) -> Result<(), SetClipboardWatchError> {
        let span = info_span!("usecase.set_clipboard_watch.execute", watching);

        async {
            if watching {
                info!("Requesting clipboard watcher to start");
                self.watcher_control
                    .start_watcher()
                    .await
                    .map_err(SetClipboardWatchError::StartFailed)?;
            } else {
                info!("Requesting clipboard watcher to stop");
                self.watcher_control
                    .stop_watcher()
                    .await
                    .map_err(SetClipboardWatchError::StopFailed)?;
            }
            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_core::ports::tests::MockWatcherControl;

    #[tokio::test]
    async fn watching_true_starts_watcher() {
        let mut control = MockWatcherControl::new();
        control.expect_start_watcher().times(1).returning(|| Ok(()));
        control.expect_stop_watcher().never();

        let uc = SetClipboardWatch::new(Arc::new(control));

        assert!(uc.execute(true).await.is_ok());
    }

    #[tokio::test]
    async fn watching_false_stops_watcher() {
        let mut control = MockWatcherControl::new();
        control.expect_stop_watcher().times(1).returning(|| Ok(()));
        control.expect_start_watcher().never();

        let uc = SetClipboardWatch::new(Arc::new(control));

        assert!(uc.execute(false).await.is_ok());
    }

    #[tokio::test]
    async fn start_failure_is_reported() {
        let mut control = MockWatcherControl::new();
        control
            .expect_start_watcher()
            .returning(|| Err(WatcherControlError::ChannelClosed));

        let uc = SetClipboardWatch::new(Arc::new(control));

        let err = uc.execute(true).await.unwrap_err();
        assert!(matches!(
            err,
            SetClipboardWatchError::StartFailed(WatcherControlError::ChannelClosed)
        ));
        assert!(err.to_string().contains("start"));
    }
}
