use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use clipboard_rs::{
    ClipboardHandler, ClipboardWatcher as _, ClipboardWatcherContext, WatcherShutdown,
};
use ct_core::ports::SystemClipboardPort;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::ipc::PlatformEvent;
use crate::ports::ClipboardRuntimePort;
use crate::runtime::event_bus::PlatformEventSender;

/// `clipboard-rs` handler that turns change notifications into
/// [`PlatformEvent::ClipboardChanged`].
///
/// Runs on the blocking watcher thread, so events are queued with
/// `try_send`; a full queue drops the notification.
pub struct ClipboardChangeForwarder {
    clipboard: Arc<dyn SystemClipboardPort>,
    sender: PlatformEventSender,
}

impl ClipboardChangeForwarder {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, sender: PlatformEventSender) -> Self {
        Self { clipboard, sender }
    }

    fn forward(&self) {
        let event = match self.clipboard.read_text() {
            Ok(Some(text)) => PlatformEvent::ClipboardChanged { text },
            Ok(None) => {
                debug!("Clipboard changed without text content");
                return;
            }
            Err(err) => PlatformEvent::Error {
                message: format!("failed to read clipboard: {err}"),
            },
        };

        if let Err(err) = self.sender.try_send(event) {
            warn!(error = %err, "Failed to queue clipboard event");
        }
    }
}

impl ClipboardHandler for ClipboardChangeForwarder {
    fn on_clipboard_change(&mut self) {
        self.forward();
    }
}

struct ActiveWatch {
    shutdown: WatcherShutdown,
    join: JoinHandle<()>,
}

/// Event-driven clipboard observer backed by the native watcher of
/// `clipboard-rs`.
pub struct NativeClipboardObserver {
    clipboard: Arc<dyn SystemClipboardPort>,
    active: Mutex<Option<ActiveWatch>>,
}

impl NativeClipboardObserver {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self {
            clipboard,
            active: Mutex::new(None),
        }
    }

    fn active(&self) -> Result<std::sync::MutexGuard<'_, Option<ActiveWatch>>> {
        self.active
            .lock()
            .map_err(|e| anyhow!("Failed to lock watcher state: {}", e))
    }
}

#[async_trait]
impl ClipboardRuntimePort for NativeClipboardObserver {
    async fn start(&self, tx: PlatformEventSender) -> Result<()> {
        let mut active = self.active()?;
        if active.is_some() {
            debug!("Clipboard observer already running");
            return Ok(());
        }

        let mut watcher_ctx = ClipboardWatcherContext::new()
            .map_err(|e| anyhow!("Failed to create watcher context: {}", e))?;
        let forwarder = ClipboardChangeForwarder::new(self.clipboard.clone(), tx);
        let shutdown = watcher_ctx.add_handler(forwarder).get_shutdown_channel();

        let join = tokio::task::spawn_blocking(move || {
            info!("Clipboard watch started");
            watcher_ctx.start_watch();
            info!("Clipboard watch stopped");
        });

        *active = Some(ActiveWatch { shutdown, join });
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        let watch = self.active()?.take();
        let Some(ActiveWatch { shutdown, join }) = watch else {
            debug!("Clipboard observer already stopped");
            return Ok(());
        };

        shutdown.stop();
        join.await
            .map_err(|e| anyhow!("Clipboard watch thread failed: {}", e))?;
        Ok(())
    }
}
