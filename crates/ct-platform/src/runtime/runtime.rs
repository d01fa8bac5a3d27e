use std::sync::Arc;

use ct_core::ports::{ClipboardChangeHandler, SystemClipboardPort};
use tracing::{debug, error, info, warn};

use super::event_bus::{PlatformCommandReceiver, PlatformEventReceiver, PlatformEventSender};
use crate::ipc::{PlatformCommand, PlatformEvent};
use crate::ports::ClipboardRuntimePort;

/// Single-task loop that owns the clipboard observer.
///
/// Clipboard changes reach the handler only while the watcher is running: a
/// change queued before `StopClipboardWatcher` is processed is still
/// delivered, every change processed after it is dropped.
pub struct PlatformRuntime {
    clipboard: Arc<dyn SystemClipboardPort>,
    observer: Arc<dyn ClipboardRuntimePort>,
    event_tx: PlatformEventSender,
    event_rx: PlatformEventReceiver,
    command_rx: PlatformCommandReceiver,
    shutting_down: bool,
    watcher_running: bool,
    clipboard_handler: Option<Arc<dyn ClipboardChangeHandler>>,
}

impl PlatformRuntime {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        observer: Arc<dyn ClipboardRuntimePort>,
        event_tx: PlatformEventSender,
        event_rx: PlatformEventReceiver,
        command_rx: PlatformCommandReceiver,
        clipboard_handler: Option<Arc<dyn ClipboardChangeHandler>>,
    ) -> Self {
        Self {
            clipboard,
            observer,
            event_tx,
            event_rx,
            command_rx,
            shutting_down: false,
            watcher_running: false,
            clipboard_handler,
        }
    }

    pub async fn start(mut self) {
        self.handle_event(PlatformEvent::Started).await;

        while !self.shutting_down {
            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event).await;
                }
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd).await;
                }
                else => {
                    warn!("Platform channels closed");
                    break;
                }
            }
        }

        if self.watcher_running {
            self.stop_clipboard_watcher().await;
        }
        self.handle_event(PlatformEvent::Stopped).await;
    }

    async fn start_clipboard_watcher(&mut self) {
        if self.watcher_running {
            debug!("Clipboard watcher already running, skipping start");
            return;
        }
        match self.observer.start(self.event_tx.clone()).await {
            Ok(()) => {
                self.watcher_running = true;
                info!("Clipboard watcher started");
            }
            Err(e) => error!(error = %e, "Failed to start clipboard watcher"),
        }
    }

    async fn stop_clipboard_watcher(&mut self) {
        if !self.watcher_running {
            debug!("Clipboard watcher already stopped");
            return;
        }
        // Gate closes even if the observer fails to stop cleanly.
        self.watcher_running = false;
        match self.observer.stop().await {
            Ok(()) => info!("Clipboard watcher stopped"),
            Err(e) => error!(error = %e, "Failed to stop clipboard watcher"),
        }
    }

    async fn deliver(&self, text: String) {
        let Some(handler) = &self.clipboard_handler else {
            warn!("Clipboard changed but no handler registered");
            return;
        };
        if let Err(e) = handler.on_clipboard_changed(text).await {
            error!(error = %e, "Failed to handle clipboard change");
        }
    }

    async fn handle_event(&self, event: PlatformEvent) {
        match event {
            PlatformEvent::ClipboardChanged { text } => {
                if !self.watcher_running {
                    debug!("Clipboard changed while not watching, dropped");
                    return;
                }
                debug!(chars = text.chars().count(), "Clipboard changed");
                self.deliver(text).await;
            }
            PlatformEvent::Started => {
                info!("Platform runtime started");
            }
            PlatformEvent::Stopped => {
                info!("Platform runtime stopped");
            }
            PlatformEvent::Error { message } => {
                error!(error = %message, "Platform error");
            }
        }
    }

    async fn handle_command(&mut self, command: PlatformCommand) {
        match command {
            PlatformCommand::Shutdown => {
                self.shutting_down = true;
                info!("Platform runtime shutting down");
            }
            PlatformCommand::StartClipboardWatcher => {
                debug!("StartClipboardWatcher command received");
                self.start_clipboard_watcher().await;
            }
            PlatformCommand::StopClipboardWatcher => {
                debug!("StopClipboardWatcher command received");
                self.stop_clipboard_watcher().await;
            }
            PlatformCommand::WriteClipboard { text } => {
                if let Err(e) = self.clipboard.write_text(&text) {
                    error!(error = %e, "Failed to write clipboard");
                }
            }
            PlatformCommand::ReadClipboard => match self.clipboard.read_text() {
                Ok(Some(text)) => self.deliver(text).await,
                Ok(None) => debug!("Clipboard holds no text"),
                Err(e) => error!(error = %e, "Failed to read clipboard"),
            },
        }
    }
}
