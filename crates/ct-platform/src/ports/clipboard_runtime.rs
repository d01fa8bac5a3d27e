use anyhow::Result;
use async_trait::async_trait;

use crate::runtime::event_bus::PlatformEventSender;

/// Source of clipboard change notifications.
///
/// 剪贴板变化通知源。
///
/// Implementations push [`PlatformEvent::ClipboardChanged`](crate::ipc::PlatformEvent)
/// into `tx` while started. Both methods are idempotent.
#[async_trait]
pub trait ClipboardRuntimePort: Send + Sync {
    async fn start(&self, tx: PlatformEventSender) -> Result<()>;
    async fn stop(&self) -> Result<()>;
}
