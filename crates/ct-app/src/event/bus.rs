use tokio::sync::broadcast;
use tracing::trace;

use super::DispatchEvent;

/// Publish/subscribe channel for [`DispatchEvent`]s.
///
/// Publishing never blocks and never fails: with no subscriber the event is
/// dropped, and slow subscribers observe `RecvError::Lagged`.
#[derive(Debug, Clone)]
pub struct DispatchEventBus {
    tx: broadcast::Sender<DispatchEvent>,
}

impl DispatchEventBus {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DispatchEvent> {
        self.tx.subscribe()
    }

    /// Publish an event, returning how many subscribers received it.
    pub fn publish(&self, event: DispatchEvent) -> usize {
        match self.tx.send(event) {
            Ok(receivers) => receivers,
            Err(broadcast::error::SendError(event)) => {
                trace!(?event, "No dispatch event subscribers");
                0
            }
        }
    }
}

impl Default for DispatchEventBus {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_reaches_every_subscriber() {
        let bus = DispatchEventBus::default();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        let delivered = bus.publish(DispatchEvent::WatchStateChanged { watching: true });

        assert_eq!(delivered, 2);
        assert_eq!(
            first.recv().await.unwrap(),
            DispatchEvent::WatchStateChanged { watching: true }
        );
        assert_eq!(
            second.recv().await.unwrap(),
            DispatchEvent::WatchStateChanged { watching: true }
        );
    }

    #[test]
    fn publish_without_subscribers_is_not_an_error() {
        let bus = DispatchEventBus::new(0);
        assert_eq!(
            bus.publish(DispatchEvent::Error {
                message: "nobody listens".to_string()
            }),
            0
        );
    }
}
