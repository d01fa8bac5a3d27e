use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::Result;
use async_trait::async_trait;
use ct_core::ports::{
    ClipboardChangeHandler, RuleStorePort, TextNormalizerPort, TranslationPort, WatcherControlPort,
};
use ct_core::{DispatchSnapshot, DispatchState, GateDecision};
use tokio::sync::broadcast;
use tracing::{debug, error};

use super::SignalOutcome;
use crate::deps::DispatchDeps;
use crate::event::{DispatchEvent, DispatchEventBus};

/// Entry point of the dispatch core.
///
/// Owns the [`DispatchState`] and routes clipboard signals, direct translate
/// requests and rule changes through it. Cloning is cheap and every clone
/// shares the same state.
///
/// The state lock is only ever held for a single transition and never across
/// an `.await`, so concurrent signals observe each other's writes in order.
/// Events caused by a transition are published before the lock is released.
#[derive(Clone)]
pub struct DispatchController {
    pub(super) state: Arc<Mutex<DispatchState>>,
    pub(super) normalizer: Arc<dyn TextNormalizerPort>,
    pub(super) translator: Arc<dyn TranslationPort>,
    pub(super) rules: Arc<dyn RuleStorePort>,
    pub(super) watcher: Arc<dyn WatcherControlPort>,
    pub(super) events: DispatchEventBus,
}

impl DispatchController {
    pub fn new(deps: DispatchDeps) -> Self {
        Self {
            state: Arc::new(Mutex::new(DispatchState::new())),
            normalizer: deps.normalizer,
            translator: deps.translator,
            rules: deps.rules,
            watcher: deps.watcher,
            events: deps.events,
        }
    }

    /// Clipboard signal gate.
    ///
    /// Normalizes `raw`, runs it through the dedup gate and issues a
    /// translation when accepted. Returns immediately; the provider call runs
    /// on a spawned task. Must be called from within a tokio runtime.
    pub fn check_clipboard(&self, raw: &str) -> SignalOutcome {
        let candidate = self.normalizer.normalize(raw);
        let decision = self.lock_state().admit(&candidate);

        match decision {
            GateDecision::Accept { seq } => {
                debug!(seq, "Clipboard signal accepted");
                SignalOutcome::Dispatched(self.spawn_translation(candidate, seq))
            }
            GateDecision::Reject(reason) => {
                debug!(?reason, "Clipboard signal ignored");
                SignalOutcome::Ignored(reason)
            }
        }
    }

    /// Dedup gate on its own.
    ///
    /// An accepted candidate becomes the pending text, exactly as in
    /// [`check_clipboard`](Self::check_clipboard), but no request is issued.
    pub fn should_translate(&self, candidate: &str) -> bool {
        self.lock_state().should_translate(candidate)
    }

    pub fn snapshot(&self) -> DispatchSnapshot {
        self.lock_state().snapshot()
    }

    pub fn is_watching(&self) -> bool {
        self.lock_state().is_watching()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DispatchEvent> {
        self.events.subscribe()
    }

    /// Log `message` and publish it as [`DispatchEvent::Error`].
    pub fn on_error(&self, message: impl Into<String>) {
        let message = message.into();
        error!(%message, "Dispatch error");
        self.events.publish(DispatchEvent::Error { message });
    }

    pub(super) fn lock_state(&self) -> MutexGuard<'_, DispatchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ClipboardChangeHandler for DispatchController {
    async fn on_clipboard_changed(&self, text: String) -> Result<()> {
        self.check_clipboard(&text);
        Ok(())
    }
}

#[cfg(test)]
pub(super) mod test_support {
    use super::*;
    use ct_core::ports::tests::{MockRuleStore, MockTranslator, MockWatcherControl};
    use ct_core::ports::TextNormalizerPort;
    use ct_core::Rules;

    /// Trims surrounding whitespace, like the production normalizer.
    pub struct TrimNormalizer;

    impl TextNormalizerPort for TrimNormalizer {
        fn normalize(&self, raw: &str) -> String {
            raw.trim().to_string()
        }
    }

    pub fn rule_store_with_defaults() -> MockRuleStore {
        let mut rules = MockRuleStore::new();
        rules
            .expect_language_pair()
            .returning(|| Rules::default().language_pair());
        rules
    }

    pub fn controller(
        translator: MockTranslator,
        rules: MockRuleStore,
        watcher: MockWatcherControl,
    ) -> DispatchController {
        DispatchController::new(DispatchDeps {
            normalizer: Arc::new(TrimNormalizer),
            translator: Arc::new(translator),
            rules: Arc::new(rules),
            watcher: Arc::new(watcher),
            events: DispatchEventBus::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use ct_core::ports::tests::{MockTranslator, MockWatcherControl};
    use ct_core::RejectReason;

    #[tokio::test]
    async fn whitespace_only_signal_is_ignored() {
        let mut translator = MockTranslator::new();
        translator.expect_translate().never();
        let controller = controller(
            translator,
            rule_store_with_defaults(),
            MockWatcherControl::new(),
        );

        let outcome = controller.check_clipboard("  \n ");

        assert!(matches!(
            outcome,
            SignalOutcome::Ignored(RejectReason::Empty)
        ));
        assert_eq!(controller.snapshot().pending, None);
    }

    #[tokio::test]
    async fn signal_is_normalized_before_gate() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .withf(|text, _| text == "Hello")
            .times(1)
            .returning(|_, _| Ok("你好".to_string()));
        let controller = controller(
            translator,
            rule_store_with_defaults(),
            MockWatcherControl::new(),
        );

        let ticket = controller
            .check_clipboard("  Hello \n")
            .into_ticket()
            .expect("signal should dispatch");
        assert_eq!(controller.snapshot().pending.as_deref(), Some("Hello"));

        ticket.outcome().await.unwrap();
    }

    #[tokio::test]
    async fn should_translate_marks_pending_without_request() {
        let mut translator = MockTranslator::new();
        translator.expect_translate().never();
        let controller = controller(
            translator,
            rule_store_with_defaults(),
            MockWatcherControl::new(),
        );

        assert!(controller.should_translate("Hello"));
        assert!(!controller.should_translate("Hello"));
        assert_eq!(controller.snapshot().pending.as_deref(), Some("Hello"));
    }

    #[tokio::test]
    async fn on_error_publishes_error_event() {
        let controller = controller(
            MockTranslator::new(),
            rule_store_with_defaults(),
            MockWatcherControl::new(),
        );
        let mut events = controller.subscribe();

        controller.on_error("boom");

        assert_eq!(
            events.recv().await.unwrap(),
            DispatchEvent::Error {
                message: "boom".to_string()
            }
        );
    }
}
