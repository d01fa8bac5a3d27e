use std::sync::Arc;

use ct_app::DispatchEvent;
use ct_core::ports::RuleStorePort;
use ct_core::TranslationResult;
use ct_platform::ipc::PlatformCommand;
use ct_platform::runtime::event_bus::PlatformCommandSender;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, warn};

/// Text shown for an event, `None` for events that are only logged.
pub fn render(event: &DispatchEvent) -> Option<String> {
    match event {
        DispatchEvent::TranslationResult(r) => Some(format!(
            "[{} -> {}] {}\n{}",
            r.source, r.target, r.src, r.result
        )),
        DispatchEvent::Error { message } => Some(format!("error: {message}")),
        DispatchEvent::WatchStateChanged { watching } => Some(format!(
            "clipboard watch {}",
            if *watching { "on" } else { "off" }
        )),
        DispatchEvent::RuleChanged { rule, value } => {
            debug!(%rule, %value, "Rule changed");
            None
        }
    }
}

/// Terminal presentation of dispatch events.
///
/// Besides printing, it applies the clipboard rules after each result:
/// `autoCopy` writes the translation back, otherwise `isDete` clears the
/// clipboard.
pub struct ConsolePresenter {
    rules: Arc<dyn RuleStorePort>,
    commands: PlatformCommandSender,
}

impl ConsolePresenter {
    pub fn new(rules: Arc<dyn RuleStorePort>, commands: PlatformCommandSender) -> Self {
        Self { rules, commands }
    }

    pub async fn run(self, mut events: broadcast::Receiver<DispatchEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => self.present(&event).await,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Presenter lagged behind dispatch events");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }

    pub async fn present(&self, event: &DispatchEvent) {
        if let Some(text) = render(event) {
            match event {
                DispatchEvent::Error { .. } => eprintln!("{text}"),
                _ => println!("{text}"),
            }
        }

        let DispatchEvent::TranslationResult(result) = event else {
            return;
        };
        if let Some(command) = self.clipboard_follow_up(result) {
            if let Err(err) = self.commands.send(command).await {
                warn!(error = %err, "Failed to update clipboard after translation");
            }
        }
    }

    fn clipboard_follow_up(&self, result: &TranslationResult) -> Option<PlatformCommand> {
        let rules = self.rules.snapshot();
        if rules.auto_copy {
            Some(PlatformCommand::WriteClipboard {
                text: result.result.clone(),
            })
        } else if rules.delete_on_translate {
            Some(PlatformCommand::WriteClipboard {
                text: String::new(),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_core::ports::tests::MockRuleStore;
    use ct_core::{LanguagePair, Rules};
    use ct_platform::runtime::event_bus::{command_channel, PlatformCommandReceiver};

    fn result() -> TranslationResult {
        TranslationResult::new("Hello", "Bonjour", &LanguagePair::new("en", "fr"))
    }

    fn presenter_with(rules: Rules) -> (ConsolePresenter, PlatformCommandReceiver) {
        let mut store = MockRuleStore::new();
        store.expect_snapshot().returning(move || rules.clone());
        let (tx, rx) = command_channel();
        (ConsolePresenter::new(Arc::new(store), tx), rx)
    }

    #[test]
    fn renders_result_with_language_pair() {
        let text = render(&DispatchEvent::TranslationResult(result())).unwrap();
        assert_eq!(text, "[en -> fr] Hello\nBonjour");
    }

    #[test]
    fn rule_changes_are_not_rendered() {
        let event = DispatchEvent::RuleChanged {
            rule: ct_core::RuleId::Target,
            value: serde_json::json!("de"),
        };
        assert!(render(&event).is_none());
    }

    #[tokio::test]
    async fn auto_copy_writes_translation_back() {
        let (presenter, mut rx) = presenter_with(Rules {
            auto_copy: true,
            delete_on_translate: true,
            ..Rules::default()
        });

        presenter
            .present(&DispatchEvent::TranslationResult(result()))
            .await;

        assert_eq!(
            rx.try_recv().unwrap(),
            PlatformCommand::WriteClipboard {
                text: "Bonjour".to_string()
            }
        );
    }

    #[tokio::test]
    async fn delete_on_translate_clears_clipboard() {
        let (presenter, mut rx) = presenter_with(Rules {
            delete_on_translate: true,
            ..Rules::default()
        });

        presenter
            .present(&DispatchEvent::TranslationResult(result()))
            .await;

        assert_eq!(
            rx.try_recv().unwrap(),
            PlatformCommand::WriteClipboard {
                text: String::new()
            }
        );
    }

    #[tokio::test]
    async fn default_rules_leave_clipboard_alone() {
        let (presenter, mut rx) = presenter_with(Rules::default());

        presenter
            .present(&DispatchEvent::TranslationResult(result()))
            .await;
        presenter
            .present(&DispatchEvent::Error {
                message: "translate error".to_string(),
            })
            .await;

        assert!(rx.try_recv().is_err());
    }
}
