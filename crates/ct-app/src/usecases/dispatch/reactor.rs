//! Rule-change reactor
//! 规则变更响应
//!
//! Maps a raw rule key to its runtime effect, stores the value and tells
//! subscribers about it.

use ct_core::RuleId;
use serde_json::Value;
use tracing::{debug, info, info_span, Instrument};

use super::{DispatchController, DispatchError, RuleEffect};
use crate::event::DispatchEvent;
use crate::usecases::SetClipboardWatch;

impl DispatchController {
    /// Apply a rule change coming from the control surface.
    /// 应用一次规则变更。
    ///
    /// ## Behavior / 行为
    /// - `isListen` must be a boolean; it starts or stops the watcher right away
    /// - `source` / `target` take effect on the next request, never on one in flight
    /// - Presentation rules and unknown keys are only stored
    /// - The value is written through the rule store and persisted, then
    ///   [`DispatchEvent::RuleChanged`] is published
    ///
    /// A failing watcher control is reported as an error event but does not
    /// prevent the value from being stored.
    ///
    /// # Returns / 返回值
    /// - `Ok(RuleEffect)` describing what the change did at runtime
    /// - `Err(DispatchError::InvalidRuleValue)` for a non-boolean `isListen`,
    ///   before anything is written
    /// - `Err(DispatchError::RuleStore)` if the store rejects or fails to persist
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let effect = controller.apply_rule_change("target", json!("de")).await?;
    /// assert_eq!(effect, RuleEffect::NextRequest);
    /// ```
    pub async fn apply_rule_change(
        &self,
        key: &str,
        value: Value,
    ) -> Result<RuleEffect, DispatchError> {
        let span = info_span!("usecase.dispatch.apply_rule_change", rule = key);

        async {
            let rule = RuleId::from_key(key);

            let effect = match &rule {
                RuleId::Listen => {
                    let watching =
                        value
                            .as_bool()
                            .ok_or_else(|| DispatchError::InvalidRuleValue {
                                key: key.to_string(),
                                value: value.clone(),
                            })?;
                    if let Err(err) = self.set_watch(watching).await {
                        self.on_error(err.to_string());
                    }
                    RuleEffect::WatchState { watching }
                }
                RuleId::Source | RuleId::Target => RuleEffect::NextRequest,
                RuleId::DeleteOnTranslate | RuleId::AutoCopy | RuleId::Locale => {
                    RuleEffect::Presentation
                }
                RuleId::PassThrough(_) => {
                    debug!("Unrecognized rule key stored as-is");
                    RuleEffect::PassThrough
                }
            };

            self.rules.set_by_key(key, value.clone())?;
            self.rules.persist().await?;

            info!(?effect, "Rule updated");
            self.events.publish(DispatchEvent::RuleChanged { rule, value });
            Ok(effect)
        }
        .instrument(span)
        .await
    }

    /// Set the watch intent and forward it to the watcher control.
    /// 设置监听意图并通知监听控制端口。
    ///
    /// The intent is recorded even when the control call fails.
    /// [`DispatchEvent::WatchStateChanged`] is published only when the intent
    /// actually changed.
    ///
    /// # Returns / 返回值
    /// - `Ok(())` once the watcher control accepted the request
    /// - `Err(DispatchError::Watch)` if it could not be delivered
    pub async fn set_watch(&self, watching: bool) -> Result<(), DispatchError> {
        {
            let mut state = self.lock_state();
            if state.set_watching(watching) != watching {
                self.events
                    .publish(DispatchEvent::WatchStateChanged { watching });
            }
        }

        SetClipboardWatch::new(self.watcher.clone())
            .execute(watching)
            .await?;
        Ok(())
    }

    /// Start observing according to the stored `isListen` rule.
    pub async fn start(&self) -> Result<(), DispatchError> {
        let watching = self
            .rules
            .get(&RuleId::Listen)
            .and_then(|value| value.as_bool())
            .unwrap_or(true);
        info!(watching, "Starting dispatch core");
        self.set_watch(watching).await
    }
}
