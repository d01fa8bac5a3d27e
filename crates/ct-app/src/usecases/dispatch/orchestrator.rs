//! Translate orchestrator
//! 翻译编排
//!
//! Issues provider calls on spawned tasks and applies their completions to the
//! dispatch state. A completion is applied only when it is not older than the
//! latest applied one.

use ct_core::dispatch::Completion;
use ct_core::{LanguagePair, TranslationResult};
use tracing::{debug, info, info_span, warn, Instrument};

use super::{DispatchController, TranslationOutcome, TranslationTicket};
use crate::event::DispatchEvent;

/// Message reported when the provider fails or returns nothing.
pub(crate) const TRANSLATE_ERROR: &str = "translate error";

impl DispatchController {
    /// Issue a translation for `text`, bypassing the dedup gate.
    /// 直接翻译 `text`，不经过去重判断。
    ///
    /// ## Behavior / 行为
    /// - `text` becomes the pending text and supersedes any request in flight
    /// - The language pair is read from the rule store now, not when the
    ///   provider answers
    /// - The provider call runs on a spawned task; this returns immediately
    ///
    /// # Returns / 返回值
    /// A [`TranslationTicket`] carrying the request sequence. Awaiting
    /// [`TranslationTicket::outcome`] yields the [`TranslationOutcome`].
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let ticket = controller.translate("Hello");
    /// if let Some(TranslationOutcome::Applied(result)) = ticket.outcome().await {
    ///     println!("{}", result.result);
    /// }
    /// ```
    pub fn translate(&self, text: impl Into<String>) -> TranslationTicket {
        let text = text.into();
        let seq = self.lock_state().begin_request(&text);
        self.spawn_translation(text, seq)
    }

    /// Snapshot the language pair and spawn the provider call for `seq`.
    pub(super) fn spawn_translation(&self, text: String, seq: u64) -> TranslationTicket {
        let languages = self.rules.language_pair();
        let span = info_span!(
            "usecase.dispatch.translate",
            seq,
            source = %languages.source,
            target = %languages.target,
        );

        let controller = self.clone();
        let handle = tokio::spawn(
            async move { controller.run_translation(seq, text, languages).await }.instrument(span),
        );
        TranslationTicket::new(seq, handle)
    }

    /// Provider call and completion handling for a single request.
    ///
    /// An empty or whitespace-only answer counts as a failure. Errors are
    /// reported through [`DispatchController::on_error`] and never retried.
    async fn run_translation(
        &self,
        seq: u64,
        text: String,
        languages: LanguagePair,
    ) -> TranslationOutcome {
        debug!(chars = text.chars().count(), "Requesting translation");

        let translated = match self.translator.translate(&text, &languages).await {
            Ok(result) if !result.trim().is_empty() => result,
            Ok(_) => {
                warn!("Provider returned an empty translation");
                return self.fail(seq, &text, TRANSLATE_ERROR.to_string());
            }
            Err(err) => {
                warn!(error = %err, "Provider call failed");
                return self.fail(seq, &text, format!("{TRANSLATE_ERROR}: {err}"));
            }
        };

        // Clipboard candidates are compared after normalization, so the last
        // result must be stored in the same form for echo suppression.
        let comparable = self.normalizer.normalize(&translated);

        // Publish while the guard is held: the event order matches the order
        // in which completions were applied.
        let mut state = self.lock_state();
        match state.complete_success(seq, &comparable) {
            Completion::Applied => {
                let result = TranslationResult::new(text, translated, &languages);
                info!("Translation applied");
                self.events
                    .publish(DispatchEvent::TranslationResult(result.clone()));
                TranslationOutcome::Applied(result)
            }
            Completion::Stale { latest_applied } => {
                debug!(latest_applied, "Discarding stale translation");
                TranslationOutcome::Stale {
                    seq,
                    latest_applied,
                }
            }
        }
    }

    /// Record a failed request and report `message` while holding the state.
    fn fail(&self, seq: u64, text: &str, message: String) -> TranslationOutcome {
        let mut state = self.lock_state();
        if state.complete_failure(seq, text) {
            debug!("Pending text released for retry");
        }
        self.on_error(message.clone());
        drop(state);
        TranslationOutcome::Failed { message }
    }
}
