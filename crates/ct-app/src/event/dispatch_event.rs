use ct_core::{RuleId, TranslationResult};
use serde_json::Value;

/// Outbound events of the dispatch core.
///
/// Consumers (presentation, logging) subscribe through
/// [`DispatchEventBus`](super::DispatchEventBus); the core never calls into
/// them directly.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchEvent {
    /// A translation finished and became the last result.
    TranslationResult(TranslationResult),

    /// Provider failure or control failure, ready to show or log.
    Error { message: String },

    /// A rule was written through to the rule store.
    RuleChanged { rule: RuleId, value: Value },

    /// Watch intent changed.
    WatchStateChanged { watching: bool },
}
