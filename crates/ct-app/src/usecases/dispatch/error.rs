use ct_core::ports::RuleStoreError;
use serde_json::Value;

use crate::usecases::SetClipboardWatchError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("invalid value for rule `{key}`: {value}")]
    InvalidRuleValue { key: String, value: Value },

    #[error(transparent)]
    RuleStore(#[from] RuleStoreError),

    #[error(transparent)]
    Watch(#[from] SetClipboardWatchError),
}
