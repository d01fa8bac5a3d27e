use async_trait::async_trait;
use serde_json::Value;

use crate::rules::{RuleError, RuleId, Rules};
use crate::translation::LanguagePair;

#[derive(Debug, thiserror::Error)]
pub enum RuleStoreError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("persist rules failed: {0}")]
    Persist(String),
}

/// Single source of truth for rule values.
///
/// Reads return a consistent snapshot; writes stay in memory until
/// [`RuleStorePort::persist`] is called.
#[async_trait]
pub trait RuleStorePort: Send + Sync {
    fn snapshot(&self) -> Rules;

    fn get(&self, rule: &RuleId) -> Option<Value> {
        self.snapshot().get(rule)
    }

    fn language_pair(&self) -> LanguagePair {
        self.snapshot().language_pair()
    }

    /// Resolve `key` and write `value`. Unknown keys are accepted.
    fn set_by_key(&self, key: &str, value: Value) -> Result<RuleId, RuleStoreError>;

    async fn persist(&self) -> Result<(), RuleStoreError>;
}
