//! Translation payload types shared between the dispatch core and its
//! collaborators.

use serde::{Deserialize, Serialize};

/// Language codes used for a single request.
///
/// Read fresh from the rule store for every request and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Result event payload consumed by the presentation layer.
///
/// 翻译结果事件载荷。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Source text that was translated.
    pub src: String,
    /// Translated text.
    pub result: String,
    /// Source language code at request time.
    pub source: String,
    /// Target language code at request time.
    pub target: String,
}

impl TranslationResult {
    pub fn new(src: impl Into<String>, result: impl Into<String>, pair: &LanguagePair) -> Self {
        Self {
            src: src.into(),
            result: result.into(),
            source: pair.source.clone(),
            target: pair.target.clone(),
        }
    }
}
