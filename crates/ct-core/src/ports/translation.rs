use async_trait::async_trait;

use crate::translation::LanguagePair;

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Transport(String),

    #[error("translation provider returned status {status}")]
    Status { status: u16 },

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Translation provider.
///
/// An `Ok` with empty text is a provider-side failure; callers decide how to
/// report it. Implementations must not impose retries.
#[async_trait]
pub trait TranslationPort: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        languages: &LanguagePair,
    ) -> Result<String, TranslationError>;
}
