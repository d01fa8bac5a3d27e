//! ClipTrans infrastructure adapters
//!
//! Concrete implementations of the core ports: the JSON rule store, the
//! clipboard text normalizer and the HTTP translation provider.

pub mod rules;
pub mod text;
pub mod translation;

pub use rules::FileRuleStore;
pub use text::WhitespaceNormalizer;
pub use translation::GoogleTranslateClient;
