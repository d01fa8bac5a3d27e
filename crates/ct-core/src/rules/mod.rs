//! Runtime rules: the small configuration that governs dispatch.

pub mod defaults;
pub mod key;
pub mod model;

pub use key::RuleId;
pub use model::{RuleError, Rules, CURRENT_SCHEMA_VERSION};
