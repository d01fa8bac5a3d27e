//! # ct-core
//!
//! Core domain models and dispatch logic for ClipTrans.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod dispatch;
pub mod ports;
pub mod rules;
pub mod translation;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use dispatch::{DispatchSnapshot, DispatchState, GateDecision, RejectReason};
pub use rules::{RuleId, Rules};
pub use translation::{LanguagePair, TranslationResult};
