//! Reactive dispatch: dedup gate, translate orchestration and rule reactions.

mod controller;
mod error;
mod orchestrator;
mod outcome;
mod reactor;

pub use controller::DispatchController;
pub use error::DispatchError;
pub use outcome::{RuleEffect, SignalOutcome, TranslationOutcome, TranslationTicket};
