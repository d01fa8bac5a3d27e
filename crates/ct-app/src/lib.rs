//! ClipTrans application layer
//!
//! This crate contains the reactive dispatch use cases: it decides, for every
//! clipboard signal, whether a translation is triggered, drives the single
//! current request and reacts to rule changes.

pub mod deps;
pub mod event;
pub mod usecases;

pub use deps::DispatchDeps;
pub use event::{DispatchEvent, DispatchEventBus};
pub use usecases::dispatch::{
    DispatchController, DispatchError, RuleEffect, SignalOutcome, TranslationOutcome,
    TranslationTicket,
};
