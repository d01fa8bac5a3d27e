pub mod state;

pub use state::{Completion, DispatchSnapshot, DispatchState, GateDecision, RejectReason};
