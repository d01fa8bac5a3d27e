//! Dispatch state machine.
//!
//! Holds the single-slot request state of the dispatch core and the pure
//! transition functions over it. Nothing in here suspends: every transition is
//! applied atomically by the owner while it holds the state.
//!
//! ## Sequencing
//!
//! Each accepted request is stamped with a monotonically increasing sequence
//! number. A successful completion is applied only when its sequence is not
//! older than the latest applied one, so a slow request that resolves after a
//! newer request can no longer overwrite the last result with stale text.

use serde::Serialize;

/// Why a clipboard candidate was not turned into a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Candidate is empty or whitespace only.
    Empty,
    /// Candidate equals the last produced translation (self echo).
    EchoOfLastResult,
    /// Candidate equals the request already issued.
    DuplicatePending,
}

/// Outcome of the dedup gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Accept { seq: u64 },
    Reject(RejectReason),
}

impl GateDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, GateDecision::Accept { .. })
    }
}

/// Outcome of applying a successful provider response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Result became the new last result.
    Applied,
    /// A newer request already applied its result; this one is dropped.
    Stale { latest_applied: u64 },
}

/// Read-only view handed to collaborators.
///
/// 供协作者读取的只读快照。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchSnapshot {
    pub pending: Option<String>,
    pub last_result: Option<String>,
    pub watching: bool,
    pub issued_seq: u64,
    pub applied_seq: u64,
}

/// Mutable dispatch state owned by the controller.
#[derive(Debug, Default)]
pub struct DispatchState {
    pending: Option<String>,
    last_result: Option<String>,
    watching: bool,
    issued_seq: u64,
    applied_seq: u64,
}

impl DispatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dedup gate.
    ///
    /// Rejects empty candidates, the echo of the last result and duplicates of
    /// the pending request. On acceptance the candidate becomes the pending
    /// text before any asynchronous work starts.
    pub fn admit(&mut self, candidate: &str) -> GateDecision {
        if candidate.trim().is_empty() {
            return GateDecision::Reject(RejectReason::Empty);
        }
        if self.last_result.as_deref() == Some(candidate) {
            return GateDecision::Reject(RejectReason::EchoOfLastResult);
        }
        if self.pending.as_deref() == Some(candidate) {
            return GateDecision::Reject(RejectReason::DuplicatePending);
        }

        GateDecision::Accept {
            seq: self.begin_request(candidate),
        }
    }

    pub fn should_translate(&mut self, candidate: &str) -> bool {
        self.admit(candidate).is_accepted()
    }

    /// Supersede the pending request unconditionally and return its sequence.
    pub fn begin_request(&mut self, text: &str) -> u64 {
        self.issued_seq += 1;
        self.pending = Some(text.to_string());
        self.issued_seq
    }

    pub fn complete_success(&mut self, seq: u64, result: &str) -> Completion {
        if seq < self.applied_seq {
            return Completion::Stale {
                latest_applied: self.applied_seq,
            };
        }
        self.applied_seq = seq;
        self.last_result = Some(result.to_string());
        Completion::Applied
    }

    /// Record a failed request.
    ///
    /// Clears the pending text when the failed request is still the latest one
    /// issued, so copying the same text again retries. Returns whether it was
    /// cleared.
    pub fn complete_failure(&mut self, seq: u64, text: &str) -> bool {
        if seq == self.issued_seq && self.pending.as_deref() == Some(text) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn set_watching(&mut self, watching: bool) -> bool {
        std::mem::replace(&mut self.watching, watching)
    }

    pub fn is_watching(&self) -> bool {
        self.watching
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    pub fn snapshot(&self) -> DispatchSnapshot {
        DispatchSnapshot {
            pending: self.pending.clone(),
            last_result: self.last_result.clone(),
            watching: self.watching,
            issued_seq: self.issued_seq,
            applied_seq: self.applied_seq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_accepts_text() {
        let mut state = DispatchState::new();

        assert_eq!(state.admit("Hello"), GateDecision::Accept { seq: 1 });
        assert_eq!(state.pending(), Some("Hello"));
    }

    #[test]
    fn empty_and_whitespace_are_rejected() {
        let mut state = DispatchState::new();

        assert_eq!(state.admit(""), GateDecision::Reject(RejectReason::Empty));
        assert_eq!(
            state.admit(" \n\t "),
            GateDecision::Reject(RejectReason::Empty)
        );
        assert_eq!(state.pending(), None);
        assert_eq!(state.snapshot().issued_seq, 0);
    }

    #[test]
    fn duplicate_of_pending_is_rejected_while_in_flight() {
        let mut state = DispatchState::new();
        assert!(state.should_translate("Hello"));

        assert_eq!(
            state.admit("Hello"),
            GateDecision::Reject(RejectReason::DuplicatePending)
        );
    }

    #[test]
    fn echo_of_last_result_is_rejected() {
        let mut state = DispatchState::new();
        let GateDecision::Accept { seq } = state.admit("Hello") else {
            panic!("expected acceptance");
        };
        assert_eq!(state.complete_success(seq, "Bonjour"), Completion::Applied);

        assert_eq!(
            state.admit("Bonjour"),
            GateDecision::Reject(RejectReason::EchoOfLastResult)
        );
    }

    #[test]
    fn newer_signal_supersedes_pending() {
        let mut state = DispatchState::new();
        state.admit("one");
        state.admit("two");

        assert_eq!(state.pending(), Some("two"));
        // "one" is no longer pending, so it is accepted again
        assert_eq!(state.admit("one"), GateDecision::Accept { seq: 3 });
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = DispatchState::new();
        let GateDecision::Accept { seq: slow } = state.admit("A") else {
            panic!()
        };
        let GateDecision::Accept { seq: fast } = state.admit("B") else {
            panic!()
        };

        assert_eq!(state.complete_success(fast, "b"), Completion::Applied);
        assert_eq!(
            state.complete_success(slow, "a"),
            Completion::Stale { latest_applied: fast }
        );
        assert_eq!(state.last_result(), Some("b"));
    }

    #[test]
    fn out_of_order_but_newer_completion_still_applies() {
        let mut state = DispatchState::new();
        let GateDecision::Accept { seq: first } = state.admit("A") else {
            panic!()
        };
        let GateDecision::Accept { seq: second } = state.admit("B") else {
            panic!()
        };

        assert_eq!(state.complete_success(first, "a"), Completion::Applied);
        assert_eq!(state.complete_success(second, "b"), Completion::Applied);
        assert_eq!(state.last_result(), Some("b"));
    }

    #[test]
    fn failure_clears_pending_for_latest_request() {
        let mut state = DispatchState::new();
        let GateDecision::Accept { seq } = state.admit("Hello") else {
            panic!()
        };

        assert!(state.complete_failure(seq, "Hello"));
        assert_eq!(state.pending(), None);
        assert!(state.should_translate("Hello"), "same text may be retried");
    }

    #[test]
    fn failure_of_superseded_request_keeps_newer_pending() {
        let mut state = DispatchState::new();
        let GateDecision::Accept { seq: old } = state.admit("old") else {
            panic!()
        };
        state.admit("new");

        assert!(!state.complete_failure(old, "old"));
        assert_eq!(state.pending(), Some("new"));
    }

    #[test]
    fn set_watching_returns_previous_value() {
        let mut state = DispatchState::new();
        assert!(!state.set_watching(true));
        assert!(state.set_watching(false));
        assert!(!state.is_watching());
    }
}
