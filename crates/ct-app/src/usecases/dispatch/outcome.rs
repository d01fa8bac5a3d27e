use ct_core::{RejectReason, TranslationResult};
use tokio::task::JoinHandle;

/// What the clipboard signal gate did with a signal.
#[derive(Debug)]
pub enum SignalOutcome {
    Ignored(RejectReason),
    Dispatched(TranslationTicket),
}

impl SignalOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, SignalOutcome::Dispatched(_))
    }

    pub fn into_ticket(self) -> Option<TranslationTicket> {
        match self {
            SignalOutcome::Dispatched(ticket) => Some(ticket),
            SignalOutcome::Ignored(_) => None,
        }
    }
}

/// Handle on an issued translation request.
///
/// Dropping the ticket does not cancel the request.
#[derive(Debug)]
pub struct TranslationTicket {
    seq: u64,
    handle: JoinHandle<TranslationOutcome>,
}

impl TranslationTicket {
    pub(crate) fn new(seq: u64, handle: JoinHandle<TranslationOutcome>) -> Self {
        Self { seq, handle }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Wait for the request to finish. `None` if the task panicked or the
    /// runtime shut down first.
    pub async fn outcome(self) -> Option<TranslationOutcome> {
        self.handle.await.ok()
    }
}

/// How a translation request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationOutcome {
    /// Result was applied and published.
    Applied(TranslationResult),
    /// A newer request had already applied its result.
    Stale { seq: u64, latest_applied: u64 },
    /// Provider failed or returned nothing; an error event was published.
    Failed { message: String },
}

/// Runtime effect of a rule change on the dispatch core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleEffect {
    /// Watch intent was set.
    WatchState { watching: bool },
    /// Language pair changes; picked up by the next request.
    NextRequest,
    /// Rule only matters to presentation.
    Presentation,
    /// Unknown key, stored as-is.
    PassThrough,
}
