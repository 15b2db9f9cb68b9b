//! Deferred transitions. The engine queues them; the presentation layer
//! waits out the delay and fires them back.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredEvent {
    /// Move the run to the next floor after a kill without equipment.
    AdvanceFloor,
    /// Show the run summary after defeat.
    ShowSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deferred {
    pub event: DeferredEvent,
    pub delay_ms: u64,
}
