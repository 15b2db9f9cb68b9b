//! Run orchestration, progression rules and balance constants.

pub mod constants;
pub mod engine;
pub mod events;
pub mod progression;
pub mod run;
pub mod run_log;

pub use engine::{Command, Engine, Screen, Session, Snapshot};
pub use events::{Deferred, DeferredEvent};
pub use run::{RunPhase, RunState};
pub use run_log::{LogEntry, LogTone, RunLog};
