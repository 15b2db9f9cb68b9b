//! Character classes, the stat model, and the persistent player profile.

pub mod class;
pub mod player;
pub mod stats;

pub use class::*;
pub use player::*;
pub use stats::*;
