//! Achievement system module.
//!
//! Definitions are static; each profile carries its own progress counters
//! and claimed set.

pub mod data;
pub mod types;

pub use data::{account_buffs, get_achievement_def, ALL_ACHIEVEMENTS};
pub use types::{AchievementDef, AchievementKind, AchievementProgress, Reward, StatBuff};
