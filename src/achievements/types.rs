//! Achievement system types and data structures.

use crate::character::stats::StatType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// What an achievement counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementKind {
    /// Kills of a named enemy, or of any enemy when `target` is `None`.
    Slay { target: Option<&'static str> },
    /// Highest floor reached.
    ReachFloor,
    /// Account level reached.
    AccountLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reward {
    pub shards: u64,
    pub potions: u32,
}

/// A passive percentage bonus to a group of stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBuff {
    pub stats: &'static [StatType],
    pub percent: u32,
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub kind: AchievementKind,
    pub goal: u64,
    pub reward: Reward,
    /// Buff achievements unlock passively and are never claimed.
    pub buff: Option<StatBuff>,
}

impl AchievementDef {
    pub fn is_buff(&self) -> bool {
        self.buff.is_some()
    }
}

/// Per-profile progress. Counters never decrease.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementProgress {
    #[serde(default)]
    pub counters: BTreeMap<String, u64>,
    #[serde(default)]
    pub claimed: BTreeSet<String>,
}

impl AchievementProgress {
    pub fn get(&self, id: &str) -> u64 {
        self.counters.get(id).copied().unwrap_or(0)
    }

    fn bump(&mut self, id: &str) {
        *self.counters.entry(id.to_string()).or_insert(0) += 1;
    }

    fn raise_to(&mut self, id: &str, value: u64) {
        let counter = self.counters.entry(id.to_string()).or_insert(0);
        if value > *counter {
            *counter = value;
        }
    }

    pub fn is_complete(&self, def: &AchievementDef) -> bool {
        self.get(def.id) >= def.goal
    }

    pub fn is_claimed(&self, id: &str) -> bool {
        self.claimed.contains(id)
    }

    /// True when the achievement can be claimed right now.
    pub fn is_claimable(&self, def: &AchievementDef) -> bool {
        !def.is_buff() && self.is_complete(def) && !self.is_claimed(def.id)
    }

    /// Marks `def` as claimed and returns its reward, or `None` if it isn't claimable.
    pub fn claim(&mut self, def: &AchievementDef) -> Option<Reward> {
        if !self.is_claimable(def) {
            return None;
        }
        self.claimed.insert(def.id.to_string());
        Some(def.reward)
    }

    // =========================================================================
    // Event Handlers (called from combat and progression)
    // =========================================================================

    /// Called when an enemy is killed.
    pub fn on_enemy_killed(&mut self, enemy_name: &str) {
        for def in super::data::ALL_ACHIEVEMENTS {
            if let AchievementKind::Slay { target } = def.kind {
                if target.map_or(true, |t| t == enemy_name) {
                    self.bump(def.id);
                }
            }
        }
    }

    /// Called whenever a new floor is entered.
    pub fn on_floor_reached(&mut self, floor: u32) {
        self.raise_all(AchievementKind::ReachFloor, floor as u64);
    }

    /// Called after account level changes.
    pub fn on_account_level(&mut self, level: u32) {
        self.raise_all(AchievementKind::AccountLevel, level as u64);
    }

    fn raise_all(&mut self, kind: AchievementKind, value: u64) {
        for def in super::data::ALL_ACHIEVEMENTS.iter().filter(|d| d.kind == kind) {
            self.raise_to(def.id, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::data::get_achievement_def;

    #[test]
    fn test_kill_counts_accumulate_for_matching_targets() {
        let mut progress = AchievementProgress::default();
        progress.on_enemy_killed("Slime");
        progress.on_enemy_killed("Slime");
        progress.on_enemy_killed("Goblin");

        assert_eq!(progress.get("slay_any_10"), 3);
        assert_eq!(progress.get("slay_slime_25"), 2);
        assert_eq!(progress.get("slay_goblin_25"), 1);
        assert_eq!(progress.get("slay_bat_25"), 0);
    }

    #[test]
    fn test_floor_progress_holds_maximum() {
        let mut progress = AchievementProgress::default();
        progress.on_floor_reached(12);
        progress.on_floor_reached(4);
        assert_eq!(progress.get("floor_10"), 12);
        assert_eq!(progress.get("floor_25"), 12);
    }

    #[test]
    fn test_claim_requires_completion() {
        let mut progress = AchievementProgress::default();
        let def = get_achievement_def("floor_10").unwrap();

        assert_eq!(progress.claim(def), None);

        progress.on_floor_reached(10);
        assert_eq!(progress.claim(def), Some(def.reward));
        assert!(progress.is_claimed("floor_10"));

        // Second claim is rejected
        assert_eq!(progress.claim(def), None);
    }

    #[test]
    fn test_buff_achievements_cannot_be_claimed() {
        let mut progress = AchievementProgress::default();
        progress.on_account_level(20);
        for def in crate::achievements::data::ALL_ACHIEVEMENTS.iter().filter(|d| d.is_buff()) {
            assert!(progress.is_complete(def));
            assert_eq!(progress.claim(def), None);
        }
    }
}
