//! Ephemeral per-attempt state for one climb of the Spire.

use crate::combat::types::{generate_enemy, Enemy};
use crate::core::constants::{RUN_XP_BASE, RUN_XP_GROWTH};
use crate::items::types::Item;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Where a run currently stands. Only `Fighting` accepts combat commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    Fighting,
    /// An equipment drop waits for an equip/discard decision.
    AwaitingLoot,
    /// Enemy is dead, the next floor is queued.
    AwaitingAdvance,
    Defeated,
    Fled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub floor: u32,
    pub run_level: u32,
    pub run_xp: u64,
    pub run_xp_to_next: u64,
    /// Player HP inside the run; carries over between floors.
    pub hp: u32,
    pub enemy: Enemy,
    pub pending_loot: Option<Item>,
    pub phase: RunPhase,
    pub kills: u64,
    pub shards_earned: u64,
    pub potions_found: u32,
    pub items_equipped: u32,
    /// Every run xp point earned, folded into the account when the run closes.
    pub total_xp_earned: u64,
}

impl RunState {
    /// Starts a fresh run on floor 1 with `max_hp` health.
    pub fn new(max_hp: u32, rng: &mut impl Rng) -> Self {
        Self {
            floor: 1,
            run_level: 1,
            run_xp: 0,
            run_xp_to_next: RUN_XP_BASE,
            hp: max_hp,
            enemy: generate_enemy(1, rng),
            pending_loot: None,
            phase: RunPhase::Fighting,
            kills: 0,
            shards_earned: 0,
            potions_found: 0,
            items_equipped: 0,
            total_xp_earned: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, RunPhase::Defeated | RunPhase::Fled)
    }

    /// Moves to the next floor with a freshly generated enemy.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        self.floor += 1;
        self.enemy = generate_enemy(self.floor, rng);
        self.phase = RunPhase::Fighting;
    }
}

/// Run xp needed for the level after one that needed `current`.
pub fn next_run_threshold(current: u64) -> u64 {
    ((current as f64 * RUN_XP_GROWTH).floor() as u64).max(1)
}
