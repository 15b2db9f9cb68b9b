//! Balance numbers for the Spire.
//!
//! Everything tunable lives here so generators, combat and progression
//! agree on the same curves.

// =============================================================================
// PROFILES & PERSISTENCE
// =============================================================================

/// Number of save slots a store holds.
pub const PROFILE_SLOTS: usize = 2;

/// Key under which the slot array is written to the profile store.
pub const PROFILES_STORE_KEY: &str = "spire_profiles";

// =============================================================================
// STATS
// =============================================================================

/// Upper bound for evasion after all composition.
pub const EVASION_CAP: u32 = 35;

/// Every this many points of dexterity grant one point of evasion.
pub const DEX_PER_EVASION: u32 = 8;

// =============================================================================
// ACCOUNT PROGRESSION
// =============================================================================

pub const ACCOUNT_XP_BASE: u64 = 100;
pub const ACCOUNT_XP_GROWTH: f64 = 1.5;

/// Flat base-stat gains per account level.
pub const ACCOUNT_LEVEL_HP: u32 = 10;
pub const ACCOUNT_LEVEL_ATTRIBUTE: u32 = 1;
pub const ACCOUNT_LEVEL_DEFENSE: u32 = 1;

/// The shop restocks every time the account level reaches a multiple of this.
pub const SHOP_REFRESH_INTERVAL: u32 = 5;

// =============================================================================
// RUN PROGRESSION
// =============================================================================

pub const RUN_XP_BASE: u64 = 50;
pub const RUN_XP_GROWTH: f64 = 1.8;

/// Permanent base-stat gains for every run level.
pub const RUN_LEVEL_HP: u32 = 5;
pub const RUN_LEVEL_ATTRIBUTE: u32 = 1;

// =============================================================================
// ENEMIES
// =============================================================================

/// Every floor divisible by this spawns the mini-boss.
pub const BOSS_FLOOR_INTERVAL: u32 = 10;
pub const FLOOR_SCALING_PER_FLOOR: f64 = 0.1;
pub const BOSS_SCALING_PER_ENCOUNTER: f64 = 0.25;

// =============================================================================
// LOOT
// =============================================================================

pub const SHARD_DROP_CHANCE: f64 = 0.80;
pub const SHARD_DROP_BASE: u64 = 5;
pub const SHARD_DROP_SPREAD: f64 = 10.0;
pub const SHARD_FLOOR_DIVISOR: f64 = 5.0;
pub const POTION_DROP_CHANCE: f64 = 0.15;
pub const EQUIPMENT_DROP_CHANCE: f64 = 0.10;

// =============================================================================
// POTIONS & SHOP
// =============================================================================

pub const MAX_POTIONS: u32 = 5;

/// Percentage of max HP a potion restores.
pub const POTION_HEAL_PERCENT: u32 = 35;
pub const POTION_PRICE: u64 = 25;

pub const SHOP_MIN_ITEMS: usize = 3;
pub const SHOP_MAX_ITEMS: usize = 5;

// =============================================================================
// PRESENTATION TIMING
// =============================================================================

/// Pause between a kill without equipment and the next floor.
pub const AUTO_ADVANCE_DELAY_MS: u64 = 1000;

/// Pause between defeat and the run summary.
pub const DEFEAT_SUMMARY_DELAY_MS: u64 = 1500;
