//! Account progression: xp folding, level-ups, shop milestones and
//! achievement claims.

use crate::achievements::{get_achievement_def, Reward};
use crate::character::player::Player;
use crate::character::stats::StatType;
use crate::core::constants::*;
use crate::items::shop::generate_shop_inventory;
use rand::Rng;

/// Account xp needed for the level after one that needed `current`.
pub fn next_account_threshold(current: u64) -> u64 {
    ((current as f64 * ACCOUNT_XP_GROWTH).floor() as u64).max(1)
}

/// Adds account xp and applies every level-up it triggers.
///
/// Each level raises base max HP by 10 and STR/DEX/INT/DEF by 1. Leftover
/// xp carries over. Returns the levels reached; the caller recomputes.
pub fn apply_account_xp(player: &mut Player, xp: u64) -> Vec<u32> {
    if player.xp_to_next_level == 0 {
        log::warn!("Repairing zero xp threshold for {}", player.name);
        player.xp_to_next_level = ACCOUNT_XP_BASE;
    }
    player.xp += xp;

    let mut levels = Vec::new();
    while player.xp >= player.xp_to_next_level {
        player.xp -= player.xp_to_next_level;
        player.xp_to_next_level = next_account_threshold(player.xp_to_next_level);
        player.level += 1;

        player.base_stats.add(StatType::MaxHp, ACCOUNT_LEVEL_HP);
        for stat in [StatType::Strength, StatType::Dexterity, StatType::Intelligence] {
            player.base_stats.add(stat, ACCOUNT_LEVEL_ATTRIBUTE);
        }
        player.base_stats.add(StatType::Defense, ACCOUNT_LEVEL_DEFENSE);

        levels.push(player.level);
    }

    if !levels.is_empty() {
        player.achievements.on_account_level(player.level);
        log::info!("{} reached account level {}", player.name, player.level);
    }
    levels
}

/// Highest multiple of the refresh interval at or below `level`.
fn shop_milestone(level: u32) -> u32 {
    level / SHOP_REFRESH_INTERVAL * SHOP_REFRESH_INTERVAL
}

pub fn shop_refresh_due(player: &Player) -> bool {
    let milestone = shop_milestone(player.level);
    milestone > 0 && milestone > player.last_shop_refresh_level
}

/// Restocks the shop once per level milestone. Returns true if it restocked.
pub fn refresh_shop_if_due(player: &mut Player, rng: &mut impl Rng) -> bool {
    if !shop_refresh_due(player) {
        return false;
    }
    player.shop_inventory = generate_shop_inventory(player, rng);
    player.last_shop_refresh_level = shop_milestone(player.level);
    true
}

/// HP restored by one potion: 35% of max, at least 1.
pub fn potion_heal_amount(max_hp: u32) -> u32 {
    (max_hp as u64 * POTION_HEAL_PERCENT as u64 / 100).max(1) as u32
}

/// Claims a completed, unclaimed, non-buff achievement and pays its reward.
/// Potions beyond the cap are lost.
pub fn claim_achievement(player: &mut Player, id: &str) -> Option<Reward> {
    let def = get_achievement_def(id)?;
    let reward = player.achievements.claim(def)?;
    player.shards += reward.shards;
    let delivered = player.add_potions(reward.potions);
    Some(Reward {
        shards: reward.shards,
        potions: delivered,
    })
}
