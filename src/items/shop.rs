use super::generation::{generate_from_template, roll_template};
use super::types::{EquipmentSlot, Item, Rarity};
use crate::character::player::Player;
use crate::character::stats::Stats;
use crate::core::constants::{SHOP_MAX_ITEMS, SHOP_MIN_ITEMS};
use rand::seq::SliceRandom;
use rand::Rng;

/// Rolls fresh shop stock for `player`: 3 to 5 items, at most one per slot.
/// Budgets follow the player's level and lean towards sidegrades.
pub fn generate_shop_inventory(player: &Player, rng: &mut impl Rng) -> Vec<Item> {
    let count = rng.gen_range(SHOP_MIN_ITEMS..=SHOP_MAX_ITEMS);
    let slots: Vec<EquipmentSlot> = EquipmentSlot::ALL
        .choose_multiple(rng, count)
        .copied()
        .collect();

    let mut stock = Vec::with_capacity(slots.len());
    for slot in slots {
        let Some(template) = roll_template(slot, rng) else {
            continue;
        };
        let (rarity, budget) = roll_shop_quality(player.level, rng);
        let mut item = generate_from_template(template, rarity, budget, rng);
        item.cost = Some(shop_item_cost(&item.bonuses, player.level));
        stock.push(item);
    }

    log::debug!("Shop restocked with {} items for level {}", stock.len(), player.level);
    stock
}

/// Base budget `1 + level/3`, scaled by a quality-dependent random factor.
pub fn roll_shop_quality(level: u32, rng: &mut impl Rng) -> (Rarity, u32) {
    let base = (1 + level / 3) as f64;
    let roll = rng.gen::<f64>();
    let (rarity, factor) = if roll < 0.70 {
        (Rarity::Common, rng.gen_range(0.80..1.05))
    } else if roll < 0.95 {
        (Rarity::Uncommon, rng.gen_range(1.05..1.25))
    } else {
        (Rarity::Rare, rng.gen_range(1.25..1.50))
    };
    let budget = ((base * factor).floor() as u32).max(1);
    (rarity, budget)
}

/// Price of an item: each stat is normalized by its weight, scaled by
/// `5 + level`, summed, multiplied by 5 and rounded to the nearest 10.
pub fn shop_item_cost(bonuses: &Stats, level: u32) -> u64 {
    let level_factor = 5.0 + level as f64;
    let raw: f64 = bonuses
        .iter_nonzero()
        .map(|(stat, value)| value as f64 / stat.point_weight() * level_factor)
        .sum();
    ((raw * 5.0 / 10.0).round() * 10.0) as u64
}
