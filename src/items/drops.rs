use super::generation::{generate_from_template, roll_random_slot, roll_template};
use super::types::{Item, Rarity};
use crate::core::constants::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Everything a single kill produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LootDrop {
    pub shards: u64,
    pub potions: u32,
    pub equipment: Option<Item>,
}

/// Rolls loot for one kill on `floor`. Shards, potion and equipment are
/// independent rolls.
pub fn generate_loot(floor: u32, rng: &mut impl Rng) -> LootDrop {
    let floor = floor.max(1);
    let mut drop = LootDrop::default();

    if rng.gen::<f64>() < SHARD_DROP_CHANCE {
        drop.shards = roll_shards(floor, rng);
    }

    if rng.gen::<f64>() < POTION_DROP_CHANCE {
        drop.potions = 1;
    }

    if rng.gen::<f64>() < EQUIPMENT_DROP_CHANCE {
        drop.equipment = roll_equipment(floor, rng);
    }

    drop
}

fn roll_shards(floor: u32, rng: &mut impl Rng) -> u64 {
    let spread = SHARD_DROP_SPREAD * (1.0 + floor as f64 / SHARD_FLOOR_DIVISOR);
    (rng.gen::<f64>() * spread).floor() as u64 + SHARD_DROP_BASE
}

/// Generates a random drop-quality item for `floor`.
pub fn roll_equipment(floor: u32, rng: &mut impl Rng) -> Option<Item> {
    let slot = roll_random_slot(rng);
    let template = roll_template(slot, rng)?;
    let rarity = roll_rarity(rng);
    Some(generate_from_template(
        template,
        rarity,
        rarity.drop_budget(floor),
        rng,
    ))
}

/// 60% Common, 30% Uncommon, 8% Rare, 2% Epic.
pub fn roll_rarity(rng: &mut impl Rng) -> Rarity {
    let roll = rng.gen::<f64>();
    if roll < 0.60 {
        Rarity::Common
    } else if roll < 0.90 {
        Rarity::Uncommon
    } else if roll < 0.98 {
        Rarity::Rare
    } else {
        Rarity::Epic
    }
}
