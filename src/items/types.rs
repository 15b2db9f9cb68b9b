use crate::character::stats::Stats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Helmet,
    Armor,
    Gloves,
    Boots,
    Amulet,
    Ring,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 7] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Helmet,
        EquipmentSlot::Armor,
        EquipmentSlot::Gloves,
        EquipmentSlot::Boots,
        EquipmentSlot::Amulet,
        EquipmentSlot::Ring,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Helmet => "Helmet",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Gloves => "Gloves",
            EquipmentSlot::Boots => "Boots",
            EquipmentSlot::Amulet => "Amulet",
            EquipmentSlot::Ring => "Ring",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
        }
    }

    /// Name prefixes an item of this tier may roll.
    pub fn prefixes(&self) -> &'static [&'static str] {
        match self {
            Rarity::Common => &["Worn", "Plain", "Sturdy", "Rusty"],
            Rarity::Uncommon => &["Fine", "Polished", "Tempered", "Keen"],
            Rarity::Rare => &["Gleaming", "Runed", "Masterwork", "Enchanted"],
            Rarity::Epic => &["Ancient", "Eternal", "Spire-Forged", "Mythic"],
        }
    }

    /// Stat budget for a drop on `floor`. Better tiers scale faster with depth.
    pub fn drop_budget(&self, floor: u32) -> u32 {
        let (base, divisor) = match self {
            Rarity::Common => (2, 10),
            Rarity::Uncommon => (3, 8),
            Rarity::Rare => (5, 6),
            Rarity::Epic => (8, 4),
        };
        base + floor / divisor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponType {
    Sword,
    Axe,
    Dagger,
    Bow,
    Staff,
    Wand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub icon: String,
    pub slot: EquipmentSlot,
    pub rarity: Rarity,
    /// Only non-zero entries are meaningful.
    pub bonuses: Stats,
    /// Purchase price, set for shop stock only.
    #[serde(default)]
    pub cost: Option<u64>,
    #[serde(default)]
    pub weapon_type: Option<WeaponType>,
    #[serde(default)]
    pub two_handed: bool,
}
