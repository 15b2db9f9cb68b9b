//! Static base items. Generated gear picks one of these and rolls stats
//! from its allowed list.

use super::types::{EquipmentSlot, WeaponType};
use crate::character::stats::StatType;

#[derive(Debug, Clone)]
pub struct ItemTemplate {
    pub name: &'static str,
    pub icon: &'static str,
    pub slot: EquipmentSlot,
    /// Stats a generated item of this kind may receive budget points in.
    pub allowed_stats: &'static [StatType],
    pub weapon_type: Option<WeaponType>,
    pub two_handed: bool,
}

const fn weapon(
    name: &'static str,
    icon: &'static str,
    allowed_stats: &'static [StatType],
    weapon_type: WeaponType,
    two_handed: bool,
) -> ItemTemplate {
    ItemTemplate {
        name,
        icon,
        slot: EquipmentSlot::Weapon,
        allowed_stats,
        weapon_type: Some(weapon_type),
        two_handed,
    }
}

const fn gear(
    name: &'static str,
    icon: &'static str,
    slot: EquipmentSlot,
    allowed_stats: &'static [StatType],
) -> ItemTemplate {
    ItemTemplate {
        name,
        icon,
        slot,
        allowed_stats,
        weapon_type: None,
        two_handed: false,
    }
}

use StatType::*;

pub const ITEM_TEMPLATES: &[ItemTemplate] = &[
    // Weapons
    weapon("Sword", "🗡️", &[Strength, CritRate, AttackSpeed], WeaponType::Sword, false),
    weapon("Greataxe", "🪓", &[Strength, CritRate, Lifesteal], WeaponType::Axe, true),
    weapon("Dagger", "🔪", &[Dexterity, CritRate, AttackSpeed], WeaponType::Dagger, false),
    weapon("Longbow", "🏹", &[Dexterity, CritRate, Evasion], WeaponType::Bow, true),
    weapon("Staff", "🪄", &[Intelligence, CastSpeed, MaxHp], WeaponType::Staff, true),
    weapon("Wand", "✨", &[Intelligence, CastSpeed, CritRate], WeaponType::Wand, false),
    // Helmets
    gear("Helm", "⛑️", EquipmentSlot::Helmet, &[MaxHp, Defense, Strength]),
    gear("Hood", "🎩", EquipmentSlot::Helmet, &[Dexterity, Evasion, Intelligence]),
    // Armor
    gear("Chainmail", "🛡️", EquipmentSlot::Armor, &[MaxHp, Defense, BlockChance]),
    gear("Leather Vest", "🦺", EquipmentSlot::Armor, &[MaxHp, Dexterity, Evasion]),
    gear("Robe", "👘", EquipmentSlot::Armor, &[MaxHp, Intelligence, CastSpeed]),
    // Gloves
    gear("Gauntlets", "🧤", EquipmentSlot::Gloves, &[Strength, Defense, BlockChance]),
    gear("Grips", "🧤", EquipmentSlot::Gloves, &[Dexterity, AttackSpeed, CritRate]),
    // Boots
    gear("Greaves", "🥾", EquipmentSlot::Boots, &[Defense, MaxHp]),
    gear("Treads", "👢", EquipmentSlot::Boots, &[Dexterity, Evasion]),
    // Jewelry
    gear("Amulet", "📿", EquipmentSlot::Amulet, &[Intelligence, MaxHp, Lifesteal, CritRate]),
    gear("Pendant", "🔮", EquipmentSlot::Amulet, &[Strength, Dexterity, Intelligence]),
    gear("Ring", "💍", EquipmentSlot::Ring, &[CritRate, Lifesteal, Evasion, Strength]),
    gear("Band", "💍", EquipmentSlot::Ring, &[Dexterity, Intelligence, BlockChance]),
];

/// All templates that fit `slot`, in table order.
pub fn templates_for(slot: EquipmentSlot) -> Vec<&'static ItemTemplate> {
    ITEM_TEMPLATES.iter().filter(|t| t.slot == slot).collect()
}
