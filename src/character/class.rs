use super::stats::{StatType, Stats};
use crate::items::types::{EquipmentSlot, Item, Rarity, WeaponType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Rogue,
    Mage,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Warrior,
        CharacterClass::Rogue,
        CharacterClass::Mage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Mage => "Mage",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "🛡️",
            CharacterClass::Rogue => "🗡️",
            CharacterClass::Mage => "🔮",
        }
    }

    /// Stats a freshly created character of this class starts with.
    pub fn base_stats(&self) -> Stats {
        use StatType::*;
        match self {
            CharacterClass::Warrior => Stats::from_pairs(&[
                (Strength, 10),
                (Dexterity, 5),
                (Intelligence, 3),
                (MaxHp, 100),
                (Defense, 10),
                (CritRate, 5),
                (BlockChance, 5),
            ]),
            CharacterClass::Rogue => Stats::from_pairs(&[
                (Strength, 5),
                (Dexterity, 10),
                (Intelligence, 4),
                (MaxHp, 80),
                (Defense, 6),
                (CritRate, 10),
                (Evasion, 5),
                (AttackSpeed, 5),
            ]),
            CharacterClass::Mage => Stats::from_pairs(&[
                (Strength, 3),
                (Dexterity, 5),
                (Intelligence, 11),
                (MaxHp, 70),
                (Defense, 4),
                (CritRate, 5),
                (CastSpeed, 5),
                (MaxMana, 50),
            ]),
        }
    }

    /// The weapon every new character of this class holds. Starter weapons
    /// never touch the offensive stats, so class stats decide early fights.
    pub fn starter_weapon(&self) -> Item {
        let (name, icon, weapon_type, bonus) = match self {
            CharacterClass::Warrior => ("Training Sword", "🗡️", WeaponType::Sword, StatType::AttackSpeed),
            CharacterClass::Rogue => ("Chipped Dagger", "🔪", WeaponType::Dagger, StatType::AttackSpeed),
            CharacterClass::Mage => ("Apprentice Wand", "✨", WeaponType::Wand, StatType::CastSpeed),
        };
        Item {
            name: name.to_string(),
            icon: icon.to_string(),
            slot: EquipmentSlot::Weapon,
            rarity: Rarity::Common,
            bonuses: Stats::from_pairs(&[(bonus, 1)]),
            cost: None,
            weapon_type: Some(weapon_type),
            two_handed: false,
        }
    }
}
