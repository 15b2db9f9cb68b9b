use super::types::{EquipmentSlot, Item};
use serde::{Deserialize, Serialize};

/// Player equipment slots. Exactly one item per slot; replacing discards the old one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub weapon: Option<Item>,
    #[serde(default)]
    pub helmet: Option<Item>,
    #[serde(default)]
    pub armor: Option<Item>,
    #[serde(default)]
    pub gloves: Option<Item>,
    #[serde(default)]
    pub boots: Option<Item>,
    #[serde(default)]
    pub amulet: Option<Item>,
    #[serde(default)]
    pub ring: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> &Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Helmet => &self.helmet,
            EquipmentSlot::Armor => &self.armor,
            EquipmentSlot::Gloves => &self.gloves,
            EquipmentSlot::Boots => &self.boots,
            EquipmentSlot::Amulet => &self.amulet,
            EquipmentSlot::Ring => &self.ring,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Helmet => &mut self.helmet,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Gloves => &mut self.gloves,
            EquipmentSlot::Boots => &mut self.boots,
            EquipmentSlot::Amulet => &mut self.amulet,
            EquipmentSlot::Ring => &mut self.ring,
        }
    }

    /// Puts `item` into its own slot, returning whatever was there before.
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        self.slot_mut(item.slot).replace(item)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [
            &self.weapon,
            &self.helmet,
            &self.armor,
            &self.gloves,
            &self.boots,
            &self.amulet,
            &self.ring,
        ]
        .into_iter()
        .filter_map(|item| item.as_ref())
    }
}
