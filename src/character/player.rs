use super::class::CharacterClass;
use super::stats::{StatType, Stats};
use crate::achievements::{account_buffs, AchievementProgress};
use crate::core::constants::*;
use crate::items::equipment::Equipment;
use crate::items::types::Item;
use serde::{Deserialize, Serialize};

/// Persistent player profile. The only durable entity in the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next_level: u64,
    /// Permanently raised by account and run level-ups.
    pub base_stats: Stats,
    /// Derived by [`Player::recompute`]; never written anywhere else.
    current_stats: Stats,
    pub current_hp: u32,
    pub shards: u64,
    pub potions: u32,
    pub equipment: Equipment,
    #[serde(default)]
    pub shop_inventory: Vec<Item>,
    #[serde(default)]
    pub last_shop_refresh_level: u32,
    #[serde(default)]
    pub achievements: AchievementProgress,
    /// Active percentage buffs per stat, kept for display.
    #[serde(default)]
    account_buffs: Stats,
    #[serde(default)]
    pub max_floor_reached: u32,
    #[serde(default)]
    pub total_kills: u64,
    pub created_at: i64,
    #[serde(default)]
    pub last_played: i64,
}

impl Player {
    /// Creates a level 1 character of `class` holding the class starter weapon.
    pub fn new(name: String, class: CharacterClass, current_time: i64) -> Self {
        use uuid::Uuid;

        let mut equipment = Equipment::new();
        equipment.equip(class.starter_weapon());

        let mut player = Self {
            id: Uuid::new_v4().to_string(),
            name,
            class,
            level: 1,
            xp: 0,
            xp_to_next_level: ACCOUNT_XP_BASE,
            base_stats: class.base_stats(),
            current_stats: Stats::new(),
            current_hp: 0,
            shards: 0,
            potions: 0,
            equipment,
            shop_inventory: Vec::new(),
            last_shop_refresh_level: 0,
            achievements: AchievementProgress::default(),
            account_buffs: Stats::new(),
            max_floor_reached: 0,
            total_kills: 0,
            created_at: current_time,
            last_played: current_time,
        };
        player.recompute();
        player.current_hp = player.max_hp();
        player
    }

    pub fn current_stats(&self) -> &Stats {
        &self.current_stats
    }

    pub fn account_buffs(&self) -> &Stats {
        &self.account_buffs
    }

    pub fn max_hp(&self) -> u32 {
        self.current_stats.get(StatType::MaxHp)
    }

    /// Rebuilds `current_stats` from base stats, equipment and account buffs.
    ///
    /// Must run after every change to base stats, equipment or level.
    /// Order: base, equipment, DEX-derived evasion, percentage buffs on the
    /// composed value, evasion cap, then HP clamping.
    pub fn recompute(&mut self) {
        let mut stats = self.base_stats;

        for item in self.equipment.iter_equipped() {
            stats.add_all(&item.bonuses);
        }

        let derived_evasion = stats.get(StatType::Dexterity) / DEX_PER_EVASION;
        stats.add(StatType::Evasion, derived_evasion);

        let buffs = account_buffs(self.level);
        for (stat, percent) in buffs.iter_nonzero() {
            let bonus = (stats.get(stat) as u64 * percent as u64 / 100) as u32;
            stats.add(stat, bonus);
        }

        stats.set(StatType::Evasion, stats.get(StatType::Evasion).min(EVASION_CAP));

        self.current_stats = stats;
        self.account_buffs = buffs;

        let max_hp = self.max_hp();
        self.current_hp = self.current_hp.min(max_hp);
        if max_hp > 0 && self.current_hp == 0 {
            self.current_hp = 1;
        }
    }

    pub fn heal_full(&mut self) {
        self.current_hp = self.max_hp();
    }

    /// Adds up to `count` potions without passing the cap. Returns how many fit.
    pub fn add_potions(&mut self, count: u32) -> u32 {
        let room = MAX_POTIONS.saturating_sub(self.potions);
        let delivered = count.min(room);
        self.potions += delivered;
        delivered
    }

    /// Puts `item` into its slot, discarding the previous occupant, and recomputes.
    pub fn equip(&mut self, item: Item) {
        self.equipment.equip(item);
        self.recompute();
    }
}
