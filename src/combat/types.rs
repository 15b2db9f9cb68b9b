use crate::core::constants::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub max_hp: u32,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub evasion: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub icon: String,
    pub stats: EnemyStats,
    pub xp_reward: u64,
    pub is_boss: bool,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.stats.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.stats.hp = self.stats.hp.saturating_sub(amount);
    }
}

/// Unscaled enemy blueprint.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub icon: &'static str,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub evasion: u32,
    pub xp_reward: u64,
}

pub const TIER_ONE_ENEMIES: [EnemyTemplate; 3] = [
    EnemyTemplate {
        name: "Slime",
        icon: "🟢",
        max_hp: 20,
        attack: 5,
        defense: 2,
        evasion: 0,
        xp_reward: 10,
    },
    EnemyTemplate {
        name: "Goblin",
        icon: "👺",
        max_hp: 30,
        attack: 7,
        defense: 3,
        evasion: 5,
        xp_reward: 15,
    },
    EnemyTemplate {
        name: "Cave Bat",
        icon: "🦇",
        max_hp: 18,
        attack: 6,
        defense: 1,
        evasion: 15,
        xp_reward: 12,
    },
];

pub const MINI_BOSS: EnemyTemplate = EnemyTemplate {
    name: "Spire Warden",
    icon: "👹",
    max_hp: 150,
    attack: 14,
    defense: 8,
    evasion: 5,
    xp_reward: 100,
};

pub fn is_boss_floor(floor: u32) -> bool {
    floor % BOSS_FLOOR_INTERVAL == 0
}

/// Multiplier applied to every template stat on `floor`.
///
/// Bosses use a gentler per-encounter curve since their base stats are
/// already higher.
pub fn scale_factor(floor: u32) -> f64 {
    if is_boss_floor(floor) {
        let encounter = (floor / BOSS_FLOOR_INTERVAL) as f64;
        1.0 + (encounter - 1.0) * BOSS_SCALING_PER_ENCOUNTER
    } else {
        1.0 + (floor as f64 - 1.0) * FLOOR_SCALING_PER_FLOOR
    }
}

/// Builds the enemy for `floor` (floors start at 1).
pub fn generate_enemy(floor: u32, rng: &mut impl Rng) -> Enemy {
    let floor = floor.max(1);
    let template = if is_boss_floor(floor) {
        &MINI_BOSS
    } else {
        &TIER_ONE_ENEMIES[rng.gen_range(0..TIER_ONE_ENEMIES.len())]
    };
    scale_template(template, floor)
}

fn scale_template(template: &EnemyTemplate, floor: u32) -> Enemy {
    let factor = scale_factor(floor);
    let scale = |base: u32| (base as f64 * factor).floor() as u32;
    let max_hp = scale(template.max_hp);

    Enemy {
        name: template.name.to_string(),
        icon: template.icon.to_string(),
        stats: EnemyStats {
            max_hp,
            hp: max_hp,
            attack: scale(template.attack),
            defense: scale(template.defense),
            evasion: scale(template.evasion),
        },
        xp_reward: (template.xp_reward as f64 * factor).floor() as u64,
        is_boss: is_boss_floor(floor),
    }
}
