//! Static achievement definitions.

use super::types::{AchievementDef, AchievementKind, Reward, StatBuff};
use crate::character::stats::{StatType, Stats};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // SLAYER ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "slay_any_10",
        title: "Monster Hunter",
        description: "Defeat 10 enemies",
        icon: "⚔️",
        kind: AchievementKind::Slay { target: None },
        goal: 10,
        reward: Reward { shards: 50, potions: 0 },
        buff: None,
    },
    AchievementDef {
        id: "slay_any_100",
        title: "Spire Slayer",
        description: "Defeat 100 enemies",
        icon: "💀",
        kind: AchievementKind::Slay { target: None },
        goal: 100,
        reward: Reward { shards: 300, potions: 2 },
        buff: None,
    },
    AchievementDef {
        id: "slay_slime_25",
        title: "Slime Squisher",
        description: "Defeat 25 Slimes",
        icon: "🟢",
        kind: AchievementKind::Slay { target: Some("Slime") },
        goal: 25,
        reward: Reward { shards: 40, potions: 1 },
        buff: None,
    },
    AchievementDef {
        id: "slay_goblin_25",
        title: "Goblin Bane",
        description: "Defeat 25 Goblins",
        icon: "👺",
        kind: AchievementKind::Slay { target: Some("Goblin") },
        goal: 25,
        reward: Reward { shards: 60, potions: 1 },
        buff: None,
    },
    AchievementDef {
        id: "slay_bat_25",
        title: "Bat Swatter",
        description: "Defeat 25 Cave Bats",
        icon: "🦇",
        kind: AchievementKind::Slay { target: Some("Cave Bat") },
        goal: 25,
        reward: Reward { shards: 60, potions: 1 },
        buff: None,
    },
    AchievementDef {
        id: "slay_warden_1",
        title: "Warden Breaker",
        description: "Defeat the Spire Warden",
        icon: "👹",
        kind: AchievementKind::Slay { target: Some("Spire Warden") },
        goal: 1,
        reward: Reward { shards: 150, potions: 2 },
        buff: None,
    },
    // ═══════════════════════════════════════════════════════════════
    // CLIMBING ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "floor_10",
        title: "Tenth Floor",
        description: "Reach floor 10",
        icon: "🗼",
        kind: AchievementKind::ReachFloor,
        goal: 10,
        reward: Reward { shards: 100, potions: 0 },
        buff: None,
    },
    AchievementDef {
        id: "floor_25",
        title: "Cloud Walker",
        description: "Reach floor 25",
        icon: "☁️",
        kind: AchievementKind::ReachFloor,
        goal: 25,
        reward: Reward { shards: 250, potions: 1 },
        buff: None,
    },
    AchievementDef {
        id: "floor_50",
        title: "Spire Apex",
        description: "Reach floor 50",
        icon: "⭐",
        kind: AchievementKind::ReachFloor,
        goal: 50,
        reward: Reward { shards: 600, potions: 3 },
        buff: None,
    },
    // ═══════════════════════════════════════════════════════════════
    // ACCOUNT ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "level_3",
        title: "Seasoned",
        description: "Reach account level 3",
        icon: "📈",
        kind: AchievementKind::AccountLevel,
        goal: 3,
        reward: Reward { shards: 75, potions: 1 },
        buff: None,
    },
    AchievementDef {
        id: "level_10",
        title: "Veteran",
        description: "Reach account level 10",
        icon: "🎖️",
        kind: AchievementKind::AccountLevel,
        goal: 10,
        reward: Reward { shards: 250, potions: 2 },
        buff: None,
    },
    AchievementDef {
        id: "buff_attunement",
        title: "Spire Attunement",
        description: "Account level 5: +5% STR, DEX and INT",
        icon: "✨",
        kind: AchievementKind::AccountLevel,
        goal: 5,
        reward: Reward { shards: 0, potions: 0 },
        buff: Some(StatBuff {
            stats: &[StatType::Strength, StatType::Dexterity, StatType::Intelligence],
            percent: 5,
        }),
    },
    AchievementDef {
        id: "buff_fortitude",
        title: "Spire Fortitude",
        description: "Account level 8: +5% max HP and defense",
        icon: "🛡️",
        kind: AchievementKind::AccountLevel,
        goal: 8,
        reward: Reward { shards: 0, potions: 0 },
        buff: Some(StatBuff {
            stats: &[StatType::MaxHp, StatType::Defense],
            percent: 5,
        }),
    },
];

/// Look up an achievement definition by id.
pub fn get_achievement_def(id: &str) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Percentage buffs active at account `level`, per stat.
pub fn account_buffs(level: u32) -> Stats {
    let mut buffs = Stats::new();
    for def in ALL_ACHIEVEMENTS {
        if let (AchievementKind::AccountLevel, Some(buff)) = (def.kind, def.buff) {
            if level as u64 >= def.goal {
                for &stat in buff.stats {
                    buffs.add(stat, buff.percent);
                }
            }
        }
    }
    buffs
}
