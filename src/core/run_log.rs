//! Run log: append-only, tone-tagged lines for the presentation layer.

use crate::combat::logic::CombatEvent;
use serde::{Deserialize, Serialize};

/// Semantic color tag for a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogTone {
    Info,
    PlayerHit,
    Crit,
    Miss,
    EnemyHit,
    Heal,
    Loot,
    LevelUp,
    Victory,
    Defeat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub message: String,
    pub tone: LogTone,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunLog {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, tone: LogTone) {
        self.next_id += 1;
        self.entries.push(LogEntry {
            id: self.next_id,
            message: message.into(),
            tone,
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Drops every entry. Ids keep increasing so they stay unique per session.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn push_combat_event(&mut self, event: &CombatEvent) {
        let (message, tone) = describe(event);
        self.push(message, tone);
    }
}

fn describe(event: &CombatEvent) -> (String, LogTone) {
    match event {
        CombatEvent::PlayerAttack {
            enemy_name,
            damage,
            was_crit: true,
        } => (
            format!("CRITICAL! You hit the {} for {} damage!", enemy_name, damage),
            LogTone::Crit,
        ),
        CombatEvent::PlayerAttack {
            enemy_name, damage, ..
        } => (
            format!("You hit the {} for {} damage.", enemy_name, damage),
            LogTone::PlayerHit,
        ),
        CombatEvent::PlayerMissed { enemy_name } => (
            format!("The {} dodged your attack!", enemy_name),
            LogTone::Miss,
        ),
        CombatEvent::EnemyDefeated {
            enemy_name,
            xp_gained,
        } => (
            format!("The {} is defeated! +{} XP", enemy_name, xp_gained),
            LogTone::Victory,
        ),
        CombatEvent::RunLevelUp { new_level } => (
            format!("Run level up! You reached level {}.", new_level),
            LogTone::LevelUp,
        ),
        CombatEvent::ShardsFound { amount } => (
            format!("Found {} Eternal Shards.", amount),
            LogTone::Loot,
        ),
        CombatEvent::PotionFound { delivered: 0 } => (
            "Found a potion, but your pouch is full.".to_string(),
            LogTone::Loot,
        ),
        CombatEvent::PotionFound { .. } => ("Found a potion.".to_string(), LogTone::Loot),
        CombatEvent::EquipmentFound { item_name, rarity } => (
            format!("Found {} ({}).", item_name, rarity.name()),
            LogTone::Loot,
        ),
        CombatEvent::EnemyAttack { enemy_name, damage } => (
            format!("The {} hits you for {} damage.", enemy_name, damage),
            LogTone::EnemyHit,
        ),
        CombatEvent::EnemyMissed { enemy_name } => (
            format!("You evade the {}'s attack!", enemy_name),
            LogTone::Miss,
        ),
        CombatEvent::PlayerDefeated { floor } => (
            format!("You have fallen on floor {}.", floor),
            LogTone::Defeat,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::Rarity;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut log = RunLog::new();
        log.push("one", LogTone::Info);
        log.push("two", LogTone::Info);
        log.clear();
        log.push("three", LogTone::Info);

        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.entries()[0].id, 3);
    }

    #[test]
    fn test_crit_uses_crit_tone() {
        let mut log = RunLog::new();
        log.push_combat_event(&CombatEvent::PlayerAttack {
            enemy_name: "Slime".to_string(),
            damage: 16,
            was_crit: true,
        });
        let entry = &log.entries()[0];
        assert_eq!(entry.tone, LogTone::Crit);
        assert!(entry.message.contains("16"));
    }

    #[test]
    fn test_full_pouch_message() {
        let mut log = RunLog::new();
        log.push_combat_event(&CombatEvent::PotionFound { delivered: 0 });
        assert!(log.entries()[0].message.contains("full"));
    }

    #[test]
    fn test_equipment_found_names_rarity() {
        let mut log = RunLog::new();
        log.push_combat_event(&CombatEvent::EquipmentFound {
            item_name: "Runed Sword".to_string(),
            rarity: Rarity::Rare,
        });
        assert_eq!(log.entries()[0].message, "Found Runed Sword (Rare).");
        assert_eq!(log.entries()[0].tone, LogTone::Loot);
    }
}
