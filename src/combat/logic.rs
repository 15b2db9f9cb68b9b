//! Turn resolution: one attack command is one full exchange.

use crate::character::player::Player;
use crate::character::stats::StatType;
use crate::core::constants::{RUN_LEVEL_ATTRIBUTE, RUN_LEVEL_HP, RUN_XP_BASE};
use crate::core::run::{next_run_threshold, RunPhase, RunState};
use crate::items::drops::generate_loot;
use crate::items::types::Rarity;
use rand::Rng;

/// Something that happened during an exchange, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    PlayerAttack {
        enemy_name: String,
        damage: u32,
        was_crit: bool,
    },
    PlayerMissed {
        enemy_name: String,
    },
    EnemyDefeated {
        enemy_name: String,
        xp_gained: u64,
    },
    RunLevelUp {
        new_level: u32,
    },
    ShardsFound {
        amount: u64,
    },
    PotionFound {
        /// 0 when the pouch was already full.
        delivered: u32,
    },
    EquipmentFound {
        item_name: String,
        rarity: Rarity,
    },
    EnemyAttack {
        enemy_name: String,
        damage: u32,
    },
    EnemyMissed {
        enemy_name: String,
    },
    PlayerDefeated {
        floor: u32,
    },
}

/// True when a uniform roll in [0, 100) lands under `evasion`.
pub fn roll_evade(evasion: u32, rng: &mut impl Rng) -> bool {
    rng.gen_range(0.0..100.0) < evasion as f64
}

/// True when a uniform roll in [0, 100) lands under `crit_rate`.
pub fn roll_crit(crit_rate: u32, rng: &mut impl Rng) -> bool {
    rng.gen_range(0.0..100.0) < crit_rate as f64
}

/// Damage after defense. Never less than 1.
pub fn calculate_damage(attack: u32, defense: u32) -> u32 {
    attack.saturating_sub(defense).max(1)
}

/// Resolves one attack command: player turn, kill handling, enemy turn and
/// the defeat check. Does nothing unless the run is in [`RunPhase::Fighting`].
pub fn resolve_attack(player: &mut Player, run: &mut RunState, rng: &mut impl Rng) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    if run.phase != RunPhase::Fighting || !run.enemy.is_alive() {
        return events;
    }

    // Player turn
    let enemy_name = run.enemy.name.clone();
    if roll_evade(run.enemy.stats.evasion, rng) {
        events.push(CombatEvent::PlayerMissed {
            enemy_name: enemy_name.clone(),
        });
    } else {
        let stats = player.current_stats();
        let mut damage = calculate_damage(stats.offensive(), run.enemy.stats.defense);
        let was_crit = roll_crit(stats.get(StatType::CritRate), rng);
        if was_crit {
            damage *= 2;
        }
        run.enemy.take_damage(damage);
        events.push(CombatEvent::PlayerAttack {
            enemy_name: enemy_name.clone(),
            damage,
            was_crit,
        });
    }

    if !run.enemy.is_alive() {
        on_enemy_defeated(player, run, rng, &mut events);
        return events;
    }

    // Enemy turn, against the player's stats as they stand after this exchange
    let stats = player.current_stats();
    if roll_evade(stats.get(StatType::Evasion), rng) {
        events.push(CombatEvent::EnemyMissed { enemy_name });
    } else {
        let damage = calculate_damage(run.enemy.stats.attack, stats.get(StatType::Defense));
        run.hp = run.hp.saturating_sub(damage);
        events.push(CombatEvent::EnemyAttack { enemy_name, damage });
    }

    if run.hp == 0 {
        run.phase = RunPhase::Defeated;
        events.push(CombatEvent::PlayerDefeated { floor: run.floor });
    }

    events
}

fn on_enemy_defeated(
    player: &mut Player,
    run: &mut RunState,
    rng: &mut impl Rng,
    events: &mut Vec<CombatEvent>,
) {
    let xp_gained = run.enemy.xp_reward;
    run.kills += 1;
    player.total_kills += 1;
    player.achievements.on_enemy_killed(&run.enemy.name);
    events.push(CombatEvent::EnemyDefeated {
        enemy_name: run.enemy.name.clone(),
        xp_gained,
    });

    let loot = generate_loot(run.floor, rng);

    for new_level in award_run_xp(player, run, xp_gained) {
        events.push(CombatEvent::RunLevelUp { new_level });
    }

    if loot.shards > 0 {
        player.shards += loot.shards;
        run.shards_earned += loot.shards;
        events.push(CombatEvent::ShardsFound {
            amount: loot.shards,
        });
    }

    if loot.potions > 0 {
        let delivered = player.add_potions(loot.potions);
        run.potions_found += delivered;
        events.push(CombatEvent::PotionFound { delivered });
    }

    match loot.equipment {
        Some(item) => {
            events.push(CombatEvent::EquipmentFound {
                item_name: item.name.clone(),
                rarity: item.rarity,
            });
            run.pending_loot = Some(item);
            run.phase = RunPhase::AwaitingLoot;
        }
        None => run.phase = RunPhase::AwaitingAdvance,
    }
}

/// Adds run xp and processes every run level-up it triggers. Each level
/// permanently raises base stats and fully heals the run.
/// Returns the levels reached.
pub fn award_run_xp(player: &mut Player, run: &mut RunState, xp: u64) -> Vec<u32> {
    if run.run_xp_to_next == 0 {
        run.run_xp_to_next = RUN_XP_BASE;
    }
    run.run_xp += xp;
    run.total_xp_earned += xp;

    let mut levels = Vec::new();
    while run.run_xp >= run.run_xp_to_next {
        run.run_xp -= run.run_xp_to_next;
        run.run_xp_to_next = next_run_threshold(run.run_xp_to_next);
        run.run_level += 1;

        player.base_stats.add(StatType::MaxHp, RUN_LEVEL_HP);
        player.base_stats.add(StatType::Strength, RUN_LEVEL_ATTRIBUTE);
        player.base_stats.add(StatType::Dexterity, RUN_LEVEL_ATTRIBUTE);
        player.base_stats.add(StatType::Intelligence, RUN_LEVEL_ATTRIBUTE);
        player.recompute();
        run.hp = player.max_hp();

        levels.push(run.run_level);
    }
    levels
}
