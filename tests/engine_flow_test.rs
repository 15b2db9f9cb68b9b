//! Integration test: Engine command flow
//!
//! Drives the engine the way a presentation layer would: commands in,
//! snapshots and deferred events out, profiles through an in-memory store.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spire::core::constants::{
    AUTO_ADVANCE_DELAY_MS, DEFEAT_SUMMARY_DELAY_MS, PROFILES_STORE_KEY, POTION_PRICE,
};
use spire::core::progression::apply_account_xp;
use spire::core::{RunPhase, RunState};
use spire::items::shop::generate_shop_inventory;
use spire::persistence::{load_profiles, save_profiles};
use spire::{
    CharacterClass, Command, DeferredEvent, Engine, MemoryStore, Player, Screen, StatType,
};

type TestEngine = Engine<ChaCha8Rng, MemoryStore>;

fn new_engine(seed: u64, store: MemoryStore) -> TestEngine {
    Engine::new(ChaCha8Rng::seed_from_u64(seed), store)
}

fn engine_in_hub(seed: u64, class: CharacterClass) -> TestEngine {
    let mut engine = new_engine(seed, MemoryStore::new());
    engine.handle(Command::StartGame);
    engine.handle(Command::NewGame(1));
    engine.handle(Command::SelectClass(class));
    engine
}

/// Stores `player` in slot 0 and loads it into a fresh engine sitting in the hub.
fn engine_with_player(player: Player) -> TestEngine {
    let mut store = MemoryStore::new();
    save_profiles(&mut store, &[Some(player), None]).unwrap();
    let mut engine = new_engine(9, store);
    engine.handle(Command::StartGame);
    engine.handle(Command::LoadProfile(0));
    engine
}

/// Plays one step: attack, take loot, or fire whatever got deferred.
fn step(engine: &mut TestEngine) {
    let phase = engine.run().map(|r| r.phase);
    match phase {
        Some(RunPhase::Fighting) => engine.handle(Command::Attack),
        Some(RunPhase::AwaitingLoot) => engine.handle(Command::LootDecision { equip: true }),
        Some(RunPhase::AwaitingAdvance) | Some(RunPhase::Defeated) => {
            for deferred in engine.drain_deferred() {
                engine.fire(deferred.event);
            }
        }
        _ => {}
    }
}

/// Climbs until the run is lost.
fn play_until_defeat(engine: &mut TestEngine) -> RunState {
    for _ in 0..200_000 {
        if engine.run().map(|r| r.phase) == Some(RunPhase::Defeated) {
            return engine.run().unwrap().clone();
        }
        step(engine);
    }
    panic!("run never ended");
}

// =========================================================================
// Profiles
// =========================================================================

#[test]
fn test_new_profile_lands_in_chosen_slot() {
    let engine = engine_in_hub(1, CharacterClass::Rogue);

    assert_eq!(engine.screen(), Screen::Hub);
    assert_eq!(engine.session().active_slot, Some(1));
    assert!(engine.profiles()[0].is_none());
    assert_eq!(
        engine.profiles()[1].as_ref().map(|p| p.class),
        Some(CharacterClass::Rogue)
    );

    let saved = load_profiles(engine.store());
    assert_eq!(saved[1].as_ref().map(|p| p.id.clone()), engine.player().map(|p| p.id.clone()));
}

#[test]
fn test_malformed_store_falls_back_to_empty_slots() {
    let store = MemoryStore::with_entry(PROFILES_STORE_KEY, "definitely not json");
    let mut engine = new_engine(2, store);
    assert!(engine.profiles().iter().all(Option::is_none));

    engine.handle(Command::StartGame);
    engine.handle(Command::LoadProfile(0));
    assert_eq!(engine.screen(), Screen::ProfileSelect);

    engine.handle(Command::NewGame(0));
    engine.handle(Command::SelectClass(CharacterClass::Warrior));
    assert!(load_profiles(engine.store())[0].is_some());
}

#[test]
fn test_delete_profile_clears_slot() {
    let engine = engine_in_hub(3, CharacterClass::Mage);
    let store = engine.store().clone();

    let mut engine = new_engine(3, store);
    engine.handle(Command::StartGame);
    engine.handle(Command::DeleteProfile(1));

    assert!(engine.profiles()[1].is_none());
    assert!(load_profiles(engine.store()).iter().all(Option::is_none));
    assert_eq!(engine.screen(), Screen::ProfileSelect);
}

#[test]
fn test_profile_survives_reload() {
    let mut engine = engine_in_hub(4, CharacterClass::Warrior);
    engine.handle(Command::EnterSpire);
    engine.handle(Command::Flee);
    engine.handle(Command::CloseSummary);
    let before = engine.player().unwrap().clone();

    let mut reloaded = new_engine(5, engine.store().clone());
    reloaded.handle(Command::StartGame);
    reloaded.handle(Command::LoadProfile(1));

    let after = reloaded.player().unwrap();
    assert_eq!(reloaded.screen(), Screen::Hub);
    assert_eq!(after.id, before.id);
    assert_eq!(after.level, before.level);
    assert_eq!(after.equipment, before.equipment);
    assert_eq!(after.current_stats(), before.current_stats());
}

#[test]
fn test_zero_xp_threshold_profile_finishes_a_run() {
    let mut player = Player::new("Broken".to_string(), CharacterClass::Rogue, 0);
    player.xp_to_next_level = 0;

    let mut engine = engine_with_player(player);
    engine.handle(Command::EnterSpire);
    play_until_defeat(&mut engine);
    for deferred in engine.drain_deferred() {
        engine.fire(deferred.event);
    }
    engine.handle(Command::CloseSummary);

    assert_eq!(engine.screen(), Screen::Hub);
    let player = engine.player().unwrap();
    assert!(player.xp_to_next_level > 0);
    assert!(player.xp < player.xp_to_next_level);
}

// =========================================================================
// Spire runs
// =========================================================================

#[test]
fn test_kill_without_loot_defers_advance() {
    let mut engine = engine_in_hub(6, CharacterClass::Warrior);
    engine.handle(Command::EnterSpire);

    // Find the first kill that didn't drop equipment
    for _ in 0..10_000 {
        match engine.run().unwrap().phase {
            RunPhase::Fighting => engine.handle(Command::Attack),
            RunPhase::AwaitingLoot => engine.handle(Command::LootDecision { equip: false }),
            _ => break,
        }
    }
    let run = engine.run().unwrap();
    assert_eq!(run.phase, RunPhase::AwaitingAdvance);
    let floor = run.floor;

    // Waiting on the timer blocks further attacks
    engine.handle(Command::Attack);
    assert_eq!(engine.run().unwrap().phase, RunPhase::AwaitingAdvance);

    let deferred = engine.drain_deferred();
    assert_eq!(deferred.len(), 1);
    assert_eq!(deferred[0].event, DeferredEvent::AdvanceFloor);
    assert_eq!(deferred[0].delay_ms, AUTO_ADVANCE_DELAY_MS);

    engine.fire(DeferredEvent::AdvanceFloor);
    let run = engine.run().unwrap();
    assert_eq!(run.floor, floor + 1);
    assert_eq!(run.phase, RunPhase::Fighting);
    assert!(engine.player().unwrap().max_floor_reached >= floor + 1);

    // A second fire is stale
    engine.fire(DeferredEvent::AdvanceFloor);
    assert_eq!(engine.run().unwrap().floor, floor + 1);
}

#[test]
fn test_defeat_shows_summary_and_folds_xp() {
    let mut engine = engine_in_hub(7, CharacterClass::Warrior);
    engine.handle(Command::EnterSpire);

    let run = play_until_defeat(&mut engine);
    assert_eq!(run.hp, 0);
    assert!(run.kills > 0);
    assert_eq!(engine.screen(), Screen::Spire);

    // Nothing works once the run is lost
    engine.handle(Command::UsePotion);
    engine.handle(Command::Flee);
    assert_eq!(engine.run().unwrap().phase, RunPhase::Defeated);

    let deferred = engine.drain_deferred();
    assert_eq!(deferred.len(), 1);
    assert_eq!(deferred[0].event, DeferredEvent::ShowSummary);
    assert_eq!(deferred[0].delay_ms, DEFEAT_SUMMARY_DELAY_MS);
    engine.fire(DeferredEvent::ShowSummary);
    assert_eq!(engine.screen(), Screen::RunSummary);

    let mut expected = engine.player().unwrap().clone();
    apply_account_xp(&mut expected, run.total_xp_earned);

    engine.handle(Command::CloseSummary);

    let player = engine.player().unwrap();
    assert_eq!(engine.screen(), Screen::Hub);
    assert!(engine.run().is_none());
    assert!(engine.log().is_empty());
    assert_eq!(player.level, expected.level);
    assert_eq!(player.xp, expected.xp);
    assert_eq!(player.current_hp, player.max_hp());
    assert!(player.total_kills >= run.kills);
    assert_eq!(player.max_floor_reached, run.floor);
    assert_eq!(engine.profiles()[1].as_ref(), Some(player));
}

#[test]
fn test_run_log_has_unique_ids() {
    let mut engine = engine_in_hub(8, CharacterClass::Rogue);
    engine.handle(Command::EnterSpire);
    for _ in 0..30 {
        step(&mut engine);
    }

    let snapshot = engine.snapshot();
    let mut ids: Vec<u64> = snapshot.log.iter().map(|e| e.id).collect();
    let len = ids.len();
    ids.dedup();
    assert_eq!(ids.len(), len);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert!(snapshot.run.is_some());
    assert!(serde_json::to_string(&snapshot).is_ok());
}

// =========================================================================
// Shop and achievements
// =========================================================================

#[test]
fn test_buy_item_equips_and_charges() {
    let mut player = Player::new("Buyer".to_string(), CharacterClass::Warrior, 0);
    player.shards = 100_000;
    player.shop_inventory = generate_shop_inventory(&player, &mut ChaCha8Rng::seed_from_u64(12));
    let item = player.shop_inventory[0].clone();
    let stock = player.shop_inventory.len();

    let mut engine = engine_with_player(player);
    engine.handle(Command::BuyItem(0));
    assert_eq!(engine.player().unwrap().shards, 100_000, "must be in the shop");

    engine.handle(Command::EnterShop);
    engine.handle(Command::BuyItem(0));

    let player = engine.player().unwrap();
    assert_eq!(player.shards, 100_000 - item.cost.unwrap());
    assert_eq!(player.shop_inventory.len(), stock - 1);
    assert_eq!(player.equipment.get(item.slot).as_ref(), Some(&item));

    // Out-of-range index is ignored
    engine.handle(Command::BuyItem(99));
    assert_eq!(engine.player().unwrap().shop_inventory.len(), stock - 1);
}

#[test]
fn test_buy_item_requires_shards() {
    let mut player = Player::new("Broke".to_string(), CharacterClass::Mage, 0);
    player.shop_inventory = generate_shop_inventory(&player, &mut ChaCha8Rng::seed_from_u64(13));
    player.shop_inventory[0].cost = Some(50);
    let weapon = player.equipment.weapon.clone();

    let mut engine = engine_with_player(player);
    engine.handle(Command::EnterShop);
    engine.handle(Command::BuyItem(0));

    let player = engine.player().unwrap();
    assert_eq!(player.shards, 0);
    assert_eq!(player.equipment.weapon, weapon);
}

#[test]
fn test_potion_purchase_stops_at_cap() {
    let mut player = Player::new("Hoarder".to_string(), CharacterClass::Rogue, 0);
    player.shards = 1_000;
    player.potions = 4;

    let mut engine = engine_with_player(player);
    engine.handle(Command::EnterShop);
    engine.handle(Command::BuyPotion);
    engine.handle(Command::BuyPotion);

    let player = engine.player().unwrap();
    assert_eq!(player.potions, 5);
    assert_eq!(player.shards, 1_000 - POTION_PRICE);
}

#[test]
fn test_claim_achievement_from_achievements_screen() {
    let mut player = Player::new("Slayer".to_string(), CharacterClass::Warrior, 0);
    for _ in 0..10 {
        player.achievements.on_enemy_killed("Slime");
    }

    let mut engine = engine_with_player(player);
    engine.handle(Command::ClaimAchievement("slay_any_10".to_string()));
    assert_eq!(engine.player().unwrap().shards, 0);

    engine.handle(Command::EnterAchievements);
    engine.handle(Command::ClaimAchievement("slay_any_10".to_string()));
    engine.handle(Command::ClaimAchievement("slay_any_10".to_string()));

    let player = engine.player().unwrap();
    assert_eq!(player.shards, 50);
    assert!(player.achievements.is_claimed("slay_any_10"));

    let saved = load_profiles(engine.store());
    assert_eq!(saved[0].as_ref().map(|p| p.shards), Some(50));

    engine.handle(Command::ExitAchievements);
    assert_eq!(engine.screen(), Screen::Hub);
}

#[test]
fn test_account_level_buffs_apply_after_run() {
    let mut player = Player::new("Veteran".to_string(), CharacterClass::Warrior, 0);
    player.level = 4;
    player.xp = player.xp_to_next_level - 1;

    let mut engine = engine_with_player(player);
    engine.handle(Command::EnterSpire);
    play_until_defeat(&mut engine);
    for deferred in engine.drain_deferred() {
        engine.fire(deferred.event);
    }
    engine.handle(Command::CloseSummary);

    let player = engine.player().unwrap();
    assert!(player.level >= 5);
    assert_eq!(player.account_buffs().get(StatType::Strength), 5);
    assert_eq!(player.last_shop_refresh_level, 5);
    assert!(!player.shop_inventory.is_empty());
}
