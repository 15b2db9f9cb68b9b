//! Command-driven orchestrator for screens, runs and profiles.
//!
//! The presentation layer sends [`Command`]s, reads [`Snapshot`]s and fires
//! back the [`Deferred`] events it drains. Commands that don't fit the
//! current state are ignored.

use crate::character::class::CharacterClass;
use crate::character::player::Player;
use crate::combat::logic::{resolve_attack, CombatEvent};
use crate::core::constants::*;
use crate::core::events::{Deferred, DeferredEvent};
use crate::core::run_log::{LogEntry, LogTone, RunLog};
use crate::core::progression::{
    apply_account_xp, claim_achievement, potion_heal_amount, refresh_shop_if_due,
};
use crate::core::run::{RunPhase, RunState};
use crate::items::shop::generate_shop_inventory;
use crate::persistence::{load_profiles, save_profiles, ProfileSlots, ProfileStore};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Start,
    ProfileSelect,
    ClassSelect,
    Hub,
    Spire,
    RunSummary,
    Shop,
    Achievements,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    StartGame,
    LoadProfile(usize),
    NewGame(usize),
    DeleteProfile(usize),
    SelectClass(CharacterClass),
    EnterSpire,
    Attack,
    UsePotion,
    LootDecision { equip: bool },
    Flee,
    CloseSummary,
    EnterShop,
    ExitShop,
    BuyPotion,
    /// Index into the current shop inventory.
    BuyItem(usize),
    EnterAchievements,
    ExitAchievements,
    ClaimAchievement(String),
}

/// The active profile slot and its loaded player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub active_slot: Option<usize>,
    pub player: Option<Player>,
}

/// Read-only copy of everything the presentation layer draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub screen: Screen,
    pub player: Option<Player>,
    pub run: Option<RunState>,
    pub log: Vec<LogEntry>,
    /// Saved profiles, for the profile select screen.
    pub profiles: ProfileSlots,
}

pub struct Engine<R: Rng, S: ProfileStore> {
    rng: R,
    store: S,
    slots: ProfileSlots,
    session: Session,
    screen: Screen,
    run: Option<RunState>,
    log: RunLog,
    deferred: Vec<Deferred>,
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Applies a max-HP change to the run's HP, keeping it within `[1, new_max]`.
fn carry_max_hp_delta(hp: u32, old_max: u32, new_max: u32) -> u32 {
    let shifted = hp as i64 + new_max as i64 - old_max as i64;
    shifted.clamp(1, new_max.max(1) as i64) as u32
}

fn announce_enemy(log: &mut RunLog, run: &RunState) {
    let message = if run.enemy.is_boss {
        format!("Floor {}: the {} blocks the way!", run.floor, run.enemy.name)
    } else {
        format!("Floor {}: a {} appears.", run.floor, run.enemy.name)
    };
    log.push(message, LogTone::Info);
}

impl<R: Rng, S: ProfileStore> Engine<R, S> {
    /// Loads both profile slots from `store`, falling back to empty slots.
    pub fn new(rng: R, store: S) -> Self {
        let slots = load_profiles(&store);
        Self {
            rng,
            store,
            slots,
            session: Session::default(),
            screen: Screen::Start,
            run: None,
            log: RunLog::new(),
            deferred: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn player(&self) -> Option<&Player> {
        self.session.player.as_ref()
    }

    pub fn run(&self) -> Option<&RunState> {
        self.run.as_ref()
    }

    pub fn log(&self) -> &[LogEntry] {
        self.log.entries()
    }

    pub fn profiles(&self) -> &ProfileSlots {
        &self.slots
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.screen,
            player: self.session.player.clone(),
            run: self.run.clone(),
            log: self.log.entries().to_vec(),
            profiles: self.slots.clone(),
        }
    }

    /// Takes every queued deferred event.
    pub fn drain_deferred(&mut self) -> Vec<Deferred> {
        std::mem::take(&mut self.deferred)
    }

    // =========================================================================
    // Command dispatch
    // =========================================================================

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::StartGame => self.start_game(),
            Command::LoadProfile(index) => self.load_profile(index),
            Command::NewGame(index) => self.new_game(index),
            Command::DeleteProfile(index) => self.delete_profile(index),
            Command::SelectClass(class) => self.select_class(class),
            Command::EnterSpire => self.enter_spire(),
            Command::Attack => self.attack(),
            Command::UsePotion => self.use_potion(),
            Command::LootDecision { equip } => self.loot_decision(equip),
            Command::Flee => self.flee(),
            Command::CloseSummary => self.close_summary(),
            Command::EnterShop => self.enter_shop(),
            Command::ExitShop => self.exit_shop(),
            Command::BuyPotion => self.buy_potion(),
            Command::BuyItem(index) => self.buy_item(index),
            Command::EnterAchievements => self.enter_achievements(),
            Command::ExitAchievements => self.exit_achievements(),
            Command::ClaimAchievement(id) => self.claim_achievement(&id),
        }
    }

    /// Applies a deferred event previously drained. Stale events are ignored.
    pub fn fire(&mut self, event: DeferredEvent) {
        match event {
            DeferredEvent::AdvanceFloor => {
                if self.screen == Screen::Spire
                    && self.run.as_ref().map(|r| r.phase) == Some(RunPhase::AwaitingAdvance)
                {
                    self.advance_floor();
                }
            }
            DeferredEvent::ShowSummary => {
                if self.screen == Screen::Spire
                    && self.run.as_ref().map(|r| r.phase) == Some(RunPhase::Defeated)
                {
                    self.screen = Screen::RunSummary;
                }
            }
        }
    }

    // =========================================================================
    // Profiles
    // =========================================================================

    pub fn start_game(&mut self) {
        if self.screen != Screen::Start {
            return;
        }
        self.screen = Screen::ProfileSelect;
    }

    pub fn load_profile(&mut self, index: usize) {
        if self.screen != Screen::ProfileSelect {
            return;
        }
        let Some(Some(player)) = self.slots.get(index) else {
            log::debug!("No profile in slot {}", index);
            return;
        };
        let mut player = player.clone();
        player.last_played = now();
        player.recompute();
        log::info!("Loaded {} from slot {}", player.name, index);

        self.session = Session {
            active_slot: Some(index),
            player: Some(player),
        };
        self.screen = Screen::Hub;
    }

    pub fn new_game(&mut self, index: usize) {
        if self.screen != Screen::ProfileSelect || index >= PROFILE_SLOTS {
            return;
        }
        self.session = Session {
            active_slot: Some(index),
            player: None,
        };
        self.screen = Screen::ClassSelect;
    }

    pub fn delete_profile(&mut self, index: usize) {
        if self.screen != Screen::ProfileSelect {
            return;
        }
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        if slot.take().is_none() {
            return;
        }
        if self.session.active_slot == Some(index) {
            self.session = Session::default();
        }
        log::info!("Deleted profile in slot {}", index);
        self.persist_slots();
    }

    pub fn select_class(&mut self, class: CharacterClass) {
        if self.screen != Screen::ClassSelect {
            return;
        }
        let Some(index) = self.session.active_slot else {
            return;
        };

        let mut player = Player::new(class.name().to_string(), class, now());
        player.shop_inventory = generate_shop_inventory(&player, &mut self.rng);
        log::info!("Created {} {} in slot {}", class.icon(), class.name(), index);

        self.session.player = Some(player);
        self.screen = Screen::Hub;
        self.save();
    }

    // =========================================================================
    // Spire
    // =========================================================================

    pub fn enter_spire(&mut self) {
        if self.screen != Screen::Hub || self.run.is_some() {
            return;
        }
        let Some(player) = self.session.player.as_mut() else {
            return;
        };

        let run = RunState::new(player.max_hp(), &mut self.rng);
        player.max_floor_reached = player.max_floor_reached.max(run.floor);
        player.achievements.on_floor_reached(run.floor);

        self.log.clear();
        self.deferred.clear();
        self.log.push("You enter the Spire.", LogTone::Info);
        announce_enemy(&mut self.log, &run);
        self.run = Some(run);
        self.screen = Screen::Spire;
    }

    pub fn attack(&mut self) {
        if self.screen != Screen::Spire {
            return;
        }
        let (Some(player), Some(run)) = (self.session.player.as_mut(), self.run.as_mut()) else {
            return;
        };
        if run.phase != RunPhase::Fighting {
            log::debug!("Attack ignored in phase {:?}", run.phase);
            return;
        }

        let events = resolve_attack(player, run, &mut self.rng);
        for event in &events {
            self.log.push_combat_event(event);
        }

        let (phase, floor) = (run.phase, run.floor);
        match phase {
            RunPhase::AwaitingAdvance => self.defer(DeferredEvent::AdvanceFloor, AUTO_ADVANCE_DELAY_MS),
            RunPhase::Defeated => {
                log::info!("Run ended on floor {}", floor);
                self.defer(DeferredEvent::ShowSummary, DEFEAT_SUMMARY_DELAY_MS);
            }
            _ => {}
        }

        let killed = events
            .iter()
            .any(|e| matches!(e, CombatEvent::EnemyDefeated { .. }));
        if killed {
            self.save();
        }
    }

    pub fn use_potion(&mut self) {
        if self.screen != Screen::Spire {
            return;
        }
        let (Some(player), Some(run)) = (self.session.player.as_mut(), self.run.as_mut()) else {
            return;
        };
        let max_hp = player.max_hp();
        if run.phase != RunPhase::Fighting || player.potions == 0 || run.hp >= max_hp {
            return;
        }

        let healed = potion_heal_amount(max_hp).min(max_hp - run.hp);
        run.hp += healed;
        player.potions -= 1;
        self.log
            .push(format!("You drink a potion and recover {} HP.", healed), LogTone::Heal);
        self.save();
    }

    pub fn loot_decision(&mut self, equip: bool) {
        if self.screen != Screen::Spire {
            return;
        }
        let (Some(player), Some(run)) = (self.session.player.as_mut(), self.run.as_mut()) else {
            return;
        };
        if run.phase != RunPhase::AwaitingLoot {
            return;
        }
        let Some(item) = run.pending_loot.take() else {
            return;
        };

        if equip {
            let old_max = player.max_hp();
            let name = item.name.clone();
            player.equip(item);
            let new_max = player.max_hp();
            run.hp = carry_max_hp_delta(run.hp, old_max, new_max);
            run.items_equipped += 1;
            self.log.push(format!("You equip the {}.", name), LogTone::Loot);
        } else {
            self.log
                .push(format!("You leave the {} behind.", item.name), LogTone::Info);
        }

        run.phase = RunPhase::AwaitingAdvance;
        self.advance_floor();
    }

    fn advance_floor(&mut self) {
        let (Some(player), Some(run)) = (self.session.player.as_mut(), self.run.as_mut()) else {
            return;
        };
        if run.phase != RunPhase::AwaitingAdvance {
            return;
        }

        run.advance(&mut self.rng);
        player.max_floor_reached = player.max_floor_reached.max(run.floor);
        player.achievements.on_floor_reached(run.floor);
        log::debug!("Advanced to floor {}", run.floor);

        announce_enemy(&mut self.log, run);
        self.save();
    }

    pub fn flee(&mut self) {
        if self.screen != Screen::Spire {
            return;
        }
        let Some(run) = self.run.as_mut() else {
            return;
        };
        if run.phase != RunPhase::Fighting {
            return;
        }
        run.phase = RunPhase::Fled;
        self.log
            .push(format!("You flee from floor {}.", run.floor), LogTone::Info);
        self.screen = Screen::RunSummary;
    }

    /// Folds the finished run into the account and returns to the hub.
    pub fn close_summary(&mut self) {
        if self.screen != Screen::RunSummary {
            return;
        }
        if !self.run.as_ref().is_some_and(RunState::is_over) {
            return;
        }
        let Some(player) = self.session.player.as_mut() else {
            return;
        };
        let Some(run) = self.run.take() else {
            return;
        };

        apply_account_xp(player, run.total_xp_earned);
        refresh_shop_if_due(player, &mut self.rng);
        player.recompute();
        player.heal_full();
        player.last_played = now();
        log::info!(
            "Run closed: floor {}, {} kills, {} xp",
            run.floor,
            run.kills,
            run.total_xp_earned
        );

        self.log.clear();
        self.deferred.clear();
        self.screen = Screen::Hub;
        self.save();
    }

    // =========================================================================
    // Shop
    // =========================================================================

    pub fn enter_shop(&mut self) {
        if self.screen == Screen::Hub && self.session.player.is_some() {
            self.screen = Screen::Shop;
        }
    }

    pub fn exit_shop(&mut self) {
        if self.screen == Screen::Shop {
            self.screen = Screen::Hub;
        }
    }

    pub fn buy_potion(&mut self) {
        if self.screen != Screen::Shop {
            return;
        }
        let Some(player) = self.session.player.as_mut() else {
            return;
        };
        if player.potions >= MAX_POTIONS || player.shards < POTION_PRICE {
            return;
        }
        player.shards -= POTION_PRICE;
        player.potions += 1;
        self.save();
    }

    pub fn buy_item(&mut self, index: usize) {
        if self.screen != Screen::Shop {
            return;
        }
        let Some(player) = self.session.player.as_mut() else {
            return;
        };
        let Some(cost) = player.shop_inventory.get(index).and_then(|item| item.cost) else {
            return;
        };
        if player.shards < cost {
            return;
        }

        let item = player.shop_inventory.remove(index);
        player.shards -= cost;
        log::debug!("Bought {} for {} shards", item.name, cost);
        player.equip(item);
        self.save();
    }

    // =========================================================================
    // Achievements
    // =========================================================================

    pub fn enter_achievements(&mut self) {
        if self.screen == Screen::Hub && self.session.player.is_some() {
            self.screen = Screen::Achievements;
        }
    }

    pub fn exit_achievements(&mut self) {
        if self.screen == Screen::Achievements {
            self.screen = Screen::Hub;
        }
    }

    pub fn claim_achievement(&mut self, id: &str) {
        if self.screen != Screen::Achievements {
            return;
        }
        let Some(player) = self.session.player.as_mut() else {
            return;
        };
        if claim_achievement(player, id).is_some() {
            log::info!("Claimed achievement {}", id);
            self.save();
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn defer(&mut self, event: DeferredEvent, delay_ms: u64) {
        self.deferred.push(Deferred { event, delay_ms });
    }

    /// Copies the session player into its slot and writes both slots.
    fn save(&mut self) {
        let (Some(index), Some(player)) = (self.session.active_slot, self.session.player.as_ref())
        else {
            return;
        };
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(player.clone());
        }
        self.persist_slots();
    }

    fn persist_slots(&mut self) {
        if let Err(e) = save_profiles(&mut self.store, &self.slots) {
            log::warn!("Failed to save profiles: {}", e);
        }
    }
}
