//! Spire - run/combat simulation engine for a floor-climbing dungeon crawler.
//!
//! The crate covers enemy generation, turn-based combat, loot and shop
//! generation, stat composition and account/run progression. Presentation
//! and storage are external: drive an [`Engine`] with [`Command`]s, draw its
//! [`Snapshot`], and hand it a [`ProfileStore`].

pub mod achievements;
pub mod character;
pub mod combat;
pub mod core;
pub mod items;
pub mod persistence;

pub use crate::character::{CharacterClass, Player, StatType, Stats};
pub use crate::core::{Command, Deferred, DeferredEvent, Engine, Screen, Snapshot};
pub use crate::persistence::{FileStore, MemoryStore, ProfileStore};
