//! Profile persistence behind a small key-value port.
//!
//! The engine only sees [`ProfileStore`]. [`FileStore`] keeps one JSON file
//! per key under `~/.spire/`; [`MemoryStore`] keeps everything in a map.

use crate::character::player::Player;
use crate::core::constants::{ACCOUNT_XP_BASE, PROFILES_STORE_KEY, PROFILE_SLOTS};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Opaque string storage keyed by name.
pub trait ProfileStore {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn load(&self, key: &str) -> io::Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, e.g. to simulate a corrupted save.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Uses `~/.spire/`, creating it if needed.
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Self::with_dir(home_dir.join(".spire"))
    }

    pub fn with_dir(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl ProfileStore for FileStore {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.path_for(key), value)
    }
}

pub type ProfileSlots = [Option<Player>; PROFILE_SLOTS];

/// Reads both profile slots. Missing, unreadable or malformed data yields
/// empty slots.
pub fn load_profiles(store: &impl ProfileStore) -> ProfileSlots {
    let json = match store.load(PROFILES_STORE_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => return Default::default(),
        Err(e) => {
            log::warn!("Failed to read profiles: {}", e);
            return Default::default();
        }
    };

    match serde_json::from_str::<ProfileSlots>(&json) {
        Ok(mut slots) => {
            // Derived stats follow the current balance, not whatever was saved
            for player in slots.iter_mut().flatten() {
                if player.xp_to_next_level == 0 {
                    log::warn!("Repairing zero xp threshold for {}", player.name);
                    player.xp_to_next_level = ACCOUNT_XP_BASE;
                }
                player.recompute();
            }
            slots
        }
        Err(e) => {
            log::warn!("Discarding malformed profile data: {}", e);
            Default::default()
        }
    }
}

pub fn save_profiles(store: &mut impl ProfileStore, slots: &ProfileSlots) -> io::Result<()> {
    let json =
        serde_json::to_string(slots).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    store.save(PROFILES_STORE_KEY, &json)
}
