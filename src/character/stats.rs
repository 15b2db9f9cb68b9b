use serde::{Deserialize, Serialize};

pub const STAT_COUNT: usize = 13;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatType {
    Strength,
    Dexterity,
    Intelligence,
    MaxHp,
    Defense,
    CritRate,
    Evasion,
    BlockChance,
    Lifesteal,
    AttackSpeed,
    CastSpeed,
    MaxEnergy,
    MaxMana,
}

impl StatType {
    /// Canonical iteration order for composition, generation and display.
    pub const ALL: [StatType; STAT_COUNT] = [
        StatType::Strength,
        StatType::Dexterity,
        StatType::Intelligence,
        StatType::MaxHp,
        StatType::Defense,
        StatType::CritRate,
        StatType::Evasion,
        StatType::BlockChance,
        StatType::Lifesteal,
        StatType::AttackSpeed,
        StatType::CastSpeed,
        StatType::MaxEnergy,
        StatType::MaxMana,
    ];

    pub fn abbrev(&self) -> &'static str {
        match self {
            StatType::Strength => "STR",
            StatType::Dexterity => "DEX",
            StatType::Intelligence => "INT",
            StatType::MaxHp => "HP",
            StatType::Defense => "DEF",
            StatType::CritRate => "CRIT",
            StatType::Evasion => "EVA",
            StatType::BlockChance => "BLK",
            StatType::Lifesteal => "LS",
            StatType::AttackSpeed => "AS",
            StatType::CastSpeed => "CS",
            StatType::MaxEnergy => "EN",
            StatType::MaxMana => "MP",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            StatType::Strength => 0,
            StatType::Dexterity => 1,
            StatType::Intelligence => 2,
            StatType::MaxHp => 3,
            StatType::Defense => 4,
            StatType::CritRate => 5,
            StatType::Evasion => 6,
            StatType::BlockChance => 7,
            StatType::Lifesteal => 8,
            StatType::AttackSpeed => 9,
            StatType::CastSpeed => 10,
            StatType::MaxEnergy => 11,
            StatType::MaxMana => 12,
        }
    }

    /// How much one point of item stat budget is worth in this stat.
    pub fn point_weight(&self) -> f64 {
        match self {
            StatType::Strength | StatType::Dexterity | StatType::Intelligence => 1.0,
            StatType::MaxHp => 5.0,
            StatType::Defense => 1.0,
            StatType::CritRate | StatType::Evasion | StatType::BlockChance => 0.5,
            StatType::Lifesteal => 0.25,
            StatType::AttackSpeed | StatType::CastSpeed => 0.5,
            StatType::MaxEnergy | StatType::MaxMana => 1.0,
        }
    }
}

/// Fixed-layout stat vector. Absent stats are simply zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Stats {
    values: [u32; STAT_COUNT],
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a stat vector from `(stat, value)` pairs; later pairs overwrite earlier ones.
    pub fn from_pairs(pairs: &[(StatType, u32)]) -> Self {
        let mut stats = Self::new();
        for &(stat, value) in pairs {
            stats.set(stat, value);
        }
        stats
    }

    pub fn get(&self, stat: StatType) -> u32 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: StatType, value: u32) {
        self.values[stat.index()] = value;
    }

    pub fn add(&mut self, stat: StatType, amount: u32) {
        self.values[stat.index()] = self.values[stat.index()].saturating_add(amount);
    }

    /// Adds every stat of `other` onto `self`.
    pub fn add_all(&mut self, other: &Stats) {
        for stat in StatType::ALL {
            self.add(stat, other.get(stat));
        }
    }

    /// Sparse view: only the stats that are non-zero, in canonical order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (StatType, u32)> + '_ {
        StatType::ALL
            .into_iter()
            .map(move |stat| (stat, self.get(stat)))
            .filter(|&(_, value)| value > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.iter_nonzero().next().is_none()
    }

    /// The stat the player attacks with: the best of STR, DEX and INT.
    pub fn offensive(&self) -> u32 {
        self.get(StatType::Strength)
            .max(self.get(StatType::Dexterity))
            .max(self.get(StatType::Intelligence))
    }

    /// Short summary like `+3 STR +10 HP`.
    pub fn summary(&self) -> String {
        self.iter_nonzero()
            .map(|(stat, value)| format!("+{} {}", value, stat.abbrev()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
