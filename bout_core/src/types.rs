//! Core types shared by the roll, prompt and combat modules

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive integer range used for life, attack and defense rolls
///
/// Serialized as a two-element array, e.g. `life = [80, 120]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct RollRange {
    pub min: u32,
    pub max: u32,
}

impl RollRange {
    pub const fn new(min: u32, max: u32) -> Self {
        RollRange { min, max }
    }

    /// Whether `value` lies inside the range (both ends included)
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of distinct values in the range
    pub fn len(&self) -> u32 {
        self.max.saturating_sub(self.min) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }

    /// Uniform draw from the range
    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

impl From<[u32; 2]> for RollRange {
    fn from([min, max]: [u32; 2]) -> Self {
        RollRange { min, max }
    }
}

impl From<RollRange> for [u32; 2] {
    fn from(range: RollRange) -> Self {
        [range.min, range.max]
    }
}

impl fmt::Display for RollRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.min, self.max)
    }
}

/// Which side of the exchange a combatant is on this round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Attacker,
    Defender,
}

impl Role {
    pub fn swapped(self) -> Role {
        match self {
            Role::Attacker => Role::Defender,
            Role::Defender => Role::Attacker,
        }
    }
}

/// One of the two boxers in a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    /// Display name, already truncated to the configured length
    pub name: String,
    /// Remaining life, never below zero
    pub hp: u32,
    pub role: Role,
}

impl Combatant {
    /// Create a combatant, truncating `name` to `max_len` characters (0 = no limit)
    pub fn new(name: &str, hp: u32, role: Role, max_len: usize) -> Self {
        Combatant {
            name: display_name(name, max_len),
            hp,
            role,
        }
    }

    pub fn is_down(&self) -> bool {
        self.hp == 0
    }
}

/// Trim surrounding whitespace and keep at most `max_len` characters
pub fn display_name(name: &str, max_len: usize) -> String {
    let trimmed = name.trim();
    if max_len == 0 {
        trimmed.to_string()
    } else {
        trimmed.chars().take(max_len).collect()
    }
}

/// The rolls for a single exchange
///
/// Built once per round (or sudden-death attempt) and consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub attack_name: String,
    pub base_damage: u32,
    pub defense: u32,
}

impl Encounter {
    pub fn new(attack_name: impl Into<String>, base_damage: u32, defense: u32) -> Self {
        Encounter {
            attack_name: attack_name.into(),
            base_damage,
            defense,
        }
    }

    /// Damage that lands; `None` when defense met or beat the attack
    pub fn actual_damage(&self) -> Option<u32> {
        self.base_damage.checked_sub(self.defense).filter(|d| *d > 0)
    }
}

/// Flavor tag for an avoided exchange; the presentation layer picks the wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvoidFlavor {
    Avoid,
    PerfectDefense,
    SlickDodge,
    CleanEvade,
}

impl AvoidFlavor {
    /// Get all flavors
    pub fn all() -> &'static [AvoidFlavor] {
        &[
            AvoidFlavor::Avoid,
            AvoidFlavor::PerfectDefense,
            AvoidFlavor::SlickDodge,
            AvoidFlavor::CleanEvade,
        ]
    }

    /// Uniform pick among all flavors
    pub fn pick(rng: &mut impl Rng) -> AvoidFlavor {
        let all = Self::all();
        all[rng.gen_range(0..all.len())]
    }

    pub fn text(&self) -> &'static str {
        match self {
            AvoidFlavor::Avoid => "Avoid!",
            AvoidFlavor::PerfectDefense => "Perfect Defense!",
            AvoidFlavor::SlickDodge => "Slick Dodge!",
            AvoidFlavor::CleanEvade => "Clean Evade!",
        }
    }
}

impl fmt::Display for AvoidFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
