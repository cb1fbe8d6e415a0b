//! Match, roll and display settings

use super::{default_attack_names, ConfigError};
use crate::types::RollRange;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defense rolls always fall in this range
pub const DEFENSE_RANGE: RollRange = RollRange::new(0, 50);

/// Reroll attempts the borrow search gets at level 1
pub const BASE_REROLL_BUDGET: u32 = 12;

/// Complete configuration for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoutConfig {
    #[serde(rename = "match", default)]
    pub bout: MatchSettings,
    #[serde(default)]
    pub rolls: RollSettings,
    #[serde(default)]
    pub display: DisplaySettings,
    /// Attack names drawn uniformly each round
    #[serde(default = "default_attack_names")]
    pub attacks: Vec<String>,
}

impl Default for BoutConfig {
    fn default() -> Self {
        BoutConfig {
            bout: MatchSettings::default(),
            rolls: RollSettings::default(),
            display: DisplaySettings::default(),
            attacks: default_attack_names(),
        }
    }
}

impl BoutConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: BoutConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: BoutConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the roll and match code rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::ValidationError(msg));

        if self.bout.round_limit == 0 {
            return invalid("match.round_limit must be at least 1".to_string());
        }
        if self.bout.max_attempts == 0 {
            return invalid("match.max_attempts must be at least 1".to_string());
        }

        let life = self.rolls.life;
        if life.is_empty() || life.min == 0 {
            return invalid(format!("rolls.life must be a non-empty range above 0, got {life}"));
        }

        // Synthesis shifts the attack by ten in either direction
        let attack = self.rolls.attack;
        if attack.is_empty() || attack.min < 10 || attack.max > 99 {
            return invalid(format!("rolls.attack must lie within 10–99, got {attack}"));
        }
        if attack.len() < 20 {
            return invalid(format!("rolls.attack must span at least 20 values, got {attack}"));
        }

        if self.attacks.is_empty() {
            return invalid("attacks must name at least one attack".to_string());
        }
        if let Some(index) = self.attacks.iter().position(|name| name.trim().is_empty()) {
            return invalid(format!("attacks[{index}] is blank"));
        }
        Ok(())
    }
}

/// Round limit, tiebreak and prompt settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Rounds played before the judges decide
    #[serde(default = "default_round_limit")]
    pub round_limit: u32,
    /// Whether tied hp after the round limit triggers a sudden-death exchange
    #[serde(default = "default_sudden_death")]
    pub sudden_death: bool,
    /// Seed for the match RNG; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Attempts the player gets per question
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        MatchSettings {
            round_limit: default_round_limit(),
            sudden_death: default_sudden_death(),
            seed: None,
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_round_limit() -> u32 {
    10
}
fn default_sudden_death() -> bool {
    true
}
fn default_max_attempts() -> u32 {
    3
}

/// Ranges for starting life and attack damage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollSettings {
    /// Starting hp, drawn uniformly
    #[serde(default = "default_life_range")]
    pub life: RollRange,
    /// Base damage of an attack, drawn uniformly
    #[serde(default = "default_attack_range")]
    pub attack: RollRange,
    /// Reroll budget of the borrow search at level 1
    #[serde(default = "default_reroll_budget")]
    pub reroll_budget: u32,
}

impl Default for RollSettings {
    fn default() -> Self {
        RollSettings {
            life: default_life_range(),
            attack: default_attack_range(),
            reroll_budget: default_reroll_budget(),
        }
    }
}

fn default_life_range() -> RollRange {
    RollRange::new(80, 120)
}
fn default_attack_range() -> RollRange {
    RollRange::new(11, 49)
}
fn default_reroll_budget() -> u32 {
    BASE_REROLL_BUDGET
}

/// Presentation constraints applied to match state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Longest player name kept, in characters (0 = no limit)
    #[serde(default = "default_name_max_len")]
    pub name_max_len: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            name_max_len: default_name_max_len(),
        }
    }
}

fn default_name_max_len() -> usize {
    3
}
