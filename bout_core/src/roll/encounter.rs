//! EncounterGenerator - one attack and one defense per exchange

use super::borrow::BorrowEnforcer;
use super::sampler::sample_weighted;
use crate::config::{BoutConfig, DEFENSE_RANGE};
use crate::difficulty::DifficultyTracker;
use crate::types::{Encounter, RollRange};
use rand::seq::SliceRandom;
use rand::Rng;

const FALLBACK_ATTACK: &str = "Straight Jab";

/// Rolls encounters from the configured roster and ranges
#[derive(Debug, Clone)]
pub struct EncounterGenerator {
    attacks: Vec<String>,
    attack_range: RollRange,
    enforcer: BorrowEnforcer,
}

impl EncounterGenerator {
    pub fn new(attacks: Vec<String>, attack_range: RollRange, reroll_budget: u32) -> Self {
        EncounterGenerator {
            attacks,
            attack_range,
            enforcer: BorrowEnforcer::new(attack_range, reroll_budget),
        }
    }

    pub fn from_config(config: &BoutConfig) -> Self {
        Self::new(
            config.attacks.clone(),
            config.rolls.attack,
            config.rolls.reroll_budget,
        )
    }

    /// Roll an encounter against a defender at `life_before` hp
    ///
    /// Draw order is fixed: attack name, base damage, defense, then whatever
    /// the borrow enforcer consumes.
    pub fn generate(
        &self,
        life_before: u32,
        tracker: &DifficultyTracker,
        rng: &mut impl Rng,
    ) -> Encounter {
        let attack_name = self
            .attacks
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| FALLBACK_ATTACK.to_string());
        let base_damage = self.attack_range.roll(rng);
        let defense = sample_weighted(DEFENSE_RANGE.min, DEFENSE_RANGE.max, rng);

        let pair = self
            .enforcer
            .generate_pair(base_damage, defense, life_before, tracker.level(), rng);

        Encounter {
            attack_name,
            base_damage: pair.attack,
            defense: pair.defense,
        }
    }
}
