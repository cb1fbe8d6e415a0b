//! Borrow enforcement - steer attack/defense pairs toward regrouping
//!
//! A round asks two subtractions:
//!   A) actual damage    = attack - defense
//!   B) remaining life   = life_before - actual damage
//!
//! A borrow in the ones place happens when the minuend's units digit is
//! smaller than the subtrahend's. Two strategies produce such pairs:
//!
//! - Reroll search: keep rerolling the attack or the defense until A or B
//!   borrows, within a budget that grows with the difficulty level. Falls back
//!   to the last pair when the budget runs out.
//! - Constructive synthesis: build the digits directly so A always borrows,
//!   with a units gap that widens as the level rises.

use super::sampler::sample_weighted;
use crate::config::DEFENSE_RANGE;
use crate::difficulty::{MAX_LEVEL, MIN_LEVEL};
use crate::types::RollRange;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Extra reroll attempts granted per level above 1
pub const REROLLS_PER_LEVEL: u32 = 4;

/// How a pair left the enforcer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Strategy {
    /// Reroll search; `rerolls` is how many values were redrawn
    Reroll { rerolls: u32 },
    /// Digits built directly
    Synthesis,
}

/// An attack/defense pair after enforcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforcedPair {
    pub attack: u32,
    pub defense: u32,
    pub strategy: Strategy,
}

/// `attack - defense` needs a borrow in the ones place
pub fn damage_borrows(attack: u32, defense: u32) -> bool {
    attack % 10 < defense % 10
}

/// `life_before - damage` needs a borrow in the ones place
pub fn remaining_borrows(life_before: u32, damage: u32) -> bool {
    life_before % 10 < damage % 10
}

/// Either subtraction of the round needs a borrow
///
/// Only meaningful when `attack > defense`.
pub fn round_borrows(attack: u32, defense: u32, life_before: u32) -> bool {
    damage_borrows(attack, defense) || remaining_borrows(life_before, attack - defense)
}

/// Chance of using constructive synthesis at `level`
///
/// 0.25 at level 1, rising 0.15 per level to 0.85 at level 5.
pub fn synthesis_probability(level: u32) -> f64 {
    let steps = level.clamp(MIN_LEVEL, MAX_LEVEL) - MIN_LEVEL;
    (0.25 + 0.15 * steps as f64).clamp(0.25, 0.85)
}

/// Pair adjuster bound to the configured attack range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowEnforcer {
    attack_range: RollRange,
    base_budget: u32,
}

impl BorrowEnforcer {
    /// `attack_range` must be a two-digit range spanning at least 20 values
    pub fn new(attack_range: RollRange, base_budget: u32) -> Self {
        BorrowEnforcer {
            attack_range,
            base_budget,
        }
    }

    /// Reroll budget at `level`
    pub fn reroll_budget(&self, level: u32) -> u32 {
        let steps = level.clamp(MIN_LEVEL, MAX_LEVEL) - MIN_LEVEL;
        self.base_budget + REROLLS_PER_LEVEL * steps
    }

    /// Pick a strategy by level and adjust the rolled pair
    ///
    /// A pair that still has `defense >= attack` afterwards is returned as is;
    /// the round resolves as an avoid.
    pub fn generate_pair(
        &self,
        attack: u32,
        defense: u32,
        life_before: u32,
        level: u32,
        rng: &mut impl Rng,
    ) -> EnforcedPair {
        let pair = if rng.gen_bool(synthesis_probability(level)) {
            let (attack, defense) = self.force_borrow_pair(level, rng);
            EnforcedPair {
                attack,
                defense,
                strategy: Strategy::Synthesis,
            }
        } else {
            self.ensure_borrow_case(attack, defense, life_before, level, rng)
        };

        tracing::debug!(
            level,
            attack = pair.attack,
            defense = pair.defense,
            strategy = ?pair.strategy,
            "borrow pair chosen"
        );
        pair
    }

    /// Reroll search for a pair where either subtraction borrows
    pub fn ensure_borrow_case(
        &self,
        mut attack: u32,
        mut defense: u32,
        life_before: u32,
        level: u32,
        rng: &mut impl Rng,
    ) -> EnforcedPair {
        let budget = self.reroll_budget(level);
        let mut rerolls = 0;

        while attack > defense && rerolls < budget {
            if round_borrows(attack, defense, life_before) {
                break;
            }
            if rng.gen_bool(0.5) {
                attack = self.attack_range.roll(rng);
            } else {
                defense = sample_weighted(DEFENSE_RANGE.min, DEFENSE_RANGE.max, rng);
            }
            rerolls += 1;
        }

        EnforcedPair {
            attack,
            defense,
            strategy: Strategy::Reroll { rerolls },
        }
    }

    /// Build `(attack, defense)` with `attack > defense` and a ones-place borrow
    ///
    /// The units gap `defense % 10 - attack % 10` is drawn from
    /// `[1 + level, min(9, 2 + 2 * level)]`.
    pub fn force_borrow_pair(&self, level: u32, rng: &mut impl Rng) -> (u32, u32) {
        let level = level.clamp(MIN_LEVEL, MAX_LEVEL);
        let range = self.attack_range;

        let gap = rng.gen_range(1 + level..=(2 + 2 * level).min(9));
        let attack_tens = rng.gen_range((range.min / 10).max(1)..=range.max / 10);
        let defense_units = rng.gen_range(gap..=9);

        let mut attack = attack_tens * 10 + (defense_units - gap);
        if attack < range.min {
            attack += 10;
        } else if attack > range.max {
            attack -= 10;
        }

        // Same tens digit at most, and never past the defense ceiling
        let defense_tens_max = (attack / 10).min((DEFENSE_RANGE.max - defense_units) / 10);
        let defense_tens = rng.gen_range(0..=defense_tens_max);
        let mut defense = defense_tens * 10 + defense_units;

        if defense >= attack {
            if attack + 10 <= range.max {
                attack += 10;
            } else {
                defense -= 10;
            }
        }

        (attack, defense)
    }
}
