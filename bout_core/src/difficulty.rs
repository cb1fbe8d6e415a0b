//! Adaptive difficulty - running accuracy mapped to a level 1-5
//!
//! Every answered question is recorded exactly once. The level is derived
//! from accuracy on read:
//!
//! level = clamp(1 + floor(accuracy * 4), 1, 5)
//!
//! | accuracy      | level |
//! |---------------|-------|
//! | 0.00 - 0.24   | 1     |
//! | 0.25 - 0.49   | 2     |
//! | 0.50 - 0.74   | 3     |
//! | 0.75 - 0.99   | 4     |
//! | 1.00          | 5     |

use serde::{Deserialize, Serialize};

/// Lowest difficulty level
pub const MIN_LEVEL: u32 = 1;
/// Highest difficulty level
pub const MAX_LEVEL: u32 = 5;

/// Correct/total answer counters for the lifetime of a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTracker {
    correct: u32,
    total: u32,
}

impl DifficultyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one answered question
    pub fn record(&mut self, was_correct: bool) {
        self.total += 1;
        if was_correct {
            self.correct += 1;
        }
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Fraction answered correctly, 0 before any answer
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    pub fn level(&self) -> u32 {
        level_for_accuracy(self.accuracy())
    }
}

/// Map an accuracy in [0, 1] to a difficulty level
pub fn level_for_accuracy(accuracy: f64) -> u32 {
    let steps = (accuracy.clamp(0.0, 1.0) * 4.0).floor() as u32;
    (MIN_LEVEL + steps).clamp(MIN_LEVEL, MAX_LEVEL)
}
