//! Questions asked during a hit

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two subtractions of a hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Question {
    /// base damage - defense
    ActualDamage { base_damage: u32, defense: u32 },
    /// defender's life before the hit - actual damage, floored at zero
    RemainingLife {
        defender: String,
        life_before: u32,
        damage: u32,
    },
}

impl Question {
    /// The value the player must enter
    pub fn answer(&self) -> u32 {
        match self {
            Question::ActualDamage {
                base_damage,
                defense,
            } => base_damage.saturating_sub(*defense),
            Question::RemainingLife {
                life_before,
                damage,
                ..
            } => life_before.saturating_sub(*damage),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Question::ActualDamage {
                base_damage,
                defense,
            } => write!(
                f,
                "What is the ACTUAL damage? (base {base_damage} - defense {defense}, not below 0)"
            ),
            Question::RemainingLife {
                defender,
                life_before,
                damage,
            } => write!(
                f,
                "What is {defender}'s REMAINING life? ({life_before} - {damage}, not below 0)"
            ),
        }
    }
}

/// Direction of a wrong guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
    TooHigh,
    TooLow,
}

impl Hint {
    pub fn for_guess(guess: i64, answer: u32) -> Hint {
        if guess > i64::from(answer) {
            Hint::TooHigh
        } else {
            Hint::TooLow
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::TooHigh => f.write_str("too high"),
            Hint::TooLow => f.write_str("too low"),
        }
    }
}

/// Response to a single attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Feedback {
    NotWholeNumber { attempts_left: u32 },
    /// `hint` is withheld once no attempts remain
    Wrong {
        hint: Option<Hint>,
        attempts_left: u32,
    },
    Correct,
    Reveal { answer: u32 },
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::NotWholeNumber { attempts_left } => write!(
                f,
                "Please enter a whole number. Attempts left: {attempts_left}"
            ),
            Feedback::Wrong {
                hint: Some(hint),
                attempts_left,
            } => write!(f, "Not quite ({hint}). Attempts left: {attempts_left}"),
            Feedback::Wrong {
                hint: None,
                attempts_left,
            } => write!(f, "Not quite. Attempts left: {attempts_left}"),
            Feedback::Correct => f.write_str("Correct!"),
            Feedback::Reveal { answer } => write!(f, "The correct answer is: {answer}"),
        }
    }
}

/// How a question ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Verdict {
    /// Answered correctly on attempt number `attempts`
    Correct { attempts: u32 },
    /// Attempts exhausted; the answer was revealed
    Revealed,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct { .. })
    }
}
