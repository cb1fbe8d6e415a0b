//! Round and match outcomes

use crate::prompt::Verdict;
use crate::types::{AvoidFlavor, Combatant};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum RoundOutcome {
    /// Defense met or beat the attack; no questions asked
    Avoided { flavor: AvoidFlavor },
    Hit {
        damage: u32,
        remaining: u32,
        damage_verdict: Verdict,
        remaining_verdict: Verdict,
    },
}

impl RoundOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, RoundOutcome::Hit { .. })
    }
}

/// Why a match ended level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawCause {
    /// Tied hp with sudden death disabled
    EvenOnPoints,
    /// The sudden-death exchange was avoided
    SuddenDeathAvoided,
    /// Still tied after the sudden-death exchange
    SuddenDeathEven,
}

/// How a match ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MatchOutcome {
    Knockout {
        winner: String,
        loser: String,
    },
    /// Judges' decision on remaining hp after the round limit
    Decision {
        winner: String,
        winner_hp: u32,
        loser: String,
        loser_hp: u32,
    },
    SuddenDeath {
        winner: String,
        winner_hp: u32,
        loser: String,
        loser_hp: u32,
    },
    Draw {
        hp: u32,
        cause: DrawCause,
    },
}

impl MatchOutcome {
    pub fn winner(&self) -> Option<&str> {
        match self {
            MatchOutcome::Knockout { winner, .. }
            | MatchOutcome::Decision { winner, .. }
            | MatchOutcome::SuddenDeath { winner, .. } => Some(winner),
            MatchOutcome::Draw { .. } => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, MatchOutcome::Draw { .. })
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Knockout { winner, loser } => {
                write!(f, "Winner by knockout: {winner}! {loser} has been defeated.")
            }
            MatchOutcome::Decision {
                winner,
                winner_hp,
                loser,
                loser_hp,
            } => write!(
                f,
                "The judges score it for {winner}, {winner_hp} HP to {loser}'s {loser_hp} HP."
            ),
            MatchOutcome::SuddenDeath {
                winner,
                winner_hp,
                loser,
                loser_hp,
            } => write!(
                f,
                "{winner} takes sudden death, {winner_hp} HP to {loser}'s {loser_hp} HP!"
            ),
            MatchOutcome::Draw { hp, cause } => match cause {
                DrawCause::EvenOnPoints => {
                    write!(f, "It's a draw! Both boxers finish on {hp} HP.")
                }
                DrawCause::SuddenDeathAvoided => write!(
                    f,
                    "It's a draw! The sudden-death blow was avoided with both on {hp} HP."
                ),
                DrawCause::SuddenDeathEven => {
                    write!(f, "It's a draw! Still even at {hp} HP after sudden death.")
                }
            },
        }
    }
}

/// End-of-match summary for text or JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub outcome: MatchOutcome,
    pub fighters: [Combatant; 2],
    /// Rounds played, not counting a sudden-death exchange
    pub rounds: u32,
    pub correct_answers: u32,
    pub total_answers: u32,
    pub accuracy: f64,
    pub level: u32,
    /// Seed the match RNG started from
    pub seed: u64,
}

impl MatchReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Multi-line plain summary
    pub fn summary(&self) -> String {
        let [a, b] = &self.fighters;
        format!(
            "{}\n{}: {} HP | {}: {} HP\nRounds: {} | Answers: {}/{} correct ({:.0}%) | Level: {}\nSeed: {}",
            self.outcome,
            a.name,
            a.hp,
            b.name,
            b.hp,
            self.rounds,
            self.correct_answers,
            self.total_answers,
            self.accuracy * 100.0,
            self.level,
            self.seed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn test_winner() {
        let ko = MatchOutcome::Knockout {
            winner: "Ali".to_string(),
            loser: "Joe".to_string(),
        };
        assert_eq!(ko.winner(), Some("Ali"));

        let draw = MatchOutcome::Draw {
            hp: 40,
            cause: DrawCause::SuddenDeathAvoided,
        };
        assert_eq!(draw.winner(), None);
        assert!(draw.is_draw());
    }

    #[test]
    fn test_report_json_round_trips_outcome() {
        let report = MatchReport {
            outcome: MatchOutcome::Decision {
                winner: "Ali".to_string(),
                winner_hp: 61,
                loser: "Joe".to_string(),
                loser_hp: 12,
            },
            fighters: [
                Combatant::new("Ali", 61, Role::Defender, 3),
                Combatant::new("Joe", 12, Role::Attacker, 3),
            ],
            rounds: 10,
            correct_answers: 15,
            total_answers: 16,
            accuracy: 15.0 / 16.0,
            level: 4,
            seed: 42,
        };

        let json = report.to_json().unwrap();
        assert!(json.contains(r#""kind": "decision""#));
        let back: MatchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.outcome, report.outcome);
    }

    #[test]
    fn test_summary_mentions_accuracy() {
        let report = MatchReport {
            outcome: MatchOutcome::Draw {
                hp: 50,
                cause: DrawCause::EvenOnPoints,
            },
            fighters: [
                Combatant::new("Ali", 50, Role::Attacker, 3),
                Combatant::new("Joe", 50, Role::Defender, 3),
            ],
            rounds: 8,
            correct_answers: 3,
            total_answers: 4,
            accuracy: 0.75,
            level: 4,
            seed: 7,
        };
        let summary = report.summary();
        assert!(summary.contains("3/4 correct (75%)"));
        assert!(summary.contains("Seed: 7"));
    }
}
