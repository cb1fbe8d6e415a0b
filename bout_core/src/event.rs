//! Match events - everything the match reports to the display layer

use crate::combat::MatchOutcome;
use crate::prompt::Feedback;
use crate::types::{AvoidFlavor, Combatant};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress report emitted while a match runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum MatchEvent {
    MatchStart {
        fighters: [Combatant; 2],
    },
    RoundStart {
        round: u32,
        fighters: [Combatant; 2],
    },
    AttackRolled {
        attacker: String,
        attack_name: String,
        base_damage: u32,
    },
    DefenseRolled {
        defender: String,
        defense: u32,
    },
    Avoided {
        defender: String,
        flavor: AvoidFlavor,
    },
    Feedback(Feedback),
    Hit {
        attacker: String,
        defender: String,
        damage: u32,
        remaining: u32,
    },
    LevelChanged {
        from: u32,
        to: u32,
    },
    SuddenDeath {
        hp: u32,
    },
    MatchOver(MatchOutcome),
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchEvent::MatchStart { fighters: [a, b] } => write!(
                f,
                "{} and {} step into the ring! {} starts with {} HP. {} starts with {} HP.",
                a.name, b.name, a.name, a.hp, b.name, b.hp
            ),
            MatchEvent::RoundStart {
                round,
                fighters: [a, b],
            } => write!(
                f,
                "Round {round} | {}: {} HP | {}: {} HP",
                a.name, a.hp, b.name, b.hp
            ),
            MatchEvent::AttackRolled {
                attacker,
                attack_name,
                base_damage,
            } => write!(
                f,
                "{attacker} uses {attack_name}! Base damage roll: {base_damage}"
            ),
            MatchEvent::DefenseRolled { defender, defense } => {
                write!(f, "{defender} defense roll: {defense}")
            }
            MatchEvent::Avoided { flavor, .. } => write!(f, "{flavor}"),
            MatchEvent::Feedback(feedback) => write!(f, "{feedback}"),
            MatchEvent::Hit {
                attacker,
                defender,
                damage,
                remaining,
            } => write!(
                f,
                "{attacker} hit {defender} for {damage}. {defender} now has {remaining} HP."
            ),
            MatchEvent::LevelChanged { from, to } if to > from => {
                write!(f, "Difficulty up: level {to}")
            }
            MatchEvent::LevelChanged { to, .. } => write!(f, "Difficulty down: level {to}"),
            MatchEvent::SuddenDeath { hp } => write!(
                f,
                "Dead even at {hp} HP after the final bell. Sudden death: one more exchange!"
            ),
            MatchEvent::MatchOver(outcome) => write!(f, "Match over. {outcome}"),
        }
    }
}

/// Receiver of match events
pub trait EventSink {
    fn emit(&mut self, event: MatchEvent);
}

impl EventSink for Vec<MatchEvent> {
    fn emit(&mut self, event: MatchEvent) {
        self.push(event);
    }
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: MatchEvent) {
        (**self).emit(event);
    }
}
