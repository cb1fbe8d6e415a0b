//! bout_core - Subtraction drill dressed as a boxing match
//!
//! This library provides:
//! - Weighted defense rolls skewed toward low values
//! - Borrow enforcement: attack/defense pairs that need regrouping
//! - DifficultyTracker: running accuracy mapped to a level 1-5
//! - Bout: the round loop, knockouts, judges' decision and sudden death
//! - The attempt-limited numeric prompt shared by both questions of a hit

pub mod combat;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod event;
pub mod prompt;
pub mod roll;
pub mod types;

pub mod prelude;

// Re-export core types for convenience
pub use combat::{Bout, DrawCause, MatchOutcome, MatchReport, RoundOutcome};
pub use config::{BoutConfig, ConfigError};
pub use difficulty::DifficultyTracker;
pub use error::SessionError;
pub use event::{EventSink, MatchEvent};
pub use prompt::{AnswerSource, Cue, Feedback, Hint, Question, ScriptedAnswers, Verdict};
pub use roll::{BorrowEnforcer, EncounterGenerator, Strategy};
pub use types::{AvoidFlavor, Combatant, Encounter, Role, RollRange};
