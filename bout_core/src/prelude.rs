//! Prelude module for convenient imports
//!
//! ```rust
//! use bout_core::prelude::*;
//! ```

// Match
pub use crate::combat::{Bout, MatchOutcome, MatchReport, RoundOutcome};

// Configuration
pub use crate::config::{BoutConfig, ConfigError};

// Input and output seams
pub use crate::event::{EventSink, MatchEvent};
pub use crate::prompt::{AnswerSource, Cue, Feedback, Question, ScriptedAnswers, Verdict};

// Rolls and difficulty
pub use crate::difficulty::DifficultyTracker;
pub use crate::roll::{BorrowEnforcer, EncounterGenerator};
pub use crate::types::{AvoidFlavor, Combatant, Encounter, Role};

pub use crate::error::SessionError;
