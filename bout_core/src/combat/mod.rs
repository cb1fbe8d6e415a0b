//! Combat - the match loop and its outcomes

mod resolution;
mod result;

pub use resolution::Bout;
pub use result::{DrawCause, MatchOutcome, MatchReport, RoundOutcome};
