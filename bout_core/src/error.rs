//! Session errors - why a match stopped before its outcome

use thiserror::Error;

/// Reasons a match stops early
///
/// `Quit` and `InputClosed` are deliberate stops, not failures; the binary
/// answers both with a farewell and a success exit.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("player asked to quit")]
    Quit,
    #[error("input closed before the match finished")]
    InputClosed,
    #[error("failed to read player input: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Whether the player (or the end of input) ended the session
    pub fn is_exit_request(&self) -> bool {
        matches!(self, SessionError::Quit | SessionError::InputClosed)
    }
}
