//! Player input - answer sources, reply parsing, the attempt-limited prompt

mod ask;
mod question;

pub use ask::ask_with_attempts;
pub use question::{Feedback, Hint, Question, Verdict};

use crate::config::DEFENSE_RANGE;
use crate::error::SessionError;
use std::collections::VecDeque;
use std::fmt;
use std::io;

/// What the match is waiting for when it reads a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue<'a> {
    /// An answer to `Question`
    Answer(&'a Question),
    /// The defender presses Enter to reveal the defense roll
    RollDefense { defender: &'a str },
}

impl fmt::Display for Cue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cue::Answer(question) => write!(f, "{question}: "),
            Cue::RollDefense { defender } => write!(
                f,
                "{defender}, press Enter to roll your defense ({}, high values rarer)...",
                DEFENSE_RANGE
            ),
        }
    }
}

/// Line-oriented player input
pub trait AnswerSource {
    /// Read one line in response to `cue`; `Ok(None)` once input is exhausted
    fn read_line(&mut self, cue: &Cue<'_>) -> io::Result<Option<String>>;
}

impl<T: AnswerSource + ?Sized> AnswerSource for &mut T {
    fn read_line(&mut self, cue: &Cue<'_>) -> io::Result<Option<String>> {
        (**self).read_line(cue)
    }
}

/// A parsed answer line; the quit sentinel never gets this far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Number(i64),
    NotANumber,
}

/// Whether `raw` is the quit sentinel
pub fn is_quit(raw: &str) -> bool {
    let token = raw.trim();
    token.eq_ignore_ascii_case("quit") || token.eq_ignore_ascii_case("exit")
}

pub fn parse_reply(raw: &str) -> Reply {
    match raw.trim().parse::<i64>() {
        Ok(value) => Reply::Number(value),
        Err(_) => Reply::NotANumber,
    }
}

/// Read a line for `cue`, turning the quit sentinel and end of input into errors
pub fn read_reply(input: &mut impl AnswerSource, cue: &Cue<'_>) -> Result<String, SessionError> {
    match input.read_line(cue)? {
        Some(line) if is_quit(&line) => Err(SessionError::Quit),
        Some(line) => Ok(line),
        None => Err(SessionError::InputClosed),
    }
}

/// Replays a fixed list of lines, then reports end of input
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    lines: VecDeque<String>,
    consumed: usize,
}

impl ScriptedAnswers {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedAnswers {
            lines: lines.into_iter().map(Into::into).collect(),
            consumed: 0,
        }
    }

    /// Lines handed out so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl AnswerSource for ScriptedAnswers {
    fn read_line(&mut self, _cue: &Cue<'_>) -> io::Result<Option<String>> {
        let line = self.lines.pop_front();
        if line.is_some() {
            self.consumed += 1;
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reply() {
        assert_eq!(parse_reply("24"), Reply::Number(24));
        assert_eq!(parse_reply("  -3 \n"), Reply::Number(-3));
        assert_eq!(parse_reply("2.5"), Reply::NotANumber);
        assert_eq!(parse_reply(""), Reply::NotANumber);
        assert_eq!(parse_reply("twenty"), Reply::NotANumber);
    }

    #[test]
    fn test_read_reply_maps_sentinels() {
        let q = Question::ActualDamage {
            base_damage: 30,
            defense: 12,
        };
        let cue = Cue::Answer(&q);
        let mut input = ScriptedAnswers::new(["18", "exit"]);

        assert_eq!(read_reply(&mut input, &cue).unwrap(), "18");
        assert!(matches!(read_reply(&mut input, &cue), Err(SessionError::Quit)));
        assert!(matches!(
            read_reply(&mut input, &cue),
            Err(SessionError::InputClosed)
        ));
        assert_eq!(input.consumed(), 2);
    }

    #[test]
    fn test_cue_text() {
        let cue = Cue::RollDefense { defender: "Ali" };
        assert_eq!(
            cue.to_string(),
            "Ali, press Enter to roll your defense (0–50, high values rarer)..."
        );
    }
}
