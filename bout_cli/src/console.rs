//! Stdin/stdout adapters for the match seams

use crate::render::render;
use bout_core::{AnswerSource, Cue, EventSink, MatchEvent};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

/// Reads answers line by line, printing each cue as the prompt
pub struct LineInput<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        LineInput { reader, prompt_out }
    }

    /// Print `prompt` without a newline and read the reply
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.prompt_out, "{prompt}")?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

impl<R: BufRead, W: Write> AnswerSource for LineInput<R, W> {
    fn read_line(&mut self, cue: &Cue<'_>) -> io::Result<Option<String>> {
        let prompt = match cue {
            Cue::Answer(_) => format!("❓ {}", cue.to_string().as_str().bold()),
            Cue::RollDefense { .. } => format!("🛡️  {cue}"),
        };
        self.ask(&prompt)
    }
}

/// Prints rendered events
pub struct TerminalSink<W> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        TerminalSink { out }
    }

    pub fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}") {
            tracing::warn!("failed to write to terminal: {err}");
        }
    }
}

impl<W: Write> EventSink for TerminalSink<W> {
    fn emit(&mut self, event: MatchEvent) {
        let text = render(&event);
        self.line(&text);
    }
}
