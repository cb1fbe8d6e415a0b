//! Attempt-limited numeric prompt

use super::question::{Feedback, Hint, Question, Verdict};
use super::{parse_reply, read_reply, AnswerSource, Cue, Reply};
use crate::error::SessionError;
use crate::event::{EventSink, MatchEvent};

/// Ask `question` up to `max_attempts` times
///
/// - a non-integer consumes an attempt without a hint
/// - a wrong integer consumes an attempt; the direction is shown only while
///   attempts remain
/// - a correct integer ends the prompt with an affirmation
/// - running out reveals the answer and yields `Verdict::Revealed`
///
/// The quit sentinel returns `Err(SessionError::Quit)` without emitting anything.
pub fn ask_with_attempts(
    question: &Question,
    max_attempts: u32,
    input: &mut impl AnswerSource,
    sink: &mut impl EventSink,
) -> Result<Verdict, SessionError> {
    let answer = question.answer();
    let cue = Cue::Answer(question);
    let mut attempts = 0;

    while attempts < max_attempts {
        let line = read_reply(input, &cue)?;
        attempts += 1;
        let attempts_left = max_attempts - attempts;

        let feedback = match parse_reply(&line) {
            Reply::NotANumber => Feedback::NotWholeNumber { attempts_left },
            Reply::Number(guess) if guess == i64::from(answer) => {
                sink.emit(MatchEvent::Feedback(Feedback::Correct));
                return Ok(Verdict::Correct { attempts });
            }
            Reply::Number(guess) => Feedback::Wrong {
                hint: (attempts_left > 0).then(|| Hint::for_guess(guess, answer)),
                attempts_left,
            },
        };
        sink.emit(MatchEvent::Feedback(feedback));
    }

    sink.emit(MatchEvent::Feedback(Feedback::Reveal { answer }));
    Ok(Verdict::Revealed)
}
