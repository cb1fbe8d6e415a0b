//! bout - Boxing Math Game, two-digit subtraction with borrowing
//!
//! Two players take turns attacking. Every hit asks for the actual damage
//! and the defender's remaining life. Type "quit" or "exit" at any prompt
//! to leave.

mod args;
mod console;
mod render;

use anyhow::Context;
use args::{Args, ReportFormat};
use bout_core::{Bout, BoutConfig, SessionError};
use clap::Parser;
use console::{LineInput, TerminalSink};
use crossterm::style::Stylize;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;
use tracing_subscriber::EnvFilter;

const FAREWELL: &str = "Exiting game. Bye!";

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,bout=debug,bout_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Logs go to stderr so they never interleave with the transcript
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => BoutConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => BoutConfig::default(),
    };
    args.apply(&mut config);
    config.validate().context("invalid match settings")?;

    let seed = config.bout.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "seeding match rng");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let stdin = io::stdin();
    let mut input = LineInput::new(stdin.lock(), io::stdout());
    let mut sink = TerminalSink::new(io::stdout());

    sink.line(&format!(
        "{}\n",
        "🥊 Boxing Math Game — Two-Digit Subtraction (with Borrowing)".bold()
    ));
    sink.line("Type 'quit' or 'exit' at any input to end the game.\n");

    match play(&config, seed, &args, &mut rng, &mut input, &mut sink) {
        Ok(()) => {
            sink.line("\nThanks for playing! Keep practicing those subtraction skills!");
            Ok(())
        }
        Err(err) if err.is_exit_request() => {
            if matches!(err, SessionError::InputClosed) {
                tracing::warn!("input closed mid-match");
            }
            sink.line(FAREWELL);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn read_name<R: io::BufRead, W: io::Write>(
    input: &mut LineInput<R, W>,
    prompt: &str,
) -> Result<String, SessionError> {
    match input.ask(prompt)? {
        Some(name) if bout_core::prompt::is_quit(&name) => Err(SessionError::Quit),
        Some(name) => Ok(name),
        None => Err(SessionError::InputClosed),
    }
}

fn play<R: io::BufRead, W: io::Write, O: io::Write>(
    config: &BoutConfig,
    seed: u64,
    args: &Args,
    rng: &mut ChaCha8Rng,
    input: &mut LineInput<R, W>,
    sink: &mut TerminalSink<O>,
) -> Result<(), SessionError> {
    let first = read_name(input, "Enter Player 1 name: ")?;
    let second = read_name(input, "Enter Player 2 name: ")?;

    let mut bout = Bout::new(config, [first.as_str(), second.as_str()], rng);
    let outcome = bout.run(rng, input, sink)?;

    match args.report {
        ReportFormat::Off => {}
        ReportFormat::Text => sink.line(&format!("\n{}", bout.report(outcome, seed).summary())),
        ReportFormat::Json => match bout.report(outcome, seed).to_json() {
            Ok(json) => sink.line(&json),
            Err(err) => tracing::warn!("failed to encode match report: {err}"),
        },
    }
    Ok(())
}
