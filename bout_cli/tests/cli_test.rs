//! Runs the `bout` binary with piped stdin and checks what it prints on the way out

use std::io::Write;
use std::process::{Command, Output, Stdio};

const FAREWELL: &str = "Exiting game. Bye!";

fn run_bout(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bout"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_quit_at_name_prompt_prints_only_farewell() {
    let output = run_bout(&["--seed", "42"], "quit\n");
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.trim_end().ends_with(FAREWELL));
    assert!(!stdout.contains("step into the ring"));
    assert!(!stdout.contains("Thanks for playing"));
}

#[test]
fn test_quit_mid_match_ends_with_farewell() {
    let output = run_bout(&["--seed", "42", "--rounds", "1"], "Ali\nJoe\nEXIT\n");
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("step into the ring"));
    assert!(stdout.trim_end().ends_with(FAREWELL));
    assert_eq!(stdout.matches(FAREWELL).count(), 1);
    assert!(!stdout.contains("Match Over"));
    assert!(!stdout.contains("Thanks for playing"));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let output = run_bout(&["--seed", "42"], "");
    assert!(output.status.success());
    assert!(stdout_of(&output).trim_end().ends_with(FAREWELL));
}

#[test]
fn test_full_single_round_thanks_the_players() {
    // seed 42 opens with Iron Hammer 41 against defense 6 on Joe's 86 HP
    let output = run_bout(
        &["--seed", "42", "--rounds", "1", "--no-sudden-death"],
        "Ali\nJoe\n\n35\n51\n",
    );
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Match Over"));
    assert!(stdout.contains("Thanks for playing"));
    assert!(!stdout.contains(FAREWELL));
}
