//! Terminal presentation of match events

use bout_core::{AvoidFlavor, DrawCause, Feedback, MatchEvent, MatchOutcome};
use crossterm::style::Stylize;

fn avoid_icon(flavor: AvoidFlavor) -> &'static str {
    match flavor {
        AvoidFlavor::Avoid => "✨",
        AvoidFlavor::PerfectDefense => "🛡️ ",
        AvoidFlavor::SlickDodge => "💫",
        AvoidFlavor::CleanEvade => "🌀",
    }
}

/// Styled lines for one event
pub fn render(event: &MatchEvent) -> String {
    let text = event.to_string();
    match event {
        MatchEvent::MatchStart { fighters: [a, b] } => format!(
            "\n{} and {} step into the ring!\n{} starts with {} HP.\n{} starts with {} HP.\n",
            a.name.as_str().bold(),
            b.name.as_str().bold(),
            a.name,
            a.hp.to_string().green(),
            b.name,
            b.hp.to_string().green(),
        ),
        MatchEvent::RoundStart {
            round,
            fighters: [a, b],
        } => format!(
            "{}\n🔹 {}: {} HP | 🔸 {}: {} HP\n",
            format!("===== 🏁 Round {round} =====").bold(),
            a.name,
            a.hp,
            b.name,
            b.hp
        ),
        MatchEvent::AttackRolled { .. } => format!("💥 {}", text.as_str().red()),
        MatchEvent::DefenseRolled { .. } => format!("🛡️  {}", text.as_str().blue()),
        MatchEvent::Avoided { flavor, .. } => {
            format!("{} {}\n", avoid_icon(*flavor), text.as_str().cyan().bold())
        }
        MatchEvent::Feedback(feedback) => match feedback {
            Feedback::Correct => format!("✅ {}", text.as_str().green()),
            Feedback::NotWholeNumber { .. } | Feedback::Wrong { .. } => {
                format!("❌ {}", text.as_str().red())
            }
            Feedback::Reveal { .. } => format!("📘 {}\n", text.as_str().yellow()),
        },
        MatchEvent::Hit { .. } => format!("📣 {}\n", text.as_str().bold()),
        MatchEvent::LevelChanged { from, to } => {
            let icon = if to > from { "📈" } else { "📉" };
            format!("{icon} {}", text.as_str().magenta())
        }
        MatchEvent::SuddenDeath { .. } => format!("⚡ {}\n", text.as_str().yellow().bold()),
        MatchEvent::MatchOver(outcome) => format!(
            "{}\n{}",
            "===== 🏁 Match Over =====".bold(),
            render_outcome(outcome)
        ),
    }
}

fn render_outcome(outcome: &MatchOutcome) -> String {
    let text = outcome.to_string();
    match outcome {
        MatchOutcome::Draw { cause, .. } => match cause {
            DrawCause::EvenOnPoints | DrawCause::SuddenDeathEven => {
                format!("🤝 {}", text.as_str().yellow())
            }
            DrawCause::SuddenDeathAvoided => format!("🛡️  {}", text.as_str().yellow()),
        },
        _ => format!("🏆 {}", text.as_str().green().bold()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bout_core::{Combatant, Hint, Role};

    #[test]
    fn test_feedback_icons() {
        let wrong = MatchEvent::Feedback(Feedback::Wrong {
            hint: Some(Hint::TooLow),
            attempts_left: 1,
        });
        let line = render(&wrong);
        assert!(line.starts_with("❌"));
        assert!(line.contains("too low"));

        let correct = render(&MatchEvent::Feedback(Feedback::Correct));
        assert!(correct.starts_with("✅"));
    }

    #[test]
    fn test_round_header_lists_both_fighters() {
        let event = MatchEvent::RoundStart {
            round: 2,
            fighters: [
                Combatant::new("Ali", 80, Role::Defender, 3),
                Combatant::new("Joe", 71, Role::Attacker, 3),
            ],
        };
        let line = render(&event);
        assert!(line.contains("Round 2"));
        assert!(line.contains("Ali: 80 HP"));
        assert!(line.contains("Joe: 71 HP"));
    }

    #[test]
    fn test_outcome_trophy() {
        let event = MatchEvent::MatchOver(MatchOutcome::Knockout {
            winner: "Ali".to_string(),
            loser: "Joe".to_string(),
        });
        let line = render(&event);
        assert!(line.contains("Match Over"));
        assert!(line.contains("🏆"));
    }
}
