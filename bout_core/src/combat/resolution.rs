//! Match resolution - round loop, knockout, judges' decision, sudden death
//!
//! Each round:
//! 1. Snapshot the defender's hp as `life_before`
//! 2. Roll an encounter
//! 3. Avoid: defense >= attack, no questions, no tracker update
//! 4. Hit: ask the actual damage, then the remaining life; record both
//!    answers with the difficulty tracker and apply the remaining life
//! 5. Swap roles and advance the round counter
//!
//! The loop runs while both boxers stand and the round limit is not reached.

use super::result::{DrawCause, MatchOutcome, MatchReport, RoundOutcome};
use crate::config::BoutConfig;
use crate::difficulty::DifficultyTracker;
use crate::error::SessionError;
use crate::event::{EventSink, MatchEvent};
use crate::prompt::{ask_with_attempts, read_reply, AnswerSource, Cue, Question, Verdict};
use crate::roll::EncounterGenerator;
use crate::types::{AvoidFlavor, Combatant, Encounter, Role};
use rand::Rng;

const DEFAULT_NAMES: [&str; 2] = ["P1", "P2"];

/// State of one match between two combatants
#[derive(Debug, Clone)]
pub struct Bout {
    fighters: [Combatant; 2],
    round: u32,
    round_limit: u32,
    sudden_death: bool,
    max_attempts: u32,
    generator: EncounterGenerator,
    tracker: DifficultyTracker,
}

impl Bout {
    /// Start a match, rolling starting hp for both players
    ///
    /// Player one attacks first. Blank names become "P1" / "P2".
    pub fn new(config: &BoutConfig, names: [&str; 2], rng: &mut impl Rng) -> Self {
        let max_len = config.display.name_max_len;
        let mut fighter = |index: usize, role: Role| {
            let name = match names[index].trim() {
                "" => DEFAULT_NAMES[index],
                name => name,
            };
            Combatant::new(name, config.rolls.life.roll(rng), role, max_len)
        };
        let first = fighter(0, Role::Attacker);
        let second = fighter(1, Role::Defender);
        Self::with_fighters(config, [first, second])
    }

    /// Start a match with fixed combatants
    pub fn with_fighters(config: &BoutConfig, fighters: [Combatant; 2]) -> Self {
        Bout {
            fighters,
            round: 1,
            round_limit: config.bout.round_limit,
            sudden_death: config.bout.sudden_death,
            max_attempts: config.bout.max_attempts,
            generator: EncounterGenerator::from_config(config),
            tracker: DifficultyTracker::new(),
        }
    }

    pub fn fighters(&self) -> &[Combatant; 2] {
        &self.fighters
    }

    /// Number of the round about to be played
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn tracker(&self) -> &DifficultyTracker {
        &self.tracker
    }

    pub fn attacker(&self) -> &Combatant {
        &self.fighters[self.attacker_index()]
    }

    pub fn defender(&self) -> &Combatant {
        &self.fighters[1 - self.attacker_index()]
    }

    fn attacker_index(&self) -> usize {
        if self.fighters[0].role == Role::Attacker {
            0
        } else {
            1
        }
    }

    fn both_standing(&self) -> bool {
        self.fighters.iter().all(|f| !f.is_down())
    }

    /// Play the whole match and report the outcome
    pub fn run(
        &mut self,
        rng: &mut impl Rng,
        input: &mut impl AnswerSource,
        sink: &mut impl EventSink,
    ) -> Result<MatchOutcome, SessionError> {
        tracing::info!(
            red = %self.fighters[0].name,
            red_hp = self.fighters[0].hp,
            blue = %self.fighters[1].name,
            blue_hp = self.fighters[1].hp,
            round_limit = self.round_limit,
            "match started"
        );
        sink.emit(MatchEvent::MatchStart {
            fighters: self.fighters.clone(),
        });

        while self.both_standing() && self.round <= self.round_limit {
            self.play_round(rng, input, sink)?;
        }

        let outcome = if let Some(loser) = self.fighters.iter().position(Combatant::is_down) {
            MatchOutcome::Knockout {
                winner: self.fighters[1 - loser].name.clone(),
                loser: self.fighters[loser].name.clone(),
            }
        } else if let Some(outcome) = self.decision() {
            outcome
        } else if self.sudden_death {
            self.play_sudden_death(rng, input, sink)?
        } else {
            MatchOutcome::Draw {
                hp: self.fighters[0].hp,
                cause: DrawCause::EvenOnPoints,
            }
        };

        tracing::info!(
            winner = outcome.winner().unwrap_or("none"),
            draw = outcome.is_draw(),
            rounds = self.rounds_played(),
            accuracy = self.tracker.accuracy(),
            "match finished"
        );
        sink.emit(MatchEvent::MatchOver(outcome.clone()));
        Ok(outcome)
    }

    /// Roll and resolve one round, then advance the round counter
    pub fn play_round(
        &mut self,
        rng: &mut impl Rng,
        input: &mut impl AnswerSource,
        sink: &mut impl EventSink,
    ) -> Result<RoundOutcome, SessionError> {
        sink.emit(MatchEvent::RoundStart {
            round: self.round,
            fighters: self.fighters.clone(),
        });

        let encounter = self
            .generator
            .generate(self.defender().hp, &self.tracker, rng);
        let outcome = self.resolve_encounter(&encounter, rng, input, sink)?;
        self.round += 1;
        Ok(outcome)
    }

    /// Apply a rolled encounter to the current attacker and defender
    ///
    /// Swaps roles afterwards; the round counter is left alone.
    pub fn resolve_encounter(
        &mut self,
        encounter: &Encounter,
        rng: &mut impl Rng,
        input: &mut impl AnswerSource,
        sink: &mut impl EventSink,
    ) -> Result<RoundOutcome, SessionError> {
        let attacker = self.attacker_index();
        let defender = 1 - attacker;
        let attacker_name = self.fighters[attacker].name.clone();
        let defender_name = self.fighters[defender].name.clone();
        let life_before = self.fighters[defender].hp;

        sink.emit(MatchEvent::AttackRolled {
            attacker: attacker_name.clone(),
            attack_name: encounter.attack_name.clone(),
            base_damage: encounter.base_damage,
        });
        read_reply(
            input,
            &Cue::RollDefense {
                defender: &defender_name,
            },
        )?;
        sink.emit(MatchEvent::DefenseRolled {
            defender: defender_name.clone(),
            defense: encounter.defense,
        });

        let outcome = match encounter.actual_damage() {
            None => {
                let flavor = AvoidFlavor::pick(rng);
                sink.emit(MatchEvent::Avoided {
                    defender: defender_name,
                    flavor,
                });
                RoundOutcome::Avoided { flavor }
            }
            Some(damage) => {
                let damage_verdict = self.ask(
                    &Question::ActualDamage {
                        base_damage: encounter.base_damage,
                        defense: encounter.defense,
                    },
                    input,
                    sink,
                )?;

                let remaining = life_before.saturating_sub(damage);
                let remaining_verdict = self.ask(
                    &Question::RemainingLife {
                        defender: defender_name.clone(),
                        life_before,
                        damage,
                    },
                    input,
                    sink,
                )?;

                self.fighters[defender].hp = remaining;
                sink.emit(MatchEvent::Hit {
                    attacker: attacker_name,
                    defender: defender_name,
                    damage,
                    remaining,
                });
                RoundOutcome::Hit {
                    damage,
                    remaining,
                    damage_verdict,
                    remaining_verdict,
                }
            }
        };

        self.swap_roles();
        Ok(outcome)
    }

    /// Ask one question and record the answer with the tracker
    fn ask(
        &mut self,
        question: &Question,
        input: &mut impl AnswerSource,
        sink: &mut impl EventSink,
    ) -> Result<Verdict, SessionError> {
        let verdict = ask_with_attempts(question, self.max_attempts, input, sink)?;

        let before = self.tracker.level();
        self.tracker.record(verdict.is_correct());
        let after = self.tracker.level();
        if before != after {
            tracing::debug!(
                from = before,
                to = after,
                accuracy = self.tracker.accuracy(),
                "difficulty level changed"
            );
            sink.emit(MatchEvent::LevelChanged {
                from: before,
                to: after,
            });
        }
        Ok(verdict)
    }

    fn swap_roles(&mut self) {
        for fighter in &mut self.fighters {
            fighter.role = fighter.role.swapped();
        }
    }

    /// Judges' decision on hp; `None` on a tie
    fn decision(&self) -> Option<MatchOutcome> {
        let [a, b] = &self.fighters;
        let (winner, loser) = match a.hp.cmp(&b.hp) {
            std::cmp::Ordering::Greater => (a, b),
            std::cmp::Ordering::Less => (b, a),
            std::cmp::Ordering::Equal => return None,
        };
        Some(MatchOutcome::Decision {
            winner: winner.name.clone(),
            winner_hp: winner.hp,
            loser: loser.name.clone(),
            loser_hp: loser.hp,
        })
    }

    /// One extra exchange to break a tie
    fn play_sudden_death(
        &mut self,
        rng: &mut impl Rng,
        input: &mut impl AnswerSource,
        sink: &mut impl EventSink,
    ) -> Result<MatchOutcome, SessionError> {
        let hp = self.fighters[0].hp;
        tracing::debug!(hp, "sudden death");
        sink.emit(MatchEvent::SuddenDeath { hp });

        let encounter = self
            .generator
            .generate(self.defender().hp, &self.tracker, rng);
        let round = self.resolve_encounter(&encounter, rng, input, sink)?;
        Ok(self.sudden_death_outcome(round, hp))
    }

    fn sudden_death_outcome(&self, round: RoundOutcome, hp: u32) -> MatchOutcome {
        if !round.is_hit() {
            return MatchOutcome::Draw {
                hp,
                cause: DrawCause::SuddenDeathAvoided,
            };
        }
        match self.decision() {
            Some(MatchOutcome::Decision {
                winner,
                winner_hp,
                loser,
                loser_hp,
            }) => MatchOutcome::SuddenDeath {
                winner,
                winner_hp,
                loser,
                loser_hp,
            },
            _ => MatchOutcome::Draw {
                hp: self.fighters[0].hp,
                cause: DrawCause::SuddenDeathEven,
            },
        }
    }

    /// Rounds completed so far
    pub fn rounds_played(&self) -> u32 {
        self.round - 1
    }

    pub fn report(&self, outcome: MatchOutcome, seed: u64) -> MatchReport {
        MatchReport {
            outcome,
            fighters: self.fighters.clone(),
            rounds: self.rounds_played(),
            correct_answers: self.tracker.correct(),
            total_answers: self.tracker.total(),
            accuracy: self.tracker.accuracy(),
            level: self.tracker.level(),
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Feedback, ScriptedAnswers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fixed_bout(config: &BoutConfig, hp: [u32; 2]) -> Bout {
        Bout::with_fighters(
            config,
            [
                Combatant::new("Ali", hp[0], Role::Attacker, 3),
                Combatant::new("Joe", hp[1], Role::Defender, 3),
            ],
        )
    }

    #[test]
    fn test_new_rolls_life_and_truncates_names() {
        let config = BoutConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let bout = Bout::new(&config, ["Muhammad", "  "], &mut rng);

        let [a, b] = bout.fighters();
        assert_eq!(a.name, "Muh");
        assert_eq!(b.name, "P2");
        assert!(config.rolls.life.contains(a.hp));
        assert!(config.rolls.life.contains(b.hp));
        assert_eq!(bout.attacker().name, "Muh");
        assert_eq!(bout.round(), 1);
    }

    #[test]
    fn test_avoid_changes_nothing_but_roles() {
        let config = BoutConfig::default();
        let mut bout = fixed_bout(&config, [100, 90]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut input = ScriptedAnswers::new([""]);
        let mut events: Vec<MatchEvent> = Vec::new();

        let jab = Encounter::new("Phantom Jab", 25, 30);
        let outcome = bout
            .resolve_encounter(&jab, &mut rng, &mut input, &mut events)
            .unwrap();

        assert!(matches!(outcome, RoundOutcome::Avoided { .. }));
        assert_eq!(bout.fighters()[0].hp, 100);
        assert_eq!(bout.fighters()[1].hp, 90);
        assert_eq!(bout.tracker().total(), 0);
        assert_eq!(bout.attacker().name, "Joe");
        assert_eq!(input.consumed(), 1);
        assert!(events.iter().any(|e| matches!(e, MatchEvent::Avoided { .. })));
    }

    #[test]
    fn test_hit_applies_remaining_life() {
        let config = BoutConfig::default();
        let mut bout = fixed_bout(&config, [100, 53]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut input = ScriptedAnswers::new(["", "24", "29"]);
        let mut events: Vec<MatchEvent> = Vec::new();

        let hook = Encounter::new("Dragon Hook", 42, 18);
        let outcome = bout
            .resolve_encounter(&hook, &mut rng, &mut input, &mut events)
            .unwrap();

        assert_eq!(
            outcome,
            RoundOutcome::Hit {
                damage: 24,
                remaining: 29,
                damage_verdict: Verdict::Correct { attempts: 1 },
                remaining_verdict: Verdict::Correct { attempts: 1 },
            }
        );
        assert_eq!(bout.fighters()[1].hp, 29);
        assert_eq!(bout.tracker().correct(), 2);
        assert_eq!(bout.tracker().total(), 2);
        assert_eq!(bout.attacker().name, "Joe");
    }

    #[test]
    fn test_wrong_answers_still_apply_true_damage() {
        let config = BoutConfig::default();
        let mut bout = fixed_bout(&config, [100, 53]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut input = ScriptedAnswers::new(["", "1", "2", "3", "29"]);
        let mut events: Vec<MatchEvent> = Vec::new();

        let hook = Encounter::new("Dragon Hook", 42, 18);
        bout.resolve_encounter(&hook, &mut rng, &mut input, &mut events)
            .unwrap();

        assert_eq!(bout.fighters()[1].hp, 29);
        assert_eq!(bout.tracker().correct(), 1);
        assert_eq!(bout.tracker().total(), 2);
        assert!(events.contains(&MatchEvent::Feedback(Feedback::Reveal { answer: 24 })));
    }

    #[test]
    fn test_overkill_floors_at_zero() {
        let config = BoutConfig::default();
        let mut bout = fixed_bout(&config, [100, 10]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut input = ScriptedAnswers::new(["", "24", "0"]);
        let mut events: Vec<MatchEvent> = Vec::new();

        let hook = Encounter::new("Dragon Hook", 42, 18);
        bout.resolve_encounter(&hook, &mut rng, &mut input, &mut events)
            .unwrap();
        assert_eq!(bout.fighters()[1].hp, 0);
        assert!(bout.fighters()[1].is_down());
    }

    #[test]
    fn test_level_change_is_announced() {
        let config = BoutConfig::default();
        let mut bout = fixed_bout(&config, [100, 53]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut input = ScriptedAnswers::new(["", "24", "29"]);
        let mut events: Vec<MatchEvent> = Vec::new();

        let hook = Encounter::new("Dragon Hook", 42, 18);
        bout.resolve_encounter(&hook, &mut rng, &mut input, &mut events)
            .unwrap();

        assert!(events.contains(&MatchEvent::LevelChanged { from: 1, to: 5 }));
    }

    #[test]
    fn test_quit_at_defense_pause() {
        let config = BoutConfig::default();
        let mut bout = fixed_bout(&config, [100, 53]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut input = ScriptedAnswers::new(["exit"]);
        let mut events: Vec<MatchEvent> = Vec::new();

        let hook = Encounter::new("Dragon Hook", 42, 18);
        let result = bout.resolve_encounter(&hook, &mut rng, &mut input, &mut events);
        assert!(matches!(result, Err(SessionError::Quit)));
        assert_eq!(bout.fighters()[1].hp, 53);
    }

    #[test]
    fn test_decision_prefers_higher_hp() {
        let config = BoutConfig::default();
        let bout = fixed_bout(&config, [40, 75]);
        assert_eq!(
            bout.decision(),
            Some(MatchOutcome::Decision {
                winner: "Joe".to_string(),
                winner_hp: 75,
                loser: "Ali".to_string(),
                loser_hp: 40,
            })
        );
        assert_eq!(fixed_bout(&config, [60, 60]).decision(), None);
    }

    #[test]
    fn test_sudden_death_outcomes() {
        let config = BoutConfig::default();

        let tied = fixed_bout(&config, [60, 60]);
        let avoided = RoundOutcome::Avoided {
            flavor: AvoidFlavor::SlickDodge,
        };
        assert_eq!(
            tied.sudden_death_outcome(avoided, 60),
            MatchOutcome::Draw {
                hp: 60,
                cause: DrawCause::SuddenDeathAvoided
            }
        );

        let after_hit = fixed_bout(&config, [60, 45]);
        let hit = RoundOutcome::Hit {
            damage: 15,
            remaining: 45,
            damage_verdict: Verdict::Revealed,
            remaining_verdict: Verdict::Revealed,
        };
        assert_eq!(
            after_hit.sudden_death_outcome(hit, 60),
            MatchOutcome::SuddenDeath {
                winner: "Ali".to_string(),
                winner_hp: 60,
                loser: "Joe".to_string(),
                loser_hp: 45,
            }
        );
    }

    #[test]
    fn test_round_limit_ends_match() {
        let mut config = BoutConfig::default();
        config.bout.round_limit = 1;
        config.bout.sudden_death = false;
        let mut bout = fixed_bout(&config, [120, 119]);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        // Enter, then three blanks per question at most
        let mut input = ScriptedAnswers::new(vec![""; 7]);
        let mut events: Vec<MatchEvent> = Vec::new();

        let outcome = bout.run(&mut rng, &mut input, &mut events).unwrap();

        assert_eq!(bout.rounds_played(), 1);
        assert!(!matches!(outcome, MatchOutcome::Knockout { .. }));
        assert!(matches!(events.first(), Some(MatchEvent::MatchStart { .. })));
        assert_eq!(events.last(), Some(&MatchEvent::MatchOver(outcome)));
    }
}
