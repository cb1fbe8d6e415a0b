use bout_core::BoutConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How to print the end-of-match summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Off,
    Text,
    Json,
}

/// Boxing Math Game - two-digit subtraction with borrowing
#[derive(Parser, Debug)]
#[command(name = "bout", version)]
#[command(about = "Two-player boxing match that drills two-digit subtraction with borrowing")]
pub struct Args {
    /// TOML config file; flags below override it
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Rounds before the judges decide
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Score tied matches as a draw instead of playing sudden death
    #[arg(long)]
    pub no_sudden_death: bool,

    /// Random seed for a reproducible match
    #[arg(long)]
    pub seed: Option<u64>,

    /// Attempts per question
    #[arg(long)]
    pub attempts: Option<u32>,

    /// Longest player name kept (0 = no limit)
    #[arg(long)]
    pub name_len: Option<usize>,

    /// Print a match summary after the outcome
    #[arg(long, value_enum, default_value_t = ReportFormat::Off)]
    pub report: ReportFormat,

    /// Debug logging on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Layer command-line overrides on top of `config`
    pub fn apply(&self, config: &mut BoutConfig) {
        if let Some(rounds) = self.rounds {
            config.bout.round_limit = rounds;
        }
        if self.no_sudden_death {
            config.bout.sudden_death = false;
        }
        if let Some(seed) = self.seed {
            config.bout.seed = Some(seed);
        }
        if let Some(attempts) = self.attempts {
            config.bout.max_attempts = attempts;
        }
        if let Some(len) = self.name_len {
            config.display.name_max_len = len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "bout",
            "--rounds",
            "1",
            "--no-sudden-death",
            "--seed",
            "42",
            "--name-len",
            "0",
            "--report",
            "json",
        ]);
        let mut config = BoutConfig::default();
        args.apply(&mut config);

        assert_eq!(config.bout.round_limit, 1);
        assert!(!config.bout.sudden_death);
        assert_eq!(config.bout.seed, Some(42));
        assert_eq!(config.bout.max_attempts, 3);
        assert_eq!(config.display.name_max_len, 0);
        assert_eq!(args.report, ReportFormat::Json);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["bout"]);
        let mut config = BoutConfig::default();
        args.apply(&mut config);
        assert_eq!(config, BoutConfig::default());
        assert_eq!(args.report, ReportFormat::Off);
    }
}
