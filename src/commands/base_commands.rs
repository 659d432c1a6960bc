use chrono::Local;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::estimate::EstimationMode;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the estimation questions and their options
    Questions,
    /// Estimate a story from answers in a YAML file
    Estimate {
        /// Estimation input YAML file
        #[arg(short, long)]
        input: String,
        /// Optional report file (.json for JSON, YAML otherwise)
        #[arg(short, long)]
        output: Option<String>,
        /// Estimation mode (story-points or days), overrides the input file
        #[arg(short, long)]
        mode: Option<EstimationMode>,
        /// Also project the estimate into days and hours
        #[arg(short, long)]
        time: bool,
        /// Story points per sprint
        #[arg(long, allow_negative_numbers = true)]
        team_velocity: Option<f64>,
        /// Working days per sprint
        #[arg(long, allow_negative_numbers = true)]
        sprint_length: Option<f64>,
        /// Buffer added to the base days, in percent
        #[arg(long, allow_negative_numbers = true)]
        buffer_percentage: Option<f64>,
        /// Working hours per day
        #[arg(long, allow_negative_numbers = true)]
        working_hours_per_day: Option<f64>,
        /// First working day used for completion dates (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_start_date())]
        start_date: String,
    },
    /// Answer the questions one command at a time on stdin
    Interactive {
        /// Optional YAML file with team parameters
        #[arg(short, long)]
        team_config: Option<String>,
        /// Initial estimation mode (story-points or days)
        #[arg(short, long)]
        mode: Option<EstimationMode>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_start_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_defaults_start_date_to_today() {
        let args = CliArgs::parse_from(["estimator", "estimate", "-i", "answers.yaml"]);

        if let Commands::Estimate {
            start_date,
            mode,
            time,
            output,
            ..
        } = args.command
        {
            assert_eq!(start_date, default_start_date());
            assert_eq!(mode, None);
            assert!(!time);
            assert_eq!(output, None);
        } else {
            panic!("expected estimate command");
        }
    }

    #[test]
    fn estimate_parses_mode_and_team_overrides() {
        let args = CliArgs::parse_from([
            "estimator",
            "estimate",
            "-i",
            "answers.yaml",
            "-m",
            "days",
            "--time",
            "--team-velocity",
            "-5",
            "--buffer-percentage",
            "0",
        ]);

        if let Commands::Estimate {
            mode,
            time,
            team_velocity,
            buffer_percentage,
            sprint_length,
            ..
        } = args.command
        {
            assert_eq!(mode, Some(EstimationMode::Days));
            assert!(time);
            assert_eq!(team_velocity, Some(-5.0));
            assert_eq!(buffer_percentage, Some(0.0));
            assert_eq!(sprint_length, None);
        } else {
            panic!("expected estimate command");
        }
    }

    #[test]
    fn interactive_accepts_team_config() {
        let args = CliArgs::parse_from(["estimator", "interactive", "-t", "team.yaml"]);

        if let Commands::Interactive { team_config, mode } = args.command {
            assert_eq!(team_config.as_deref(), Some("team.yaml"));
            assert_eq!(mode, None);
        } else {
            panic!("expected interactive command");
        }
    }
}
