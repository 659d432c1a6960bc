use std::io;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::{format_estimation_report, format_progress};
use crate::domain::team::TeamParameters;
use crate::services::estimation_error::EstimationError;
use crate::services::estimation_report::EstimationReport;
use crate::services::estimation_yaml::{EstimationYamlError, load_estimation_input_from_yaml_file};
use crate::services::session::EstimationSession;
use crate::services::workdays::{CompletionDates, WorkdayError};

#[derive(Error, Debug)]
pub enum EstimateCommandError {
    #[error("failed to load estimation input: {0}")]
    Input(#[from] EstimationYamlError),
    #[error("{0}")]
    Estimation(#[from] EstimationError),
    #[error("invalid start date: {0}")]
    InvalidStartDate(String),
    #[error("failed to compute completion dates: {0}")]
    Calendar(#[from] WorkdayError),
    #[error("failed to serialize report as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize report as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write report to {path}: {source}")]
    Write { path: String, source: io::Error },
}

pub fn estimate_command(cmd: Commands) -> Result<(), EstimateCommandError> {
    if let Commands::Estimate {
        input,
        output,
        mode,
        time,
        team_velocity,
        sprint_length,
        buffer_percentage,
        working_hours_per_day,
        start_date,
    } = cmd
    {
        let estimation_input = load_estimation_input_from_yaml_file(&input)?;
        let team = TeamParameters {
            team_velocity: team_velocity.unwrap_or(estimation_input.team.team_velocity),
            sprint_length: sprint_length.unwrap_or(estimation_input.team.sprint_length),
            buffer_percentage: buffer_percentage
                .unwrap_or(estimation_input.team.buffer_percentage),
            working_hours_per_day: working_hours_per_day
                .unwrap_or(estimation_input.team.working_hours_per_day),
        };
        let mut session = EstimationSession::new()
            .with_mode(mode.or(estimation_input.mode).unwrap_or_default())
            .with_responses(estimation_input.responses)
            .with_team_parameters(team);

        if let Err(e) = session.calculate_estimate() {
            println!("{}", format_progress(session.responses()));
            return Err(e.into());
        }

        let completion_dates = if time {
            let projection = session.calculate_time_projection()?;
            let start_date = NaiveDate::parse_from_str(&start_date, "%Y-%m-%d")
                .map_err(|_| EstimateCommandError::InvalidStartDate(start_date.clone()))?;
            Some(CompletionDates::from_projection(start_date, &projection)?)
        } else {
            None
        };

        let report = EstimationReport::from_session(&session, completion_dates)?;
        info!(estimate = report.estimate, unit = %report.unit, "estimation finished");
        println!("{}", format_estimation_report(&report));

        if let Some(output) = output {
            let contents = serialize_report(&report, &output)?;
            std::fs::write(&output, contents).map_err(|source| EstimateCommandError::Write {
                path: output.clone(),
                source,
            })?;
            println!("Estimation report written to {output}");
        }
    }
    Ok(())
}

fn serialize_report(report: &EstimationReport, output: &str) -> Result<String, EstimateCommandError> {
    let is_json = Path::new(output)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_yaml::to_string(report)?)
    }
}
