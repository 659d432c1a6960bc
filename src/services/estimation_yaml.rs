use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::estimate::{EstimationMode, UnknownEstimationMode};
use crate::domain::question::{QuestionId, UnknownQuestionId};
use crate::domain::responses::{InvalidOption, ResponseSet};
use crate::domain::team::TeamParameters;

#[derive(Error, Debug)]
pub enum EstimationYamlError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse estimation yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error(transparent)]
    UnknownQuestion(#[from] UnknownQuestionId),
    #[error("'{label}' is not an option of question {question}")]
    UnknownOption { question: QuestionId, label: String },
    #[error(transparent)]
    InvalidOption(#[from] InvalidOption),
    #[error(transparent)]
    UnknownMode(#[from] UnknownEstimationMode),
}

/// Answers, mode and team settings read from an input file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimationInput {
    pub mode: Option<EstimationMode>,
    pub responses: ResponseSet,
    pub team: TeamParameters,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EstimationRecord {
    mode: Option<String>,
    #[serde(default)]
    answers: BTreeMap<String, AnswerRecord>,
    team: Option<TeamRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerRecord {
    Value(u8),
    Label(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TeamRecord {
    team_velocity: Option<f64>,
    sprint_length: Option<f64>,
    buffer_percentage: Option<f64>,
    working_hours_per_day: Option<f64>,
}

impl From<TeamRecord> for TeamParameters {
    fn from(record: TeamRecord) -> Self {
        let defaults = TeamParameters::default();
        TeamParameters {
            team_velocity: record.team_velocity.unwrap_or(defaults.team_velocity),
            sprint_length: record.sprint_length.unwrap_or(defaults.sprint_length),
            buffer_percentage: record
                .buffer_percentage
                .unwrap_or(defaults.buffer_percentage),
            working_hours_per_day: record
                .working_hours_per_day
                .unwrap_or(defaults.working_hours_per_day),
        }
    }
}

pub fn load_estimation_input_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<EstimationInput, EstimationYamlError> {
    let path = path.as_ref();
    let contents = read_file(path)?;
    deserialize_estimation_input_from_yaml_str(&contents)
}

/// An empty document is a valid input with nothing answered.
pub fn deserialize_estimation_input_from_yaml_str(
    input: &str,
) -> Result<EstimationInput, EstimationYamlError> {
    if input.trim().is_empty() {
        return Ok(EstimationInput::default());
    }
    let record: EstimationRecord = serde_yaml::from_str(input)?;

    let mode = record
        .mode
        .as_deref()
        .map(str::parse::<EstimationMode>)
        .transpose()?;

    let mut responses = ResponseSet::new();
    for (key, answer) in record.answers {
        let question: QuestionId = key.parse()?;
        let value = answer_value(question, answer)?;
        responses = responses.select_option(question, value)?;
    }

    Ok(EstimationInput {
        mode,
        responses,
        team: record.team.map(TeamParameters::from).unwrap_or_default(),
    })
}

/// Loads a file holding only team settings, at top level.
pub fn load_team_parameters_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<TeamParameters, EstimationYamlError> {
    let contents = read_file(path.as_ref())?;
    deserialize_team_parameters_from_yaml_str(&contents)
}

pub fn deserialize_team_parameters_from_yaml_str(
    input: &str,
) -> Result<TeamParameters, EstimationYamlError> {
    if input.trim().is_empty() {
        return Ok(TeamParameters::default());
    }
    let record: TeamRecord = serde_yaml::from_str(input)?;
    Ok(record.into())
}

fn read_file(path: &Path) -> Result<String, EstimationYamlError> {
    std::fs::read_to_string(path).map_err(|source| EstimationYamlError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn answer_value(question: QuestionId, answer: AnswerRecord) -> Result<u8, EstimationYamlError> {
    match answer {
        AnswerRecord::Value(value) => Ok(value),
        AnswerRecord::Label(label) => question
            .question()
            .option_by_label(&label)
            .map(|option| option.value)
            .ok_or(EstimationYamlError::UnknownOption { question, label }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answers_given_as_values_or_labels() {
        let yaml = r#"
mode: days
answers:
  dependencies: 2
  knowledge: Something
  repetition: never
  complexity: 3
  risk: Low
  duration: Hours
"#;
        let input = deserialize_estimation_input_from_yaml_str(yaml).unwrap();

        assert_eq!(input.mode, Some(EstimationMode::Days));
        assert!(input.responses.all_answered());
        assert_eq!(input.responses.get(QuestionId::Knowledge), Some(2));
        assert_eq!(input.responses.get(QuestionId::Repetition), Some(3));
        assert_eq!(input.responses.total_score(), 13);
        assert_eq!(input.team, TeamParameters::default());
    }

    #[test]
    fn missing_answers_stay_unanswered() {
        let input = deserialize_estimation_input_from_yaml_str("answers:\n  risk: High\n").unwrap();
        assert_eq!(input.mode, None);
        assert_eq!(input.responses.answered_count(), 1);
        assert_eq!(input.responses.get(QuestionId::Risk), Some(3));
    }

    #[test]
    fn empty_input_is_all_defaults() {
        let input = deserialize_estimation_input_from_yaml_str("  \n").unwrap();
        assert_eq!(input, EstimationInput::default());
    }

    #[test]
    fn team_section_overrides_only_given_fields() {
        let yaml = "team:\n  team_velocity: 30\n  buffer_percentage: 0\n";
        let input = deserialize_estimation_input_from_yaml_str(yaml).unwrap();
        assert_eq!(input.team.team_velocity, 30.0);
        assert_eq!(input.team.buffer_percentage, 0.0);
        assert_eq!(input.team.sprint_length, 10.0);
        assert_eq!(input.team.working_hours_per_day, 8.0);
    }

    #[test]
    fn unknown_question_is_rejected() {
        let err = deserialize_estimation_input_from_yaml_str("answers:\n  effort: 2\n").unwrap_err();
        assert!(matches!(err, EstimationYamlError::UnknownQuestion(UnknownQuestionId(key)) if key == "effort"));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err =
            deserialize_estimation_input_from_yaml_str("answers:\n  complexity: Trivial\n").unwrap_err();
        assert!(matches!(
            err,
            EstimationYamlError::UnknownOption { question: QuestionId::Complexity, .. }
        ));
    }

    #[test]
    fn value_outside_the_options_is_rejected() {
        let err = deserialize_estimation_input_from_yaml_str("answers:\n  risk: 5\n").unwrap_err();
        assert!(matches!(err, EstimationYamlError::InvalidOption(_)));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = deserialize_estimation_input_from_yaml_str("mode: weeks\n").unwrap_err();
        assert!(matches!(err, EstimationYamlError::UnknownMode(_)));
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let err = deserialize_estimation_input_from_yaml_str("answers: [risk\n").unwrap_err();
        assert!(matches!(err, EstimationYamlError::Parse(_)));
    }

    #[test]
    fn team_file_reads_top_level_fields() {
        let team =
            deserialize_team_parameters_from_yaml_str("sprint_length: 5\nworking_hours_per_day: 6.5\n")
                .unwrap();
        assert_eq!(team.sprint_length, 5.0);
        assert_eq!(team.working_hours_per_day, 6.5);
        assert_eq!(team.team_velocity, 20.0);
    }

    #[test]
    fn missing_file_reports_its_path() {
        let temp = assert_fs::TempDir::new().unwrap();
        let missing = temp.path().join("missing.yaml");

        let err = load_estimation_input_from_yaml_file(&missing).unwrap_err();
        assert!(matches!(err, EstimationYamlError::Read { path, .. } if path == missing));
    }
}
