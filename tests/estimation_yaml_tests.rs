use assert_fs::prelude::*;

use estimator::domain::estimate::EstimationMode;
use estimator::domain::question::QuestionId;
use estimator::services::estimation_yaml::{
    load_estimation_input_from_yaml_file, load_team_parameters_from_yaml_file,
};
use estimator::services::session::EstimationSession;

#[test]
fn loads_estimation_input_and_estimates_from_it() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("answers.yml");
    input
        .write_str(
            r#"mode: days
answers:
  dependencies: Few
  knowledge: Something
  repetition: Few
  complexity: Medium
  risk: Medium
  duration: Days
team:
  sprint_length: 5
"#,
        )
        .unwrap();

    let loaded = load_estimation_input_from_yaml_file(input.path()).unwrap();
    assert_eq!(loaded.mode, Some(EstimationMode::Days));
    assert_eq!(loaded.responses.get(QuestionId::Duration), Some(3));
    assert_eq!(loaded.team.sprint_length, 5.0);

    let mut session = EstimationSession::new()
        .with_mode(EstimationMode::Days)
        .with_responses(loaded.responses)
        .with_team_parameters(loaded.team);
    let estimate = session.calculate_estimate().unwrap();
    assert_eq!(estimate.value(), 3.0);
}

#[test]
fn loads_team_parameters_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let team = temp.child("team.yaml");
    team.write_str("team_velocity: 35\nworking_hours_per_day: 7\n").unwrap();

    let params = load_team_parameters_from_yaml_file(team.path()).unwrap();
    assert_eq!(params.team_velocity, 35.0);
    assert_eq!(params.sprint_length, 10.0);
    assert_eq!(params.buffer_percentage, 20.0);
    assert_eq!(params.working_hours_per_day, 7.0);
}
