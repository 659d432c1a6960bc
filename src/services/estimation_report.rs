use serde::Serialize;

use crate::domain::estimate::{EstimationMode, SeverityBand};
use crate::domain::team::TeamParameters;
use crate::domain::time_projection::TimeProjection;
use crate::services::estimate_mapper::MAX_SCORE;
use crate::services::estimation_error::EstimationError;
use crate::services::session::EstimationSession;
use crate::services::workdays::CompletionDates;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnswerSummary {
    pub question: String,
    pub label: String,
    pub value: u8,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EstimationReport {
    pub mode: EstimationMode,
    pub estimate: f64,
    pub unit: String,
    pub total_score: u32,
    pub max_score: u32,
    pub severity: SeverityBand,
    pub answers: Vec<AnswerSummary>,
    pub team: TeamParameters,
    pub time_projection: Option<TimeProjection>,
    pub completion_dates: Option<CompletionDates>,
    pub methods: Vec<String>,
}

impl EstimationReport {
    /// Builds a report from a session that already holds an estimate for its
    /// active mode.
    pub fn from_session(
        session: &EstimationSession,
        completion_dates: Option<CompletionDates>,
    ) -> Result<Self, EstimationError> {
        let estimate = session
            .current_estimate()
            .ok_or(EstimationError::NoEstimateYet)?;
        let answers = session
            .responses()
            .iter()
            .filter_map(|(id, _)| {
                session.responses().selected_option(id).map(|option| AnswerSummary {
                    question: id.question().title.to_string(),
                    label: option.label.to_string(),
                    value: option.value,
                })
            })
            .collect();
        let time_projection = session.time_projection().copied();
        let methods = if time_projection.is_some() {
            method_lines(session.mode(), session.team_parameters())
        } else {
            Vec::new()
        };

        Ok(Self {
            mode: session.mode(),
            estimate: estimate.value(),
            unit: session.mode().unit().to_string(),
            total_score: session.total_score(),
            max_score: MAX_SCORE,
            severity: session.severity(),
            answers,
            team: *session.team_parameters(),
            time_projection,
            completion_dates,
            methods,
        })
    }
}

fn method_lines(mode: EstimationMode, team: &TeamParameters) -> Vec<String> {
    let base = match mode {
        EstimationMode::StoryPoints => "Story points converted using team velocity",
        EstimationMode::Days => "Direct days estimation",
    };
    vec![
        format!("Base Estimation: {base}"),
        format!(
            "Buffer: {}% added for unexpected issues",
            team.buffer_percentage
        ),
        "Three-Point: PERT formula for realistic time ranges".to_string(),
        format!(
            "Team Velocity: {} points per {} days",
            team.team_velocity, team.sprint_length
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::session_answered_with;

    #[test]
    fn report_requires_an_estimate() {
        let session = session_answered_with([1, 1, 1, 1, 1, 1]);
        assert_eq!(
            EstimationReport::from_session(&session, None),
            Err(EstimationError::NoEstimateYet)
        );
    }

    #[test]
    fn report_lists_answers_in_question_order() {
        let mut session = session_answered_with([1, 3, 2, 1, 2, 3]);
        session.calculate_estimate().unwrap();

        let report = EstimationReport::from_session(&session, None).unwrap();

        assert_eq!(report.estimate, 3.0);
        assert_eq!(report.unit, "Story Points");
        assert_eq!(report.total_score, 12);
        assert_eq!(report.max_score, 18);
        assert_eq!(report.severity, SeverityBand::Medium);
        let labels: Vec<&str> = report.answers.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["None", "Nothing", "Few", "Easy", "Medium", "Days"]);
        assert_eq!(report.time_projection, None);
        assert!(report.methods.is_empty());
    }

    #[test]
    fn report_describes_methods_once_time_is_projected() {
        let mut session = session_answered_with([2, 2, 2, 2, 2, 2]);
        session.set_mode(EstimationMode::Days);
        session.calculate_estimate().unwrap();
        session.calculate_time_projection().unwrap();

        let report = EstimationReport::from_session(&session, None).unwrap();

        assert_eq!(report.unit, "Days");
        assert_eq!(report.time_projection.map(|p| p.base_days), Some(2.0));
        assert_eq!(report.methods[0], "Base Estimation: Direct days estimation");
        assert_eq!(report.methods[1], "Buffer: 20% added for unexpected issues");
        assert_eq!(report.methods[3], "Team Velocity: 20 points per 10 days");
    }
}
