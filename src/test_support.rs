use chrono::NaiveDate;

use crate::domain::question::QuestionId;
use crate::domain::responses::ResponseSet;
use crate::services::session::EstimationSession;

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Values in questionnaire order: dependencies, knowledge, repetition,
/// complexity, risk, duration.
pub fn answered_with(values: [u8; 6]) -> ResponseSet {
    QuestionId::ALL
        .into_iter()
        .zip(values)
        .fold(ResponseSet::new(), |responses, (id, value)| {
            responses.select_option(id, value).unwrap()
        })
}

pub fn session_answered_with(values: [u8; 6]) -> EstimationSession {
    EstimationSession::new().with_responses(answered_with(values))
}
