use serde::Serialize;

/// Calendar view of an estimate. Day values carry one decimal, hours are whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeProjection {
    pub base_days: f64,
    pub buffered_days: f64,
    pub total_hours: f64,
    pub optimistic_days: f64,
    pub expected_days: f64,
    pub pessimistic_days: f64,
}
