use thiserror::Error;

use crate::domain::responses::InvalidOption;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimationError {
    #[error("please answer all questions before calculating ({answered} of 6 answered)")]
    IncompleteResponses { answered: usize },
    #[error("please calculate story points or days first")]
    NoEstimateYet,
    #[error("{parameter} is out of range: {value}")]
    ParameterOutOfRange { parameter: &'static str, value: f64 },
    #[error("time estimation for these team parameters is not finite ({quantity} = {value})")]
    ProjectionOutOfRange { quantity: &'static str, value: f64 },
    #[error(transparent)]
    InvalidOption(#[from] InvalidOption),
}
