use crate::domain::estimate::{Estimate, EstimationMode};
use crate::domain::team::TeamParameters;
use crate::domain::time_projection::TimeProjection;
use crate::services::estimation_error::EstimationError;

const OPTIMISTIC_FACTOR: f64 = 0.8;
const PESSIMISTIC_FACTOR: f64 = 1.5;
const MOST_LIKELY_WEIGHT: f64 = 4.0;

/// Converts an estimate into days and hours for the given team.
///
/// The estimate must belong to `mode`. Three-point values are derived from the
/// unbuffered base days; the buffer only affects `buffered_days` and
/// `total_hours`.
///
/// # Errors
/// - [`EstimationError::NoEstimateYet`] when there is no estimate for `mode`.
/// - [`EstimationError::ParameterOutOfRange`] when a team parameter is not
///   finite, or when velocity or sprint length is zero in story point mode.
/// - [`EstimationError::ProjectionOutOfRange`] when finite parameters still
///   push a projected value past the range of `f64`.
pub fn project_time(
    estimate: Option<Estimate>,
    mode: EstimationMode,
    params: &TeamParameters,
) -> Result<TimeProjection, EstimationError> {
    let estimate = match estimate {
        Some(estimate) if estimate.mode() == mode => estimate,
        _ => return Err(EstimationError::NoEstimateYet),
    };
    check_parameters(mode, params)?;

    let base_days = match estimate {
        Estimate::StoryPoints(points) => f64::from(points) / params.points_per_day(),
        Estimate::Days(days) => days,
    };
    let buffered_days = base_days * (1.0 + params.buffer_percentage / 100.0);
    let total_hours = buffered_days * params.working_hours_per_day;

    let optimistic_days = base_days * OPTIMISTIC_FACTOR;
    let pessimistic_days = base_days * PESSIMISTIC_FACTOR;
    let expected_days =
        (optimistic_days + MOST_LIKELY_WEIGHT * base_days + pessimistic_days) / 6.0;

    let projection = TimeProjection {
        base_days: round_to_tenths(base_days),
        buffered_days: round_to_tenths(buffered_days),
        total_hours: round_half_up(total_hours),
        optimistic_days: round_to_tenths(optimistic_days),
        expected_days: round_to_tenths(expected_days),
        pessimistic_days: round_to_tenths(pessimistic_days),
    };
    check_projection(&projection)?;
    Ok(projection)
}

fn check_projection(projection: &TimeProjection) -> Result<(), EstimationError> {
    let named = [
        ("base days", projection.base_days),
        ("buffered days", projection.buffered_days),
        ("total hours", projection.total_hours),
        ("optimistic days", projection.optimistic_days),
        ("expected days", projection.expected_days),
        ("pessimistic days", projection.pessimistic_days),
    ];
    match named.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((quantity, value)) => Err(EstimationError::ProjectionOutOfRange { quantity, value }),
        None => Ok(()),
    }
}

fn check_parameters(mode: EstimationMode, params: &TeamParameters) -> Result<(), EstimationError> {
    let named = [
        ("team velocity", params.team_velocity),
        ("sprint length", params.sprint_length),
        ("buffer percentage", params.buffer_percentage),
        ("working hours per day", params.working_hours_per_day),
    ];
    if let Some((parameter, value)) = named.into_iter().find(|(_, value)| !value.is_finite()) {
        return Err(EstimationError::ParameterOutOfRange { parameter, value });
    }

    if mode == EstimationMode::StoryPoints {
        if params.team_velocity == 0.0 {
            return Err(EstimationError::ParameterOutOfRange {
                parameter: "team velocity",
                value: params.team_velocity,
            });
        }
        if params.sprint_length == 0.0 {
            return Err(EstimationError::ParameterOutOfRange {
                parameter: "sprint length",
                value: params.sprint_length,
            });
        }
    }
    Ok(())
}

/// Rounds halves towards positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn round_to_tenths(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}
