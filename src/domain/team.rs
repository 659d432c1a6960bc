use serde::Serialize;

/// Team settings used to turn an estimate into time. Values are not range
/// checked here; see the time projector for the degenerate cases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeamParameters {
    /// Story points per sprint.
    pub team_velocity: f64,
    /// Working days per sprint.
    pub sprint_length: f64,
    pub buffer_percentage: f64,
    pub working_hours_per_day: f64,
}

impl TeamParameters {
    pub const DEFAULT_TEAM_VELOCITY: f64 = 20.0;
    pub const DEFAULT_SPRINT_LENGTH: f64 = 10.0;
    pub const DEFAULT_BUFFER_PERCENTAGE: f64 = 20.0;
    pub const DEFAULT_WORKING_HOURS_PER_DAY: f64 = 8.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn points_per_day(&self) -> f64 {
        self.team_velocity / self.sprint_length
    }
}

impl Default for TeamParameters {
    fn default() -> Self {
        Self {
            team_velocity: Self::DEFAULT_TEAM_VELOCITY,
            sprint_length: Self::DEFAULT_SPRINT_LENGTH,
            buffer_percentage: Self::DEFAULT_BUFFER_PERCENTAGE,
            working_hours_per_day: Self::DEFAULT_WORKING_HOURS_PER_DAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_team_parameters_match_a_two_week_sprint() {
        let params = TeamParameters::new();
        assert_eq!(params.team_velocity, 20.0);
        assert_eq!(params.sprint_length, 10.0);
        assert_eq!(params.buffer_percentage, 20.0);
        assert_eq!(params.working_hours_per_day, 8.0);
        assert_eq!(params.points_per_day(), 2.0);
    }
}
