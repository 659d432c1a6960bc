use tracing::{debug, warn};

use crate::domain::estimate::{Estimate, EstimationMode, SeverityBand};
use crate::domain::question::QuestionId;
use crate::domain::responses::ResponseSet;
use crate::domain::team::TeamParameters;
use crate::domain::time_projection::TimeProjection;
use crate::services::estimate_mapper::{
    map_score_to_days, map_score_to_story_points, score_severity_band,
};
use crate::services::estimation_error::EstimationError;
use crate::services::time_projector::project_time;

/// State of one estimation form.
///
/// Story point and day estimates are kept apart so that switching the mode
/// does not throw away a result computed in the other mode. Any change to the
/// responses clears both, together with the time projection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimationSession {
    responses: ResponseSet,
    mode: EstimationMode,
    team: TeamParameters,
    story_points: Option<u32>,
    day_estimate: Option<f64>,
    time_projection: Option<TimeProjection>,
}

impl EstimationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: EstimationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_responses(mut self, responses: ResponseSet) -> Self {
        self.responses = responses;
        self.clear_results();
        self
    }

    pub fn with_team_parameters(mut self, team: TeamParameters) -> Self {
        self.team = team;
        self
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn mode(&self) -> EstimationMode {
        self.mode
    }

    pub fn team_parameters(&self) -> &TeamParameters {
        &self.team
    }

    pub fn select_option(&mut self, question: QuestionId, value: u8) -> Result<(), EstimationError> {
        self.responses = self.responses.select_option(question, value)?;
        debug!(%question, value, answered = self.responses.answered_count(), "option selected");
        self.clear_results();
        Ok(())
    }

    pub fn set_mode(&mut self, mode: EstimationMode) {
        debug!(%mode, "estimation mode changed");
        self.mode = mode;
    }

    /// Existing results are kept; the projection is only refreshed by
    /// [`Self::calculate_time_projection`].
    pub fn set_team_parameters(&mut self, team: TeamParameters) {
        debug!(?team, "team parameters changed");
        self.team = team;
    }

    pub fn team_parameters_mut(&mut self) -> &mut TeamParameters {
        &mut self.team
    }

    pub fn calculate_estimate(&mut self) -> Result<Estimate, EstimationError> {
        if !self.responses.all_answered() {
            let answered = self.responses.answered_count();
            warn!(answered, "estimate requested before all questions were answered");
            return Err(EstimationError::IncompleteResponses { answered });
        }

        let score = self.responses.total_score();
        let estimate = match self.mode {
            EstimationMode::StoryPoints => {
                let points = map_score_to_story_points(score);
                self.story_points = Some(points);
                Estimate::StoryPoints(points)
            }
            EstimationMode::Days => {
                let days = map_score_to_days(score);
                self.day_estimate = Some(days);
                Estimate::Days(days)
            }
        };
        debug!(score, %estimate, mode = %self.mode, "estimate calculated");
        Ok(estimate)
    }

    pub fn calculate_time_projection(&mut self) -> Result<TimeProjection, EstimationError> {
        let projection = project_time(self.current_estimate(), self.mode, &self.team)
            .inspect_err(|e| warn!(error = %e, "time projection rejected"))?;
        debug!(?projection, "time projection calculated");
        self.time_projection = Some(projection);
        Ok(projection)
    }

    /// Clears responses and results. Mode and team parameters survive.
    pub fn reset(&mut self) {
        self.responses = self.responses.reset();
        self.clear_results();
        debug!("session reset");
    }

    /// The estimate that belongs to the active mode, if any.
    pub fn current_estimate(&self) -> Option<Estimate> {
        match self.mode {
            EstimationMode::StoryPoints => self.story_points.map(Estimate::StoryPoints),
            EstimationMode::Days => self.day_estimate.map(Estimate::Days),
        }
    }

    pub fn time_projection(&self) -> Option<&TimeProjection> {
        self.time_projection.as_ref()
    }

    pub fn total_score(&self) -> u32 {
        self.responses.total_score()
    }

    pub fn progress_fraction(&self) -> f64 {
        self.responses.progress_fraction()
    }

    pub fn severity(&self) -> SeverityBand {
        score_severity_band(self.total_score())
    }

    fn clear_results(&mut self) {
        self.story_points = None;
        self.day_estimate = None;
        self.time_projection = None;
    }
}
