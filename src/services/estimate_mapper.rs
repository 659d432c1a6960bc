//! Maps a total questionnaire score onto the discrete estimate scales.
//!
//! Each scale is an ascending table of inclusive upper bounds followed by a
//! fallback for anything above the last bound.

use crate::domain::estimate::{Estimate, EstimationMode, SeverityBand};

pub const MIN_SCORE: u32 = 6;
pub const MAX_SCORE: u32 = 18;

pub struct BandTable<T: 'static> {
    bands: &'static [(u32, T)],
    fallback: T,
}

impl<T: Copy + 'static> BandTable<T> {
    pub const fn new(bands: &'static [(u32, T)], fallback: T) -> Self {
        Self { bands, fallback }
    }

    pub fn lookup(&self, score: u32) -> T {
        self.bands
            .iter()
            .find(|(upper_bound, _)| score <= *upper_bound)
            .map(|(_, result)| *result)
            .unwrap_or(self.fallback)
    }
}

pub const STORY_POINT_BANDS: BandTable<u32> = BandTable::new(
    &[(8, 1), (10, 2), (12, 3), (14, 5), (16, 8), (17, 13)],
    21,
);

pub const DAY_BANDS: BandTable<f64> = BandTable::new(
    &[(8, 0.5), (10, 1.0), (12, 2.0), (14, 3.0), (16, 5.0), (17, 8.0)],
    13.0,
);

// Coincides with the estimate bands at 8/12/16 only.
pub const SEVERITY_BANDS: BandTable<SeverityBand> = BandTable::new(
    &[
        (8, SeverityBand::Low),
        (12, SeverityBand::Medium),
        (16, SeverityBand::High),
    ],
    SeverityBand::Critical,
);

pub fn map_score_to_story_points(score: u32) -> u32 {
    STORY_POINT_BANDS.lookup(score)
}

pub fn map_score_to_days(score: u32) -> f64 {
    DAY_BANDS.lookup(score)
}

pub fn score_severity_band(score: u32) -> SeverityBand {
    SEVERITY_BANDS.lookup(score)
}

pub fn map_score(score: u32, mode: EstimationMode) -> Estimate {
    match mode {
        EstimationMode::StoryPoints => Estimate::StoryPoints(map_score_to_story_points(score)),
        EstimationMode::Days => Estimate::Days(map_score_to_days(score)),
    }
}
