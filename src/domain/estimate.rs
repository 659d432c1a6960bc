use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimationMode {
    #[default]
    StoryPoints,
    Days,
}

impl EstimationMode {
    pub fn unit(self) -> &'static str {
        match self {
            EstimationMode::StoryPoints => "Story Points",
            EstimationMode::Days => "Days",
        }
    }
}

impl fmt::Display for EstimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimationMode::StoryPoints => f.write_str("story_points"),
            EstimationMode::Days => f.write_str("days"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown estimation mode '{0}' (expected story-points or days)")]
pub struct UnknownEstimationMode(pub String);

impl FromStr for EstimationMode {
    type Err = UnknownEstimationMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "story-points" | "story_points" | "storypoints" | "points" | "sp" => {
                Ok(EstimationMode::StoryPoints)
            }
            "days" | "day" => Ok(EstimationMode::Days),
            _ => Err(UnknownEstimationMode(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    StoryPoints(u32),
    Days(f64),
}

impl Estimate {
    pub fn mode(&self) -> EstimationMode {
        match self {
            Estimate::StoryPoints(_) => EstimationMode::StoryPoints,
            Estimate::Days(_) => EstimationMode::Days,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Estimate::StoryPoints(points) => f64::from(*points),
            Estimate::Days(days) => *days,
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimate::StoryPoints(points) => write!(f, "{points}"),
            Estimate::Days(days) => write!(f, "{days}"),
        }
    }
}

/// Display classification of a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeverityBand::Low => "low",
            SeverityBand::Medium => "medium",
            SeverityBand::High => "high",
            SeverityBand::Critical => "critical",
        };
        f.write_str(name)
    }
}
