use serde::Serialize;

use crate::config::TShirtSizeConfig;
use crate::error::SizingError;

/// Resource estimate for a scored use case. `Unsized` is a legitimate
/// outcome ("TBD" in the dashboard) for score pairs outside every bucket,
/// not a failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SizeEstimate {
    Sized {
        bucket: String,
        cost_range: (u32, u32),
        duration_weeks: (u32, u32),
        team_size: u32,
    },
    Unsized,
}

impl SizeEstimate {
    pub fn label(&self) -> &str {
        match self {
            Self::Sized { bucket, .. } => bucket,
            Self::Unsized => "TBD",
        }
    }
}

/// Walks the buckets in configured order and returns the first whose
/// ceilings contain the score pair. Never guesses: a pair beyond every
/// ceiling comes back `Unsized`.
pub fn estimate(
    impact_score: f32,
    effort_score: f32,
    config: &TShirtSizeConfig,
) -> Result<SizeEstimate, SizingError> {
    for (name, value) in [("impact", impact_score), ("effort", effort_score)] {
        if !value.is_finite() || !(1.0..=5.0).contains(&value) {
            return Err(SizingError::ScoreOutOfRange { name, value });
        }
    }
    config.validate()?;

    let matched = config
        .buckets
        .iter()
        .find(|b| impact_score <= b.impact_ceiling && effort_score <= b.effort_ceiling);

    Ok(match matched {
        Some(bucket) => SizeEstimate::Sized {
            bucket: bucket.name.clone(),
            cost_range: (bucket.cost_min, bucket.cost_max),
            duration_weeks: (bucket.weeks_min, bucket.weeks_max),
            team_size: bucket.team_size,
        },
        None => SizeEstimate::Unsized,
    })
}
