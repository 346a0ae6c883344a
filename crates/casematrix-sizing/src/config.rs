use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::SizingError;

const MIN_SCORE: f32 = 1.0;
const MAX_SCORE: f32 = 5.0;

/// One named size bucket. A score pair belongs to the bucket when both
/// scores are at or below its ceilings; buckets are tried in configured
/// order and the first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeBucket {
    pub name: String,
    pub impact_ceiling: f32,
    pub effort_ceiling: f32,
    pub cost_min: u32,
    pub cost_max: u32,
    pub weeks_min: u32,
    pub weeks_max: u32,
    pub team_size: u32,
}

/// Administrator-configured, ordered bucket list. Ceilings must grow
/// monotonically so the first-match rule yields exactly one deterministic
/// bucket per score pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TShirtSizeConfig {
    pub buckets: Vec<SizeBucket>,
}

impl Default for TShirtSizeConfig {
    fn default() -> Self {
        Self {
            buckets: vec![
                SizeBucket {
                    name: "S".to_string(),
                    impact_ceiling: 2.5,
                    effort_ceiling: 2.0,
                    cost_min: 10_000,
                    cost_max: 25_000,
                    weeks_min: 2,
                    weeks_max: 4,
                    team_size: 2,
                },
                SizeBucket {
                    name: "M".to_string(),
                    impact_ceiling: 3.5,
                    effort_ceiling: 3.0,
                    cost_min: 25_000,
                    cost_max: 75_000,
                    weeks_min: 4,
                    weeks_max: 8,
                    team_size: 3,
                },
                SizeBucket {
                    name: "L".to_string(),
                    impact_ceiling: 4.5,
                    effort_ceiling: 4.0,
                    cost_min: 75_000,
                    cost_max: 150_000,
                    weeks_min: 8,
                    weeks_max: 16,
                    team_size: 5,
                },
                SizeBucket {
                    name: "XL".to_string(),
                    impact_ceiling: 5.0,
                    effort_ceiling: 5.0,
                    cost_min: 150_000,
                    cost_max: 400_000,
                    weeks_min: 16,
                    weeks_max: 32,
                    team_size: 8,
                },
            ],
        }
    }
}

impl TShirtSizeConfig {
    pub fn validate(&self) -> Result<(), SizingError> {
        if self.buckets.is_empty() {
            return Err(SizingError::EmptyConfig);
        }

        let mut names: HashSet<&str> = HashSet::new();
        let mut previous: Option<&SizeBucket> = None;
        for bucket in &self.buckets {
            for (axis, value) in [
                ("impact", bucket.impact_ceiling),
                ("effort", bucket.effort_ceiling),
            ] {
                if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                    return Err(SizingError::InvalidCeiling {
                        name: bucket.name.clone(),
                        axis,
                        value,
                    });
                }
            }
            if bucket.cost_min > bucket.cost_max {
                return Err(SizingError::InvalidRange {
                    name: bucket.name.clone(),
                    field: "cost",
                });
            }
            if bucket.weeks_min > bucket.weeks_max {
                return Err(SizingError::InvalidRange {
                    name: bucket.name.clone(),
                    field: "duration",
                });
            }
            if bucket.team_size == 0 {
                return Err(SizingError::InvalidTeamSize {
                    name: bucket.name.clone(),
                });
            }
            if !names.insert(bucket.name.as_str()) {
                return Err(SizingError::DuplicateName(bucket.name.clone()));
            }

            if let Some(prev) = previous {
                if bucket.impact_ceiling < prev.impact_ceiling
                    || bucket.effort_ceiling < prev.effort_ceiling
                {
                    return Err(SizingError::CeilingRegression {
                        name: bucket.name.clone(),
                    });
                }
                let impact_eq = (bucket.impact_ceiling - prev.impact_ceiling).abs() < f32::EPSILON;
                let effort_eq = (bucket.effort_ceiling - prev.effort_ceiling).abs() < f32::EPSILON;
                if impact_eq && effort_eq {
                    return Err(SizingError::ShadowedBucket {
                        name: bucket.name.clone(),
                    });
                }
            }
            previous = Some(bucket);
        }

        Ok(())
    }
}
