use casematrix_core::{Lever, LeverRatings, MAX_RATING, MIN_RATING, Quadrant, UseCase};
use serde::Serialize;

use crate::error::ScoringError;
use crate::weights::ScoringWeights;

/// Default impact/effort split between the four quadrants.
pub const DEFAULT_THRESHOLD: f32 = 3.0;

/// Scores computed from the lever ratings, kept alongside the effective
/// values so the dashboard can show "derived vs. overridden".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedScores {
    pub impact_score: f32,
    pub effort_score: f32,
    pub quadrant: Quadrant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreSource {
    Derived,
    Manual,
}

/// Classification result for one use case. Effective fields are `None`
/// when the use case has nothing to place it with; a `None` quadrant is
/// the "Unassigned" state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub impact_score: Option<f32>,
    pub effort_score: Option<f32>,
    pub quadrant: Option<Quadrant>,
    pub source: ScoreSource,
    pub derived: Option<DerivedScores>,
}

impl Classification {
    pub fn is_unassigned(&self) -> bool {
        self.quadrant.is_none()
    }
}

/// Computes composite Impact and Effort scores for a use case and buckets
/// the pair into a quadrant. Manual overrides win over derived values, but
/// the derived scores are always computed and reported when lever ratings
/// exist.
pub fn classify(
    use_case: &UseCase,
    weights: &ScoringWeights,
    threshold: f32,
) -> Result<Classification, ScoringError> {
    if !threshold.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&threshold) {
        return Err(ScoringError::InvalidThreshold(threshold));
    }
    weights.validate()?;
    use_case.overrides.validate()?;

    let derived = match &use_case.levers {
        Some(levers) => {
            levers.validate()?;
            let impact_score = composite(levers, weights, &Lever::IMPACT);
            let effort_score = composite(levers, weights, &Lever::EFFORT);
            Some(DerivedScores {
                impact_score,
                effort_score,
                quadrant: Quadrant::from_scores(impact_score, effort_score, threshold),
            })
        }
        None => None,
    };

    let overrides = &use_case.overrides;
    let impact_score = overrides
        .impact_score
        .or(derived.map(|d| d.impact_score));
    let effort_score = overrides
        .effort_score
        .or(derived.map(|d| d.effort_score));
    let quadrant = overrides.quadrant.or_else(|| match (impact_score, effort_score) {
        (Some(impact), Some(effort)) => Some(Quadrant::from_scores(impact, effort, threshold)),
        _ => None,
    });

    let source = if overrides.is_empty() {
        ScoreSource::Derived
    } else {
        ScoreSource::Manual
    };

    Ok(Classification {
        impact_score,
        effort_score,
        quadrant,
        source,
        derived,
    })
}

fn composite(levers: &LeverRatings, weights: &ScoringWeights, group: &[Lever; 5]) -> f32 {
    group
        .iter()
        .map(|&lever| levers.get(lever) * weights.weight(lever) / 100.0)
        .sum()
}
