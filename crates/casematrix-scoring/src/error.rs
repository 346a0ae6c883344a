use casematrix_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{group} weight {lever} must be a percentage between 0 and 100, got {value}")]
    WeightOutOfRange {
        group: &'static str,
        lever: &'static str,
        value: f32,
    },

    #[error("{group} weights must sum to 100, got {sum}")]
    WeightSumInvalid { group: &'static str, sum: f32 },

    #[error("quadrant threshold must be a finite score between 1 and 5, got {0}")]
    InvalidThreshold(f32),
}
