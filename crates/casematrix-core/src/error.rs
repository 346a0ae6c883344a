use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("lever {lever} must be a rating between 1 and 5, got {value}")]
    LeverOutOfRange { lever: &'static str, value: f32 },

    #[error("manual {field} must be between 1 and 5, got {value}")]
    ManualScoreOutOfRange { field: &'static str, value: f32 },

    #[error("manual override of {field} requires a justification")]
    MissingJustification { field: &'static str },
}
