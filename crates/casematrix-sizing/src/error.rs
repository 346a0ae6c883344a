use thiserror::Error;

#[derive(Debug, Error)]
pub enum SizingError {
    #[error("{name} score must be a finite value between 1 and 5, got {value}")]
    ScoreOutOfRange { name: &'static str, value: f32 },

    #[error("size config has no buckets")]
    EmptyConfig,

    #[error("bucket {name}: {axis} ceiling {value} is outside the 1-5 score range")]
    InvalidCeiling {
        name: String,
        axis: &'static str,
        value: f32,
    },

    #[error("bucket {name}: {field} range has min above max")]
    InvalidRange { name: String, field: &'static str },

    #[error("bucket {name}: team size must be at least 1")]
    InvalidTeamSize { name: String },

    #[error("duplicate bucket name {0}")]
    DuplicateName(String),

    #[error("bucket {name} has a ceiling below the bucket before it")]
    CeilingRegression { name: String },

    #[error("bucket {name} is shadowed by the bucket before it and can never match")]
    ShadowedBucket { name: String },
}
