pub mod classifier;
pub mod error;
pub mod weights;

pub use classifier::*;
pub use error::ScoringError;
pub use weights::*;
