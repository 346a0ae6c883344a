pub mod config;
pub mod error;
pub mod estimator;

pub use config::*;
pub use error::SizingError;
pub use estimator::*;
