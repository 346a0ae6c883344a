pub mod error;
pub mod lever;
pub mod quadrant;
pub mod use_case;

pub use error::ValidationError;
pub use lever::*;
pub use quadrant::*;
pub use use_case::*;
