pub mod matrix;
pub mod summary;

pub use matrix::*;
pub use summary::*;

use casematrix_core::UseCase;
use casematrix_scoring::Classification;

/// A use case paired with its classification, as consumed by the
/// reporting views.
#[derive(Debug, Clone)]
pub struct ClassifiedUseCase {
    pub id: String,
    pub title: String,
    pub classification: Classification,
}

impl ClassifiedUseCase {
    pub fn new(use_case: &UseCase, classification: Classification) -> Self {
        Self {
            id: use_case.id.clone(),
            title: use_case.title.clone(),
            classification,
        }
    }
}
