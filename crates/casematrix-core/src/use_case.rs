use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::lever::{LeverRatings, MAX_RATING, MIN_RATING};
use crate::quadrant::Quadrant;

/// A use-case record as supplied by the data-access layer. Lever ratings
/// are absent until someone has scored the use case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UseCase {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub levers: Option<LeverRatings>,
    #[serde(default)]
    pub overrides: ManualOverrides,
}

impl UseCase {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            levers: None,
            overrides: ManualOverrides::default(),
        }
    }

    pub fn with_levers(mut self, levers: LeverRatings) -> Self {
        self.levers = Some(levers);
        self
    }
}

/// Administrator-supplied values that supersede the derived scores for a
/// single use case. Any override must carry a justification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualOverrides {
    pub impact_score: Option<f32>,
    pub effort_score: Option<f32>,
    pub quadrant: Option<Quadrant>,
    pub justification: Option<String>,
}

impl ManualOverrides {
    pub fn is_empty(&self) -> bool {
        self.impact_score.is_none() && self.effort_score.is_none() && self.quadrant.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("impact score", self.impact_score),
            ("effort score", self.effort_score),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                if !value.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&value) {
                    return Err(ValidationError::ManualScoreOutOfRange { field, value });
                }
            }
        }

        let justified = self
            .justification
            .as_ref()
            .is_some_and(|j| !j.trim().is_empty());
        if !self.is_empty() && !justified {
            let field = if self.impact_score.is_some() {
                "impact score"
            } else if self.effort_score.is_some() {
                "effort score"
            } else {
                "quadrant"
            };
            return Err(ValidationError::MissingJustification { field });
        }

        Ok(())
    }
}
