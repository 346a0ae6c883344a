use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lowest legal rating for a business lever.
pub const MIN_RATING: f32 = 1.0;
/// Highest legal rating for a business lever.
pub const MAX_RATING: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lever {
    RevenueImpact,
    CostSavings,
    RiskReduction,
    BrokerPartnerExperience,
    StrategicFit,
    DataReadiness,
    TechnicalComplexity,
    ChangeImpact,
    ModelRisk,
    AdoptionReadiness,
}

impl Lever {
    /// The five levers that feed the composite Impact score.
    pub const IMPACT: [Self; 5] = [
        Self::RevenueImpact,
        Self::CostSavings,
        Self::RiskReduction,
        Self::BrokerPartnerExperience,
        Self::StrategicFit,
    ];

    /// The five levers that feed the composite Effort score.
    pub const EFFORT: [Self; 5] = [
        Self::DataReadiness,
        Self::TechnicalComplexity,
        Self::ChangeImpact,
        Self::ModelRisk,
        Self::AdoptionReadiness,
    ];

    pub const ALL: [Self; 10] = [
        Self::RevenueImpact,
        Self::CostSavings,
        Self::RiskReduction,
        Self::BrokerPartnerExperience,
        Self::StrategicFit,
        Self::DataReadiness,
        Self::TechnicalComplexity,
        Self::ChangeImpact,
        Self::ModelRisk,
        Self::AdoptionReadiness,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::RevenueImpact => "revenue_impact",
            Self::CostSavings => "cost_savings",
            Self::RiskReduction => "risk_reduction",
            Self::BrokerPartnerExperience => "broker_partner_experience",
            Self::StrategicFit => "strategic_fit",
            Self::DataReadiness => "data_readiness",
            Self::TechnicalComplexity => "technical_complexity",
            Self::ChangeImpact => "change_impact",
            Self::ModelRisk => "model_risk",
            Self::AdoptionReadiness => "adoption_readiness",
        }
    }
}

/// The ten 1-5 business ratings captured for a use case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeverRatings {
    pub revenue_impact: f32,
    pub cost_savings: f32,
    pub risk_reduction: f32,
    pub broker_partner_experience: f32,
    pub strategic_fit: f32,
    pub data_readiness: f32,
    pub technical_complexity: f32,
    pub change_impact: f32,
    pub model_risk: f32,
    pub adoption_readiness: f32,
}

impl LeverRatings {
    pub fn get(&self, lever: Lever) -> f32 {
        match lever {
            Lever::RevenueImpact => self.revenue_impact,
            Lever::CostSavings => self.cost_savings,
            Lever::RiskReduction => self.risk_reduction,
            Lever::BrokerPartnerExperience => self.broker_partner_experience,
            Lever::StrategicFit => self.strategic_fit,
            Lever::DataReadiness => self.data_readiness,
            Lever::TechnicalComplexity => self.technical_complexity,
            Lever::ChangeImpact => self.change_impact,
            Lever::ModelRisk => self.model_risk,
            Lever::AdoptionReadiness => self.adoption_readiness,
        }
    }

    /// Same rating on all ten levers.
    pub fn uniform(value: f32) -> Self {
        Self {
            revenue_impact: value,
            cost_savings: value,
            risk_reduction: value,
            broker_partner_experience: value,
            strategic_fit: value,
            change_impact: value,
            data_readiness: value,
            technical_complexity: value,
            model_risk: value,
            adoption_readiness: value,
        }
    }

    /// One rating for the impact group, another for the effort group.
    pub fn split(impact: f32, effort: f32) -> Self {
        Self {
            revenue_impact: impact,
            cost_savings: impact,
            risk_reduction: impact,
            broker_partner_experience: impact,
            strategic_fit: impact,
            data_readiness: effort,
            technical_complexity: effort,
            change_impact: effort,
            model_risk: effort,
            adoption_readiness: effort,
        }
    }

    /// Rejects any rating outside [1, 5]. Out-of-range values are a
    /// data-entry mistake and must never be clamped into a valid score.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for lever in Lever::ALL {
            let value = self.get(lever);
            if !value.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&value) {
                return Err(ValidationError::LeverOutOfRange {
                    lever: lever.name(),
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_ratings_are_valid() {
        assert!(LeverRatings::uniform(3.0).validate().is_ok());
        assert!(LeverRatings::uniform(1.0).validate().is_ok());
        assert!(LeverRatings::uniform(5.0).validate().is_ok());
    }

    #[test]
    fn rejects_rating_above_five() {
        let mut ratings = LeverRatings::uniform(3.0);
        ratings.model_risk = 5.5;
        let err = ratings.validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::LeverOutOfRange {
                lever: "model_risk",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_rating() {
        let mut ratings = LeverRatings::uniform(2.0);
        ratings.revenue_impact = 0.0;
        assert!(ratings.validate().is_err());
    }

    #[test]
    fn rejects_nan_rating() {
        let mut ratings = LeverRatings::uniform(2.0);
        ratings.strategic_fit = f32::NAN;
        assert!(ratings.validate().is_err());
    }

    #[test]
    fn split_assigns_groups() {
        let ratings = LeverRatings::split(5.0, 1.0);
        for lever in Lever::IMPACT {
            assert!((ratings.get(lever) - 5.0).abs() < 1e-6);
        }
        for lever in Lever::EFFORT {
            assert!((ratings.get(lever) - 1.0).abs() < 1e-6);
        }
    }
}
