use casematrix_core::Lever;
use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// How far a weight group's sum may drift from 100 before it is rejected.
pub const WEIGHT_SUM_TOLERANCE: f32 = 0.01;

const EQUAL_WEIGHT: f32 = 20.0;

/// Percentage weights for the five impact levers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactWeights {
    pub revenue_impact: f32,
    pub cost_savings: f32,
    pub risk_reduction: f32,
    pub broker_partner_experience: f32,
    pub strategic_fit: f32,
}

impl Default for ImpactWeights {
    fn default() -> Self {
        Self {
            revenue_impact: EQUAL_WEIGHT,
            cost_savings: EQUAL_WEIGHT,
            risk_reduction: EQUAL_WEIGHT,
            broker_partner_experience: EQUAL_WEIGHT,
            strategic_fit: EQUAL_WEIGHT,
        }
    }
}

/// Percentage weights for the five effort levers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffortWeights {
    pub data_readiness: f32,
    pub technical_complexity: f32,
    pub change_impact: f32,
    pub model_risk: f32,
    pub adoption_readiness: f32,
}

impl Default for EffortWeights {
    fn default() -> Self {
        Self {
            data_readiness: EQUAL_WEIGHT,
            technical_complexity: EQUAL_WEIGHT,
            change_impact: EQUAL_WEIGHT,
            model_risk: EQUAL_WEIGHT,
            adoption_readiness: EQUAL_WEIGHT,
        }
    }
}

/// Administrator-configured weighting of the ten levers. Created with equal
/// defaults, persisted by the config store, and passed explicitly to
/// `classify` so scoring never reads ambient state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default)]
    pub impact: ImpactWeights,
    #[serde(default)]
    pub effort: EffortWeights,
}

impl ScoringWeights {
    pub fn weight(&self, lever: Lever) -> f32 {
        match lever {
            Lever::RevenueImpact => self.impact.revenue_impact,
            Lever::CostSavings => self.impact.cost_savings,
            Lever::RiskReduction => self.impact.risk_reduction,
            Lever::BrokerPartnerExperience => self.impact.broker_partner_experience,
            Lever::StrategicFit => self.impact.strategic_fit,
            Lever::DataReadiness => self.effort.data_readiness,
            Lever::TechnicalComplexity => self.effort.technical_complexity,
            Lever::ChangeImpact => self.effort.change_impact,
            Lever::ModelRisk => self.effort.model_risk,
            Lever::AdoptionReadiness => self.effort.adoption_readiness,
        }
    }

    /// Each weight must be a percentage in [0, 100] and each group must sum
    /// to 100. A group that sums to anything else would push composite
    /// scores outside the 1-5 scale, so it is rejected rather than
    /// normalized.
    pub fn validate(&self) -> Result<(), ScoringError> {
        self.validate_group("impact", &Lever::IMPACT)?;
        self.validate_group("effort", &Lever::EFFORT)
    }

    fn validate_group(&self, group: &'static str, levers: &[Lever; 5]) -> Result<(), ScoringError> {
        let mut sum = 0.0_f32;
        for &lever in levers {
            let value = self.weight(lever);
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ScoringError::WeightOutOfRange {
                    group,
                    lever: lever.name(),
                    value,
                });
            }
            sum += value;
        }
        if (sum - 100.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringError::WeightSumInvalid { group, sum });
        }
        Ok(())
    }
}
