use casematrix_core::Quadrant;
use casematrix_scoring::ScoreSource;
use serde::Serialize;

use crate::ClassifiedUseCase;

/// Executive rollup of a classified portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total: usize,
    pub quick_wins: usize,
    pub strategic_bets: usize,
    pub experimental: usize,
    pub watchlist: usize,
    pub unassigned: usize,
    pub overridden: usize,
    pub mean_impact: Option<f32>,
    pub mean_effort: Option<f32>,
}

impl PortfolioSummary {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "total": self.total,
            "quadrants": {
                "quick_wins": self.quick_wins,
                "strategic_bets": self.strategic_bets,
                "experimental": self.experimental,
                "watchlist": self.watchlist,
            },
            "unassigned": self.unassigned,
            "overridden": self.overridden,
            "mean_impact": self.mean_impact,
            "mean_effort": self.mean_effort,
        })
    }
}

pub fn summarize(cases: &[ClassifiedUseCase]) -> PortfolioSummary {
    let mut summary = PortfolioSummary {
        total: cases.len(),
        quick_wins: 0,
        strategic_bets: 0,
        experimental: 0,
        watchlist: 0,
        unassigned: 0,
        overridden: 0,
        mean_impact: None,
        mean_effort: None,
    };

    let mut impact_sum = 0.0_f32;
    let mut impact_count = 0_usize;
    let mut effort_sum = 0.0_f32;
    let mut effort_count = 0_usize;

    for case in cases {
        match case.classification.quadrant {
            Some(Quadrant::QuickWin) => summary.quick_wins += 1,
            Some(Quadrant::StrategicBet) => summary.strategic_bets += 1,
            Some(Quadrant::Experimental) => summary.experimental += 1,
            Some(Quadrant::Watchlist) => summary.watchlist += 1,
            None => summary.unassigned += 1,
        }
        if case.classification.source == ScoreSource::Manual {
            summary.overridden += 1;
        }
        if let Some(impact) = case.classification.impact_score {
            impact_sum += impact;
            impact_count += 1;
        }
        if let Some(effort) = case.classification.effort_score {
            effort_sum += effort;
            effort_count += 1;
        }
    }

    if impact_count > 0 {
        summary.mean_impact = Some(impact_sum / impact_count as f32);
    }
    if effort_count > 0 {
        summary.mean_effort = Some(effort_sum / effort_count as f32);
    }

    summary
}
