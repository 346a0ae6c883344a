use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    QuickWin,
    StrategicBet,
    Experimental,
    Watchlist,
}

impl Quadrant {
    /// Buckets an (impact, effort) pair against the threshold. The boundary
    /// is inclusive on the high side: a score exactly at the threshold
    /// counts as "high", so impact = effort = threshold is a StrategicBet.
    pub fn from_scores(impact: f32, effort: f32, threshold: f32) -> Self {
        match (impact >= threshold, effort >= threshold) {
            (true, false) => Self::QuickWin,
            (true, true) => Self::StrategicBet,
            (false, false) => Self::Experimental,
            (false, true) => Self::Watchlist,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::QuickWin => "Quick Win",
            Self::StrategicBet => "Strategic Bet",
            Self::Experimental => "Experimental",
            Self::Watchlist => "Watchlist",
        }
    }
}
