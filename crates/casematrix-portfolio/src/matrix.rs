use std::cmp::Ordering;

use casematrix_core::Quadrant;
use serde::Serialize;

use crate::ClassifiedUseCase;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixEntry {
    pub id: String,
    pub title: String,
    pub impact_score: Option<f32>,
    pub effort_score: Option<f32>,
}

/// The 2x2 prioritization matrix. Each cell is sorted best-first: highest
/// impact, then lowest effort, then id for a stable order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatrixPlacement {
    pub quick_wins: Vec<MatrixEntry>,
    pub strategic_bets: Vec<MatrixEntry>,
    pub experimental: Vec<MatrixEntry>,
    pub watchlist: Vec<MatrixEntry>,
    pub unassigned: Vec<String>,
}

pub fn place(cases: &[ClassifiedUseCase]) -> MatrixPlacement {
    let mut placement = MatrixPlacement::default();

    for case in cases {
        let Some(quadrant) = case.classification.quadrant else {
            placement.unassigned.push(case.id.clone());
            continue;
        };
        let entry = MatrixEntry {
            id: case.id.clone(),
            title: case.title.clone(),
            impact_score: case.classification.impact_score,
            effort_score: case.classification.effort_score,
        };
        match quadrant {
            Quadrant::QuickWin => placement.quick_wins.push(entry),
            Quadrant::StrategicBet => placement.strategic_bets.push(entry),
            Quadrant::Experimental => placement.experimental.push(entry),
            Quadrant::Watchlist => placement.watchlist.push(entry),
        }
    }

    for cell in [
        &mut placement.quick_wins,
        &mut placement.strategic_bets,
        &mut placement.experimental,
        &mut placement.watchlist,
    ] {
        cell.sort_by(compare_entries);
    }
    placement.unassigned.sort();

    placement
}

/// The n best Quick Win candidates, in the same best-first order the
/// matrix cells use.
pub fn top_quick_wins(cases: &[ClassifiedUseCase], n: usize) -> Vec<MatrixEntry> {
    let mut wins = place(cases).quick_wins;
    wins.truncate(n);
    wins
}

fn compare_entries(a: &MatrixEntry, b: &MatrixEntry) -> Ordering {
    let impact_a = a.impact_score.unwrap_or(f32::NEG_INFINITY);
    let impact_b = b.impact_score.unwrap_or(f32::NEG_INFINITY);
    let effort_a = a.effort_score.unwrap_or(f32::INFINITY);
    let effort_b = b.effort_score.unwrap_or(f32::INFINITY);

    impact_b
        .total_cmp(&impact_a)
        .then_with(|| effort_a.total_cmp(&effort_b))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use casematrix_core::{LeverRatings, UseCase};
    use casematrix_scoring::{classify, ScoringWeights, DEFAULT_THRESHOLD};

    use super::*;

    fn classified(id: &str, impact: f32, effort: f32) -> ClassifiedUseCase {
        let use_case =
            UseCase::new(id, format!("case {id}")).with_levers(LeverRatings::split(impact, effort));
        let classification = classify(&use_case, &ScoringWeights::default(), DEFAULT_THRESHOLD)
            .expect("classify");
        ClassifiedUseCase::new(&use_case, classification)
    }

    #[test]
    fn cases_land_in_their_quadrant_cells() {
        let cases = vec![
            classified("a", 4.0, 2.0),
            classified("b", 4.0, 4.0),
            classified("c", 2.0, 2.0),
            classified("d", 2.0, 4.0),
        ];
        let placement = place(&cases);

        assert_eq!(placement.quick_wins.len(), 1);
        assert_eq!(placement.strategic_bets.len(), 1);
        assert_eq!(placement.experimental.len(), 1);
        assert_eq!(placement.watchlist.len(), 1);
        assert!(placement.unassigned.is_empty());
    }

    #[test]
    fn unscored_cases_collect_as_unassigned() {
        let use_case = UseCase::new("z", "not yet scored");
        let classification = classify(&use_case, &ScoringWeights::default(), DEFAULT_THRESHOLD)
            .expect("classify");
        let placement = place(&[ClassifiedUseCase::new(&use_case, classification)]);

        assert_eq!(placement.unassigned, vec!["z".to_string()]);
        assert!(placement.quick_wins.is_empty());
    }

    #[test]
    fn cells_sort_best_first() {
        let cases = vec![
            classified("low", 3.5, 2.5),
            classified("high", 5.0, 1.0),
            classified("mid", 4.0, 2.0),
        ];
        let placement = place(&cases);
        let order: Vec<&str> = placement
            .quick_wins
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(order, vec!["high", "mid", "low"]);
    }

    #[test]
    fn effort_breaks_impact_ties() {
        let cases = vec![classified("hard", 4.0, 2.5), classified("easy", 4.0, 1.0)];
        let placement = place(&cases);
        let order: Vec<&str> = placement
            .quick_wins
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(order, vec!["easy", "hard"]);
    }

    #[test]
    fn top_quick_wins_truncates() {
        let cases = vec![
            classified("a", 5.0, 1.0),
            classified("b", 4.0, 2.0),
            classified("c", 3.5, 2.5),
            classified("d", 2.0, 2.0),
        ];
        let top = top_quick_wins(&cases, 2);
        let ids: Vec<&str> = top.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
