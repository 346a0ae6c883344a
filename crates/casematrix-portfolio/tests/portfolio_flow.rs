use casematrix_core::{LeverRatings, ManualOverrides, Quadrant, UseCase};
use casematrix_portfolio::{place, summarize, top_quick_wins, ClassifiedUseCase};
use casematrix_scoring::{classify, ScoringWeights, DEFAULT_THRESHOLD};
use casematrix_sizing::{estimate, SizeEstimate, TShirtSizeConfig};

fn scored(id: &str, title: &str, impact: f32, effort: f32) -> UseCase {
    UseCase::new(id, title).with_levers(LeverRatings::split(impact, effort))
}

#[test]
fn classify_place_summarize_and_size_a_small_portfolio() {
    let weights = ScoringWeights::default();
    let size_config = TShirtSizeConfig::default();

    let mut overridden = scored("uc-4", "Telematics pricing model", 2.0, 2.0);
    overridden.overrides = ManualOverrides {
        quadrant: Some(Quadrant::StrategicBet),
        justification: Some("flagship initiative for the group plan".to_string()),
        ..ManualOverrides::default()
    };

    let use_cases = vec![
        scored("uc-1", "Claims triage assistant", 4.5, 1.5),
        scored("uc-2", "Underwriting copilot", 4.0, 4.0),
        scored("uc-3", "Broker email summarizer", 2.0, 1.5),
        overridden,
        UseCase::new("uc-5", "Catastrophe exposure chat"),
    ];

    let classified: Vec<ClassifiedUseCase> = use_cases
        .iter()
        .map(|uc| {
            let c = classify(uc, &weights, DEFAULT_THRESHOLD).expect("classify");
            ClassifiedUseCase::new(uc, c)
        })
        .collect();

    let placement = place(&classified);
    assert_eq!(placement.quick_wins.len(), 1);
    assert_eq!(placement.strategic_bets.len(), 2);
    assert_eq!(placement.experimental.len(), 1);
    assert_eq!(placement.unassigned, vec!["uc-5".to_string()]);

    let summary = summarize(&classified);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.overridden, 1);
    assert_eq!(summary.unassigned, 1);

    let top = top_quick_wins(&classified, 3);
    assert_eq!(top.first().map(|e| e.id.as_str()), Some("uc-1"));

    // Size every case that has scores; the overridden quadrant kept its
    // derived scores, so it still sizes normally.
    for case in &classified {
        let (Some(impact), Some(effort)) = (
            case.classification.impact_score,
            case.classification.effort_score,
        ) else {
            continue;
        };
        let size = estimate(impact, effort, &size_config).expect("estimate");
        assert_ne!(size, SizeEstimate::Unsized, "case {} unsized", case.id);
    }
}

#[test]
fn overridden_quadrant_flows_through_to_the_matrix() {
    let weights = ScoringWeights::default();
    let mut use_case = scored("uc-9", "Renewal churn model", 2.0, 2.0);
    use_case.overrides = ManualOverrides {
        quadrant: Some(Quadrant::QuickWin),
        justification: Some("pilot already funded".to_string()),
        ..ManualOverrides::default()
    };

    let classification = classify(&use_case, &weights, DEFAULT_THRESHOLD).expect("classify");
    let derived = classification.derived.expect("derived scores");
    assert_eq!(derived.quadrant, Quadrant::Experimental);

    let placement = place(&[ClassifiedUseCase::new(&use_case, classification)]);
    assert_eq!(placement.quick_wins.len(), 1);
    assert!(placement.experimental.is_empty());
}
