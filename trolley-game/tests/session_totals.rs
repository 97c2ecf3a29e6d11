use trolley_game::{
    Decision, EmbeddedData, Rating, ScenarioCatalog, SessionStats, start_session,
};

fn decisions_for_mask(mask: u8, count: usize) -> Vec<Decision> {
    (0..count)
        .map(|bit| {
            if mask & (1 << bit) == 0 {
                Decision::Intervene
            } else {
                Decision::Abstain
            }
        })
        .collect()
}

#[test]
fn totals_match_chosen_branches_for_every_decision_pattern() {
    let catalog = ScenarioCatalog::load_from_static().unwrap();
    let count = catalog.len();
    for mask in 0..(1u8 << count) {
        let picks = decisions_for_mask(mask, count);
        let mut session = start_session(&EmbeddedData).unwrap();

        let mut expected = SessionStats::default();
        for (scenario, decision) in catalog.iter().zip(&picks) {
            let (saved, killed) = match decision {
                Decision::Intervene => (scenario.saved_if_pull, scenario.killed_if_pull),
                Decision::Abstain => (scenario.saved_if_stay, scenario.killed_if_stay),
            };
            expected.saved += saved;
            expected.killed += killed;

            let record = session.decide(*decision).unwrap();
            assert_eq!((record.saved, record.killed), (saved, killed));
            session.complete_scenario(None).unwrap();
        }

        assert!(session.is_finished());
        assert_eq!(session.stats(), expected, "mask {mask:#06b}");
        assert_eq!(session.summary().stats, expected);
    }
}

#[test]
fn all_intervene_and_all_abstain_totals() {
    let run = |decision: Decision| {
        let mut session = start_session(&EmbeddedData).unwrap();
        while !session.is_finished() {
            session.decide(decision).unwrap();
            session.complete_scenario(None).unwrap();
        }
        session.stats()
    };
    assert_eq!(
        run(Decision::Intervene),
        SessionStats {
            saved: 13,
            killed: 4
        }
    );
    assert_eq!(
        run(Decision::Abstain),
        SessionStats {
            saved: 0,
            killed: 13
        }
    );
}

#[test]
fn summary_reports_first_of_tied_maximum_ratings() {
    let mut session = start_session(&EmbeddedData).unwrap();
    for value in [3u8, 5, 5, 1] {
        session.decide(Decision::Intervene).unwrap();
        session
            .complete_scenario(Some(Rating::try_from(value).unwrap()))
            .unwrap();
    }
    let summary = session.summary();
    let worst = summary.most_uncomfortable.unwrap();
    assert_eq!(worst.scenario_name, "Footbridge Push");
    assert_eq!(worst.rating.value(), 5);
    assert_eq!(session.discomfort().entries().len(), 4);
    let per_decision: Vec<u8> = summary
        .decisions
        .iter()
        .filter_map(|record| record.discomfort.map(Rating::value))
        .collect();
    assert_eq!(per_decision, vec![3, 5, 5, 1]);
}

#[test]
fn summary_without_ratings_has_no_worst_scenario() {
    let mut session = start_session(&EmbeddedData).unwrap();
    while !session.is_finished() {
        session.decide(Decision::Abstain).unwrap();
        session.complete_scenario(None).unwrap();
    }
    let summary = session.summary();
    assert!(summary.most_uncomfortable.is_none());
    assert_eq!(summary.decisions.len(), 4);
    assert!(summary.decisions.iter().all(|record| record.discomfort.is_none()));
    assert!(
        summary
            .decisions
            .iter()
            .all(|record| record.decision == Decision::Abstain)
    );
}

#[test]
fn summary_serializes_with_lowercase_decisions() {
    let mut session = start_session(&EmbeddedData).unwrap();
    session.decide(Decision::Intervene).unwrap();
    session.complete_scenario(None).unwrap();
    let json = serde_json::to_value(session.summary()).unwrap();
    assert_eq!(json["decisions"][0]["decision"], "intervene");
    assert_eq!(json["stats"]["saved"], 5);
    assert!(json["decisions"][0]["discomfort"].is_null());
}
