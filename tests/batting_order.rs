//! End-to-end recalculation flow through the public crate API: raw string
//! score sheets in, a published-ready order out.

use pavilion::{publish_readiness, recalculate, LineupError, ScoreSheet};
use std::collections::HashMap;

fn lineup(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn sheet(entries: &[&str]) -> ScoreSheet {
    ScoreSheet {
        lastfour: entries.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

/// The eleven score sheets the store would hand back, keyed by name
fn squad_sheets() -> Vec<(String, ScoreSheet)> {
    [
        ("Arun", ["1", "2", "3", "4"]),        // 10
        ("Bumrah", ["50", "20", "10", "10"]),  // 90
        ("Chahal", ["5", "0", "0", "0"]),      // 5
        ("Dhawan", ["40", "20", "10", "10"]),  // 80
        ("Eshan", ["70", "0", "0", "0"]),      // 70
        ("Farhan", ["60", "0", "0", "0"]),     // 60
        ("Gill", ["1", "0", "0", "0"]),        // 1
        ("Hardik", ["2", "0", "0", "0"]),      // 2
        ("Ishant", ["3", "0", "0", "0"]),      // 3
        ("Jadeja", ["4", "0", "0", "0"]),      // 4
        ("Kohli", ["25", "25", "0", "0"]),     // 50
    ]
    .into_iter()
    .map(|(name, entries)| (name.to_string(), sheet(&entries)))
    .collect()
}

fn forms_of(sheets: &[(String, ScoreSheet)]) -> HashMap<String, Vec<f64>> {
    sheets
        .iter()
        .map(|(name, sheet)| (name.clone(), sheet.last_four()))
        .collect()
}

#[test]
fn recalculates_from_raw_score_sheets() {
    let order = lineup(&[
        "Arun", "Bumrah", "Chahal", "Dhawan", "Eshan", "Farhan", "Gill", "Hardik", "Ishant",
        "Jadeja", "Kohli",
    ]);
    let sheets = squad_sheets();
    let forms = forms_of(&sheets);

    let result = recalculate(&order, &forms).unwrap();

    // Kohli is promoted out of the tail, Ishant and Jadeja keep their
    // slots, and Arun backfills as the best of the rest.
    assert_eq!(
        result.order,
        lineup(&[
            "Bumrah", "Dhawan", "Eshan", "Farhan", "Kohli", "Ishant", "Jadeja", "Arun", "Chahal",
            "Gill", "Hardik",
        ])
    );
    assert!(result.incomplete.is_empty());

    let readiness = publish_readiness(&order, &forms);
    assert!(readiness.ready);
}

#[test]
fn unparseable_entries_rank_as_zero_but_stay_publishable() {
    let order = lineup(&[
        "Arun", "Bumrah", "Chahal", "Dhawan", "Eshan", "Farhan", "Gill", "Hardik", "Ishant",
        "Jadeja", "Kohli",
    ]);
    let mut sheets = squad_sheets();
    // Four recorded innings, none of them parseable as a score.
    sheets[1].1 = sheet(&["dnb", "dnb", "dnb", "dnb"]);
    let forms = forms_of(&sheets);

    let result = recalculate(&order, &forms).unwrap();
    let bumrah = result
        .summary
        .iter()
        .find(|s| s.name == "Bumrah")
        .unwrap();
    assert_eq!(bumrah.total_score, 0.0);

    // The window is complete, so publishing is not blocked.
    assert!(publish_readiness(&order, &forms).ready);
}

#[test]
fn publish_refused_until_every_window_is_complete() {
    let order = lineup(&[
        "Arun", "Bumrah", "Chahal", "Dhawan", "Eshan", "Farhan", "Gill", "Hardik", "Ishant",
        "Jadeja", "Kohli",
    ]);
    let mut sheets = squad_sheets();
    sheets[6].1 = sheet(&["12", "8"]); // Gill has only two innings recorded

    let forms = forms_of(&sheets);

    // Best-effort result still comes back as a full permutation...
    let result = recalculate(&order, &forms).unwrap();
    assert_eq!(result.order.len(), order.len());
    assert_eq!(result.incomplete, vec!["Gill".to_string()]);

    // ...but the publisher must refuse it.
    let readiness = publish_readiness(&order, &forms);
    assert!(!readiness.ready);
    assert_eq!(readiness.incomplete, vec!["Gill".to_string()]);
}

#[test]
fn identical_inputs_produce_byte_identical_results() {
    let order = lineup(&[
        "Arun", "Bumrah", "Chahal", "Dhawan", "Eshan", "Farhan", "Gill", "Hardik", "Ishant",
        "Jadeja", "Kohli",
    ]);
    let forms = forms_of(&squad_sheets());

    let first = serde_json::to_string(&recalculate(&order, &forms).unwrap()).unwrap();
    let second = serde_json::to_string(&recalculate(&order, &forms).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_inputs_are_refused_outright() {
    let forms = forms_of(&squad_sheets());

    assert_eq!(
        recalculate(&[], &forms).unwrap_err(),
        LineupError::InsufficientData
    );
    assert_eq!(
        recalculate(&lineup(&["Arun"]), &HashMap::new()).unwrap_err(),
        LineupError::InsufficientData
    );
}
