use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Number of batting positions in a full lineup
pub const LINEUP_SIZE: usize = 11;

/// Number of recent innings that make up a player's form window
pub const FORM_WINDOW: usize = 4;

/// Top-order slots, filled purely by current form
const TOP_ORDER_SLOTS: usize = 5;

/// Protected lower-order slots (batting positions 9-11)
const TAIL_SLOTS: usize = 3;

/// Zero-based index where the protected tail starts in the published order
const TAIL_START: usize = 8;

/// Errors for batting order recalculation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineupError {
    #[error("cannot recalculate: batting order or player form data is empty")]
    InsufficientData,

    #[error("batting order must hold exactly 11 distinct names (got {count}, duplicates: {duplicates:?})")]
    MalformedLineup {
        count: usize,
        duplicates: Vec<String>,
    },
}

/// A player's name paired with the sum of their last-four scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub name: String,
    pub total_score: f64,
}

/// Outcome of one recalculation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecalculationResult {
    /// The re-ranked batting order, a permutation of the input lineup
    pub order: Vec<String>,
    /// Per-player last-four totals, in final batting order
    pub summary: Vec<ScoreSummary>,
    /// Players whose form data is missing or not exactly the window length.
    /// Non-empty means the result is display-only and must not be published.
    pub incomplete: Vec<String>,
}

/// Whether a recalculated order may be published
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishReadiness {
    pub ready: bool,
    /// Players with missing or wrong-length form data
    pub incomplete: Vec<String>,
}

/// Re-rank a published batting order from recent form.
///
/// The first five slots go to the five best last-four aggregates. The
/// players holding positions 9-11 in the published order keep their
/// lower-order role unless promoted into the top five, in which case the
/// vacated slots are backfilled by descending form. Everyone else bats in
/// the middle order, best form first. Ties keep their published relative
/// order.
///
/// Players without a full form window still rank (with a sum of 0) so a
/// provisional order can be shown; they are listed in
/// [`RecalculationResult::incomplete`] and block publishing.
pub fn recalculate(
    current_order: &[String],
    forms: &HashMap<String, Vec<f64>>,
) -> Result<RecalculationResult, LineupError> {
    if current_order.is_empty() || forms.is_empty() {
        return Err(LineupError::InsufficientData);
    }
    validate_lineup(current_order)?;

    // Stable sort: equal sums keep their published relative order.
    let mut by_form: Vec<&String> = current_order.iter().collect();
    by_form.sort_by(|a, b| form_sum(forms, b).total_cmp(&form_sum(forms, a)));

    let top_five: Vec<&String> = by_form[..TOP_ORDER_SLOTS].to_vec();

    // Positions 9-11 of the published order are protected, independent of
    // form, unless the player also earned a top-five slot.
    let mut tail: Vec<&String> = current_order[TAIL_START..]
        .iter()
        .filter(|name| !top_five.contains(name))
        .collect();

    // Vacated tail slots are refilled from the rest of the field, best
    // form first.
    if tail.len() < TAIL_SLOTS {
        let pool: Vec<&String> = by_form
            .iter()
            .copied()
            .filter(|name| !top_five.contains(name) && !tail.contains(name))
            .collect();
        for name in pool {
            if tail.len() == TAIL_SLOTS {
                break;
            }
            tail.push(name);
        }
    }

    let remaining = by_form
        .iter()
        .copied()
        .filter(|name| !top_five.contains(name) && !tail.contains(name));

    let order: Vec<String> = top_five
        .iter()
        .copied()
        .chain(tail.iter().copied())
        .chain(remaining)
        .cloned()
        .collect();

    debug_assert_eq!(order.len(), current_order.len());

    let summary = order
        .iter()
        .map(|name| ScoreSummary {
            name: name.clone(),
            total_score: form_sum(forms, name),
        })
        .collect();

    Ok(RecalculationResult {
        incomplete: incomplete_players(current_order, forms),
        order,
        summary,
    })
}

/// Check that every player in the lineup has a complete form window.
///
/// Publishing a recalculated order is refused until all eleven players
/// have exactly [`FORM_WINDOW`] recorded scores.
pub fn publish_readiness(
    current_order: &[String],
    forms: &HashMap<String, Vec<f64>>,
) -> PublishReadiness {
    let incomplete = incomplete_players(current_order, forms);
    PublishReadiness {
        ready: current_order.len() == LINEUP_SIZE && incomplete.is_empty(),
        incomplete,
    }
}

/// Sum of the trailing form window; missing or short data ranks as 0
fn form_sum(forms: &HashMap<String, Vec<f64>>, name: &str) -> f64 {
    match forms.get(name) {
        Some(scores) if scores.len() >= FORM_WINDOW => {
            scores[scores.len() - FORM_WINDOW..].iter().sum()
        }
        _ => 0.0,
    }
}

fn incomplete_players(current_order: &[String], forms: &HashMap<String, Vec<f64>>) -> Vec<String> {
    current_order
        .iter()
        .filter(|name| forms.get(name.as_str()).map(Vec::len) != Some(FORM_WINDOW))
        .cloned()
        .collect()
}

fn validate_lineup(current_order: &[String]) -> Result<(), LineupError> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for name in current_order {
        if !seen.insert(name.as_str()) && !duplicates.contains(name) {
            duplicates.push(name.clone());
        }
    }
    if current_order.len() != LINEUP_SIZE || !duplicates.is_empty() {
        return Err(LineupError::MalformedLineup {
            count: current_order.len(),
            duplicates,
        });
    }
    Ok(())
}
