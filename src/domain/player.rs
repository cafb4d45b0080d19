use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A squad member and their scoring record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub born: Option<NaiveDate>,
    pub birthplace: Option<String>,
    pub battingstyle: Option<String>,
    pub bowlingstyle: Option<String>,
    pub debut: Option<NaiveDate>,
    /// Base64 image payload, stored and served untouched
    pub image: Option<String>,
    pub scores: ScoreSheet,
}

/// Per-player scoring document, stored as JSONB alongside the player row.
///
/// Entries are kept as strings exactly as submitted; the numeric views
/// parse on read and treat unparseable entries as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSheet {
    #[serde(default)]
    pub runs: Vec<String>,
    #[serde(default)]
    pub balls: Vec<String>,
    #[serde(default)]
    pub wickets: Vec<String>,
    /// Scores from the most recent innings, the form window for batting
    /// order recalculation
    #[serde(default)]
    pub lastfour: Vec<String>,
    #[serde(default)]
    pub innings: Vec<String>,
    #[serde(default)]
    pub career: CareerSheet,
}

/// Career-long tallies mirroring the per-match arrays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerSheet {
    #[serde(default)]
    pub runs: Vec<String>,
    #[serde(default)]
    pub balls: Vec<String>,
    #[serde(default)]
    pub wickets: Vec<String>,
    #[serde(default)]
    pub innings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking: Option<String>,
}

/// Score entries appended after a match. Every field is optional; arrays
/// are appended to both the per-match and career tallies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreEntries {
    #[serde(default)]
    pub runs: Option<Vec<String>>,
    #[serde(default)]
    pub balls: Option<Vec<String>>,
    #[serde(default)]
    pub wickets: Option<Vec<String>>,
    #[serde(default)]
    pub lastfour: Option<Vec<String>>,
    #[serde(default)]
    pub innings: Option<Vec<String>>,
}

impl ScoreSheet {
    /// The form window parsed with float semantics; unparseable entries
    /// count as 0
    pub fn last_four(&self) -> Vec<f64> {
        self.lastfour
            .iter()
            .map(|s| s.trim().parse::<f64>().unwrap_or(0.0))
            .collect()
    }

    /// Career batting average: parseable run entries summed over the total
    /// number of recorded matches
    pub fn career_average(&self) -> f64 {
        let matches = self.career.runs.len();
        if matches == 0 {
            return 0.0;
        }
        let total: i64 = self
            .career
            .runs
            .iter()
            .filter_map(|s| s.trim().parse::<i64>().ok())
            .sum();
        total as f64 / matches as f64
    }

    /// Most-recent-match impact: last runs entry plus ten per wicket taken
    pub fn match_impact(&self) -> i64 {
        let runs = self
            .runs
            .last()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(0);
        let wickets = self
            .wickets
            .last()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(0);
        runs + 10 * wickets
    }

    /// Append new entries to the per-match arrays and mirror runs, balls,
    /// wickets and innings into the career tallies
    pub fn append(&mut self, entries: &ScoreEntries) {
        if let Some(runs) = &entries.runs {
            self.runs.extend(runs.iter().cloned());
            self.career.runs.extend(runs.iter().cloned());
        }
        if let Some(balls) = &entries.balls {
            self.balls.extend(balls.iter().cloned());
            self.career.balls.extend(balls.iter().cloned());
        }
        if let Some(wickets) = &entries.wickets {
            self.wickets.extend(wickets.iter().cloned());
            self.career.wickets.extend(wickets.iter().cloned());
        }
        if let Some(lastfour) = &entries.lastfour {
            self.lastfour.extend(lastfour.iter().cloned());
        }
        if let Some(innings) = &entries.innings {
            self.innings.extend(innings.iter().cloned());
            self.career.innings.extend(innings.iter().cloned());
        }
    }

    /// Correct the most recent entries: replace the last element of each
    /// provided array (append when the array was still empty), in both the
    /// per-match and career tallies
    pub fn correct_last(&mut self, runs: Option<&str>, balls: Option<&str>, wickets: Option<&str>) {
        if let Some(runs) = runs {
            replace_last(&mut self.runs, runs);
            replace_last(&mut self.career.runs, runs);
        }
        if let Some(balls) = balls {
            replace_last(&mut self.balls, balls);
            replace_last(&mut self.career.balls, balls);
        }
        if let Some(wickets) = wickets {
            replace_last(&mut self.wickets, wickets);
            replace_last(&mut self.career.wickets, wickets);
        }
    }

    /// Record one more wicket entry for the current match
    pub fn add_wicket(&mut self, wicket: &str) {
        self.wickets.push(wicket.to_string());
        self.career.wickets.push(wicket.to_string());
    }
}

fn replace_last(entries: &mut Vec<String>, value: &str) {
    match entries.last_mut() {
        Some(last) => *last = value.to_string(),
        None => entries.push(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_with(lastfour: &[&str]) -> ScoreSheet {
        ScoreSheet {
            lastfour: lastfour.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_last_four_parses_float_entries() {
        let sheet = sheet_with(&["12", "7.5", "0", "33"]);
        assert_eq!(sheet.last_four(), vec![12.0, 7.5, 0.0, 33.0]);
    }

    #[test]
    fn test_last_four_treats_garbage_as_zero() {
        let sheet = sheet_with(&["12", "dnb", " 4 ", ""]);
        assert_eq!(sheet.last_four(), vec![12.0, 0.0, 4.0, 0.0]);
    }

    #[test]
    fn test_career_average_counts_unparseable_matches() {
        // Three recorded matches, only two parse. The denominator stays 3.
        let sheet = ScoreSheet {
            career: CareerSheet {
                runs: vec!["30".to_string(), "retired".to_string(), "60".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(sheet.career_average(), 30.0);
    }

    #[test]
    fn test_career_average_empty_is_zero() {
        assert_eq!(ScoreSheet::default().career_average(), 0.0);
    }

    #[test]
    fn test_match_impact_weights_wickets() {
        let sheet = ScoreSheet {
            runs: vec!["10".to_string(), "45".to_string()],
            wickets: vec!["0".to_string(), "2".to_string()],
            ..Default::default()
        };
        assert_eq!(sheet.match_impact(), 65);
    }

    #[test]
    fn test_append_mirrors_into_career() {
        let mut sheet = ScoreSheet::default();
        sheet.append(&ScoreEntries {
            runs: Some(vec!["44".to_string()]),
            wickets: Some(vec!["1".to_string()]),
            lastfour: Some(vec!["44".to_string()]),
            ..Default::default()
        });

        assert_eq!(sheet.runs, vec!["44"]);
        assert_eq!(sheet.career.runs, vec!["44"]);
        assert_eq!(sheet.wickets, vec!["1"]);
        assert_eq!(sheet.career.wickets, vec!["1"]);
        // lastfour is a rolling per-match window, never a career tally
        assert_eq!(sheet.lastfour, vec!["44"]);
        assert!(sheet.career.innings.is_empty());
    }

    #[test]
    fn test_correct_last_replaces_most_recent_entry() {
        let mut sheet = ScoreSheet::default();
        sheet.append(&ScoreEntries {
            runs: Some(vec!["10".to_string(), "20".to_string()]),
            ..Default::default()
        });

        sheet.correct_last(Some("25"), None, None);
        assert_eq!(sheet.runs, vec!["10", "25"]);
        assert_eq!(sheet.career.runs, vec!["10", "25"]);
    }

    #[test]
    fn test_correct_last_appends_when_empty() {
        let mut sheet = ScoreSheet::default();
        sheet.correct_last(None, Some("30"), None);
        assert_eq!(sheet.balls, vec!["30"]);
    }

    #[test]
    fn test_score_sheet_survives_empty_document() {
        // Fresh rows carry an empty JSONB object
        let sheet: ScoreSheet = serde_json::from_str("{}").unwrap();
        assert_eq!(sheet, ScoreSheet::default());
    }
}
