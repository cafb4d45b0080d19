use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a scheduled fixture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Completed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for MatchStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "upcoming" => Ok(MatchStatus::Upcoming),
            "completed" => Ok(MatchStatus::Completed),
            other => Err(format!("unknown match status: {other}")),
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Running series tally between the two sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesScore {
    #[serde(default)]
    pub our_team: i32,
    #[serde(default)]
    pub opponent: i32,
}

/// An upcoming (or just-completed) fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextMatch {
    pub id: Uuid,
    pub opponent: String,
    pub is_series: bool,
    pub date: DateTime<Utc>,

    // Series fields, only meaningful when is_series is set
    pub series_name: Option<String>,
    pub total_matches: Option<i32>,
    pub match_number: Option<i32>,
    pub series_leader: Option<String>,
    #[serde(default)]
    pub series_score: SeriesScore,

    pub venue: Option<String>,
    pub overs: Option<i32>,
    #[serde(default)]
    pub is_home_match: bool,
    #[serde(default)]
    pub status: MatchStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [MatchStatus::Upcoming, MatchStatus::Completed] {
            assert_eq!(MatchStatus::try_from(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn test_status_rejects_unknown_values() {
        assert!(MatchStatus::try_from("postponed").is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MatchStatus::Upcoming).unwrap(),
            "\"upcoming\""
        );
    }
}
