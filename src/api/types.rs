use crate::domain::{MatchStatus, ScoreSummary, SeriesScore};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Shared Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Envelope the legacy frontend wraps some PUT bodies in
#[derive(Debug, Deserialize)]
pub struct ReqData<T> {
    #[serde(rename = "reqData")]
    pub req_data: T,
}

// ============================================================================
// Player Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct NewPlayerRequest {
    pub name: String,
    pub role: Option<String>,
    pub born: Option<NaiveDate>,
    pub birthplace: Option<String>,
    pub battingstyle: Option<String>,
    pub bowlingstyle: Option<String>,
    pub debut: Option<NaiveDate>,
    pub image: Option<String>,
}

/// Partial player-details update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerDetailsUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub born: Option<NaiveDate>,
    pub birthplace: Option<String>,
    pub battingstyle: Option<String>,
    pub bowlingstyle: Option<String>,
    pub debut: Option<NaiveDate>,
    pub image: Option<String>,
}

/// Correction for the most recent match entries
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LastEntryCorrection {
    pub runs: Option<String>,
    pub balls: Option<String>,
    pub wickets: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WicketUpdate {
    pub wicket: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageUpdate {
    pub id: Uuid,
    pub image: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MomResponse {
    pub id: Uuid,
    pub name: String,
    pub runs: Option<String>,
    pub wickets: Option<String>,
    pub image: Option<String>,
    pub paragraph: String,
}

// ============================================================================
// Batting Order Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattingOrderResponse {
    pub order: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderUpdate {
    pub order: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalculationResponse {
    /// The re-ranked order; display-only until published
    pub order: Vec<String>,
    pub summary: Vec<ScoreSummary>,
    /// Players lacking a complete form window
    pub incomplete: Vec<String>,
    /// Whether the order may be published as-is
    pub ready: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishResponse {
    pub message: String,
    pub order: Vec<String>,
}

// ============================================================================
// Fixture Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct NextMatchRequest {
    pub opponent: String,
    pub is_series: bool,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub series_name: Option<String>,
    #[serde(default)]
    pub total_matches: Option<i32>,
    #[serde(default)]
    pub match_number: Option<i32>,
    #[serde(default)]
    pub series_leader: Option<String>,
    #[serde(default)]
    pub series_score: SeriesScore,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub overs: Option<i32>,
    #[serde(default)]
    pub is_home_match: bool,
    #[serde(default)]
    pub status: MatchStatus,
}

// ============================================================================
// Health Check Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub db: String,
    pub uptime_secs: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_req_data_envelope_unwraps() {
        let payload = json!({ "reqData": { "order": ["Kohli", "Sharma"] } });

        let parsed: ReqData<OrderUpdate> = serde_json::from_value(payload).unwrap();
        assert_eq!(parsed.req_data.order, vec!["Kohli", "Sharma"]);
    }

    #[test]
    fn test_next_match_request_defaults_optional_fields() {
        let payload = json!({
            "opponent": "Australia",
            "is_series": false,
            "date": "2026-09-12T09:30:00Z"
        });

        let parsed: NextMatchRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(parsed.status, MatchStatus::Upcoming);
        assert_eq!(parsed.series_score, SeriesScore::default());
        assert!(!parsed.is_home_match);
        assert!(parsed.venue.is_none());
    }

    #[test]
    fn test_new_player_request_parses_dates() {
        let payload = json!({
            "name": "R. Jadeja",
            "role": "All-rounder",
            "born": "1988-12-06"
        });

        let parsed: NewPlayerRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(parsed.born, Some(NaiveDate::from_ymd_opt(1988, 12, 6).unwrap()));
        assert!(parsed.image.is_none());
    }
}
