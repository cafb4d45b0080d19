use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::api::{state::AppState, types::*};
use crate::domain::NextMatch;

/// GET /api/nextmatch
pub async fn list_matches(
    State(state): State<AppState>,
) -> std::result::Result<Json<Vec<NextMatch>>, (StatusCode, String)> {
    let fixtures = state
        .store
        .list_matches()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(fixtures))
}

/// GET /api/nextmatch/:id
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> std::result::Result<Json<NextMatch>, (StatusCode, String)> {
    let fixture = state
        .store
        .get_match(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Match not found".to_string()))?;

    Ok(Json(fixture))
}

/// POST /api/nextmatch
pub async fn create_match(
    State(state): State<AppState>,
    Json(req): Json<NextMatchRequest>,
) -> std::result::Result<Json<NextMatch>, (StatusCode, String)> {
    if req.opponent.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "'opponent' is required".to_string(),
        ));
    }

    let now = Utc::now();
    let fixture = fixture_from_request(Uuid::new_v4(), now, now, req);

    state
        .store
        .insert_match(&fixture)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(fixture))
}

/// PUT /api/nextmatch/:id
pub async fn update_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<NextMatchRequest>,
) -> std::result::Result<Json<NextMatch>, (StatusCode, String)> {
    let existing = state
        .store
        .get_match(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Match not found".to_string()))?;

    let fixture = fixture_from_request(id, existing.created_at, Utc::now(), req);

    let updated = state
        .store
        .update_match(&fixture)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    if !updated {
        return Err((StatusCode::NOT_FOUND, "Match not found".to_string()));
    }

    Ok(Json(fixture))
}

/// DELETE /api/nextmatch/:id
pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> std::result::Result<Json<MessageResponse>, (StatusCode, String)> {
    let deleted = state
        .store
        .delete_match(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if deleted {
        Ok(Json(MessageResponse::new("Match deleted successfully")))
    } else {
        Err((StatusCode::NOT_FOUND, "Match not found".to_string()))
    }
}

fn fixture_from_request(
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    req: NextMatchRequest,
) -> NextMatch {
    NextMatch {
        id,
        opponent: req.opponent,
        is_series: req.is_series,
        date: req.date,
        series_name: req.series_name,
        total_matches: req.total_matches,
        match_number: req.match_number,
        series_leader: req.series_leader,
        series_score: req.series_score,
        venue: req.venue,
        overs: req.overs,
        is_home_match: req.is_home_match,
        status: req.status,
        created_at,
        updated_at,
    }
}
