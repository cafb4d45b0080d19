use axum::{extract::State, http::StatusCode, Json};
use std::collections::HashMap;

use crate::api::{state::AppState, types::*};
use crate::domain::lineup::{self, LineupError};

/// GET /api/batting-order
pub async fn get_batting_order(
    State(state): State<AppState>,
) -> std::result::Result<Json<BattingOrderResponse>, (StatusCode, String)> {
    let order = state
        .store
        .get_batting_order()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Batting order not found".to_string()))?;

    Ok(Json(BattingOrderResponse { order }))
}

/// PUT /api/batting-order -- replace the published order outright
pub async fn set_batting_order(
    State(state): State<AppState>,
    Json(body): Json<ReqData<OrderUpdate>>,
) -> std::result::Result<Json<MessageResponse>, (StatusCode, String)> {
    let order = body.req_data.order;
    if order.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "'order' should be a non-empty array of strings".to_string(),
        ));
    }

    state
        .store
        .set_batting_order(&order)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(MessageResponse::new(
        "Batting order updated successfully",
    )))
}

/// POST /api/batting-order/recalculate
///
/// Re-rank the published order from current form. Never persists; the
/// result is returned for display together with its publish readiness.
pub async fn recalculate_batting_order(
    State(state): State<AppState>,
) -> std::result::Result<Json<RecalculationResponse>, (StatusCode, String)> {
    let (order, forms) = load_recalculation_inputs(&state).await?;

    let result = lineup::recalculate(&order, &forms).map_err(lineup_status)?;
    let readiness = lineup::publish_readiness(&order, &forms);

    Ok(Json(RecalculationResponse {
        order: result.order,
        summary: result.summary,
        incomplete: result.incomplete,
        ready: readiness.ready,
    }))
}

/// POST /api/batting-order/publish
///
/// Recompute and persist the new order, refusing while any player lacks
/// a complete form window.
pub async fn publish_batting_order(
    State(state): State<AppState>,
) -> std::result::Result<Json<PublishResponse>, (StatusCode, String)> {
    let (order, forms) = load_recalculation_inputs(&state).await?;

    let readiness = lineup::publish_readiness(&order, &forms);
    if !readiness.ready {
        return Err((
            StatusCode::CONFLICT,
            format!(
                "Not all players have {} scores in their last four matches: {}",
                lineup::FORM_WINDOW,
                readiness.incomplete.join(", ")
            ),
        ));
    }

    let result = lineup::recalculate(&order, &forms).map_err(lineup_status)?;

    state
        .store
        .set_batting_order(&result.order)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(PublishResponse {
        message: "Batting order published successfully".to_string(),
        order: result.order,
    }))
}

/// The published order plus every player's parsed form window
async fn load_recalculation_inputs(
    state: &AppState,
) -> std::result::Result<(Vec<String>, HashMap<String, Vec<f64>>), (StatusCode, String)> {
    let order = state
        .store
        .get_batting_order()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Batting order not found".to_string()))?;

    let players = state
        .store
        .list_players()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let forms = players
        .into_iter()
        .map(|player| {
            let form = player.scores.last_four();
            (player.name, form)
        })
        .collect();

    Ok((order, forms))
}

/// A recalculation failure reflects stored state the caller must fix
/// first, never a server fault.
fn lineup_status(err: LineupError) -> (StatusCode, String) {
    (StatusCode::CONFLICT, err.to_string())
}
