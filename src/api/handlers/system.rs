use axum::{extract::State, http::StatusCode, Json};

use crate::api::{state::AppState, types::*};
use crate::domain::AppInfo;

/// GET /health -- lightweight liveness/readiness probe
pub async fn health(
    State(state): State<AppState>,
) -> std::result::Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_status = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.store.pool())
        .await
    {
        Ok(_) => "connected".to_string(),
        Err(_) => "disconnected".to_string(),
    };

    let ok = db_status == "connected";
    let resp = HealthResponse {
        status: if ok {
            "ok".to_string()
        } else {
            "degraded".to_string()
        },
        db: db_status,
        uptime_secs: state.uptime_seconds(),
    };

    if ok {
        Ok(Json(resp))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(resp)))
    }
}

/// GET /api/updateapp -- mobile-client update gate
pub async fn get_app_info(
    State(state): State<AppState>,
) -> std::result::Result<Json<AppInfo>, (StatusCode, String)> {
    let info = state
        .store
        .get_app_info()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                "No update information found.".to_string(),
            )
        })?;

    Ok(Json(info))
}
