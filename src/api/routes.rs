use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::{handlers, state::AppState};

pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // System endpoints
        .route("/health", get(handlers::health))
        .route("/api/updateapp", get(handlers::get_app_info))
        // Player endpoints
        .route("/api/players", get(handlers::list_players))
        .route("/api/players/image", put(handlers::update_player_image))
        .route("/api/data", post(handlers::create_player))
        .route("/api/data/:player_id", get(handlers::get_player))
        .route("/api/data/:player_id", put(handlers::append_scores))
        .route("/api/update/:player_id", put(handlers::update_player_details))
        .route(
            "/api/update/:player_id/last",
            put(handlers::correct_last_entries),
        )
        .route("/api/update/:player_id/wicket", put(handlers::add_wicket))
        .route("/api/mom", get(handlers::man_of_the_match))
        // Batting order endpoints
        .route("/api/batting-order", get(handlers::get_batting_order))
        .route("/api/batting-order", put(handlers::set_batting_order))
        .route(
            "/api/batting-order/recalculate",
            post(handlers::recalculate_batting_order),
        )
        .route(
            "/api/batting-order/publish",
            post(handlers::publish_batting_order),
        )
        // Fixture endpoints
        .route("/api/nextmatch", get(handlers::list_matches))
        .route("/api/nextmatch", post(handlers::create_match))
        .route("/api/nextmatch/:id", get(handlers::get_match))
        .route("/api/nextmatch/:id", put(handlers::update_match))
        .route("/api/nextmatch/:id", delete(handlers::delete_match))
        // Static pages
        .fallback_service(ServeDir::new(static_dir))
        // Add state and CORS
        .with_state(state)
        .layer(cors)
}
