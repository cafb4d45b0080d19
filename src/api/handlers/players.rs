use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::api::{state::AppState, types::*};
use crate::domain::{Player, ScoreEntries, ScoreSheet};

/// GET /api/players
///
/// All players ranked by career batting average; computed ranks are
/// written back to the store so other consumers see the same table.
pub async fn list_players(
    State(state): State<AppState>,
) -> std::result::Result<Json<Vec<Player>>, (StatusCode, String)> {
    let mut players = state
        .store
        .list_players()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    // Best average first; equal averages keep registration order.
    players.sort_by(|a, b| b.scores.career_average().total_cmp(&a.scores.career_average()));

    for (position, player) in players.iter_mut().enumerate() {
        let ranking = (position + 1).to_string();
        if player.scores.career.ranking.as_deref() != Some(ranking.as_str()) {
            state
                .store
                .set_career_ranking(player.id, &ranking)
                .await
                .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
            player.scores.career.ranking = Some(ranking);
        }
    }

    Ok(Json(players))
}

/// GET /api/data/:player_id
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
) -> std::result::Result<Json<Player>, (StatusCode, String)> {
    let player = state
        .store
        .get_player(player_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Player not found".to_string()))?;

    Ok(Json(player))
}

/// POST /api/data
pub async fn create_player(
    State(state): State<AppState>,
    Json(req): Json<NewPlayerRequest>,
) -> std::result::Result<Json<MessageResponse>, (StatusCode, String)> {
    let player = Player {
        id: Uuid::new_v4(),
        name: req.name,
        role: req.role,
        born: req.born,
        birthplace: req.birthplace,
        battingstyle: req.battingstyle,
        bowlingstyle: req.bowlingstyle,
        debut: req.debut,
        image: req.image,
        scores: ScoreSheet::default(),
    };

    state
        .store
        .insert_player(&player)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(MessageResponse::new("Player added successfully")))
}

/// PUT /api/data/:player_id -- append score entries after a match
pub async fn append_scores(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
    Json(entries): Json<ScoreEntries>,
) -> std::result::Result<Json<MessageResponse>, (StatusCode, String)> {
    let mut player = fetch_player(&state, player_id).await?;
    player.scores.append(&entries);
    save_player(&state, &player).await?;

    Ok(Json(MessageResponse::new("Data updated successfully")))
}

/// PUT /api/update/:player_id -- partial player-details update
pub async fn update_player_details(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
    Json(update): Json<PlayerDetailsUpdate>,
) -> std::result::Result<Json<MessageResponse>, (StatusCode, String)> {
    let mut player = fetch_player(&state, player_id).await?;

    if let Some(name) = update.name {
        player.name = name;
    }
    if let Some(role) = update.role {
        player.role = Some(role);
    }
    if let Some(born) = update.born {
        player.born = Some(born);
    }
    if let Some(birthplace) = update.birthplace {
        player.birthplace = Some(birthplace);
    }
    if let Some(battingstyle) = update.battingstyle {
        player.battingstyle = Some(battingstyle);
    }
    if let Some(bowlingstyle) = update.bowlingstyle {
        player.bowlingstyle = Some(bowlingstyle);
    }
    if let Some(debut) = update.debut {
        player.debut = Some(debut);
    }
    if let Some(image) = update.image {
        player.image = Some(image);
    }

    save_player(&state, &player).await?;

    Ok(Json(MessageResponse::new(
        "Player details updated successfully",
    )))
}

/// PUT /api/update/:player_id/last -- correct the most recent entries
pub async fn correct_last_entries(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
    Json(correction): Json<LastEntryCorrection>,
) -> std::result::Result<Json<MessageResponse>, (StatusCode, String)> {
    if correction.runs.is_none() && correction.balls.is_none() && correction.wickets.is_none() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Provide at least one of runs, balls or wickets".to_string(),
        ));
    }

    let mut player = fetch_player(&state, player_id).await?;
    player.scores.correct_last(
        correction.runs.as_deref(),
        correction.balls.as_deref(),
        correction.wickets.as_deref(),
    );
    save_player(&state, &player).await?;

    Ok(Json(MessageResponse::new("Last entries updated successfully")))
}

/// PUT /api/update/:player_id/wicket
pub async fn add_wicket(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
    Json(update): Json<WicketUpdate>,
) -> std::result::Result<Json<MessageResponse>, (StatusCode, String)> {
    let mut player = fetch_player(&state, player_id).await?;
    player.scores.add_wicket(&update.wicket);
    save_player(&state, &player).await?;

    Ok(Json(MessageResponse::new("Wicket added successfully")))
}

/// PUT /api/players/image
pub async fn update_player_image(
    State(state): State<AppState>,
    Json(body): Json<ReqData<ImageUpdate>>,
) -> std::result::Result<Json<MessageResponse>, (StatusCode, String)> {
    let mut player = fetch_player(&state, body.req_data.id).await?;
    player.image = Some(body.req_data.image);
    save_player(&state, &player).await?;

    Ok(Json(MessageResponse::new(
        "Player image updated successfully",
    )))
}

/// GET /api/mom -- man of the match from the most recent entries
pub async fn man_of_the_match(
    State(state): State<AppState>,
) -> std::result::Result<Json<MomResponse>, (StatusCode, String)> {
    let players = state
        .store
        .list_players()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    // Strictly-greater keeps the earliest-registered player on ties; a
    // side where nobody scored has no man of the match.
    let mut best: Option<&Player> = None;
    let mut best_score = 0;
    for player in &players {
        let score = player.scores.match_impact();
        if score > best_score {
            best_score = score;
            best = Some(player);
        }
    }

    let best = best.ok_or_else(|| (StatusCode::NOT_FOUND, "No players found".to_string()))?;

    let runs = best.scores.runs.last().cloned();
    let wickets = best.scores.wickets.last().cloned();

    let mut paragraph = format!(
        "{} delivered an outstanding performance. Scoring {} runs",
        best.name,
        runs.as_deref().unwrap_or("0")
    );
    let wickets_taken = wickets
        .as_deref()
        .and_then(|w| w.trim().parse::<i64>().ok())
        .unwrap_or(0);
    if wickets_taken > 0 {
        paragraph.push_str(&format!(" and taking {wickets_taken} wickets"));
    }
    paragraph.push_str(&format!(
        " in the most recent match, {} proved to be a formidable player.",
        best.name
    ));

    Ok(Json(MomResponse {
        id: best.id,
        name: best.name.clone(),
        runs,
        wickets,
        image: best.image.clone(),
        paragraph,
    }))
}

async fn fetch_player(
    state: &AppState,
    player_id: Uuid,
) -> std::result::Result<Player, (StatusCode, String)> {
    state
        .store
        .get_player(player_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Player not found".to_string()))
}

async fn save_player(
    state: &AppState,
    player: &Player,
) -> std::result::Result<(), (StatusCode, String)> {
    let updated = state
        .store
        .update_player(player)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if updated {
        Ok(())
    } else {
        Err((StatusCode::NOT_FOUND, "Player not found".to_string()))
    }
}
