use crate::domain::{AppInfo, MatchStatus, NextMatch, Player, ScoreSheet, SeriesScore};
use crate::error::Result;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::Row;
use tracing::{info, instrument};
use uuid::Uuid;

/// PostgreSQL storage adapter
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        info!("Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Create a PostgreSQL store from an existing connection pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // ==================== Players ====================

    /// All players, oldest registration first
    pub async fn list_players(&self) -> Result<Vec<Player>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, role, born, birthplace, battingstyle, bowlingstyle,
                   debut, image, scores
            FROM players
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(player_from_row).collect())
    }

    /// Get a player by id
    pub async fn get_player(&self, id: Uuid) -> Result<Option<Player>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, role, born, birthplace, battingstyle, bowlingstyle,
                   debut, image, scores
            FROM players WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(player_from_row))
    }

    /// Insert a new player
    #[instrument(skip(self, player), fields(player_id = %player.id, name = %player.name))]
    pub async fn insert_player(&self, player: &Player) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO players
                (id, name, role, born, birthplace, battingstyle, bowlingstyle,
                 debut, image, scores)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(player.id)
        .bind(&player.name)
        .bind(&player.role)
        .bind(player.born)
        .bind(&player.birthplace)
        .bind(&player.battingstyle)
        .bind(&player.bowlingstyle)
        .bind(player.debut)
        .bind(&player.image)
        .bind(Json(&player.scores))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Write a player row back in full (find-then-save update style)
    #[instrument(skip(self, player), fields(player_id = %player.id))]
    pub async fn update_player(&self, player: &Player) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE players SET
                name = $2,
                role = $3,
                born = $4,
                birthplace = $5,
                battingstyle = $6,
                bowlingstyle = $7,
                debut = $8,
                image = $9,
                scores = $10,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(player.id)
        .bind(&player.name)
        .bind(&player.role)
        .bind(player.born)
        .bind(&player.birthplace)
        .bind(&player.battingstyle)
        .bind(&player.bowlingstyle)
        .bind(player.debut)
        .bind(&player.image)
        .bind(Json(&player.scores))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Persist a player's computed career ranking without rewriting the row
    #[instrument(skip(self))]
    pub async fn set_career_ranking(&self, id: Uuid, ranking: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE players
            SET scores = jsonb_set(scores, '{career,ranking}', to_jsonb($2::text)),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(ranking)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // ==================== Batting order ====================

    /// The currently published batting order, if one has been set
    pub async fn get_batting_order(&self) -> Result<Option<Vec<String>>> {
        let row = sqlx::query("SELECT lineup FROM batting_order")
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get("lineup")))
    }

    /// Publish a batting order, replacing any previous one
    #[instrument(skip(self))]
    pub async fn set_batting_order(&self, order: &[String]) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO batting_order (id, lineup)
            VALUES (TRUE, $1)
            ON CONFLICT (id) DO UPDATE SET
                lineup = EXCLUDED.lineup,
                updated_at = NOW()
            "#,
        )
        .bind(order)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ==================== Fixtures ====================

    /// All fixtures, soonest first
    pub async fn list_matches(&self) -> Result<Vec<NextMatch>> {
        let rows = sqlx::query(
            r#"
            SELECT id, opponent, is_series, match_date, series_name, total_matches,
                   match_number, series_leader, series_score_ours,
                   series_score_opponent, venue, overs, is_home_match, status,
                   created_at, updated_at
            FROM next_matches
            ORDER BY match_date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(match_from_row).collect())
    }

    /// Get a fixture by id
    pub async fn get_match(&self, id: Uuid) -> Result<Option<NextMatch>> {
        let row = sqlx::query(
            r#"
            SELECT id, opponent, is_series, match_date, series_name, total_matches,
                   match_number, series_leader, series_score_ours,
                   series_score_opponent, venue, overs, is_home_match, status,
                   created_at, updated_at
            FROM next_matches WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(match_from_row))
    }

    /// Insert a fixture
    #[instrument(skip(self, fixture), fields(fixture_id = %fixture.id, opponent = %fixture.opponent))]
    pub async fn insert_match(&self, fixture: &NextMatch) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO next_matches
                (id, opponent, is_series, match_date, series_name, total_matches,
                 match_number, series_leader, series_score_ours,
                 series_score_opponent, venue, overs, is_home_match, status,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(fixture.id)
        .bind(&fixture.opponent)
        .bind(fixture.is_series)
        .bind(fixture.date)
        .bind(&fixture.series_name)
        .bind(fixture.total_matches)
        .bind(fixture.match_number)
        .bind(&fixture.series_leader)
        .bind(fixture.series_score.our_team)
        .bind(fixture.series_score.opponent)
        .bind(&fixture.venue)
        .bind(fixture.overs)
        .bind(fixture.is_home_match)
        .bind(fixture.status.as_str())
        .bind(fixture.created_at)
        .bind(fixture.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Rewrite a fixture row
    #[instrument(skip(self, fixture), fields(fixture_id = %fixture.id))]
    pub async fn update_match(&self, fixture: &NextMatch) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE next_matches SET
                opponent = $2,
                is_series = $3,
                match_date = $4,
                series_name = $5,
                total_matches = $6,
                match_number = $7,
                series_leader = $8,
                series_score_ours = $9,
                series_score_opponent = $10,
                venue = $11,
                overs = $12,
                is_home_match = $13,
                status = $14,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(fixture.id)
        .bind(&fixture.opponent)
        .bind(fixture.is_series)
        .bind(fixture.date)
        .bind(&fixture.series_name)
        .bind(fixture.total_matches)
        .bind(fixture.match_number)
        .bind(&fixture.series_leader)
        .bind(fixture.series_score.our_team)
        .bind(fixture.series_score.opponent)
        .bind(&fixture.venue)
        .bind(fixture.overs)
        .bind(fixture.is_home_match)
        .bind(fixture.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a fixture
    #[instrument(skip(self))]
    pub async fn delete_match(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM next_matches WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ==================== App info ====================

    /// The mobile-client update gate, seeded out of band
    pub async fn get_app_info(&self) -> Result<Option<AppInfo>> {
        let row = sqlx::query("SELECT minimum_version, is_error FROM app_info")
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| AppInfo {
            minimum_version: r.get("minimum_version"),
            is_error: r.get("is_error"),
        }))
    }
}

fn player_from_row(row: &PgRow) -> Player {
    Player {
        id: row.get("id"),
        name: row.get("name"),
        role: row.get("role"),
        born: row.get("born"),
        birthplace: row.get("birthplace"),
        battingstyle: row.get("battingstyle"),
        bowlingstyle: row.get("bowlingstyle"),
        debut: row.get("debut"),
        image: row.get("image"),
        scores: row.get::<Json<ScoreSheet>, _>("scores").0,
    }
}

fn match_from_row(row: &PgRow) -> NextMatch {
    NextMatch {
        id: row.get("id"),
        opponent: row.get("opponent"),
        is_series: row.get("is_series"),
        date: row.get::<DateTime<Utc>, _>("match_date"),
        series_name: row.get("series_name"),
        total_matches: row.get("total_matches"),
        match_number: row.get("match_number"),
        series_leader: row.get("series_leader"),
        series_score: SeriesScore {
            our_team: row.get("series_score_ours"),
            opponent: row.get("series_score_opponent"),
        },
        venue: row.get("venue"),
        overs: row.get("overs"),
        is_home_match: row.get("is_home_match"),
        status: MatchStatus::try_from(row.get::<String, _>("status").as_str()).unwrap_or_default(),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
