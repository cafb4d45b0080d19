pub mod adapters;
pub mod api;
pub mod config;
pub mod domain;
pub mod error;

pub use adapters::{start_api_server, PostgresStore};
pub use config::AppConfig;
pub use domain::lineup::{
    publish_readiness, recalculate, LineupError, PublishReadiness, RecalculationResult,
    ScoreSummary, FORM_WINDOW, LINEUP_SIZE,
};
pub use domain::{AppInfo, CareerSheet, MatchStatus, NextMatch, Player, ScoreEntries, ScoreSheet};
pub use error::{PavilionError, Result};
