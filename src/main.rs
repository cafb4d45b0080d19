use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pavilion::adapters::{start_api_server, PostgresStore};
use pavilion::config::{AppConfig, LoggingConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config.logging);

    if let Err(errors) = config.validate() {
        for err in &errors {
            error!("Config error: {}", err);
        }
        anyhow::bail!("invalid configuration");
    }

    info!("Starting pavilion backend");

    let store = Arc::new(
        PostgresStore::new(&config.database.url, config.database.max_connections).await?,
    );
    store.migrate().await?;

    start_api_server(store, &config.server).await?;

    info!("Shutdown complete");
    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},sqlx=warn", config.level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
