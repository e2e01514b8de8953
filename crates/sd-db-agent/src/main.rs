//! sd-db-agent: HTTP front of the customer database.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use sd_db_agent::{AppState, DbAgentConfig, SqliteStore, build_router, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "sd-db-agent starting");

    let config = DbAgentConfig::from_env()?;

    // A broken scenario table is a deployment error; refuse to serve.
    let scenarios = sd_scenarios::load_file(&config.scenarios_path).with_context(|| {
        format!(
            "failed to load scenarios from {}",
            config.scenarios_path.display()
        )
    })?;

    tracing::info!(url = %config.database_url, "connecting to SQLite");
    let pool = db::connect(&config.database_url)
        .await
        .context("failed to open database")?;
    if config.seed_demo_data {
        db::seed_demo_data(&pool).await?;
    }

    let state = AppState::new(
        Arc::new(SqliteStore::new(pool)),
        scenarios,
        config.public_url(),
    );
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
