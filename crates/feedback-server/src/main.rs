mod config;

use std::path::Path;

use anyhow::Context;
use tracing::info;

use feedback_api::{AppStateInner, Paths};
use feedback_db::Database;
use feedback_types::api::Fixtures;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "feedback=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Init database
    let db = Database::open(&config.db_path)?;
    if let Some(path) = &config.fixtures {
        seed(&db, path)?;
    }

    let paths = Paths::new(&config.base_path);
    let index = paths.index();
    let app = feedback_api::router(AppStateInner::new(db, paths));

    let addr = config.addr()?;
    info!("Feedback server listening on {} (pages under {})", addr, index);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Load fixtures, but only into a database that has no questions yet.
fn seed(db: &Database, path: &Path) -> anyhow::Result<()> {
    if db.count_questions()? > 0 {
        info!("Database already has questions, skipping fixtures {}", path.display());
        return Ok(());
    }

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixtures {}", path.display()))?;
    let fixtures = Fixtures::from_json(&json)
        .with_context(|| format!("Invalid fixtures {}", path.display()))?;

    db.load_fixtures(&fixtures)?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
