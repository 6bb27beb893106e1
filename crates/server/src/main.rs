//! HP server entry point.
use std::sync::Arc;

use anyhow::{Context, Result};
use hp_content::ContentFactory;
use hp_runtime::{
    FilePlayerRepository, HpService, InMemoryPlayerRepository, PlayerRepository, seed_players,
};
use hp_server::{AppState, ServerConfig, StoreKind, build_router, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env()?;
    logging::setup_logging(&config.log_dir)?;

    let players = open_store(&config)?;
    if config.seed {
        let factory = ContentFactory::new(&config.data_dir);
        let records = factory.load_players().with_context(|| {
            format!(
                "Failed to load seed players from {}",
                factory.data_dir().display()
            )
        })?;
        seed_players(players.as_ref(), records)
            .await
            .context("Failed to seed player store")?;
    }

    let app = build_router(AppState::new(HpService::new(players)));

    tracing::info!(bind_addr = %config.bind_addr, store = %config.store, "hp-server listening");
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn open_store(config: &ServerConfig) -> Result<Arc<dyn PlayerRepository>> {
    Ok(match config.store {
        StoreKind::Memory => Arc::new(InMemoryPlayerRepository::new()),
        StoreKind::File => {
            let repo = FilePlayerRepository::new(&config.store_dir)
                .with_context(|| {
                    format!("Failed to open player store {}", config.store_dir.display())
                })?
                .with_timeout(config.store_timeout);
            tracing::info!("Player store: {}", repo.base_dir().display());
            Arc::new(repo)
        }
    })
}
