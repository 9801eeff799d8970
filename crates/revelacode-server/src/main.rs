//! RevelaCode — legal document, scripture, and prophecy content server.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use revelacode_core::RevelaConfig;
use revelacode_scripture::HttpVerseSource;
use revelacode_server::{build_router, seed, AppState};
use revelacode_store::SqliteStore;

fn open_store(config: &RevelaConfig) -> anyhow::Result<SqliteStore> {
    SqliteStore::open(&config.db_path)
        .map_err(|e| anyhow::anyhow!("Failed to open store: {}", e))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RevelaConfig::from_env()?;
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--seed" | "seed" => {
                let store = open_store(&config)?;
                let report = seed::seed_store(&store)?;
                seed::print_report(&report);
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("RevelaCode — legal, scripture, and prophecy content server");
                println!();
                println!("Usage: revelacode [command]");
                println!();
                println!("Commands:");
                println!("  (none)    Start the server");
                println!("  seed      Reset the store and load bootstrap data");
                println!("  help      Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'revelacode help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    info!("Document store: {}", config.db_path.display());
    if config.admin_token.is_none() {
        warn!("REVELACODE_ADMIN_TOKEN is not set; /api/legal/update accepts any caller");
    }

    let store = Arc::new(open_store(&config)?);
    let verse_source = Arc::new(HttpVerseSource::new(
        config.fetch_timeout(),
        config.bible_api_key.clone(),
    )?);

    let port = config.port;
    let state = Arc::new(AppState::new(config, store, verse_source));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("RevelaCode backend listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
