//! Project Chimera Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chimera_engine::api;
use chimera_engine::config::{EngineConfig, StoreBackend};
use chimera_engine::infrastructure::{
    clock::SystemClock,
    gemini::GeminiClient,
    memory_store::MemoryKvStore,
    ports::{ClockPort, KvStore},
    sqlite_store::SqliteKvStore,
};
use chimera_engine::prompt_templates::PromptTemplates;
use chimera_engine::use_cases::TurnSettings;
use chimera_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chimera_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Project Chimera Engine");

    let config = EngineConfig::from_env()?;
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());

    let store: Arc<dyn KvStore> = match &config.store {
        StoreBackend::Sqlite { path } => {
            tracing::info!(path = %path, "Using SQLite store");
            Arc::new(SqliteKvStore::new(path, clock).await?)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; games are lost on restart");
            Arc::new(MemoryKvStore::new())
        }
    };

    let gemini = GeminiClient::with_timeout(
        &config.gemini_base_url,
        &config.gemini_model,
        config.gemini_api_key.clone(),
        config.gemini_timeout_secs,
    );
    if gemini.is_configured() {
        tracing::info!(model = %gemini.model(), "Gemini client configured");
    } else {
        tracing::warn!("GEMINI_API_KEY is not set; generation requests will fail");
    }

    let settings = TurnSettings {
        persist_state_blocks: config.persist_state_blocks,
    };
    if settings.persist_state_blocks {
        tracing::info!("Game state blocks from model replies will be persisted");
    }

    let app = Arc::new(App::new(
        store,
        Arc::new(gemini),
        PromptTemplates::from_env(),
        settings,
    ));

    let router = api::router(app, api::build_cors_layer(&config.cors_allowed_origins));

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
