mod config;
mod llm_client;
mod posting;
mod render;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{ArticleGenerator, GeminiClient};
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobforge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the Gemini client; without a key the service still runs and
    // each generate attempt yields a configuration failure message.
    let generator: Option<Arc<dyn ArticleGenerator>> = match &config.gemini_api_key {
        Some(key) => {
            info!("Gemini client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(GeminiClient::new(key.clone())))
        }
        None => {
            warn!("GEMINI_API_KEY is not set; article generation is disabled");
            None
        }
    };

    let state = AppState {
        sessions: SessionStore::new(),
        generator,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
