use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ArticleGenerator;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Per-session article slots, keyed by the `sid` cookie.
    pub sessions: SessionStore,
    /// Pluggable generator seam. `None` when no API key is configured — the
    /// generate handler then reports a configuration failure without any call.
    pub generator: Option<Arc<dyn ArticleGenerator>>,
    pub config: Config,
}
