pub mod health;

use axum::{
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::posting::handlers;
use crate::render::views::LOGO_SVG;
use crate::state::AppState;

async fn logo_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], LOGO_SVG)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_index))
        .route("/generate", post(handlers::handle_generate))
        .route("/reset", post(handlers::handle_reset))
        .route("/consult", post(handlers::handle_consult))
        .route("/static/logo.svg", get(logo_handler))
        .with_state(state)
}
