//! Axum route handlers for the two-screen posting flow.
//!
//! State machine: INPUT (no article in the session) and RESULT (article
//! present). A valid submit always moves to RESULT — generation failures are
//! stored as the `Failed` variant and rendered there. Redo moves back.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{error, warn};

use crate::posting::models::JobPostingRequest;
use crate::posting::prompt_builder::build_prompt;
use crate::posting::prompts::ARTICLE_SYSTEM;
use crate::render::views::{input_view, result_view, ResultFlash};
use crate::session::{resolve_session, GeneratedArticle};
use crate::state::AppState;

/// Shown instead of an article when the service runs without an API key.
pub const GENERATION_NOT_CONFIGURED: &str =
    "AI generation is not configured. Set GEMINI_API_KEY and restart the service.";

fn with_cookie(mut response: Response, set_cookie: Option<String>) -> Response {
    if let Some(cookie) = set_cookie {
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    response
}

/// GET /
///
/// Renders the screen the session is in: the input form when the article
/// slot is absent, the result view when it holds a value.
pub async fn handle_index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (sid, set_cookie) = resolve_session(&headers);

    let body = match state.sessions.get(sid).await {
        Some(article) => result_view(&article, None),
        None => input_view(&JobPostingRequest::prefilled(), None),
    };

    with_cookie(Html(body).into_response(), set_cookie)
}

/// POST /generate
///
/// Validates the form, builds the prompt, makes the single generation call,
/// stores the tagged outcome in the session, and redirects to `/`.
/// Invalid input re-renders the form with a warning and changes nothing.
pub async fn handle_generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(request): Form<JobPostingRequest>,
) -> Response {
    let (sid, set_cookie) = resolve_session(&headers);

    if let Err(warning) = request.validate() {
        let body = input_view(&request, Some(&warning));
        return with_cookie(
            (StatusCode::UNPROCESSABLE_ENTITY, Html(body)).into_response(),
            set_cookie,
        );
    }

    let article = match &state.generator {
        None => {
            warn!("Generate attempt with no API key configured");
            GeneratedArticle::Failed(GENERATION_NOT_CONFIGURED.to_string())
        }
        Some(generator) => {
            let prompt = build_prompt(&request);
            match generator.generate(&prompt, ARTICLE_SYSTEM).await {
                Ok(text) => GeneratedArticle::Completed(text),
                Err(e) => {
                    error!("Article generation failed: {e}");
                    GeneratedArticle::Failed(e.to_string())
                }
            }
        }
    };

    state.sessions.set(sid, article).await;

    with_cookie(Redirect::to("/").into_response(), set_cookie)
}

/// POST /reset
///
/// The redo action: clears the article slot and returns to the input form.
pub async fn handle_reset(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (sid, set_cookie) = resolve_session(&headers);
    state.sessions.clear(sid).await;
    with_cookie(Redirect::to("/").into_response(), set_cookie)
}

#[derive(Debug, Deserialize)]
pub struct ConsultForm {
    /// Checkbox value; present as "on" only when checked.
    pub consent: Option<String>,
}

/// POST /consult
///
/// Server-side consent gate for the lead-capture button. With consent the
/// result view re-renders with a static acknowledgment; nothing is sent
/// anywhere and the article slot never changes.
pub async fn handle_consult(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ConsultForm>,
) -> Response {
    let (sid, set_cookie) = resolve_session(&headers);

    let Some(article) = state.sessions.get(sid).await else {
        // No article means the session is on the input screen; re-sync.
        return with_cookie(Redirect::to("/").into_response(), set_cookie);
    };

    let (status, flash) = if form.consent.as_deref() == Some("on") {
        (StatusCode::OK, ResultFlash::ConsultAcknowledged)
    } else {
        (StatusCode::UNPROCESSABLE_ENTITY, ResultFlash::ConsentRequired)
    };

    with_cookie(
        (status, Html(result_view(&article, Some(flash)))).into_response(),
        set_cookie,
    )
}
