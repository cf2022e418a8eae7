//! Session State Store — one article slot per interactive session.
//!
//! Sessions are identified by a `sid` cookie holding a v4 UUID. State lives
//! in-process only; a restart starts every visitor on a fresh input form.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::{header, HeaderMap};
use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};
use uuid::Uuid;

const SESSION_COOKIE: &str = "sid";
/// Slots untouched for this long are evicted on the next write, so
/// abandoned sessions cannot grow the map without bound.
const SESSION_IDLE_TTL: Duration = Duration::from_secs(60 * 60 * 24);

/// The outcome of one generate action, tagged so the result view can render
/// failures distinctly instead of presenting an error as the article.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedArticle {
    /// Markdown-flavored article text returned by the model.
    Completed(String),
    /// Human-readable reason the generation did not produce an article.
    Failed(String),
}

#[derive(Debug, Clone)]
struct Slot {
    article: GeneratedArticle,
    touched: Instant,
}

/// In-process store mapping session ids to their article slot.
/// Absence of a key means "no article yet" — the input screen.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Slot>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, sid: Uuid) -> Option<GeneratedArticle> {
        self.inner.read().await.get(&sid).map(|s| s.article.clone())
    }

    /// Replaces the slot; a second `set` overwrites, never accumulates.
    /// Idle slots past their TTL are pruned on each write.
    pub async fn set(&self, sid: Uuid, article: GeneratedArticle) {
        let mut slots = self.inner.write().await;
        slots.retain(|_, slot| slot.touched.elapsed() < SESSION_IDLE_TTL);
        slots.insert(
            sid,
            Slot {
                article,
                touched: Instant::now(),
            },
        );
    }

    /// Resets the slot to absent. No-op when already absent.
    pub async fn clear(&self, sid: Uuid) {
        self.inner.write().await.remove(&sid);
    }
}

/// Extracts the session id from the `Cookie` header, if present and valid.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            Uuid::parse_str(value.trim()).ok()
        } else {
            None
        }
    })
}

/// Builds the `Set-Cookie` value that pins a visitor to a session.
pub fn session_cookie(sid: Uuid) -> String {
    format!("{SESSION_COOKIE}={sid}; Path=/; HttpOnly; SameSite=Lax")
}

/// Resolves the request's session id, issuing a fresh one when the request
/// carries no valid cookie. Returns the id and the `Set-Cookie` value to
/// attach when the id is newly issued.
pub fn resolve_session(headers: &HeaderMap) -> (Uuid, Option<String>) {
    match session_id_from_headers(headers) {
        Some(sid) => (sid, None),
        None => {
            let sid = Uuid::new_v4();
            (sid, Some(session_cookie(sid)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn test_initial_state_is_absent() {
        let store = SessionStore::new();
        assert_eq!(store.get(Uuid::new_v4()).await, None);
    }

    #[tokio::test]
    async fn test_set_then_get_returns_article() {
        let store = SessionStore::new();
        let sid = Uuid::new_v4();
        store
            .set(sid, GeneratedArticle::Completed("### Hi".to_string()))
            .await;
        assert_eq!(
            store.get(sid).await,
            Some(GeneratedArticle::Completed("### Hi".to_string()))
        );
    }

    #[tokio::test]
    async fn test_set_twice_overwrites() {
        let store = SessionStore::new();
        let sid = Uuid::new_v4();
        store
            .set(sid, GeneratedArticle::Completed("first".to_string()))
            .await;
        store
            .set(sid, GeneratedArticle::Failed("second".to_string()))
            .await;
        assert_eq!(
            store.get(sid).await,
            Some(GeneratedArticle::Failed("second".to_string()))
        );
    }

    #[tokio::test]
    async fn test_clear_when_absent_is_noop() {
        let store = SessionStore::new();
        let sid = Uuid::new_v4();
        store.clear(sid).await;
        assert_eq!(store.get(sid).await, None);
    }

    #[tokio::test]
    async fn test_clear_resets_to_absent_regardless_of_content() {
        let store = SessionStore::new();
        let sid = Uuid::new_v4();
        store
            .set(sid, GeneratedArticle::Failed("boom".to_string()))
            .await;
        store.clear(sid).await;
        assert_eq!(store.get(sid).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_sessions_are_evicted_on_write() {
        let store = SessionStore::new();
        let stale = Uuid::new_v4();
        store
            .set(stale, GeneratedArticle::Completed("old draft".to_string()))
            .await;

        tokio::time::advance(SESSION_IDLE_TTL + Duration::from_secs(1)).await;

        let fresh = Uuid::new_v4();
        store
            .set(fresh, GeneratedArticle::Completed("new draft".to_string()))
            .await;

        assert_eq!(store.get(stale).await, None, "idle slot must be evicted");
        assert_eq!(
            store.get(fresh).await,
            Some(GeneratedArticle::Completed("new draft".to_string()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_recent_sessions_survive_a_write() {
        let store = SessionStore::new();
        let recent = Uuid::new_v4();
        store
            .set(recent, GeneratedArticle::Completed("draft".to_string()))
            .await;

        tokio::time::advance(Duration::from_secs(60)).await;

        store
            .set(Uuid::new_v4(), GeneratedArticle::Failed("other".to_string()))
            .await;

        assert_eq!(
            store.get(recent).await,
            Some(GeneratedArticle::Completed("draft".to_string()))
        );
    }

    #[tokio::test]
    async fn test_sessions_do_not_share_the_article_slot() {
        let store = SessionStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        store
            .set(a, GeneratedArticle::Completed("A's article".to_string()))
            .await;
        assert_eq!(store.get(b).await, None);
    }

    #[test]
    fn test_session_id_parsed_from_cookie_header() {
        let sid = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; sid={sid}; other=1")).unwrap(),
        );
        assert_eq!(session_id_from_headers(&headers), Some(sid));
    }

    #[test]
    fn test_invalid_cookie_value_yields_fresh_session() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("sid=not-a-uuid"));
        let (_, set_cookie) = resolve_session(&headers);
        assert!(set_cookie.is_some(), "malformed sid must be reissued");
    }

    #[test]
    fn test_existing_session_is_not_reissued() {
        let sid = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("sid={sid}")).unwrap(),
        );
        let (resolved, set_cookie) = resolve_session(&headers);
        assert_eq!(resolved, sid);
        assert!(set_cookie.is_none());
    }
}
