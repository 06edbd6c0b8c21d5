//! In-memory per-visitor session store
//!
//! Each visitor gets an opaque token carried in a cookie; the token keys
//! into a shared map of [`SessionState`]. Sessions expire after a period of
//! inactivity and expired entries are swept opportunistically on creation.
//! Within one session only one request runs at a time by design; the lock
//! exists for the shared map, not for per-session ordering.

use std::collections::HashMap;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use axum::http::{header, HeaderMap};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use nestegg_core::SessionState;

/// Cookie that carries the session token
pub const SESSION_COOKIE: &str = "nestegg_session";

/// Default session timeout (30 minutes of inactivity)
pub(crate) const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug)]
struct SessionEntry {
    state: SessionState,
    last_activity: Instant,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            state: SessionState::default(),
            last_activity: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.last_activity.elapsed() > ttl
    }

    fn touch(&mut self) {
        self.last_activity = Instant::now();
    }
}

/// In-memory session manager
#[derive(Debug)]
pub struct SessionManager {
    ttl: Duration,
    sessions: RwLock<HashMap<String, SessionEntry>>,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }
}

impl SessionManager {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a new session and return its token
    pub async fn create(&self) -> String {
        // Derive an opaque token from the creation timestamp
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let mut hasher = Sha256::new();
        hasher.update(timestamp.to_le_bytes());
        let hash = hasher.finalize();
        let session_id = format!("egg_{:x}", hash)[..20].to_string();

        let mut sessions = self.sessions.write().await;

        // Clean up expired sessions while we're here
        sessions.retain(|_, s| !s.is_expired(self.ttl));

        sessions.insert(session_id.clone(), SessionEntry::new());
        session_id
    }

    /// Get a session's state (None if unknown or expired)
    pub async fn get(&self, session_id: &str) -> Option<SessionState> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .filter(|s| !s.is_expired(self.ttl))
            .map(|s| s.state.clone())
    }

    /// Mutate a session's state, creating the session if the token is
    /// unknown (e.g. a stale cookie outliving its expired entry)
    pub async fn update<F>(&self, session_id: &str, mutate: F)
    where
        F: FnOnce(&mut SessionState),
    {
        let mut sessions = self.sessions.write().await;
        let entry = sessions
            .entry(session_id.to_string())
            .or_insert_with(SessionEntry::new);
        mutate(&mut entry.state);
        entry.touch();
    }
}

/// Extract the session token from the request's Cookie header
pub(crate) fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Build the Set-Cookie value for a session token
pub(crate) fn session_cookie(session_id: &str) -> String {
    format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn test_create_and_get() {
        let manager = SessionManager::default();
        let id = manager.create().await;
        assert!(id.starts_with("egg_"));

        let state = manager.get(&id).await.unwrap();
        assert!(state.income.is_none());
    }

    #[tokio::test]
    async fn test_update_roundtrip() {
        let manager = SessionManager::default();
        let id = manager.create().await;

        manager.update(&id, |s| s.set_income(3000.0)).await;

        let state = manager.get(&id).await.unwrap();
        assert_eq!(state.income, Some(3000.0));
    }

    #[tokio::test]
    async fn test_update_revives_unknown_token() {
        let manager = SessionManager::default();
        manager.update("egg_stale", |s| s.set_income(100.0)).await;

        let state = manager.get("egg_stale").await.unwrap();
        assert_eq!(state.income, Some(100.0));
    }

    #[tokio::test]
    async fn test_expired_session_is_gone() {
        let manager = SessionManager::with_ttl(Duration::ZERO);
        let id = manager.create().await;

        tokio::time::sleep(Duration::from_millis(5)).await;
        assert!(manager.get(&id).await.is_none());
    }

    #[test]
    fn test_session_id_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; nestegg_session=egg_abc123; lang=en"),
        );
        assert_eq!(
            session_id_from_headers(&headers).as_deref(),
            Some("egg_abc123")
        );

        let empty = HeaderMap::new();
        assert!(session_id_from_headers(&empty).is_none());
    }
}
