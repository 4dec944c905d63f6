//! In-memory sessions keyed by the `fitplan_session` cookie.
//!
//! A session is created by its first generation, never by a page view. The
//! store holds at most `max_sessions` entries and evicts the least recently
//! used one when a new session would exceed that.

use std::{
    collections::HashMap,
    num::NonZeroUsize,
    path::PathBuf,
    sync::{Mutex, PoisonError},
};

use axum::http::{HeaderMap, HeaderValue, header};
use tracing::debug;
use uuid::Uuid;

use crate::history::History;

pub const SESSION_COOKIE: &str = "fitplan_session";

pub const DEFAULT_MAX_SESSIONS: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(max) => max,
    None => NonZeroUsize::MIN,
};

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub history: History,
    /// PDF of the attempt shown last, if its export succeeded.
    pub last_pdf: Option<PathBuf>,
}

#[derive(Debug)]
struct Entry {
    session: Session,
    last_used: u64,
}

#[derive(Debug, Default)]
struct Sessions {
    entries: HashMap<Uuid, Entry>,
    clock: u64,
}

impl Sessions {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(id, _)| *id);
        if let Some(id) = oldest {
            self.entries.remove(&id);
            debug!(session = %id, "evicted least recently used session");
        }
    }
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<Sessions>,
    history_limit: Option<NonZeroUsize>,
    max_sessions: NonZeroUsize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SessionStore {
    pub fn new(history_limit: Option<NonZeroUsize>) -> Self {
        Self {
            sessions: Mutex::new(Sessions::default()),
            history_limit,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }

    pub fn with_max_sessions(mut self, max_sessions: NonZeroUsize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    /// Run `f` against the session `id`, creating it on first use. The lock
    /// is held only for the duration of `f`.
    pub fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let now = sessions.tick();

        if !sessions.entries.contains_key(&id) {
            while sessions.entries.len() >= self.max_sessions.get() {
                sessions.evict_least_recent();
            }
        }

        let entry = sessions.entries.entry(id).or_insert_with(|| Entry {
            session: Session {
                history: History::with_capacity_limit(self.history_limit),
                last_pdf: None,
            },
            last_used: now,
        });
        entry.last_used = now;
        f(&mut entry.session)
    }

    /// Run `f` against the session `id` if it exists. Never creates one.
    pub fn read<R>(&self, id: Uuid, f: impl FnOnce(Option<&Session>) -> R) -> R {
        let sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        f(sessions.entries.get(&id).map(|entry| &entry.session))
    }

    /// Snapshot of a session, if it exists.
    pub fn get(&self, id: Uuid) -> Option<Session> {
        self.read(id, |session| session.cloned())
    }

    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Session id carried by the request, if any.
pub fn session_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// Existing session id, or a fresh one plus the cookie that installs it.
pub fn resolve_session(headers: &HeaderMap) -> (Uuid, Option<HeaderValue>) {
    match session_from_headers(headers) {
        Some(id) => (id, None),
        None => {
            let id = Uuid::new_v4();
            (id, Some(session_cookie(id)))
        }
    }
}

fn session_cookie(id: Uuid) -> HeaderValue {
    // A hyphenated UUID is always a valid header value.
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax"
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("fitplan_session=; Path=/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_cookie_among_others() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; fitplan_session={id}; lang=en")).unwrap(),
        );

        assert_eq!(session_from_headers(&headers), Some(id));
        assert_eq!(resolve_session(&headers), (id, None));
    }

    #[test]
    fn invalid_cookie_starts_a_new_session() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("fitplan_session=nope"));

        let (id, cookie) = resolve_session(&headers);
        let cookie = cookie.unwrap();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with(&format!("fitplan_session={id};")));
        assert!(cookie.contains("HttpOnly"));
    }

    #[test]
    fn sessions_are_isolated() {
        let store = SessionStore::new(None);
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        store.with_session(a, |s| s.last_pdf = Some("a.pdf".into()));
        store.with_session(b, |_| ());

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(a).unwrap().last_pdf, Some("a.pdf".into()));
        assert_eq!(store.get(b).unwrap().last_pdf, None);
    }

    #[test]
    fn reading_never_creates_a_session() {
        let store = SessionStore::new(None);
        let id = Uuid::new_v4();

        assert!(store.read(id, |session| session.is_none()));
        assert!(store.get(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn evicts_least_recently_used_at_capacity() {
        let store = SessionStore::new(None).with_max_sessions(NonZeroUsize::new(2).unwrap());
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        store.with_session(a, |_| ());
        store.with_session(b, |_| ());
        // Touch `a` so `b` becomes the oldest.
        store.with_session(a, |_| ());
        store.with_session(c, |_| ());

        assert_eq!(store.len(), 2);
        assert!(store.get(a).is_some());
        assert!(store.get(b).is_none());
        assert!(store.get(c).is_some());
    }
}
