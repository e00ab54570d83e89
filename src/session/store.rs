use chrono::Duration;
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::nav::Navigator;
use crate::session::record::SessionRecord;
use crate::storage::Storage;
use crate::utils::format::format_remaining;

/// Sessions expire 24 hours after login.
pub const SESSION_WINDOW_MS: i64 = 86_400_000;

/// Storage key for the admin-area session slot.
pub const ADMIN_SESSION_KEY: &str = "admin_session";

/// Storage key for the member-area session slot.
pub const MEMBER_SESSION_KEY: &str = "member_session";

/// What a storage key holds right now.
#[derive(Debug)]
enum SessionState {
    Valid(SessionRecord),
    Expired(SessionRecord),
    Absent,
    Corrupt,
}

/// Keyed session tracker over injected storage, clock, and navigation
/// ports.
///
/// Each operation acts on one storage key, so independent session slots
/// (see [`ADMIN_SESSION_KEY`], [`MEMBER_SESSION_KEY`]) coexist without
/// touching each other. All failure paths degrade to "not logged in"
/// semantics; nothing here returns an error.
pub struct SessionStore<S, C, N> {
    storage: S,
    clock: C,
    nav: N,
    window_ms: i64,
}

impl<S: Storage, C: Clock, N: Navigator> SessionStore<S, C, N> {
    pub fn new(storage: S, clock: C, nav: N) -> Self {
        Self {
            storage,
            clock,
            nav,
            window_ms: SESSION_WINDOW_MS,
        }
    }

    /// Override the session window. The default is 24 hours.
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window_ms = window.num_milliseconds();
        self
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The backing storage, mutably.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Record a login for `username` under `key`, stamped with the current
    /// time. Replaces any existing record under the key.
    pub fn store(&mut self, key: &str, username: &str) {
        let record = SessionRecord::new(username, self.clock.now_ms());
        match serde_json::to_string(&record) {
            Ok(text) => {
                self.storage.set(key, &text);
                debug!(key, username, "session stored");
            }
            Err(e) => warn!(key, error = %e, "Failed to serialize session record"),
        }
    }

    /// Whether `key` holds an unexpired session. Expired records are
    /// removed on detection, so a false answer also means the key no
    /// longer holds anything.
    pub fn is_valid(&mut self, key: &str) -> bool {
        match self.load(key) {
            SessionState::Valid(_) => true,
            SessionState::Expired(record) => {
                debug!(key, username = %record.username, "session expired, removing");
                self.storage.remove(key);
                false
            }
            SessionState::Absent | SessionState::Corrupt => false,
        }
    }

    /// The record under `key`, if present and parseable. Expiry is not
    /// checked here: callers that need freshness call [`is_valid`]
    /// separately.
    ///
    /// [`is_valid`]: SessionStore::is_valid
    pub fn get_data(&mut self, key: &str) -> Option<SessionRecord> {
        match self.load(key) {
            SessionState::Valid(record) | SessionState::Expired(record) => Some(record),
            SessionState::Absent | SessionState::Corrupt => None,
        }
    }

    /// Delete the record under `key` regardless of its state, then
    /// redirect to `redirect_target`.
    pub fn logout(&mut self, key: &str, redirect_target: &str) {
        self.storage.remove(key);
        debug!(key, "logged out");
        self.nav.redirect(redirect_target);
    }

    /// Gate page access: redirect to `login_target` unless `key` holds a
    /// valid session. No other effect when valid.
    pub fn protect(&mut self, key: &str, login_target: &str) {
        if !self.is_valid(key) {
            self.nav.redirect(login_target);
        }
    }

    /// Human-readable time left on the session under `key`:
    /// "Not logged in", "Error", "Expired", or `"{hours}h {minutes}m"`.
    pub fn remaining_time(&mut self, key: &str) -> String {
        match self.load(key) {
            SessionState::Absent => "Not logged in".to_string(),
            SessionState::Corrupt => "Error".to_string(),
            SessionState::Valid(record) | SessionState::Expired(record) => {
                let remaining = record.remaining_ms(self.clock.now_ms(), self.window_ms);
                if remaining <= 0 {
                    "Expired".to_string()
                } else {
                    format_remaining(remaining)
                }
            }
        }
    }

    /// Classify the record under `key`. Corrupt entries are deleted here,
    /// so every operation shares one cleanup policy.
    fn load(&mut self, key: &str) -> SessionState {
        let Some(text) = self.storage.get(key) else {
            return SessionState::Absent;
        };
        match serde_json::from_str::<SessionRecord>(&text) {
            Ok(record) => {
                if record.is_expired(self.clock.now_ms(), self.window_ms) {
                    SessionState::Expired(record)
                } else {
                    SessionState::Valid(record)
                }
            }
            Err(e) => {
                warn!(key, error = %e, "Corrupt session record, removing");
                self.storage.remove(key);
                SessionState::Corrupt
            }
        }
    }
}
