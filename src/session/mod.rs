//! Session tracking: the record model and the keyed session store.
//!
//! This module provides:
//! - `SessionRecord`: the stored `{username, loginTime}` pair for one login
//! - `SessionStore`: validity checks, access gating, and remaining-time
//!   reporting over injected storage/clock/navigation ports
//!
//! Records are kept under caller-supplied string keys; two named constants
//! identify the two session slots the application uses. Sessions expire
//! 24 hours after login, cleaned up lazily when a validity check touches
//! the record.

pub mod record;
pub mod store;

pub use record::SessionRecord;
pub use store::{SessionStore, ADMIN_SESSION_KEY, MEMBER_SESSION_KEY, SESSION_WINDOW_MS};
