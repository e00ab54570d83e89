//! Sessiongate - time-limited session tracking over pluggable storage.
//!
//! This crate records a login timestamp and identifier in a persistent
//! string-keyed store, validates it against a fixed time-to-live, and
//! provides helpers to gate access and report remaining session time.
//!
//! The shared key-value store, the ambient clock, and the redirect
//! capability are injected as ports, so callers can run against real
//! persistent storage and wall-clock time in production and against
//! in-memory fakes in tests:
//!
//! - `Storage`: [`MemoryStore`] (ephemeral) or [`FileStore`] (one JSON
//!   file per key, surviving restarts)
//! - `Clock`: [`SystemClock`] or [`ManualClock`]
//! - `Navigator`: [`NullNavigator`] or [`RecordingNavigator`]
//!
//! Sessions expire 24 hours after login; expiry is lazy, detected and
//! cleaned up when a validity check touches the record.

mod clock;
mod nav;
mod session;
mod storage;
mod utils;

pub use clock::{Clock, ManualClock, SystemClock};
pub use nav::{Navigator, NullNavigator, RecordingNavigator};
pub use session::{
    SessionRecord, SessionStore, ADMIN_SESSION_KEY, MEMBER_SESSION_KEY, SESSION_WINDOW_MS,
};
pub use storage::{FileStore, MemoryStore, Storage};
