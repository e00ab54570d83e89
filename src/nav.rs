//! Navigation port for redirect side effects.
//!
//! `logout` and `protect` fire a redirect through this port. The call is
//! fire-and-forget: not awaited, not validated, and any failure is the
//! implementation's problem.

use std::sync::{Arc, Mutex};

use tracing::debug;

/// Capability to redirect the current page or view to a target URL.
pub trait Navigator {
    fn redirect(&self, target: &str);
}

/// Navigator that performs no redirect, only emitting a diagnostic event.
///
/// Useful for headless contexts where the caller handles navigation out of
/// band.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn redirect(&self, target: &str) {
        debug!(url = target, "redirect requested");
    }
}

/// Navigator that records every redirect target it receives.
///
/// Clones share the same recording, so a test can keep a handle while a
/// store owns another clone.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    targets: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets seen so far, in call order.
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().expect("navigator lock poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, target: &str) {
        self.targets
            .lock()
            .expect("navigator lock poisoned")
            .push(target.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_navigator_captures_targets() {
        let nav = RecordingNavigator::new();
        let handle = nav.clone();

        nav.redirect("/login.html");
        nav.redirect("/index.html");

        assert_eq!(handle.targets(), vec!["/login.html", "/index.html"]);
    }

    #[test]
    fn test_recording_navigator_starts_empty() {
        assert!(RecordingNavigator::new().targets().is_empty());
    }
}
