use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use crate::storage::Storage;

/// File-backed storage backend.
///
/// Each key is stored as `<dir>/<key>.json` holding the raw value text.
/// Entries survive process restarts until explicitly removed.
///
/// I/O failures on read and write are logged and degraded per the port
/// contract: a failed read is an absent key, a failed write is dropped.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create session store directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Open a store under the platform cache directory for `app_name`,
    /// e.g. `~/.cache/<app_name>/sessions` on Linux.
    pub fn open_default(app_name: &str) -> Result<Self> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Self::new(cache_dir.join(app_name).join("sessions"))
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(key, error = %e, "Failed to read session entry");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            warn!(key, error = %e, "Failed to write session entry");
        }
    }

    fn remove(&mut self, key: &str) {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(key, error = %e, "Failed to remove session entry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(store.get("session"), None);

        store.set("session", r#"{"username":"alice"}"#);
        assert_eq!(store.get("session"), Some(r#"{"username":"alice"}"#.to_string()));

        store.remove("session");
        assert_eq!(store.get("session"), None);

        // Idempotent
        store.remove("session");
    }

    #[test]
    fn test_entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();
        store.set("session", "persisted");
        drop(store);

        let reopened = FileStore::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.get("session"), Some("persisted".to_string()));
    }

    #[test]
    fn test_keys_map_to_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();

        store.set("admin_session", "a");
        store.set("member_session", "b");

        assert!(dir.path().join("admin_session.json").exists());
        assert!(dir.path().join("member_session.json").exists());

        store.remove("admin_session");
        assert_eq!(store.get("member_session"), Some("b".to_string()));
    }
}
