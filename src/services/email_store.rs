use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{info, warn};

use crate::errors::StoreError;

pub const USER_EMAIL_KEY: &str = "userEmail";

/// Small persistent string store, the only state kept across sessions.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// JSON object on disk, rewritten whole on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> FileStore {
        FileStore {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// Best effort: a failed write is logged and otherwise ignored.
pub fn remember_email(store: &dyn KeyValueStore, email: &str) {
    match store.set(USER_EMAIL_KEY, email) {
        Ok(()) => info!("User email saved: {email}"),
        Err(e) => warn!("Error storing user email: {e}"),
    }
}

pub fn last_email(store: &dyn KeyValueStore) -> Option<String> {
    match store.get(USER_EMAIL_KEY) {
        Ok(email) => email,
        Err(e) => {
            warn!("Error reading stored user email: {e}");
            None
        }
    }
}
