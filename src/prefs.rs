//! Persistent viewer preferences.
//!
//! Stores are best-effort: callers swallow every error they return.

use anyhow::{bail, Context, Result};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use tracing::warn;

/// Key under which the preferred locale code is stored.
pub const PREFERRED_LANG_KEY: &str = "preferredLang";

/// A string key-value store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Can be switched into a failing mode to model storage
/// that is unavailable (private browsing, quota exceeded).
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
    failing: Cell<bool>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `key = value`.
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// A store whose every read and write fails.
    pub fn failing() -> Self {
        let store = Self::default();
        store.failing.set(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.failing.get() {
            bail!("preference storage unavailable");
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.failing.get() {
            bail!("preference storage unavailable");
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores preferences as a flat JSON object in a file. A missing file reads
/// as an empty store.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences from {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid preferences file {}", self.path.display()))
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    /// An unreadable file is replaced by a fresh one.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load().unwrap_or_else(|e| {
            warn!("Discarding unreadable preferences: {:#}", e);
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());
        let content = serde_json::to_string_pretty(&values)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences to {}", self.path.display()))
    }
}
