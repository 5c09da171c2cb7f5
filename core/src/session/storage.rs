// catalog_admin/src/session/storage.rs

//! Persistent key/value stores backing the login session.

use crate::error::CatalogResult;
use anyhow::Context;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{event, Level};

/// Storage keys written at login.
pub mod keys {
  pub const TOKEN: &str = "token";
  pub const USERNAME: &str = "username";
  pub const ROLE: &str = "role";
}

/// Injected storage for session values.
///
/// Implementations must be cheap to read: every protected-route check goes
/// through `get`.
pub trait SessionStorage: Send + Sync {
  fn get(&self, key: &str) -> Option<String>;

  fn set(&self, key: &str, value: &str) -> CatalogResult<()>;

  fn remove(&self, key: &str) -> CatalogResult<()>;
}

/// Process-local storage. The default for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  values: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }
}

impl SessionStorage for MemoryStorage {
  fn get(&self, key: &str) -> Option<String> {
    self.values.read().get(key).cloned()
  }

  fn set(&self, key: &str, value: &str) -> CatalogResult<()> {
    self.values.write().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> CatalogResult<()> {
    self.values.write().remove(key);
    Ok(())
  }
}

/// JSON file storage, the closest thing to browser local storage for a
/// native host. Values are cached in memory and the whole map is rewritten
/// on every change.
pub struct FileStorage {
  path: PathBuf,
  cache: RwLock<HashMap<String, String>>,
}

impl FileStorage {
  /// Opens (or prepares to create) the session file at `path`.
  ///
  /// A missing file is an empty session. An unreadable or corrupt file is an
  /// error rather than silently discarding whatever was stored.
  pub fn open(path: impl AsRef<Path>) -> CatalogResult<Self> {
    let path = path.as_ref().to_path_buf();
    let cache: HashMap<String, String> = if path.exists() {
      let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("reading session file {}", path.display()))?;
      serde_json::from_str(&contents).with_context(|| format!("parsing session file {}", path.display()))?
    } else {
      HashMap::new()
    };
    event!(Level::DEBUG, path = %path.display(), entries = cache.len(), "Session file opened.");
    Ok(Self {
      path,
      cache: RwLock::new(cache),
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn save(&self, snapshot: &HashMap<String, String>) -> CatalogResult<()> {
    let contents = serde_json::to_string_pretty(snapshot).context("serializing session values")?;
    std::fs::write(&self.path, contents).with_context(|| format!("writing session file {}", self.path.display()))?;
    Ok(())
  }
}

impl SessionStorage for FileStorage {
  fn get(&self, key: &str) -> Option<String> {
    self.cache.read().get(key).cloned()
  }

  // The write guard is held through `save` so the file is written in the
  // same order the cache changes.
  fn set(&self, key: &str, value: &str) -> CatalogResult<()> {
    let mut cache = self.cache.write();
    cache.insert(key.to_string(), value.to_string());
    self.save(&cache)
  }

  fn remove(&self, key: &str) -> CatalogResult<()> {
    let mut cache = self.cache.write();
    if cache.remove(key).is_none() {
      return Ok(());
    }
    self.save(&cache)
  }
}

impl std::fmt::Debug for FileStorage {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FileStorage").field("path", &self.path).finish()
  }
}
