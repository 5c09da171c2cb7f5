// catalog_admin/src/session/mod.rs

//! The authenticated session: an explicit object handed to whatever needs
//! the token or the current user, backed by an injected [`SessionStorage`].

pub mod storage;

pub use storage::{FileStorage, MemoryStorage, SessionStorage};

use crate::error::CatalogResult;
use crate::model::LoginResponse;
use std::sync::Arc;
use storage::keys;
use tracing::{event, instrument, Level};

#[derive(Clone)]
pub struct Session {
  storage: Arc<dyn SessionStorage>,
}

impl Session {
  pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
    Self { storage }
  }

  /// A session held only in memory.
  pub fn in_memory() -> Self {
    Self::new(Arc::new(MemoryStorage::new()))
  }

  /// Persists the three login values. Called only after a successful login.
  ///
  /// All or nothing: if any write fails, whatever was already written is
  /// cleared so a partial session never counts as authenticated.
  #[instrument(name = "Session::store", skip_all, fields(username = %login.username, role = %login.role), err(Display))]
  pub fn store(&self, login: &LoginResponse) -> CatalogResult<()> {
    let written = self
      .storage
      .set(keys::TOKEN, &login.token)
      .and_then(|_| self.storage.set(keys::USERNAME, &login.username))
      .and_then(|_| self.storage.set(keys::ROLE, &login.role));
    if let Err(e) = written {
      if let Err(cleanup) = self.clear() {
        event!(Level::WARN, error = %cleanup, "Could not clear a partially stored session.");
      }
      return Err(e);
    }
    event!(Level::INFO, "Session stored.");
    Ok(())
  }

  pub fn token(&self) -> Option<String> {
    self.storage.get(keys::TOKEN).filter(|t| !t.is_empty())
  }

  pub fn username(&self) -> Option<String> {
    self.storage.get(keys::USERNAME)
  }

  pub fn role(&self) -> Option<String> {
    self.storage.get(keys::ROLE)
  }

  /// Presence check only; the token is not validated client-side.
  pub fn is_authenticated(&self) -> bool {
    self.token().is_some()
  }

  pub fn clear(&self) -> CatalogResult<()> {
    self.storage.remove(keys::TOKEN)?;
    self.storage.remove(keys::USERNAME)?;
    self.storage.remove(keys::ROLE)?;
    event!(Level::INFO, "Session cleared.");
    Ok(())
  }
}

impl std::fmt::Debug for Session {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Session")
      .field("authenticated", &self.is_authenticated())
      .field("username", &self.username())
      .finish()
  }
}
