// catalog_admin/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failure of a single gateway call: either a non-2xx response or a
/// transport/decoding failure before a usable body was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct RemoteError {
  /// HTTP status, when a response was received at all.
  pub status: Option<u16>,
  /// The `message` field of the server's JSON error body, if it had one.
  pub server_message: Option<String>,
  /// Human readable description of what went wrong on the wire.
  pub detail: String,
}

impl RemoteError {
  /// A failure before any response arrived (connection refused, DNS, TLS...).
  pub fn transport(detail: impl Into<String>) -> Self {
    Self {
      status: None,
      server_message: None,
      detail: detail.into(),
    }
  }

  /// A non-2xx response, optionally carrying the server-supplied message.
  pub fn status(status: u16, server_message: Option<String>) -> Self {
    Self {
      status: Some(status),
      server_message: server_message.filter(|m| !m.trim().is_empty()),
      detail: format!("Request failed with status code {}", status),
    }
  }

  /// A 2xx response whose body could not be decoded into the expected type.
  pub fn decode(status: u16, detail: impl Into<String>) -> Self {
    Self {
      status: Some(status),
      server_message: None,
      detail: detail.into(),
    }
  }
}

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Remote call failed: {0}")]
  Remote(#[from] RemoteError),

  #[error("Validation rejected: {0}")]
  Validation(String),

  #[error("Operation already in progress: {0}")]
  Busy(String),

  #[error("Error in host-provided component. Source: {source}")]
  External {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal catalog error: {0}")]
  Internal(String),
}

impl CatalogError {
  /// Converts the failure into the text shown in an error banner.
  ///
  /// Remote failures prefer the server-supplied message and otherwise use
  /// `fallback`, which names the attempted action. Local failures use their
  /// own message, or `fallback` when that message is empty.
  pub fn user_message(&self, fallback: &str) -> String {
    let own = match self {
      CatalogError::Remote(remote) => return remote.server_message.clone().unwrap_or_else(|| fallback.to_string()),
      CatalogError::Validation(msg) | CatalogError::Busy(msg) | CatalogError::Internal(msg) => msg.clone(),
      CatalogError::External { source } => source.to_string(),
    };
    if own.trim().is_empty() {
      fallback.to_string()
    } else {
      own
    }
  }

  /// HTTP status of the underlying remote failure, if any.
  pub fn status(&self) -> Option<u16> {
    match self {
      CatalogError::Remote(remote) => remote.status,
      _ => None,
    }
  }
}

impl From<AnyhowError> for CatalogError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap a RemoteError that travelled through anyhow so callers can still
    // read its status and server message.
    if let Some(remote) = err.downcast_ref::<RemoteError>() {
      return CatalogError::Remote(remote.clone());
    }
    CatalogError::External { source: err }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
