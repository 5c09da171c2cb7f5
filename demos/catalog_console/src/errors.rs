// catalog_console/src/errors.rs

use catalog_admin::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Usage: {0}")]
  Usage(String),

  #[error("Catalog Error: {source}")]
  Catalog {
    #[from]
    source: CatalogError,
  },

  #[error("Console I/O Error: {0}")]
  Io(#[from] std::io::Error),
}

impl AppError {
  /// Text printed back to the operator. Catalog failures already carry a
  /// banner-ready message, so use that instead of the debug chain.
  pub fn display_for_operator(&self, fallback: &str) -> String {
    match self {
      AppError::Catalog { source } => source.user_message(fallback),
      other => other.to_string(),
    }
  }
}

// Terminal and filesystem calls attach context with anyhow and convert here.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    // Keep the I/O kind when there is one; the message carries the context chain.
    let kind = err
      .downcast_ref::<std::io::Error>()
      .map(std::io::Error::kind)
      .unwrap_or(std::io::ErrorKind::Other);
    AppError::Io(std::io::Error::new(kind, format!("{:#}", err)))
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
