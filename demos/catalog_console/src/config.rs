// catalog_console/src/config.rs

use crate::errors::{AppError, Result};
use catalog_admin::gateway::DEFAULT_BASE_URL;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
  /// Root of the catalog REST API.
  pub api_base_url: String,
  /// Where the login session is persisted. `None` keeps it in memory only.
  pub session_file: Option<PathBuf>,
  pub user_agent: Option<String>,
}

impl ConsoleConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| env::var(var_name).ok().filter(|v| !v.trim().is_empty());

    let api_base_url = get_env("CATALOG_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
      return Err(AppError::Config(format!(
        "CATALOG_API_URL must be an http(s) URL, got '{}'",
        api_base_url
      )));
    }

    let session_file = get_env("CATALOG_SESSION_FILE").map(PathBuf::from);
    let user_agent = get_env("CATALOG_USER_AGENT");

    tracing::info!(api_base_url = %api_base_url, persistent_session = session_file.is_some(), "Console configuration loaded.");

    Ok(Self {
      api_base_url,
      session_file,
      user_agent,
    })
  }
}
