// catalog_admin/src/navigation.rs

//! Route resolution with the protected-route check.

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
  Login,
  Home,
  Products,
}

impl Route {
  pub fn path(self) -> &'static str {
    match self {
      Route::Login => "/login",
      Route::Home => "/home",
      Route::Products => "/products",
    }
  }

  /// Everything except the login screen needs a token.
  pub fn is_protected(self) -> bool {
    !matches!(self, Route::Login)
  }

  fn from_path(path: &str) -> Option<Self> {
    let path = path.trim().trim_end_matches('/');
    [Route::Login, Route::Home, Route::Products]
      .into_iter()
      .find(|route| route.path() == path)
  }
}

/// Where a request for `path` actually lands.
///
/// Unknown paths go home; protected routes without a session token go to
/// the login screen. The token is only checked for presence.
pub fn resolve(path: &str, session: &Session) -> Route {
  let route = Route::from_path(path).unwrap_or(Route::Home);
  if route.is_protected() && !session.is_authenticated() {
    tracing::debug!(requested = path, "No session token, redirecting to login.");
    return Route::Login;
  }
  route
}
