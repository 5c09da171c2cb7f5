// catalog_console/src/state.rs
use crate::config::ConsoleConfig;
use crate::errors::Result;
use anyhow::Context;
use catalog_admin::{
  FileStorage, HomeDashboard, HttpGateway, HttpGatewayOptions, LoginPage, ProductsPage, Session, SessionStorage,
};
use std::sync::Arc;

/// Everything the command loop needs, built once at startup.
pub struct ConsoleState {
  pub config: Arc<ConsoleConfig>,
  pub session: Session,
  pub gateway: Arc<HttpGateway>,
  pub login: LoginPage<HttpGateway>,
  pub products: ProductsPage<HttpGateway>,
  pub products_mounted: bool,
}

impl ConsoleState {
  pub fn build(config: Arc<ConsoleConfig>) -> Result<Self> {
    let session = match &config.session_file {
      Some(path) => {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
          std::fs::create_dir_all(dir)
            .with_context(|| format!("creating session directory {}", dir.display()))?;
        }
        let storage: Arc<dyn SessionStorage> = Arc::new(FileStorage::open(path)?);
        Session::new(storage)
      }
      None => Session::in_memory(),
    };

    let options = HttpGatewayOptions {
      base_url: config.api_base_url.clone(),
      user_agent: config.user_agent.clone(),
    };
    let gateway = Arc::new(HttpGateway::new(options, Some(session.clone()))?);

    Ok(Self {
      login: LoginPage::new(Arc::clone(&gateway), session.clone()),
      products: ProductsPage::new(Arc::clone(&gateway)),
      products_mounted: false,
      config,
      session,
      gateway,
    })
  }

  /// A fresh dashboard per visit, so the count starts from zero each time.
  pub fn home(&self) -> HomeDashboard<HttpGateway> {
    HomeDashboard::new(Arc::clone(&self.gateway))
  }

  /// Leaving the products page: drop its state so the next visit reloads.
  pub fn leave_products(&mut self) {
    if self.products_mounted {
      self.products.unmount();
      self.products = ProductsPage::new(Arc::clone(&self.gateway));
      self.products_mounted = false;
    }
  }
}
