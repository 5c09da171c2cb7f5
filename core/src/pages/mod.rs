// catalog_admin/src/pages/mod.rs

//! Page-level state machines. Each page owns its state behind a
//! [`Shared`](crate::state::Shared) and talks to the API only through a
//! [`CatalogGateway`](crate::gateway::CatalogGateway).

pub mod home;
pub mod login;
pub mod products;

pub use home::HomeDashboard;
pub use login::{LoginPage, INVALID_CREDENTIALS};
pub use products::{
  Confirm, ModalMode, PageState, ProductsPage, DELETE_CONFIRMATION, DELETE_PRODUCT_FAILED, LOAD_PRODUCTS_FAILED,
  SAVE_PRODUCT_FAILED,
};
