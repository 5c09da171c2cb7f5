// catalog_admin/src/lib.rs

//! catalog_admin: client-side core of a product-catalog administration UI.
//!
//! The crate drives three screens against the catalog REST API:
//!  - a login screen that persists the session through injected storage,
//!  - a home dashboard showing the product count,
//!  - a products page with keyword search and create/edit/delete through a modal form.
//!
//! Rendering is left to the host. The host calls page operations and reads
//! back state (filtered products, draft, error banner, loading flags).

pub mod error;
pub mod form;
pub mod gateway;
pub mod model;
pub mod navigation;
pub mod pages;
pub mod session;
pub mod state;

// --- Re-exports for the Public API ---

pub use crate::error::{CatalogError, CatalogResult, RemoteError};

pub use crate::model::{Category, CategoryId, LoginRequest, LoginResponse, Product, ProductId, ProductRequest, NO_CATEGORY};

pub use crate::gateway::{CatalogGateway, HttpGateway, HttpGatewayOptions};

pub use crate::session::{FileStorage, MemoryStorage, Session, SessionStorage};

pub use crate::state::{CategoryCache, ProductList, Shared};

pub use crate::form::{FormAction, FormConstraints};

pub use crate::pages::{Confirm, HomeDashboard, LoginPage, ModalMode, PageState, ProductsPage};

pub use crate::navigation::Route;

/*
    Typical wiring:
    1. Build a `Session` over a `SessionStorage` (memory or file).
    2. Build an `HttpGateway` with the API base URL and that session.
    3. `LoginPage::submit` stores the token; `navigation::resolve` gates routes.
    4. `ProductsPage::mount` loads data; the host renders `filtered_view()`,
       feeds input through `dispatch(FormAction::...)` and calls `submit`/`delete`.
*/
