pub mod catalog_loader;
pub mod error;
pub mod user_store;

pub use catalog_loader::{load_catalog, parse_catalog, CatalogLoad};
pub use error::{StoreError, StoreResult};
pub use user_store::{UserStore, USER_HEADER};
