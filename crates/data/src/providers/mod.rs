//! Catalog provider implementations.

mod http;
mod json_file;
mod static_catalog;

pub use http::HttpCatalog;
pub use json_file::JsonFileCatalog;
pub use static_catalog::StaticCatalog;
