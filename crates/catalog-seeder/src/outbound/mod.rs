//! Adapters implementing the seeder's ports.

mod http_catalog;
mod stdin_confirmation;

pub use http_catalog::HttpCatalogApi;
pub use stdin_confirmation::StdinConfirmation;
