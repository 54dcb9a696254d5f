//! Ports at the seeder's boundary: the catalogue API it drives and the
//! operator confirmation it asks for.

mod macros;
pub(crate) use macros::define_port_error;

mod catalog_api;
mod confirmation;

#[cfg(test)]
pub use catalog_api::MockCatalogApi;
pub use catalog_api::{CatalogApi, CatalogApiError, CategoryCreation, Collection};
#[cfg(test)]
pub use confirmation::MockConfirmation;
pub use confirmation::{AutoConfirm, Confirmation, is_affirmative};
