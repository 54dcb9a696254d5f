//! Driven port for the remote catalogue REST API.
//!
//! The seeder owns the request and response contract; adapters only deal
//! with transport, status codes, and body decoding.

use std::fmt;

use async_trait::async_trait;

use super::define_port_error;
use crate::seed::{CategorySeed, CreatedCategory, CreatedUser, ProductSeed, UserSeed};

/// Collections whose size makes up a status snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// `GET /users`.
    Users,
    /// `GET /categories`.
    Categories,
    /// `GET /products/all`.
    Products,
}

impl Collection {
    /// Path of the listing endpoint, relative to the base URL.
    #[must_use]
    pub const fn list_path(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Categories => "categories",
            Self::Products => "products/all",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Users => "users",
            Self::Categories => "categories",
            Self::Products => "products",
        };
        f.write_str(label)
    }
}

/// Result of a successful category create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryCreation {
    /// The service returned the stored category.
    Created(CreatedCategory),
    /// The service accepted the request but sent no parseable body.
    Unidentified,
}

define_port_error! {
    /// Errors surfaced while calling the catalogue service.
    pub enum CatalogApiError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "catalogue transport failed: {message}",
        /// The request exceeded its timeout.
        Timeout { message: String } =>
            "catalogue request timed out: {message}",
        /// The service answered with a status outside the accepted set.
        UnexpectedStatus { status: u16, message: String } =>
            "catalogue returned status {status}: {message}",
        /// A response body could not be decoded.
        Decode { message: String } =>
            "catalogue response decode failed: {message}",
        /// The endpoint URL could not be built from the base URL.
        InvalidEndpoint { message: String } =>
            "catalogue endpoint invalid: {message}",
    }
}

/// Port for reading and creating catalogue records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Issue the connectivity probe (`GET /products/all`).
    async fn probe(&self) -> Result<(), CatalogApiError>;

    /// Count the records currently stored in `collection`.
    async fn count(&self, collection: Collection) -> Result<usize, CatalogApiError>;

    /// Create one user and return the stored record.
    async fn create_user(&self, seed: &UserSeed) -> Result<CreatedUser, CatalogApiError>;

    /// Create one category.
    async fn create_category(
        &self,
        seed: &CategorySeed,
    ) -> Result<CategoryCreation, CatalogApiError>;

    /// List every stored category.
    async fn list_categories(&self) -> Result<Vec<CreatedCategory>, CatalogApiError>;

    /// Create one product.
    async fn create_product(&self, product: &ProductSeed) -> Result<(), CatalogApiError>;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Collection::Users, "users")]
    #[case(Collection::Categories, "categories")]
    #[case(Collection::Products, "products/all")]
    fn list_paths_match_service_routes(#[case] collection: Collection, #[case] path: &str) {
        assert_eq!(collection.list_path(), path);
    }

    #[test]
    fn unexpected_status_message_includes_code() {
        let err = CatalogApiError::unexpected_status(409_u16, "email already registered");
        assert_eq!(
            err.to_string(),
            "catalogue returned status 409: email already registered"
        );
        assert_eq!(err.kind(), "unexpected_status");
    }
}
