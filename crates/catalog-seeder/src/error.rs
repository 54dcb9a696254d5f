//! Error types for product generation and run orchestration.
//!
//! Per-item request failures never surface here; they are logged and
//! skipped by the seeder. These enums only describe conditions that stop a
//! run.

use thiserror::Error;

/// Errors raised while building a product payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No created user is available to own the product.
    #[error("no users available to own generated products")]
    NoUsers,
    /// No category is available to file the product under.
    #[error("no categories available for generated products")]
    NoCategories,
    /// Fewer distinct categories than a product must reference.
    #[error("only {available} distinct categories available; each product needs at least {required}")]
    TooFewCategories {
        /// Distinct category identifiers on offer.
        available: usize,
        /// Minimum categories per product.
        required: usize,
    },
}

/// Fatal conditions that abort a seeding run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeederError {
    /// The connectivity probe failed; nothing was written.
    #[error("cannot reach the catalogue service")]
    Unreachable,
    /// Every user creation request failed.
    #[error("no users were created; aborting")]
    NoUsersCreated,
    /// No category could be created or recovered.
    #[error("no categories were created or found; aborting")]
    NoCategoriesAvailable,
    /// Product payload generation failed.
    #[error("product generation failed: {0}")]
    Generation(#[from] GenerationError),
}
