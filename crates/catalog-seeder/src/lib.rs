//! Seed data loader for a catalogue REST service.
//!
//! The crate populates a running catalogue with a fixed set of users and
//! categories followed by a configurable number of synthetic products that
//! reference them. It talks to the service only through its public HTTP API.
//!
//! # Overview
//!
//! - [`Seeder`] orchestrates a run: probe, status snapshot, optional
//!   confirmation, users, categories, products, final snapshot.
//! - [`ProductGenerator`] builds randomised product payloads with distinct
//!   category references and prices between 10.00 and 5000.00.
//! - [`CatalogApi`] and [`Confirmation`] are the ports; [`HttpCatalogApi`]
//!   and [`StdinConfirmation`] are the production adapters.
//! - [`run_until_interrupted`] races a run against an interrupt future and
//!   writes the console report.
//! - [`SeederSettings`] loads configuration through OrthoConfig.
//!
//! # Example
//!
//! ```
//! use catalog_seeder::{CreatedCategory, CreatedUser, ProductGenerator};
//!
//! let users = vec![CreatedUser { id: 7, name: None, email: None }];
//! let categories: Vec<_> = (1..=10)
//!     .map(|id| CreatedCategory { id, name: None, description: None })
//!     .collect();
//!
//! let mut generator = ProductGenerator::from_seed(2024);
//! let product = generator.generate(3, &users, &categories).expect("generated");
//!
//! assert!((2..=3).contains(&product.category_ids.len()));
//! ```

mod error;
mod generator;
pub mod outbound;
pub mod ports;
pub mod reference_data;
pub mod report;
mod runner;
mod seed;
mod seeder;
mod settings;
#[cfg(feature = "test-support")]
pub mod test_support;

pub use error::{GenerationError, SeederError};
pub use generator::{
    MAX_CATEGORIES_PER_PRODUCT, MIN_CATEGORIES_PER_PRODUCT, ProductGenerator, check_categories,
    product_description,
};
pub use outbound::{HttpCatalogApi, StdinConfirmation};
pub use ports::{
    AutoConfirm, CatalogApi, CatalogApiError, CategoryCreation, Collection, Confirmation,
};
pub use runner::run_until_interrupted;
pub use seed::{
    CategorySeed, CreatedCategory, CreatedUser, Price, ProductSeed, ProductTally, RecordId,
    StatusSnapshot, UserSeed,
};
pub use seeder::{
    CONTINUE_QUESTION, LOGGED_FAILURE_LIMIT, PROGRESS_INTERVAL, SeedOutcome, SeedSummary, Seeder,
};
pub use settings::{SeederSettings, SettingsError};
