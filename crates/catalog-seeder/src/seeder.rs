//! Seeding orchestration.
//!
//! Drives the catalogue port through the fixed pipeline: probe, snapshot,
//! optional confirmation, users, categories, products, snapshot. Each request
//! is awaited before the next one is issued. Per-item failures are logged and
//! skipped; the run stops early only when the service is unreachable or the
//! reference data cannot support a valid product.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::error::{GenerationError, SeederError};
use crate::generator::{ProductGenerator, check_categories};
use crate::ports::{CatalogApi, CategoryCreation, Collection, Confirmation};
use crate::reference_data::{CATEGORIES, USERS};
use crate::seed::{
    CategorySeed, CreatedCategory, CreatedUser, ProductTally, StatusSnapshot, UserSeed,
};

/// Product failures logged individually before the rest are only counted.
pub const LOGGED_FAILURE_LIMIT: usize = 5;

/// A progress line is logged each time this many products have been created.
pub const PROGRESS_INTERVAL: usize = 100;

/// Question asked when the catalogue already holds products.
pub const CONTINUE_QUESTION: &str = "The catalogue already contains products. Continue and add more?";

/// Counts gathered over a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Snapshot taken before any write.
    pub before: StatusSnapshot,
    /// Snapshot taken after the product loop.
    pub after: StatusSnapshot,
    /// Users created in this run.
    pub users_created: usize,
    /// Categories created or recovered in this run.
    pub categories_available: usize,
    /// Product loop outcome.
    pub products: ProductTally,
}

/// How a run that did not hit a fatal error ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Every phase ran.
    Completed(SeedSummary),
    /// The operator declined to add data to a non-empty catalogue.
    Cancelled {
        /// Snapshot that prompted the question.
        before: StatusSnapshot,
    },
}

/// Service that populates a catalogue through a [`CatalogApi`].
pub struct Seeder<A: ?Sized> {
    api: Arc<A>,
    rng_seed: Option<u64>,
}

impl<A: ?Sized> Clone for Seeder<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            rng_seed: self.rng_seed,
        }
    }
}

impl<A: ?Sized> Seeder<A> {
    /// Create a seeder over `api` with entropy-seeded product generation.
    pub const fn new(api: Arc<A>) -> Self {
        Self {
            api,
            rng_seed: None,
        }
    }

    /// Make product generation reproducible for `seed`.
    #[must_use]
    pub const fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }
}

impl<A> Seeder<A>
where
    A: CatalogApi + ?Sized,
{
    /// Return `true` when the service answers the probe successfully.
    pub async fn check_connectivity(&self) -> bool {
        match self.api.probe().await {
            Ok(()) => {
                info!("connection to catalogue service established");
                true
            }
            Err(err) => {
                error!(kind = err.kind(), error = %err, "cannot connect to catalogue service");
                false
            }
        }
    }

    /// Count users, categories, and products; a failed count reads as zero.
    pub async fn fetch_status(&self) -> StatusSnapshot {
        StatusSnapshot {
            users: self.count_or_zero(Collection::Users).await,
            categories: self.count_or_zero(Collection::Categories).await,
            products: self.count_or_zero(Collection::Products).await,
        }
    }

    async fn count_or_zero(&self, collection: Collection) -> usize {
        match self.api.count(collection).await {
            Ok(count) => count,
            Err(err) => {
                warn!(
                    %collection,
                    kind = err.kind(),
                    error = %err,
                    "count unavailable; reporting zero"
                );
                0
            }
        }
    }

    /// Create each user once, returning the ones the service accepted.
    pub async fn create_users(&self, seeds: &[UserSeed]) -> Vec<CreatedUser> {
        info!(requested = seeds.len(), "creating users");
        let mut created = Vec::with_capacity(seeds.len());
        for seed in seeds {
            match self.api.create_user(seed).await {
                Ok(user) => {
                    info!(name = seed.name, id = user.id, "user created");
                    created.push(user);
                }
                Err(err) => {
                    warn!(name = seed.name, kind = err.kind(), error = %err, "user not created");
                }
            }
        }
        info!(created = created.len(), "users created");
        created
    }

    /// Create each category once, falling back to the stored list when no
    /// response carried an identifier.
    pub async fn create_categories(&self, seeds: &[CategorySeed]) -> Vec<CreatedCategory> {
        info!(requested = seeds.len(), "creating categories");
        let mut created = Vec::with_capacity(seeds.len());
        for seed in seeds {
            match self.api.create_category(seed).await {
                Ok(CategoryCreation::Created(category)) => {
                    info!(name = seed.name, id = category.id, "category created");
                    created.push(category);
                }
                Ok(CategoryCreation::Unidentified) => {
                    warn!(
                        name = seed.name,
                        "category accepted without a readable body; identifier unknown"
                    );
                }
                Err(err) => {
                    warn!(
                        name = seed.name,
                        kind = err.kind(),
                        error = %err,
                        "category not created"
                    );
                }
            }
        }

        if created.is_empty() {
            created = self.recover_categories().await;
        }
        info!(available = created.len(), "categories available");
        created
    }

    async fn recover_categories(&self) -> Vec<CreatedCategory> {
        info!("no category identifiers collected; listing stored categories");
        match self.api.list_categories().await {
            Ok(categories) => {
                info!(recovered = categories.len(), "categories recovered from service");
                categories
            }
            Err(err) => {
                error!(kind = err.kind(), error = %err, "failed to list categories");
                Vec::new()
            }
        }
    }

    /// Generate and submit `total` products, tallying accepted and rejected
    /// requests. Every product is attempted regardless of earlier failures.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when `users` is empty or `categories`
    /// offers fewer than two distinct identifiers.
    pub async fn create_products(
        &self,
        users: &[CreatedUser],
        categories: &[CreatedCategory],
        total: usize,
    ) -> Result<ProductTally, GenerationError> {
        info!(total, "creating products");
        let mut generator = ProductGenerator::new(self.rng_seed);
        let mut tally = ProductTally {
            requested: total,
            ..ProductTally::default()
        };

        for sequence in 1..=total {
            let product = generator.generate(sequence, users, categories)?;
            match self.api.create_product(&product).await {
                Ok(()) => {
                    tally.created += 1;
                    if tally.created.is_multiple_of(PROGRESS_INTERVAL) {
                        info!(created = tally.created, total, "products created so far");
                    }
                }
                Err(err) => {
                    tally.failed += 1;
                    if tally.failed <= LOGGED_FAILURE_LIMIT {
                        warn!(
                            name = %product.name,
                            kind = err.kind(),
                            error = %err,
                            "product not created"
                        );
                    }
                }
            }
        }

        info!(created = tally.created, "products created");
        if tally.failed > 0 {
            warn!(failed = tally.failed, "products failed");
        }
        Ok(tally)
    }

    /// Run the full pipeline, creating `product_count` products.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError`] when the service is unreachable, when no users
    /// could be created, or when fewer categories than a product must
    /// reference could be obtained. Records created before the abort stay in
    /// the service.
    pub async fn run<C>(
        &self,
        confirmation: &C,
        product_count: usize,
    ) -> Result<SeedOutcome, SeederError>
    where
        C: Confirmation + ?Sized,
    {
        info!("checking connection to catalogue service");
        if !self.check_connectivity().await {
            return Err(SeederError::Unreachable);
        }

        info!("reading catalogue status");
        let before = self.fetch_status().await;
        if before.products > 0 {
            warn!(products = before.products, "catalogue already contains products");
            if !confirmation.confirm(CONTINUE_QUESTION).await {
                info!("seeding cancelled by operator");
                return Ok(SeedOutcome::Cancelled { before });
            }
        }

        let users = self.create_users(&USERS).await;
        if users.is_empty() {
            return Err(SeederError::NoUsersCreated);
        }

        let categories = self.create_categories(&CATEGORIES).await;
        if categories.is_empty() {
            return Err(SeederError::NoCategoriesAvailable);
        }
        check_categories(&categories)?;

        let products = self
            .create_products(&users, &categories, product_count)
            .await?;
        let after = self.fetch_status().await;

        Ok(SeedOutcome::Completed(SeedSummary {
            before,
            after,
            users_created: users.len(),
            categories_available: categories.len(),
            products,
        }))
    }
}
