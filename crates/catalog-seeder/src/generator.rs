//! Randomised product payload generation.
//!
//! Prefixes, adjectives, and owners are drawn uniformly with replacement.
//! Category identifiers are drawn without replacement by growing a set until
//! it reaches the target size, so every product lists distinct categories.

use std::collections::BTreeSet;

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::reference_data::{ADJECTIVES, PRODUCT_PREFIXES};
use crate::seed::{CreatedCategory, CreatedUser, Price, ProductSeed, RecordId};

/// Fewest categories attached to a product.
pub const MIN_CATEGORIES_PER_PRODUCT: usize = 2;

/// Most categories attached to a product.
pub const MAX_CATEGORIES_PER_PRODUCT: usize = 3;

/// Builds [`ProductSeed`] payloads from created users and categories.
///
/// # Example
///
/// ```
/// use catalog_seeder::{CreatedCategory, CreatedUser, ProductGenerator};
///
/// let users = vec![CreatedUser { id: 1, name: None, email: None }];
/// let categories: Vec<_> = (1..=4)
///     .map(|id| CreatedCategory { id, name: None, description: None })
///     .collect();
///
/// let mut generator = ProductGenerator::from_seed(42);
/// let product = generator.generate(1, &users, &categories).expect("generated");
///
/// assert!(product.name.ends_with(" 1"));
/// assert_eq!(product.user_id, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ProductGenerator {
    rng: ChaCha8Rng,
}

impl ProductGenerator {
    /// Create a generator whose output is reproducible for `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Create a seeded generator when `seed` is set, otherwise an entropic one.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    /// Generate the product with 1-based position `sequence`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::NoUsers`] or
    /// [`GenerationError::NoCategories`] when either input is empty.
    pub fn generate(
        &mut self,
        sequence: usize,
        users: &[CreatedUser],
        categories: &[CreatedCategory],
    ) -> Result<ProductSeed, GenerationError> {
        let owner = users.choose(&mut self.rng).ok_or(GenerationError::NoUsers)?;
        let category_ids = self.pick_category_ids(categories)?;

        let prefix = PRODUCT_PREFIXES.choose(&mut self.rng).copied().unwrap_or_default();
        let adjective = ADJECTIVES.choose(&mut self.rng).copied().unwrap_or_default();
        let name = format!("{prefix} {adjective} {sequence}");
        let description = product_description(&name);
        let price = Price::from_cents(
            self.rng
                .random_range(Price::MIN.cents()..=Price::MAX.cents()),
        );

        Ok(ProductSeed {
            name,
            price,
            description,
            user_id: owner.id,
            category_ids,
        })
    }

    /// Draw 2 or 3 distinct category identifiers.
    ///
    /// With exactly two distinct identifiers on offer every product gets
    /// both, so a short category list cannot stall the draw.
    fn pick_category_ids(
        &mut self,
        categories: &[CreatedCategory],
    ) -> Result<Vec<RecordId>, GenerationError> {
        let available = check_categories(categories)?;
        let wanted = self
            .rng
            .random_range(MIN_CATEGORIES_PER_PRODUCT..=MAX_CATEGORIES_PER_PRODUCT)
            .min(available);

        let mut picked = Vec::with_capacity(wanted);
        while picked.len() < wanted {
            let candidate = categories
                .choose(&mut self.rng)
                .ok_or(GenerationError::NoCategories)?;
            if !picked.contains(&candidate.id) {
                picked.push(candidate.id);
            }
        }
        Ok(picked)
    }
}

/// Check that `categories` offers enough distinct identifiers for a product,
/// returning how many there are.
///
/// # Errors
///
/// Returns [`GenerationError::NoCategories`] for an empty list and
/// [`GenerationError::TooFewCategories`] when fewer than
/// [`MIN_CATEGORIES_PER_PRODUCT`] distinct identifiers exist.
pub fn check_categories(categories: &[CreatedCategory]) -> Result<usize, GenerationError> {
    let available = categories
        .iter()
        .map(|category| category.id)
        .collect::<BTreeSet<RecordId>>()
        .len();
    match available {
        0 => Err(GenerationError::NoCategories),
        count if count < MIN_CATEGORIES_PER_PRODUCT => Err(GenerationError::TooFewCategories {
            available: count,
            required: MIN_CATEGORIES_PER_PRODUCT,
        }),
        count => Ok(count),
    }
}

/// Marketing copy attached to every generated product.
#[must_use]
pub fn product_description(name: &str) -> String {
    format!(
        "Descripción detallada del {name}. Producto de alta calidad con excelentes características."
    )
}
