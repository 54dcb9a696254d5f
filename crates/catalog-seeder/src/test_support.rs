//! Test doubles for the seeder's ports.
//!
//! Only compiled with the `test-support` feature so integration tests can
//! drive a full run without a live catalogue service.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::ports::{CatalogApi, CatalogApiError, CategoryCreation, Collection, Confirmation};
use crate::seed::{CategorySeed, CreatedCategory, CreatedUser, ProductSeed, RecordId, UserSeed};

#[derive(Debug, Default)]
struct CatalogState {
    users: Vec<CreatedUser>,
    categories: Vec<CreatedCategory>,
    products: Vec<ProductSeed>,
    preexisting_products: usize,
    next_id: RecordId,
    product_requests: usize,
}

impl CatalogState {
    fn assign_id(&mut self) -> RecordId {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory catalogue that behaves like an accepting REST service.
///
/// Identifiers are assigned sequentially across all collections. User
/// emails must be unique and products must reference stored users and
/// categories, mirroring the validation of a real service.
#[derive(Debug, Default)]
pub struct InMemoryCatalogApi {
    state: Mutex<CatalogState>,
    unreachable: bool,
    reject_users: bool,
    unidentified_categories: bool,
    category_limit: Option<usize>,
    reject_every_nth_product: Option<usize>,
}

impl InMemoryCatalogApi {
    /// Create an empty, accepting catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every request with a transport error.
    #[must_use]
    pub const fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Reject every user creation with status 500.
    #[must_use]
    pub const fn rejecting_users(mut self) -> Self {
        self.reject_users = true;
        self
    }

    /// Store categories but answer without a readable body.
    #[must_use]
    pub const fn with_unidentified_categories(mut self) -> Self {
        self.unidentified_categories = true;
        self
    }

    /// Store at most `limit` categories; later creations answer status 409.
    #[must_use]
    pub const fn accepting_categories(mut self, limit: usize) -> Self {
        self.category_limit = Some(limit);
        self
    }

    /// Reject every `n`th product request with status 400.
    #[must_use]
    pub const fn rejecting_every_nth_product(mut self, n: usize) -> Self {
        self.reject_every_nth_product = Some(n);
        self
    }

    /// Pretend `count` products were stored by an earlier run.
    #[must_use]
    pub fn with_existing_products(self, count: usize) -> Self {
        self.lock().preexisting_products = count;
        self
    }

    /// Stored users.
    #[must_use]
    pub fn users(&self) -> Vec<CreatedUser> {
        self.lock().users.clone()
    }

    /// Stored categories.
    #[must_use]
    pub fn categories(&self) -> Vec<CreatedCategory> {
        self.lock().categories.clone()
    }

    /// Products stored by this fake, excluding pre-existing ones.
    #[must_use]
    pub fn products(&self) -> Vec<ProductSeed> {
        self.lock().products.clone()
    }

    /// Number of product create requests received, accepted or not.
    #[must_use]
    pub fn product_requests(&self) -> usize {
        self.lock().product_requests
    }

    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_reachable(&self) -> Result<(), CatalogApiError> {
        if self.unreachable {
            Err(CatalogApiError::transport("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogApi for InMemoryCatalogApi {
    async fn probe(&self) -> Result<(), CatalogApiError> {
        self.ensure_reachable()
    }

    async fn count(&self, collection: Collection) -> Result<usize, CatalogApiError> {
        self.ensure_reachable()?;
        let state = self.lock();
        Ok(match collection {
            Collection::Users => state.users.len(),
            Collection::Categories => state.categories.len(),
            Collection::Products => state.preexisting_products + state.products.len(),
        })
    }

    async fn create_user(&self, seed: &UserSeed) -> Result<CreatedUser, CatalogApiError> {
        self.ensure_reachable()?;
        if self.reject_users {
            return Err(CatalogApiError::unexpected_status(
                500_u16,
                "user store unavailable",
            ));
        }
        let mut state = self.lock();
        if state
            .users
            .iter()
            .any(|user| user.email.as_deref() == Some(seed.email))
        {
            return Err(CatalogApiError::unexpected_status(
                409_u16,
                format!("email {} already registered", seed.email),
            ));
        }
        let user = CreatedUser {
            id: state.assign_id(),
            name: Some(seed.name.to_owned()),
            email: Some(seed.email.to_owned()),
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn create_category(
        &self,
        seed: &CategorySeed,
    ) -> Result<CategoryCreation, CatalogApiError> {
        self.ensure_reachable()?;
        let mut state = self.lock();
        if self
            .category_limit
            .is_some_and(|limit| state.categories.len() >= limit)
        {
            return Err(CatalogApiError::unexpected_status(
                409_u16,
                format!("category {} already exists", seed.name),
            ));
        }
        let category = CreatedCategory {
            id: state.assign_id(),
            name: Some(seed.name.to_owned()),
            description: Some(seed.description.to_owned()),
        };
        state.categories.push(category.clone());
        if self.unidentified_categories {
            Ok(CategoryCreation::Unidentified)
        } else {
            Ok(CategoryCreation::Created(category))
        }
    }

    async fn list_categories(&self) -> Result<Vec<CreatedCategory>, CatalogApiError> {
        self.ensure_reachable()?;
        Ok(self.categories())
    }

    async fn create_product(&self, product: &ProductSeed) -> Result<(), CatalogApiError> {
        self.ensure_reachable()?;
        let mut state = self.lock();
        state.product_requests += 1;
        if self
            .reject_every_nth_product
            .is_some_and(|n| n > 0 && state.product_requests.is_multiple_of(n))
        {
            return Err(CatalogApiError::unexpected_status(400_u16, "rejected"));
        }
        if !state.users.iter().any(|user| user.id == product.user_id) {
            return Err(CatalogApiError::unexpected_status(
                400_u16,
                format!("unknown user {}", product.user_id),
            ));
        }
        let known: HashSet<RecordId> = state
            .categories
            .iter()
            .map(|category| category.id)
            .collect();
        if let Some(missing) = product.category_ids.iter().find(|id| !known.contains(*id)) {
            return Err(CatalogApiError::unexpected_status(
                400_u16,
                format!("unknown category {missing}"),
            ));
        }
        state.products.push(product.clone());
        Ok(())
    }
}

/// Confirmation double that returns a fixed answer and records questions.
#[derive(Debug, Default)]
pub struct ScriptedConfirmation {
    answer: bool,
    questions: Mutex<Vec<String>>,
}

impl ScriptedConfirmation {
    /// Answer every question with `answer`.
    #[must_use]
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            questions: Mutex::default(),
        }
    }

    /// Questions asked so far.
    #[must_use]
    pub fn questions(&self) -> Vec<String> {
        self.questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Confirmation for ScriptedConfirmation {
    async fn confirm(&self, question: &str) -> bool {
        self.questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(question.to_owned());
        self.answer
    }
}
