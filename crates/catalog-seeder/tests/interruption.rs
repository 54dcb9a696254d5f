//! Interrupted runs and exit statuses of the console run.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::future::pending;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use catalog_seeder::test_support::InMemoryCatalogApi;
use catalog_seeder::{
    AutoConfirm, CatalogApi, CatalogApiError, CategoryCreation, CategorySeed, Collection,
    CreatedCategory, CreatedUser, ProductSeed, Seeder, UserSeed, run_until_interrupted,
};
use tokio::sync::Notify;

/// Where the catalogue stops answering and signals the interrupt.
#[derive(Debug, Clone, Copy)]
enum Stall {
    /// The `n`th product request never completes.
    ProductRequest(usize),
    /// Counts requested after the user phase never complete.
    CountAfterUsers,
}

/// Wraps the in-memory catalogue and hangs at the configured point, as a
/// request in flight when the operator presses Ctrl-C.
struct StallingCatalog {
    inner: InMemoryCatalogApi,
    stall: Stall,
    reached: Arc<Notify>,
    users_attempted: AtomicBool,
}

impl StallingCatalog {
    fn new(inner: InMemoryCatalogApi, stall: Stall) -> Self {
        Self {
            inner,
            stall,
            reached: Arc::new(Notify::new()),
            users_attempted: AtomicBool::new(false),
        }
    }

    async fn hang(&self) {
        self.reached.notify_one();
        pending::<()>().await;
    }
}

#[async_trait]
impl CatalogApi for StallingCatalog {
    async fn probe(&self) -> Result<(), CatalogApiError> {
        self.inner.probe().await
    }

    async fn count(&self, collection: Collection) -> Result<usize, CatalogApiError> {
        if matches!(self.stall, Stall::CountAfterUsers)
            && self.users_attempted.load(Ordering::SeqCst)
        {
            self.hang().await;
        }
        self.inner.count(collection).await
    }

    async fn create_user(&self, seed: &UserSeed) -> Result<CreatedUser, CatalogApiError> {
        self.users_attempted.store(true, Ordering::SeqCst);
        self.inner.create_user(seed).await
    }

    async fn create_category(
        &self,
        seed: &CategorySeed,
    ) -> Result<CategoryCreation, CatalogApiError> {
        self.inner.create_category(seed).await
    }

    async fn list_categories(&self) -> Result<Vec<CreatedCategory>, CatalogApiError> {
        self.inner.list_categories().await
    }

    async fn create_product(&self, product: &ProductSeed) -> Result<(), CatalogApiError> {
        let result = self.inner.create_product(product).await;
        if matches!(self.stall, Stall::ProductRequest(n) if self.inner.product_requests() == n) {
            self.hang().await;
        }
        result
    }
}

fn seeder<A: ?Sized>(api: &Arc<A>) -> Seeder<A> {
    Seeder::new(Arc::clone(api)).with_rng_seed(Some(9))
}

#[tokio::test]
async fn interrupt_mid_run_stops_product_creation() {
    let api = Arc::new(StallingCatalog::new(
        InMemoryCatalogApi::new(),
        Stall::ProductRequest(40),
    ));
    let reached = Arc::clone(&api.reached);
    let mut out = Vec::new();

    let code = run_until_interrupted(
        &seeder(&api),
        &AutoConfirm,
        1200,
        reached.notified(),
        &mut out,
    )
    .await
    .expect("report written");

    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(api.inner.product_requests(), 40);
    assert!(out.is_empty(), "no summary after an interrupt");
}

#[tokio::test]
async fn interrupt_during_post_abort_status_exits_cleanly() {
    let api = Arc::new(StallingCatalog::new(
        InMemoryCatalogApi::new().rejecting_users(),
        Stall::CountAfterUsers,
    ));
    let reached = Arc::clone(&api.reached);
    let mut out = Vec::new();

    let code = run_until_interrupted(&seeder(&api), &AutoConfirm, 10, reached.notified(), &mut out)
        .await
        .expect("report written");

    assert_eq!(code, ExitCode::SUCCESS);
    assert!(out.is_empty(), "status is not printed once interrupted");
    assert_eq!(api.inner.product_requests(), 0);
}

#[tokio::test]
async fn completed_run_prints_summary_and_succeeds() {
    let api = Arc::new(InMemoryCatalogApi::new());
    let mut out = Vec::new();

    let code = run_until_interrupted(&seeder(&api), &AutoConfirm, 30, pending(), &mut out)
        .await
        .expect("report written");

    assert_eq!(code, ExitCode::SUCCESS);
    let text = String::from_utf8(out).expect("report is UTF-8");
    assert!(text.contains("  - Products: 30/30\n"));
    assert!(text.ends_with("Seeding completed.\n"));
}

#[tokio::test]
async fn unreachable_service_exits_with_failure() {
    let api = Arc::new(InMemoryCatalogApi::new().unreachable());
    let mut out = Vec::new();

    let code = run_until_interrupted(&seeder(&api), &AutoConfirm, 10, pending(), &mut out)
        .await
        .expect("report written");

    assert_eq!(code, ExitCode::FAILURE);
    assert!(out.is_empty());
    assert_eq!(api.product_requests(), 0);
}

#[tokio::test]
async fn aborted_run_prints_status_and_fails() {
    let api = Arc::new(InMemoryCatalogApi::new().rejecting_users());
    let mut out = Vec::new();

    let code = run_until_interrupted(&seeder(&api), &AutoConfirm, 10, pending(), &mut out)
        .await
        .expect("report written");

    assert_eq!(code, ExitCode::FAILURE);
    let text = String::from_utf8(out).expect("report is UTF-8");
    assert_eq!(
        text,
        "Status after abort:\n  - Users: 0\n  - Categories: 0\n  - Products: 0\n"
    );
}
