//! Populate a catalogue REST service with seed users, categories, and products.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use catalog_seeder::{
    AutoConfirm, Confirmation, HttpCatalogApi, Seeder, SeederSettings, StdinConfirmation,
    run_until_interrupted,
};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(error) => {
            error!(%error, "catalogue seeding failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(error) = fmt().with_env_filter(filter).try_init() {
        warn!(%error, "tracing init failed");
    }
}

fn run() -> io::Result<ExitCode> {
    let settings = SeederSettings::load()
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let base_url = settings.base_url().map_err(io::Error::other)?;
    let timeout = settings.request_timeout().map_err(io::Error::other)?;
    let api = HttpCatalogApi::new(base_url, timeout)
        .map_err(|error| io::Error::other(format!("build HTTP client: {error}")))?;
    info!(base_url = %api.base_url(), ?timeout, "catalogue seeder starting");

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    let result = runtime.block_on(seed(api, &settings));
    // A pending stdin read must not hold the process open after Ctrl-C.
    runtime.shutdown_background();
    result
}

async fn seed(api: HttpCatalogApi, settings: &SeederSettings) -> io::Result<ExitCode> {
    let seeder = Seeder::new(Arc::new(api)).with_rng_seed(settings.rng_seed);
    let confirmation: Box<dyn Confirmation> = if settings.assume_yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(StdinConfirmation)
    };
    run_until_interrupted(
        &seeder,
        confirmation.as_ref(),
        settings.product_count(),
        interrupted(),
        &mut io::stdout(),
    )
    .await
}

/// Resolve on Ctrl-C; never resolve when the handler cannot be installed.
async fn interrupted() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
