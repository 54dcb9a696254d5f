//! Interruptible seeding run with console reporting.
//!
//! The binary wires this to Ctrl-C and stdout; tests pass any future and
//! writer. Whichever of the run and the interrupt finishes first decides the
//! exit status.

use std::future::Future;
use std::io::{self, Write};
use std::pin::pin;
use std::process::ExitCode;

use tracing::{error, info, warn};

use crate::error::SeederError;
use crate::ports::{CatalogApi, Confirmation};
use crate::report::{render_outcome, render_status};
use crate::seeder::{SeedOutcome, Seeder};

/// Run `seeder` until it finishes or `interrupt` resolves, writing the
/// console report to `out`.
///
/// Completion, a declined confirmation, and an interrupt exit successfully.
/// Fatal aborts exit with failure; an abort after the probe also writes a
/// fresh status snapshot unless the interrupt fires while it is gathered.
///
/// # Errors
///
/// Returns an I/O error when the report cannot be written.
pub async fn run_until_interrupted<A, C, I, W>(
    seeder: &Seeder<A>,
    confirmation: &C,
    product_count: usize,
    interrupt: I,
    out: &mut W,
) -> io::Result<ExitCode>
where
    A: CatalogApi + ?Sized,
    C: Confirmation + ?Sized,
    I: Future<Output = ()>,
    W: Write + ?Sized,
{
    let mut interrupted = pin!(interrupt);

    let result = tokio::select! {
        outcome = seeder.run(confirmation, product_count) => outcome,
        () = &mut interrupted => {
            warn!("seeding interrupted by operator");
            return Ok(ExitCode::SUCCESS);
        }
    };

    match result {
        Ok(outcome) => {
            write_report(out, &render_outcome(&outcome))?;
            if let SeedOutcome::Completed(summary) = outcome {
                info!(
                    created = summary.products.created,
                    failed = summary.products.failed,
                    "seeding completed"
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(SeederError::Unreachable) => {
            error!("cannot reach the catalogue service; is it running?");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            error!(error = %err, "seeding aborted");
            let after = tokio::select! {
                status = seeder.fetch_status() => status,
                () = &mut interrupted => {
                    warn!("status check interrupted by operator");
                    return Ok(ExitCode::SUCCESS);
                }
            };
            write_report(out, &render_status("Status after abort", &after))?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn write_report<W: Write + ?Sized>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}
