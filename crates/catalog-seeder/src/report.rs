//! Plain-text console summary of a seeding run.
//!
//! Rendering is pure so the binary only has to write the result to stdout.

use std::fmt;

use crate::seed::StatusSnapshot;
use crate::seeder::{SeedOutcome, SeedSummary};

const RULE_WIDTH: usize = 60;

/// Render the operator-facing summary for `outcome`.
#[must_use]
pub fn render_outcome(outcome: &SeedOutcome) -> String {
    OutcomeReport(outcome).to_string()
}

/// Render one status snapshot as an indented block under `title`.
#[must_use]
pub fn render_status(title: &str, status: &StatusSnapshot) -> String {
    StatusBlock { title, status }.to_string()
}

struct OutcomeReport<'a>(&'a SeedOutcome);

impl fmt::Display for OutcomeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            SeedOutcome::Completed(summary) => write_summary(f, summary),
            SeedOutcome::Cancelled { before } => {
                write!(
                    f,
                    "{}",
                    StatusBlock {
                        title: "Current status",
                        status: before,
                    }
                )?;
                writeln!(f, "Seeding cancelled; nothing was written.")
            }
        }
    }
}

fn write_summary(f: &mut fmt::Formatter<'_>, summary: &SeedSummary) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(f, "{rule}")?;
    writeln!(f, "SEEDING SUMMARY")?;
    writeln!(f, "{rule}")?;
    write!(
        f,
        "{}",
        StatusBlock {
            title: "Before",
            status: &summary.before,
        }
    )?;
    writeln!(f, "Created this run:")?;
    writeln!(f, "  - Users: {}", summary.users_created)?;
    writeln!(f, "  - Categories available: {}", summary.categories_available)?;
    writeln!(
        f,
        "  - Products: {}/{}",
        summary.products.created, summary.products.requested
    )?;
    if summary.products.failed > 0 {
        writeln!(f, "  - Products failed: {}", summary.products.failed)?;
    }
    write!(
        f,
        "{}",
        StatusBlock {
            title: "Final status",
            status: &summary.after,
        }
    )?;
    writeln!(f, "Seeding completed.")
}

struct StatusBlock<'a> {
    title: &'a str,
    status: &'a StatusSnapshot,
}

impl fmt::Display for StatusBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.title)?;
        writeln!(f, "  - Users: {}", self.status.users)?;
        writeln!(f, "  - Categories: {}", self.status.categories)?;
        writeln!(f, "  - Products: {}", self.status.products)
    }
}
