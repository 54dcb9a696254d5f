//! Terminal-backed confirmation adapter.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::warn;

use crate::ports::{Confirmation, is_affirmative};

/// Asks the question on stdout and reads one answer line from stdin.
///
/// End of input or an I/O failure counts as a refusal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirmation;

#[async_trait]
impl Confirmation for StdinConfirmation {
    async fn confirm(&self, question: &str) -> bool {
        let mut stdout = tokio::io::stdout();
        let prompt = format!("{question} (y/n): ");
        if let Err(error) = stdout.write_all(prompt.as_bytes()).await {
            warn!(%error, "failed to write confirmation prompt");
        }
        if let Err(error) = stdout.flush().await {
            warn!(%error, "failed to flush confirmation prompt");
        }

        let mut answer = String::new();
        match BufReader::new(tokio::io::stdin()).read_line(&mut answer).await {
            Ok(0) => false,
            Ok(_) => is_affirmative(&answer),
            Err(error) => {
                warn!(%error, "failed to read confirmation answer");
                false
            }
        }
    }
}
