//! Driving port for the "continue seeding?" question.

use async_trait::async_trait;

/// Asks the operator whether to proceed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Confirmation: Send + Sync {
    /// Return `true` when the operator agrees to `question`.
    async fn confirm(&self, question: &str) -> bool;
}

/// Confirmation that always agrees, for unattended runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

#[async_trait]
impl Confirmation for AutoConfirm {
    async fn confirm(&self, _question: &str) -> bool {
        true
    }
}

/// Interpret one line of operator input.
///
/// Accepts `y` (yes) or `s` (sí), ignoring case and surrounding whitespace.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "s")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("y", true)]
    #[case("S\n", true)]
    #[case("  y  ", true)]
    #[case("n", false)]
    #[case("yes", false)]
    #[case("", false)]
    fn recognises_single_character_answers(#[case] answer: &str, #[case] expected: bool) {
        assert_eq!(is_affirmative(answer), expected);
    }

    #[tokio::test]
    async fn auto_confirm_always_agrees() {
        assert!(AutoConfirm.confirm("continue?").await);
    }
}
