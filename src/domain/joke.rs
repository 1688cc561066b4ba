//! External joke collaborator seam.
//!
//! The domain defines the trait; the infrastructure layer provides the HTTP
//! implementation (dependency inversion). Tests substitute a mock.

use async_trait::async_trait;

use super::error::JokeError;

/// Fetches one joke from an external source.
///
/// The chat core never retries and never blocks on the result: the
/// request-announcement note is broadcast before the fetch resolves, and a
/// failed fetch simply produces no follow-up broadcast.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JokeFetcher: Send + Sync {
    async fn fetch_joke(&self) -> Result<String, JokeError>;
}
