/// Upstream provider abstraction
///
/// The pipeline talks to two black-box services: a generative completion
/// endpoint and a movie metadata lookup. Each sits behind a trait so the
/// pipeline can be driven by mocks in tests and by other vendors later.
use crate::{error::AppResult, models::MovieDetails};

pub mod gemini;
pub mod omdb;

pub use gemini::GeminiProvider;
pub use omdb::OmdbProvider;

/// Trait for generative completion providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends a prompt and returns the first candidate's text
    async fn generate(&self, prompt: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Trait for movie metadata lookups
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieLookup: Send + Sync {
    /// Looks up a movie by title and year
    ///
    /// Returns `AppError::LookupMiss` when the endpoint answers but has no
    /// match; transport failures surface as `AppError::HttpClient`.
    async fn lookup(&self, title: &str, year: &str) -> AppResult<MovieDetails>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
