/// Catalog and chat provider abstractions
///
/// The core depends on the external movie catalog and the local chat backend
/// only through these traits, so the concrete clients (TMDB, Ollama) can be
/// swapped or mocked in tests.
use crate::{
    error::AppResult,
    models::{Genre, Movie},
    services::chat::ChatEntry,
};

pub mod tmdb;

/// Trait for the external movie-catalog service
///
/// List-returning calls yield zero or more movies; an empty list is a valid
/// result, never an error. Failures are categorized in `AppError`.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Movies trending this week
    async fn fetch_trending(&self) -> AppResult<Vec<Movie>>;

    async fn fetch_popular(&self, page: u32) -> AppResult<Vec<Movie>>;

    async fn fetch_top_rated(&self, page: u32) -> AppResult<Vec<Movie>>;

    async fn fetch_now_playing(&self, page: u32) -> AppResult<Vec<Movie>>;

    async fn fetch_upcoming(&self, page: u32) -> AppResult<Vec<Movie>>;

    /// Discover by an explicit genre-id set plus free-form extra parameters
    ///
    /// `extra_params` pairs are passed through to the remote query string
    /// untyped (keyword filters, date bounds, vote thresholds).
    async fn discover(
        &self,
        genre_ids: &[u64],
        sort_by: &str,
        extra_params: &[(String, String)],
        page: u32,
    ) -> AppResult<Vec<Movie>>;

    /// Well-rated movies for a single genre (home-feed genre sections)
    async fn discover_by_genre(&self, genre: Genre, page: u32) -> AppResult<Vec<Movie>>;

    async fn search_movies(&self, query: &str, page: u32) -> AppResult<Vec<Movie>>;

    /// Movies similar to the given catalog item
    async fn fetch_similar(&self, tmdb_id: u64) -> AppResult<Vec<Movie>>;

    async fn fetch_movie_details(&self, tmdb_id: u64) -> AppResult<Movie>;

    async fn fetch_recommendations(&self, tmdb_id: u64) -> AppResult<Vec<Movie>>;
}

/// Trait for the chat-assistant backend
///
/// `history` is the transcript so far, oldest first, excluding `message`.
/// Implementations bound the context they forward upstream.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync {
    async fn send(&self, history: &[ChatEntry], message: &str) -> AppResult<String>;
}
