//! Remote API seam.
//!
//! [`MovieApi`] has one method per remote call the actions make. The store
//! only talks to this trait, so tests can swap in an in-memory double.

mod http;

pub use http::HttpMovieApi;

use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use movie_catalog_engine::{
    Movie, MovieId, MoviesSearch, NewSuggestion, ScoreValue, Stats, User, UserId,
};

/// Calls to the movie-night API and the movie database.
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Search the movie database.
    async fn search_movies(&self, query: &str) -> Result<MoviesSearch>;

    /// Suggest a movie; returns the updated suggested list.
    async fn suggest_movie(&self, suggestion: &NewSuggestion) -> Result<Vec<Movie>>;

    /// Delete a suggestion.
    async fn remove_movie(&self, id: MovieId) -> Result<()>;

    async fn fetch_suggested_movies(&self) -> Result<Vec<Movie>>;

    async fn fetch_reviewed_movies(&self) -> Result<Vec<Movie>>;

    /// Record that a user watched a movie on a date.
    async fn mark_watched(&self, id: MovieId, user_id: UserId, date: NaiveDate) -> Result<()>;

    async fn mark_unwatched(&self, id: MovieId, user_id: UserId) -> Result<()>;

    async fn score_movie(&self, id: MovieId, score: ScoreValue) -> Result<()>;

    async fn fetch_users(&self) -> Result<Vec<User>>;

    async fn fetch_stats(&self) -> Result<Stats>;
}
