//! Catalog store - actions over the engine store.
//!
//! Each action makes at most one API call and commits exactly one mutation.
//! The engine [`Store`] lives in a `watch` channel so UI code can subscribe
//! to changes; every commit notifies subscribers.

use crate::api::MovieApi;
use crate::error::{ClientError, Result};
use chrono::NaiveDate;
use movie_catalog_engine::{
    MovieId, MoviesSearch, Mutation, NewSuggestion, Revision, Score, ScoreValue, StateSnapshot,
    Store, User, UserId,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Observable state container driven by a [`MovieApi`].
#[derive(Debug)]
pub struct CatalogStore<A> {
    api: A,
    state: watch::Sender<Store>,
}

impl<A: MovieApi> CatalogStore<A> {
    /// Create a store with empty state.
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(Store::new());
        Self { api, state }
    }

    /// The API this store calls.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Borrow the current state.
    ///
    /// The guard holds the state's read lock. Every action commits through
    /// the write lock, so no action may run, sync or async, while the guard
    /// is alive. Drop it first.
    pub fn state(&self) -> watch::Ref<'_, Store> {
        self.state.borrow()
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> StateSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn revision(&self) -> Revision {
        self.state.borrow().revision()
    }

    /// Receiver notified after every committed mutation.
    pub fn subscribe(&self) -> watch::Receiver<Store> {
        self.state.subscribe()
    }

    fn commit(&self, mutation: Mutation) -> Revision {
        let name = mutation.name();
        let mut revision = 0;
        self.state.send_modify(|store| {
            revision = store.commit(mutation).revision;
        });
        debug!(mutation = name, revision, "Committed mutation");
        revision
    }

    /// Turn the outcome of a remote write into the action's result.
    ///
    /// The local mutation has already been committed at this point and is
    /// kept either way.
    fn settle(&self, action: &'static str, outcome: Result<()>) -> Result<()> {
        outcome.map_err(|e| {
            warn!(action, error = %e, "Remote write failed, local state kept");
            ClientError::WriteRejected {
                action,
                source: Box::new(e),
            }
        })
    }

    /// Search the movie database and replace the search results.
    pub async fn search_movies(&self, query: &str) -> Result<()> {
        let results = self.api.search_movies(query).await?;
        debug!(query, hits = results.len(), "Search completed");
        self.commit(Mutation::SetSearchResults(results));
        Ok(())
    }

    /// Clear the search results.
    pub fn empty_search_movies_list(&self) {
        self.commit(Mutation::SetSearchResults(MoviesSearch::empty()));
    }

    /// Suggest a movie and replace the suggested list with the response.
    pub async fn suggest_movie(&self, suggestion: &NewSuggestion) -> Result<()> {
        let suggested = self.api.suggest_movie(suggestion).await?;
        self.commit(Mutation::SetSuggested(suggested));
        Ok(())
    }

    /// Remove a suggestion locally, then delete it on the server.
    pub async fn remove_movie_suggestion(&self, id: MovieId) -> Result<()> {
        self.commit(Mutation::RemoveSuggestedMovie(id));
        let outcome = self.api.remove_movie(id).await;
        self.settle("RemoveMovieSuggestion", outcome)
    }

    pub async fn fetch_suggested_movies(&self) -> Result<()> {
        let suggested = self.api.fetch_suggested_movies().await?;
        self.commit(Mutation::SetSuggested(suggested));
        Ok(())
    }

    pub async fn fetch_reviewed_movies(&self) -> Result<()> {
        let reviewed = self.api.fetch_reviewed_movies().await?;
        self.commit(Mutation::SetReviewed(reviewed));
        Ok(())
    }

    /// Mark a movie watched locally, then record it on the server.
    pub async fn mark_watched(&self, id: MovieId, user_id: UserId, date: NaiveDate) -> Result<()> {
        self.commit(Mutation::watched(id, user_id, date));
        let outcome = self.api.mark_watched(id, user_id, date).await;
        self.settle("MarkWatched", outcome)
    }

    /// Mark a movie unwatched locally, then record it on the server.
    pub async fn mark_unwatched(&self, id: MovieId, user_id: UserId) -> Result<()> {
        self.commit(Mutation::unwatched(id, user_id));
        let outcome = self.api.mark_unwatched(id, user_id).await;
        self.settle("MarkUnwatched", outcome)
    }

    pub async fn fetch_users(&self) -> Result<()> {
        let users = self.api.fetch_users().await?;
        self.commit(Mutation::SetUsers(users));
        Ok(())
    }

    /// Replace the users without calling the API.
    pub fn set_users(&self, users: Vec<User>) {
        self.commit(Mutation::SetUsers(users));
    }

    pub async fn fetch_stats(&self) -> Result<()> {
        let stats = self.api.fetch_stats().await?;
        self.commit(Mutation::SetStats(stats));
        Ok(())
    }

    pub fn set_movie_under_review(&self, id: MovieId) {
        self.commit(Mutation::SetMovieUnderReview(id));
    }

    /// Set the under-review score locally, then send it to the server.
    pub async fn score_movie(&self, id: MovieId, score: ScoreValue) -> Result<()> {
        self.commit(Mutation::SetMovieScore(score));
        let outcome = self.api.score_movie(id, score).await;
        self.settle("ScoreMovie", outcome)
    }

    pub fn set_scores(&self, id: MovieId, scores: Vec<Score>) {
        self.commit(Mutation::scores(id, scores));
    }

    /// Rebuild the watched-movies index from the current state.
    pub fn populate_watched_movies(&self) {
        self.commit(Mutation::SetWatchedMovies);
    }

    /// Fetch every collection concurrently, then rebuild the watched index.
    ///
    /// Stops at the first failure; collections fetched before it stay
    /// committed.
    pub async fn load_all(&self) -> Result<()> {
        futures::try_join!(
            self.fetch_suggested_movies(),
            self.fetch_reviewed_movies(),
            self.fetch_users(),
            self.fetch_stats(),
        )?;
        self.populate_watched_movies();

        let meta = self.state.borrow().snapshot_metadata();
        info!(
            suggested = meta.suggested_count,
            reviewed = meta.reviewed_count,
            users = meta.user_count,
            revision = meta.revision,
            "Catalog loaded"
        );
        Ok(())
    }
}
