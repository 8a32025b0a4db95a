//! Store - the in-memory state container.
//!
//! The Store holds everything the UI renders: search results, suggested and
//! reviewed movies, users, the watched-movies index and stats. State only
//! changes through [`Store::commit`].

use crate::{
    mutation::{MovieScores, UnwatchedChange, WatchedChange},
    snapshot::{SnapshotMetadata, StateSnapshot},
    Movie, MovieId, MovieUnderReview, MoviesSearch, Mutation, Revision, Stats, User, UserId,
    WatchedMovies,
};
use serde::{Deserialize, Serialize};

/// Result of committing a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitResult {
    /// Name of the committed mutation
    pub mutation: String,
    /// Store revision after the commit
    pub revision: Revision,
}

/// The main store holding all state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    movies_search: MoviesSearch,
    suggested: Vec<Movie>,
    suggested_movies_loaded: bool,
    reviewed: Vec<Movie>,
    reviewed_movies_loaded: bool,
    users: Vec<User>,
    users_loaded: bool,
    movie_under_review: MovieUnderReview,
    watched_movies: WatchedMovies,
    stats: Stats,
    stats_loaded: bool,
    /// Count of committed mutations
    revision: Revision,
}

impl Store {
    /// Create an empty store with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a mutation and bump the revision.
    ///
    /// Every commit counts, even one that finds nothing to change.
    pub fn commit(&mut self, mutation: Mutation) -> CommitResult {
        let name = mutation.name();

        match mutation {
            Mutation::SetSearchResults(search) => self.movies_search = search,
            Mutation::SetSuggested(movies) => {
                self.suggested = movies;
                self.suggested_movies_loaded = true;
            }
            Mutation::SetReviewed(movies) => {
                self.reviewed = movies;
                self.reviewed_movies_loaded = true;
            }
            Mutation::SetWatched(change) => self.set_watched(change),
            Mutation::SetUnwatched(change) => self.set_unwatched(change),
            Mutation::SetUsers(users) => {
                self.users = users;
                self.users_loaded = true;
            }
            Mutation::SetMovieUnderReview(id) => {
                for movie in &mut self.suggested {
                    movie.under_review = movie.id == id;
                }
            }
            Mutation::SetMovieScore(score) => self.movie_under_review.score = Some(score),
            Mutation::SetMovieScores(MovieScores { id, scores }) => {
                for movie in self.suggested.iter_mut().filter(|m| m.id == id) {
                    movie.scores = scores.clone();
                }
            }
            Mutation::RemoveSuggestedMovie(id) => self.suggested.retain(|m| m.id != id),
            Mutation::SetWatchedMovies => {
                self.watched_movies = WatchedMovies::build(&self.suggested, &self.users);
            }
            Mutation::SetStats(stats) => {
                self.stats = stats;
                self.stats_loaded = true;
            }
        }

        self.revision += 1;

        CommitResult {
            mutation: name.to_string(),
            revision: self.revision,
        }
    }

    fn set_watched(&mut self, change: WatchedChange) {
        for movie in self.suggested.iter_mut().filter(|m| m.id == change.movie_id) {
            movie.watched_on = Some(change.date);
        }

        // Appends without checking for an existing entry.
        for user in self.users.iter_mut().filter(|u| u.id == change.user_id) {
            user.watched_movies.push(change.movie_id);
        }
    }

    fn set_unwatched(&mut self, change: UnwatchedChange) {
        for movie in self.suggested.iter_mut().filter(|m| m.id == change.movie_id) {
            movie.watched_on = None;
        }

        for user in self.users.iter_mut().filter(|u| u.id == change.user_id) {
            user.watched_movies.retain(|id| *id != change.movie_id);
        }
    }

    /// Latest search results.
    pub fn movies_search(&self) -> &MoviesSearch {
        &self.movies_search
    }

    /// Suggested movies, in the order the API returned them.
    pub fn suggested(&self) -> &[Movie] {
        &self.suggested
    }

    pub fn suggested_movies_loaded(&self) -> bool {
        self.suggested_movies_loaded
    }

    /// Movies that have been reviewed.
    pub fn reviewed(&self) -> &[Movie] {
        &self.reviewed
    }

    pub fn reviewed_movies_loaded(&self) -> bool {
        self.reviewed_movies_loaded
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn users_loaded(&self) -> bool {
        self.users_loaded
    }

    pub fn movie_under_review(&self) -> &MovieUnderReview {
        &self.movie_under_review
    }

    /// Watched-movies index as of the last rebuild.
    pub fn watched_movies(&self) -> &WatchedMovies {
        &self.watched_movies
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn stats_loaded(&self) -> bool {
        self.stats_loaded
    }

    /// Number of mutations committed so far.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Get a suggested movie by ID.
    pub fn suggested_movie(&self, id: MovieId) -> Option<&Movie> {
        self.suggested.iter().find(|m| m.id == id)
    }

    /// Get a user by ID.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Suggested movie currently flagged as under review.
    pub fn reviewing(&self) -> Option<&Movie> {
        self.suggested.iter().find(|m| m.under_review)
    }

    /// Copy the current state into a serializable snapshot.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            revision: self.revision,
            movies_search: self.movies_search.clone(),
            suggested: self.suggested.clone(),
            suggested_movies_loaded: self.suggested_movies_loaded,
            reviewed: self.reviewed.clone(),
            reviewed_movies_loaded: self.reviewed_movies_loaded,
            users: self.users.clone(),
            users_loaded: self.users_loaded,
            movie_under_review: self.movie_under_review.clone(),
            watched_movies: self.watched_movies.clone(),
            stats: self.stats.clone(),
            stats_loaded: self.stats_loaded,
        }
    }

    /// Get snapshot metadata without copying the collections.
    pub fn snapshot_metadata(&self) -> SnapshotMetadata {
        SnapshotMetadata {
            revision: self.revision,
            search_result_count: self.movies_search.len(),
            suggested_count: self.suggested.len(),
            reviewed_count: self.reviewed.len(),
            user_count: self.users.len(),
            suggested_movies_loaded: self.suggested_movies_loaded,
            reviewed_movies_loaded: self.reviewed_movies_loaded,
            users_loaded: self.users_loaded,
            stats_loaded: self.stats_loaded,
        }
    }
}
