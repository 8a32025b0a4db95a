//! Read-only snapshots of store state.
//!
//! A snapshot is an owned copy of the state at one revision. The UI renders
//! from it and it serializes with deterministic field and key order. There
//! is no way back from a snapshot into a store.

use crate::{
    error::Result, Error, Movie, MovieUnderReview, MoviesSearch, Revision, Stats, User,
    WatchedMovies,
};
use serde::{Deserialize, Serialize};

/// A point-in-time copy of the store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    /// Store revision the snapshot was taken at
    pub revision: Revision,
    pub movies_search: MoviesSearch,
    pub suggested: Vec<Movie>,
    pub suggested_movies_loaded: bool,
    pub reviewed: Vec<Movie>,
    pub reviewed_movies_loaded: bool,
    pub users: Vec<User>,
    pub users_loaded: bool,
    pub movie_under_review: MovieUnderReview,
    pub watched_movies: WatchedMovies,
    pub stats: Stats,
    pub stats_loaded: bool,
}

impl StateSnapshot {
    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Metadata about this snapshot.
    pub fn metadata(&self) -> SnapshotMetadata {
        SnapshotMetadata::from(self)
    }
}

/// Summary of a snapshot (without the collections).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMetadata {
    pub revision: Revision,
    pub search_result_count: usize,
    pub suggested_count: usize,
    pub reviewed_count: usize,
    pub user_count: usize,
    pub suggested_movies_loaded: bool,
    pub reviewed_movies_loaded: bool,
    pub users_loaded: bool,
    pub stats_loaded: bool,
}

impl From<&StateSnapshot> for SnapshotMetadata {
    fn from(snapshot: &StateSnapshot) -> Self {
        Self {
            revision: snapshot.revision,
            search_result_count: snapshot.movies_search.len(),
            suggested_count: snapshot.suggested.len(),
            reviewed_count: snapshot.reviewed.len(),
            user_count: snapshot.users.len(),
            suggested_movies_loaded: snapshot.suggested_movies_loaded,
            reviewed_movies_loaded: snapshot.reviewed_movies_loaded,
            users_loaded: snapshot.users_loaded,
            stats_loaded: snapshot.stats_loaded,
        }
    }
}
