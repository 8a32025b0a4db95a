//! Mutations: the only way state changes.
//!
//! A mutation is a value describing one synchronous state transformation.
//! Callers build them, the [`Store`](crate::Store) applies them.

use crate::{Movie, MovieId, MoviesSearch, Score, ScoreValue, Stats, User, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payload of [`Mutation::SetWatched`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchedChange {
    pub movie_id: MovieId,
    pub user_id: UserId,
    pub date: NaiveDate,
}

/// Payload of [`Mutation::SetUnwatched`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnwatchedChange {
    pub movie_id: MovieId,
    pub user_id: UserId,
}

/// Payload of [`Mutation::SetMovieScores`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieScores {
    pub id: MovieId,
    pub scores: Vec<Score>,
}

/// A state transformation that can be committed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mutation {
    /// Replace the search results wholesale.
    SetSearchResults(MoviesSearch),
    /// Replace the suggested list and mark it loaded.
    SetSuggested(Vec<Movie>),
    /// Replace the reviewed list and mark it loaded.
    SetReviewed(Vec<Movie>),
    /// Record that a user watched a suggested movie.
    SetWatched(WatchedChange),
    /// Undo [`Mutation::SetWatched`].
    SetUnwatched(UnwatchedChange),
    /// Replace the users and mark them loaded.
    SetUsers(Vec<User>),
    /// Flag one suggested movie as under review, clearing all others.
    SetMovieUnderReview(MovieId),
    /// Set the score in the under-review slot.
    SetMovieScore(ScoreValue),
    /// Replace the scores of one suggested movie.
    SetMovieScores(MovieScores),
    /// Drop a movie from the suggested list.
    RemoveSuggestedMovie(MovieId),
    /// Rebuild the watched-movies index from suggested and users.
    SetWatchedMovies,
    /// Replace the stats and mark them loaded.
    SetStats(Stats),
}

impl Mutation {
    /// Stable name, used in logs and as the serde tag.
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SetSearchResults(_) => "SET_SEARCH_RESULTS",
            Mutation::SetSuggested(_) => "SET_SUGGESTED",
            Mutation::SetReviewed(_) => "SET_REVIEWED",
            Mutation::SetWatched(_) => "SET_WATCHED",
            Mutation::SetUnwatched(_) => "SET_UNWATCHED",
            Mutation::SetUsers(_) => "SET_USERS",
            Mutation::SetMovieUnderReview(_) => "SET_MOVIE_UNDER_REVIEW",
            Mutation::SetMovieScore(_) => "SET_MOVIE_SCORE",
            Mutation::SetMovieScores(_) => "SET_MOVIE_SCORES",
            Mutation::RemoveSuggestedMovie(_) => "REMOVE_SUGGESTED_MOVIE",
            Mutation::SetWatchedMovies => "SET_WATCHED_MOVIES",
            Mutation::SetStats(_) => "SET_STATS",
        }
    }

    /// Build a [`Mutation::SetWatched`].
    pub fn watched(movie_id: MovieId, user_id: UserId, date: NaiveDate) -> Self {
        Mutation::SetWatched(WatchedChange {
            movie_id,
            user_id,
            date,
        })
    }

    /// Build a [`Mutation::SetUnwatched`].
    pub fn unwatched(movie_id: MovieId, user_id: UserId) -> Self {
        Mutation::SetUnwatched(UnwatchedChange { movie_id, user_id })
    }

    /// Build a [`Mutation::SetMovieScores`].
    pub fn scores(id: MovieId, scores: Vec<Score>) -> Self {
        Mutation::SetMovieScores(MovieScores { id, scores })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn names_match_serde_tags() {
        let mutations = vec![
            Mutation::SetSearchResults(MoviesSearch::empty()),
            Mutation::SetSuggested(vec![]),
            Mutation::SetReviewed(vec![]),
            Mutation::watched(1, 2, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            Mutation::unwatched(1, 2),
            Mutation::SetUsers(vec![]),
            Mutation::SetMovieUnderReview(1),
            Mutation::SetMovieScore(7),
            Mutation::scores(1, vec![]),
            Mutation::RemoveSuggestedMovie(1),
            Mutation::SetWatchedMovies,
            Mutation::SetStats(Stats::default()),
        ];

        for mutation in mutations {
            let value = serde_json::to_value(&mutation).unwrap();
            assert_eq!(value["type"], mutation.name());
        }
    }

    #[test]
    fn watched_payload_format() {
        let mutation = Mutation::watched(5, 2, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let value = serde_json::to_value(&mutation).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "SET_WATCHED",
                "payload": {"movieId": 5, "userId": 2, "date": "2024-01-01"}
            })
        );
    }

    #[test]
    fn deserialize_unit_variant() {
        let mutation: Mutation =
            serde_json::from_value(json!({"type": "SET_WATCHED_MOVIES"})).unwrap();
        assert_eq!(mutation, Mutation::SetWatchedMovies);
    }
}
