//! Index of who watched which suggested movie.
//!
//! The index is derived from the suggested list and the users' watched
//! lists. It is rebuilt in one pass on demand and never patched, so it goes
//! stale as soon as either input changes.

use crate::{Movie, MovieId, User, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping of suggested movie ID to the IDs of users who watched it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatchedMovies(BTreeMap<MovieId, Vec<UserId>>);

impl WatchedMovies {
    /// Build the index.
    ///
    /// Every suggested movie gets an entry, empty when nobody watched it.
    /// Watchers keep the order of `users`. Watched IDs that are not in
    /// `suggested` are ignored.
    pub fn build(suggested: &[Movie], users: &[User]) -> Self {
        let index = suggested
            .iter()
            .map(|movie| {
                let watchers = users
                    .iter()
                    .filter(|user| user.has_watched(movie.id))
                    .map(|user| user.id)
                    .collect();
                (movie.id, watchers)
            })
            .collect();

        Self(index)
    }

    /// Users who watched a movie, or `None` if the movie was not indexed.
    pub fn watchers(&self, movie_id: MovieId) -> Option<&[UserId]> {
        self.0.get(&movie_id).map(Vec::as_slice)
    }

    /// Check whether a user is recorded as having watched a movie.
    pub fn contains(&self, movie_id: MovieId, user_id: UserId) -> bool {
        self.watchers(movie_id)
            .is_some_and(|watchers| watchers.contains(&user_id))
    }

    /// Iterate entries in movie ID order.
    pub fn iter(&self) -> impl Iterator<Item = (MovieId, &[UserId])> {
        self.0.iter().map(|(id, users)| (*id, users.as_slice()))
    }

    /// Number of indexed movies.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<MovieId, Vec<UserId>>> for WatchedMovies {
    fn from(index: BTreeMap<MovieId, Vec<UserId>>) -> Self {
        Self(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn movie(id: MovieId) -> Movie {
        Movie::new(id, format!("Movie {id}"), id * 100)
    }

    #[test]
    fn maps_movies_to_user_ids() {
        let suggested = vec![movie(1), movie(2)];
        let users = vec![
            User::new(10, "Ana").with_watched([1]),
            User::new(20, "Bo").with_watched([1, 2]),
        ];

        let index = WatchedMovies::build(&suggested, &users);

        assert_eq!(index.watchers(1), Some(&[10, 20][..]));
        assert_eq!(index.watchers(2), Some(&[20][..]));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn unwatched_movie_gets_empty_entry() {
        let index = WatchedMovies::build(&[movie(7)], &[User::new(1, "Ana")]);
        assert_eq!(index.watchers(7), Some(&[][..]));
        assert!(!index.contains(7, 1));
    }

    #[test]
    fn ignores_movies_outside_suggested() {
        let users = vec![User::new(10, "Ana").with_watched([1, 99])];
        let index = WatchedMovies::build(&[movie(1)], &users);

        assert_eq!(index.watchers(99), None);
        assert!(index.contains(1, 10));
    }

    #[test]
    fn duplicate_watch_entries_count_once() {
        let users = vec![User::new(10, "Ana").with_watched([1, 1])];
        let index = WatchedMovies::build(&[movie(1)], &users);
        assert_eq!(index.watchers(1), Some(&[10][..]));
    }

    #[test]
    fn serializes_as_object_keyed_by_movie() {
        let users = vec![User::new(20, "Bo").with_watched([2])];
        let index = WatchedMovies::build(&[movie(2), movie(1)], &users);

        let value = serde_json::to_value(&index).unwrap();
        assert_eq!(value, json!({"1": [], "2": [20]}));

        let parsed: WatchedMovies = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, index);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_users() -> impl Strategy<Value = Vec<User>> {
            prop::collection::vec(prop::collection::vec(0u64..20, 0..8), 0..6).prop_map(
                |lists| {
                    lists
                        .into_iter()
                        .enumerate()
                        .map(|(i, watched)| {
                            User::new(i as UserId + 100, format!("user-{i}")).with_watched(watched)
                        })
                        .collect()
                },
            )
        }

        proptest! {
            #[test]
            fn prop_index_agrees_with_watch_lists(
                ids in prop::collection::btree_set(0u64..20, 0..10),
                users in arb_users(),
            ) {
                let suggested: Vec<Movie> = ids.iter().copied().map(movie).collect();
                let index = WatchedMovies::build(&suggested, &users);

                prop_assert_eq!(index.len(), ids.len());
                for &movie_id in &ids {
                    for user in &users {
                        prop_assert_eq!(
                            index.contains(movie_id, user.id),
                            user.has_watched(movie_id)
                        );
                    }
                }
            }

            #[test]
            fn prop_build_is_deterministic(
                ids in prop::collection::vec(0u64..20, 0..10),
                users in arb_users(),
            ) {
                let suggested: Vec<Movie> = ids.into_iter().map(movie).collect();
                prop_assert_eq!(
                    WatchedMovies::build(&suggested, &users),
                    WatchedMovies::build(&suggested, &users)
                );
            }
        }
    }
}
