//! # Movie Catalog Engine
//!
//! The in-memory state container behind the movie-night client.
//!
//! This crate holds search results, suggested and reviewed movies, users,
//! the watched-movies index and aggregate stats. It knows nothing about the
//! network: the client crate fetches data and hands it over as mutations.
//!
//! ## Design Principles
//!
//! - **No IO**: no files, network, clock or async runtime
//! - **One way in**: state changes only through [`Store::commit`]
//! - **Deterministic**: the same mutations always produce the same state
//! - **Typed at the boundary**: API bodies are decoded into record types
//!   before they reach the store
//!
//! ## Core Concepts
//!
//! ### Records
//!
//! [`Movie`], [`User`], [`Score`], [`MoviesSearch`] and [`Stats`] mirror the
//! API's JSON shapes.
//!
//! ### Mutations
//!
//! A [`Mutation`] describes one synchronous change, e.g.
//! [`Mutation::SetSuggested`] or [`Mutation::SetWatched`]. Fetch results
//! replace whole collections; watch and score changes patch records by ID.
//!
//! ### Watched index
//!
//! [`WatchedMovies`] maps each suggested movie to the users who watched it.
//! It is only rebuilt by [`Mutation::SetWatchedMovies`].
//!
//! ## Quick Start
//!
//! ```rust
//! use movie_catalog_engine::{Movie, Mutation, Store, User};
//! use chrono::NaiveDate;
//!
//! let mut store = Store::new();
//! store.commit(Mutation::SetSuggested(vec![Movie::new(5, "Arrival", 329865)]));
//! store.commit(Mutation::SetUsers(vec![User::new(2, "Ana")]));
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! store.commit(Mutation::watched(5, 2, date));
//! store.commit(Mutation::SetWatchedMovies);
//!
//! assert_eq!(store.watched_movies().watchers(5), Some(&[2][..]));
//! assert_eq!(store.revision(), 4);
//! ```
//!
//! ## Rendering
//!
//! [`Store::snapshot`] returns a [`StateSnapshot`], an owned copy that
//! serializes to JSON with deterministic ordering.

pub mod error;
pub mod mutation;
pub mod payload;
pub mod record;
pub mod search;
pub mod snapshot;
pub mod store;
pub mod watched;

// Re-export main types at crate root
pub use error::Error;
pub use mutation::{MovieScores, Mutation, UnwatchedChange, WatchedChange};
pub use payload::decode;
pub use record::{Movie, MovieUnderReview, NewSuggestion, Score, Stats, User};
pub use search::{MoviesSearch, SearchResult};
pub use snapshot::{SnapshotMetadata, StateSnapshot};
pub use store::{CommitResult, Store};
pub use watched::WatchedMovies;

/// Type aliases for clarity
pub type MovieId = u64;
pub type UserId = u64;
pub type MovieDbId = u64;
pub type ScoreValue = u8;
pub type Revision = u64;
