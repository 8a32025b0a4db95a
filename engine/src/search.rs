//! Movie database search results.

use crate::MovieDbId;
use serde::{Deserialize, Serialize};

/// Results of the latest movie database search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviesSearch {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

impl MoviesSearch {
    /// An empty result set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(results: Vec<SearchResult>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// A single search hit. Fields the store does not use are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Movie database ID
    pub id: MovieDbId,
    pub title: String,
    /// Release date as `YYYY-MM-DD`; often empty for unreleased titles
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl SearchResult {
    pub fn new(id: MovieDbId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            release_date: None,
            poster_path: None,
            overview: None,
        }
    }

    /// Set the release date.
    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    /// Release year taken from the leading digits of `release_date`.
    pub fn year(&self) -> Option<u16> {
        self.release_date.as_deref()?.get(..4)?.parse().ok()
    }
}
