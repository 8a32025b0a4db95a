//! Record types held by the store.
//!
//! Field names on the wire follow the movie-night API exactly, which mixes
//! snake_case (`watched_on`) and camelCase (`movieDBId`, `watchedMovies`).

use crate::{search::SearchResult, MovieDbId, MovieId, ScoreValue, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One user's score for a movie.
///
/// Scores are whole numbers in `0..=255`. A fractional or out-of-range
/// score is a decode error for the whole payload it arrives in, unlike
/// [`Stats`], which is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// User who gave the score
    pub user_id: UserId,
    /// The score itself, on whatever scale the API uses
    pub score: ScoreValue,
}

impl Score {
    pub fn new(user_id: UserId, score: ScoreValue) -> Self {
        Self { user_id, score }
    }
}

/// A movie in the suggested or reviewed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Catalog ID assigned by the movie-night API
    pub id: MovieId,
    pub title: String,
    /// Release year, when known
    #[serde(default, deserialize_with = "de::year")]
    pub year: Option<u16>,
    /// Poster path or URL
    #[serde(default)]
    pub poster: Option<String>,
    /// ID of the movie in the external movie database
    #[serde(rename = "movieDBId")]
    pub movie_db_id: MovieDbId,
    /// Date the group watched the movie, `None` while unwatched
    #[serde(default, deserialize_with = "de::date")]
    pub watched_on: Option<NaiveDate>,
    /// Whether this is the movie currently being reviewed
    #[serde(default)]
    pub under_review: bool,
    #[serde(default)]
    pub scores: Vec<Score>,
}

impl Movie {
    /// Create an unwatched movie with no scores.
    pub fn new(id: MovieId, title: impl Into<String>, movie_db_id: MovieDbId) -> Self {
        Self {
            id,
            title: title.into(),
            year: None,
            poster: None,
            movie_db_id,
            watched_on: None,
            under_review: false,
            scores: Vec::new(),
        }
    }

    /// Set the release year.
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    /// Set the poster path.
    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    /// Check whether the movie has a watch date.
    pub fn is_watched(&self) -> bool {
        self.watched_on.is_some()
    }
}

/// A member of the movie-night group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// IDs of movies this user has watched (may contain duplicates)
    #[serde(rename = "watchedMovies", default)]
    pub watched_movies: Vec<MovieId>,
}

impl User {
    /// Create a user who has watched nothing yet.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            watched_movies: Vec::new(),
        }
    }

    /// Set the watched list.
    pub fn with_watched(mut self, movies: impl IntoIterator<Item = MovieId>) -> Self {
        self.watched_movies = movies.into_iter().collect();
        self
    }

    /// Check whether the user has watched a movie.
    pub fn has_watched(&self, movie_id: MovieId) -> bool {
        self.watched_movies.contains(&movie_id)
    }
}

/// Aggregate stats, stored exactly as the API returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stats(serde_json::Value);

impl Stats {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self(serde_json::Value::Object(serde_json::Map::new()))
    }
}

/// Selection slot for the movie currently being scored.
///
/// Kept apart from `suggested`; nothing ties the score here to a movie
/// in that list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieUnderReview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreValue>,
}

/// Input for suggesting a new movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSuggestion {
    pub title: String,
    pub year: Option<u16>,
    pub poster: Option<String>,
    #[serde(rename = "movieDBId")]
    pub movie_db_id: MovieDbId,
}

impl From<&SearchResult> for NewSuggestion {
    fn from(hit: &SearchResult) -> Self {
        Self {
            title: hit.title.clone(),
            year: hit.year(),
            poster: hit.poster_path.clone(),
            movie_db_id: hit.id,
        }
    }
}

/// Lenient decoders for fields the API is loose about.
pub(crate) mod de {
    use chrono::{DateTime, NaiveDate};
    use serde::{de::Error as _, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearRepr {
        Number(u16),
        Text(String),
    }

    /// Accept `2019`, `"2019"`, `""` or `null`.
    pub fn year<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<YearRepr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(YearRepr::Number(year)) => Ok(Some(year)),
            Some(YearRepr::Text(text)) if text.trim().is_empty() => Ok(None),
            Some(YearRepr::Text(text)) => text
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid year: {text}"))),
        }
    }

    /// Accept `"2024-01-01"`, a full RFC 3339 timestamp, or `null`.
    pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(text) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(&text).map(|at| at.date_naive()))
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid date: {text}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_movie_from_api_shape() {
        let movie: Movie = serde_json::from_value(json!({
            "id": 5,
            "title": "Arrival",
            "year": "2016",
            "poster": "/arrival.jpg",
            "movieDBId": 329865,
            "watched_on": "2024-01-01",
            "under_review": true,
            "scores": [{"user_id": 2, "score": 8}]
        }))
        .unwrap();

        assert_eq!(movie.id, 5);
        assert_eq!(movie.year, Some(2016));
        assert_eq!(movie.movie_db_id, 329865);
        assert_eq!(movie.watched_on, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert!(movie.under_review);
        assert_eq!(movie.scores, vec![Score::new(2, 8)]);
    }

    #[test]
    fn decode_movie_with_missing_optionals() {
        let movie: Movie = serde_json::from_value(json!({
            "id": 1,
            "title": "Heat",
            "movieDBId": 949,
            "watched_on": null
        }))
        .unwrap();

        assert_eq!(movie, Movie::new(1, "Heat", 949));
        assert!(!movie.is_watched());
    }

    #[test]
    fn year_accepts_number_and_blank() {
        let numeric: Movie =
            serde_json::from_value(json!({"id": 1, "title": "A", "movieDBId": 1, "year": 1999}))
                .unwrap();
        assert_eq!(numeric.year, Some(1999));

        let blank: Movie =
            serde_json::from_value(json!({"id": 1, "title": "A", "movieDBId": 1, "year": ""}))
                .unwrap();
        assert_eq!(blank.year, None);

        let bad = serde_json::from_value::<Movie>(
            json!({"id": 1, "title": "A", "movieDBId": 1, "year": "soon"}),
        );
        assert!(bad.is_err());
    }

    #[test]
    fn watched_on_accepts_timestamps() {
        let movie: Movie = serde_json::from_value(json!({
            "id": 1,
            "title": "A",
            "movieDBId": 1,
            "watched_on": "2023-11-04T20:15:00.000Z"
        }))
        .unwrap();
        assert_eq!(movie.watched_on, NaiveDate::from_ymd_opt(2023, 11, 4));
    }

    #[test]
    fn watched_on_rejects_trailing_text() {
        for bad in ["2024-01-01garbage", "2024-01-01 ", "2024-01-01T", "2024-13-01"] {
            let result = serde_json::from_value::<Movie>(json!({
                "id": 1,
                "title": "A",
                "movieDBId": 1,
                "watched_on": bad
            }));
            assert!(result.is_err(), "{bad}");
        }
    }

    #[test]
    fn fractional_score_is_rejected() {
        let result = serde_json::from_value::<Score>(json!({"user_id": 1, "score": 7.5}));
        assert!(result.is_err());
    }

    #[test]
    fn movie_serializes_wire_names() {
        let movie = Movie::new(1, "Heat", 949).with_year(1995);
        let value = serde_json::to_value(&movie).unwrap();

        assert_eq!(value["movieDBId"], 949);
        assert_eq!(value["watched_on"], serde_json::Value::Null);
        assert_eq!(value["under_review"], false);
        assert_eq!(value["year"], 1995);
    }

    #[test]
    fn user_watched_list() {
        let user: User =
            serde_json::from_value(json!({"id": 10, "name": "Ana", "watchedMovies": [1, 3]}))
                .unwrap();
        assert!(user.has_watched(3));
        assert!(!user.has_watched(2));

        let fresh: User = serde_json::from_value(json!({"id": 11, "name": "Bo"})).unwrap();
        assert!(fresh.watched_movies.is_empty());
    }

    #[test]
    fn stats_default_is_empty_object() {
        let stats = Stats::default();
        assert_eq!(stats.as_value(), &json!({}));

        let stats: Stats = serde_json::from_value(json!({"watched": 12})).unwrap();
        assert_eq!(stats.get("watched"), Some(&json!(12)));
    }

    #[test]
    fn movie_under_review_omits_missing_score() {
        let slot = MovieUnderReview::default();
        assert_eq!(serde_json::to_value(&slot).unwrap(), json!({}));
    }
}
