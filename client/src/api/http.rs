//! HTTP implementation of [`MovieApi`].

use super::MovieApi;
use crate::config::Config;
use crate::error::{ClientError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use movie_catalog_engine::{
    decode, Movie, MovieId, MoviesSearch, NewSuggestion, ScoreValue, Stats, User, UserId,
};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;

/// JSON-over-HTTP client for the movie-night API.
///
/// Response bodies are the payloads themselves; anything outside 2xx is an
/// error.
#[derive(Debug, Clone)]
pub struct HttpMovieApi {
    http: Client,
    api_url: String,
    search_url: String,
    search_api_key: Option<String>,
}

impl HttpMovieApi {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("movie-catalog/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            search_url: config.search_url.clone(),
            search_api_key: config.search_api_key.clone(),
        })
    }

    fn api(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Send a request and return the body of a successful response.
    async fn execute(&self, call: &'static str, request: RequestBuilder) -> Result<Vec<u8>> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            tracing::debug!(call, %status, "API call rejected");
            return Err(ClientError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        tracing::debug!(call, %status, bytes = body.len(), "API call completed");
        Ok(body.to_vec())
    }

    /// Send a request and decode the response body.
    async fn fetch<T: DeserializeOwned>(
        &self,
        call: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let body = self.execute(call, request).await?;
        Ok(decode(call, &body)?)
    }
}

#[async_trait]
impl MovieApi for HttpMovieApi {
    async fn search_movies(&self, query: &str) -> Result<MoviesSearch> {
        let mut request = self
            .http
            .get(format!("{}/search/movie", self.search_url))
            .query(&[("query", query)]);
        if let Some(key) = &self.search_api_key {
            request = request.query(&[("api_key", key)]);
        }

        self.fetch("search_movies", request).await
    }

    async fn suggest_movie(&self, suggestion: &NewSuggestion) -> Result<Vec<Movie>> {
        let request = self.http.post(self.api("/movies")).json(suggestion);
        self.fetch("suggest_movie", request).await
    }

    async fn remove_movie(&self, id: MovieId) -> Result<()> {
        let request = self.http.delete(self.api(&format!("/movies/{id}")));
        self.execute("remove_movie", request).await?;
        Ok(())
    }

    async fn fetch_suggested_movies(&self) -> Result<Vec<Movie>> {
        let request = self.http.get(self.api("/movies/suggested"));
        self.fetch("fetch_suggested_movies", request).await
    }

    async fn fetch_reviewed_movies(&self) -> Result<Vec<Movie>> {
        let request = self.http.get(self.api("/movies/reviewed"));
        self.fetch("fetch_reviewed_movies", request).await
    }

    async fn mark_watched(&self, id: MovieId, user_id: UserId, date: NaiveDate) -> Result<()> {
        let request = self
            .http
            .post(self.api(&format!("/movies/{id}/watched")))
            .json(&json!({ "userId": user_id, "date": date }));
        self.execute("mark_watched", request).await?;
        Ok(())
    }

    async fn mark_unwatched(&self, id: MovieId, user_id: UserId) -> Result<()> {
        let request = self
            .http
            .delete(self.api(&format!("/movies/{id}/watched/{user_id}")));
        self.execute("mark_unwatched", request).await?;
        Ok(())
    }

    async fn score_movie(&self, id: MovieId, score: ScoreValue) -> Result<()> {
        let request = self
            .http
            .post(self.api(&format!("/movies/{id}/score")))
            .json(&json!({ "score": score }));
        self.execute("score_movie", request).await?;
        Ok(())
    }

    async fn fetch_users(&self) -> Result<Vec<User>> {
        let request = self.http.get(self.api("/users"));
        self.fetch("fetch_users", request).await
    }

    async fn fetch_stats(&self) -> Result<Stats> {
        let request = self.http.get(self.api("/stats"));
        self.fetch("fetch_stats", request).await
    }
}
