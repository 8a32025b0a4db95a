//! Movie Catalog Client - async actions and API access for the catalog.
//!
//! [`CatalogStore`] wraps the engine's [`Store`](movie_catalog_engine::Store)
//! and exposes one async action per remote call. Remote access goes through
//! the [`MovieApi`] trait; [`HttpMovieApi`] is the production implementation.
//!
//! ```no_run
//! use movie_catalog_client::{CatalogStore, Config, HttpMovieApi};
//!
//! # async fn run() -> Result<(), movie_catalog_client::ClientError> {
//! let config = Config::new("http://localhost:3000/api")?;
//! let store = CatalogStore::new(HttpMovieApi::new(&config)?);
//!
//! store.load_all().await?;
//! println!("{} suggested movies", store.state().suggested().len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;

pub use api::{HttpMovieApi, MovieApi};
pub use catalog::CatalogStore;
pub use config::{Config, ConfigError};
pub use error::{ClientError, Result};
