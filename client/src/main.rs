//! Movie Catalog CLI - drives the catalog store against a live API.

use clap::{Parser, Subcommand};
use movie_catalog_client::{CatalogStore, Config, HttpMovieApi};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about = "Load and inspect the movie-night catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load suggested, reviewed, users and stats, then print the state
    Sync,
    /// Search the movie database
    Search { query: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_catalog_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Using API at {}", config.api_url);

    let store = CatalogStore::new(HttpMovieApi::new(&config)?);

    match cli.command {
        Command::Sync => {
            store.load_all().await?;
            println!("{}", store.snapshot().to_json_pretty()?);
        }
        Command::Search { query } => {
            store.search_movies(&query).await?;
            let state = store.state();
            for hit in &state.movies_search().results {
                match hit.year() {
                    Some(year) => println!("{}\t{} ({})", hit.id, hit.title, year),
                    None => println!("{}\t{}", hit.id, hit.title),
                }
            }
        }
    }

    Ok(())
}
