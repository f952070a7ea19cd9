//! Resolution pipeline
//!
//! Orchestrates ordered provider attempts per query intent. Tiers are tried
//! strictly in order, once each, and the first tier that returns wins
//! outright; there is no merging between tiers. When every live tier fails,
//! the mock catalog supplies a terminal, unpaginated response — callers never
//! see an error, only a fully-formed page.

use tracing::{debug, warn};

use crate::api::{StreamingClient, TmdbClient};
use crate::config::Config;
use crate::mock;
use crate::models::MovieResponse;

/// Movie catalog with cascading provider fallbacks
pub struct Catalog {
    streaming: StreamingClient,
    tmdb: TmdbClient,
}

impl Catalog {
    /// Create a catalog from provider credentials
    pub fn new(config: &Config) -> Self {
        Self {
            streaming: StreamingClient::new(config.streaming_key()),
            tmdb: TmdbClient::new(config.tmdb_key()),
        }
    }

    /// Create a catalog from pre-built clients (for testing)
    pub fn with_clients(streaming: StreamingClient, tmdb: TmdbClient) -> Self {
        Self { streaming, tmdb }
    }

    /// Search movies by title: streaming catalog, then TMDB, then mock
    pub async fn search_by_title(&self, title: &str, page: u32) -> MovieResponse {
        debug!("title search: {:?} page {}", title, page);

        match self.streaming.search_by_title(title, page).await {
            Ok(response) => response,
            Err(err) => {
                warn!("streaming title search failed: {}", err);
                match self.tmdb.search(title, page).await {
                    Ok(response) => response,
                    Err(err) => {
                        warn!("TMDB title search failed, serving mock catalog: {}", err);
                        MovieResponse::single_page(page, mock::search(title))
                    }
                }
            }
        }
    }

    /// Trending movies: a blank-title search, then TMDB popular, then mock
    pub async fn trending(&self, page: u32) -> MovieResponse {
        debug!("trending page {}", page);

        match self.streaming.search_by_title("", page).await {
            Ok(response) => response,
            Err(err) => {
                warn!("streaming trending failed: {}", err);
                match self.tmdb.popular(page).await {
                    Ok(response) => response,
                    Err(err) => {
                        warn!("TMDB popular failed, serving mock catalog: {}", err);
                        MovieResponse::single_page(page, mock::all())
                    }
                }
            }
        }
    }

    /// Movies by genre id: streaming catalog, then mock (no secondary tier)
    pub async fn by_genre(&self, genre_id: u32, page: u32) -> MovieResponse {
        debug!("genre search: {} page {}", genre_id, page);

        match self.streaming.by_genre(genre_id, page).await {
            Ok(response) => response,
            Err(err) => {
                warn!("streaming genre search failed, serving mock catalog: {}", err);
                MovieResponse::single_page(page, mock::by_genre(genre_id))
            }
        }
    }

    /// Recent movies from a production country: streaming catalog, then a
    /// re-labelled mock set (no secondary tier)
    pub async fn by_region(&self, country: &str, page: u32) -> MovieResponse {
        debug!("region search: {:?} page {}", country, page);

        match self.streaming.by_region(country, page).await {
            Ok(response) => response,
            Err(err) => {
                warn!("streaming region search failed, serving mock catalog: {}", err);
                MovieResponse::single_page(page, mock::regional(country))
            }
        }
    }
}
