//! Image enrichment stage
//!
//! Replaces low-quality or missing poster, backdrop, and trailer-thumbnail
//! fields on a resolved movie list via additional provider lookups. The whole
//! batch fans out concurrently with input order preserved; one movie's failed
//! or slow lookups never touch its neighbours, and a movie whose lookups all
//! fail comes back unmodified.

use futures::future::join_all;
use tracing::debug;

use crate::api::{OmdbClient, TmdbClient, YouTubeClient};
use crate::config::Config;
use crate::models::{Movie, PosterImages};

/// Best-effort image upgrader backed by the image-capable providers
pub struct ImageEnricher {
    tmdb: TmdbClient,
    omdb: OmdbClient,
    youtube: YouTubeClient,
}

impl ImageEnricher {
    /// Create an enricher from provider credentials
    pub fn new(config: &Config) -> Self {
        Self {
            tmdb: TmdbClient::new(config.tmdb_key()),
            omdb: OmdbClient::new(config.omdb_key()),
            youtube: YouTubeClient::new(config.youtube_key()),
        }
    }

    /// Create an enricher from pre-built clients (for testing)
    pub fn with_clients(tmdb: TmdbClient, omdb: OmdbClient, youtube: YouTubeClient) -> Self {
        Self { tmdb, omdb, youtube }
    }

    /// Enrich a batch of movies concurrently. Output length and order match
    /// the input exactly.
    pub async fn enrich(&self, movies: Vec<Movie>) -> Vec<Movie> {
        if movies.is_empty() {
            return movies;
        }
        join_all(movies.into_iter().map(|m| self.enrich_one(m))).await
    }

    /// Enrich a single movie. The poster sub-steps are sequential (each is
    /// conditioned on the previous one's outcome); the trailer lookup is
    /// independent and runs alongside them.
    async fn enrich_one(&self, movie: Movie) -> Movie {
        let year = movie.release_year();

        let (found, thumbnail) = tokio::join!(
            self.find_poster(&movie, year),
            self.find_thumbnail(&movie.title, year),
        );

        let mut movie = movie;
        if found.poster_url.is_some() {
            movie.poster_path = found.poster_url;
        }
        movie.backdrop_path = found
            .backdrop_url
            .or_else(|| thumbnail.clone())
            .or(movie.backdrop_path);
        movie.trailer_thumbnail = thumbnail;
        movie
    }

    /// Poster/backdrop cascade: TMDB by id, TMDB title search, legacy OMDb
    async fn find_poster(&self, movie: &Movie, year: Option<u16>) -> PosterImages {
        let mut found = PosterImages::default();

        // Direct lookup when the id is a TMDB number
        if let Ok(tmdb_id) = movie.id.parse::<u64>() {
            match self.tmdb.movie_images(tmdb_id).await {
                Ok(images) => {
                    found.poster_url = images.poster_url;
                    found.backdrop_url = images.backdrop_url;
                }
                Err(err) => debug!("TMDB id lookup failed for {:?}: {}", movie.title, err),
            }
        }

        // Title(+year) search when the poster is still missing
        if found.poster_url.is_none() && !movie.title.is_empty() {
            let query = match year {
                Some(y) => format!("{} {}", movie.title, y),
                None => movie.title.clone(),
            };
            match self.tmdb.search_images(&query).await {
                Ok(images) => {
                    if images.poster_url.is_some() {
                        found.poster_url = images.poster_url;
                    }
                    if images.backdrop_url.is_some() {
                        found.backdrop_url = images.backdrop_url;
                    }
                }
                Err(err) => debug!("TMDB title search failed for {:?}: {}", movie.title, err),
            }
        }

        // Legacy fallback while poster or backdrop is still missing; OMDb
        // carries posters only
        if found.poster_url.is_none() || found.backdrop_url.is_none() {
            let imdb_id = movie.id.starts_with("tt").then_some(movie.id.as_str());
            if imdb_id.is_some() || !movie.title.is_empty() {
                let result = match imdb_id {
                    Some(id) => self.omdb.poster_by_imdb_id(id).await,
                    None => self.omdb.poster_by_title(&movie.title, year).await,
                };
                match result {
                    Ok(Some(poster)) if found.poster_url.is_none() => {
                        found.poster_url = Some(poster);
                    }
                    Ok(_) => {}
                    Err(err) => debug!("OMDb lookup failed for {:?}: {}", movie.title, err),
                }
            }
        }

        found
    }

    /// Trailer still from the video platform, best effort
    async fn find_thumbnail(&self, title: &str, year: Option<u16>) -> Option<String> {
        if title.is_empty() {
            return None;
        }
        let query = match year {
            Some(y) => format!("{} {} official trailer", title, y),
            None => format!("{} official trailer", title),
        };
        match self.youtube.trailer_thumbnail(&query).await {
            Ok(thumbnail) => thumbnail,
            Err(err) => {
                debug!("trailer thumbnail lookup failed for {:?}: {}", title, err);
                None
            }
        }
    }
}
