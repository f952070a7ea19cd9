//! TMDB (The Movie Database) API client
//!
//! Secondary catalog (title search, popular) and the first stop for
//! high-quality poster/backdrop lookups during enrichment.
//! API docs: https://developer.themoviedb.org/docs

use serde::Deserialize;
use std::time::Duration;

use crate::api::ProviderError;
use crate::models::{clamp_rating, Movie, MovieResponse, PosterImages, PAGE_SIZE};
use crate::urls;

/// TMDB API client
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new TMDB client with the given v3 API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://api.themoviedb.org/3")
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Search movies by title
    pub async fn search(&self, query: &str, page: u32) -> Result<MovieResponse, ProviderError> {
        let endpoint = format!(
            "/search/movie?query={}&page={}",
            urlencoding::encode(query),
            page
        );
        let raw: PageRaw = self.get(&endpoint).await?;
        Ok(raw.into_response(page))
    }

    /// Currently popular movies (trending fallback)
    pub async fn popular(&self, page: u32) -> Result<MovieResponse, ProviderError> {
        let endpoint = format!("/movie/popular?page={}", page);
        let raw: PageRaw = self.get(&endpoint).await?;
        Ok(raw.into_response(page))
    }

    /// Poster and backdrop for a movie by TMDB id
    pub async fn movie_images(&self, id: u64) -> Result<PosterImages, ProviderError> {
        let endpoint = format!("/movie/{}", id);
        let raw: DetailRaw = self.get(&endpoint).await?;
        Ok(raw.into_images())
    }

    /// Poster and backdrop from the first title-search hit
    pub async fn search_images(&self, query: &str) -> Result<PosterImages, ProviderError> {
        let endpoint = format!("/search/movie?query={}&page=1", urlencoding::encode(query));
        let raw: PageRaw = self.get(&endpoint).await?;
        Ok(raw
            .results
            .into_iter()
            .next()
            .map(|m| m.into_images())
            .unwrap_or_default())
    }

    /// Issue one authenticated GET and deserialize the body
    async fn get<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T, ProviderError> {
        let sep = if endpoint.contains('?') { '&' } else { '?' };
        let url = format!("{}{}{}api_key={}", self.base_url, endpoint, sep, self.api_key);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ProviderError::Malformed(format!("JSON parse error: {}", e)))
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct PageRaw {
    results: Vec<MovieRaw>,
    total_pages: Option<u32>,
    total_results: Option<u32>,
}

impl PageRaw {
    fn into_response(self, page: u32) -> MovieResponse {
        let mut results: Vec<Movie> = self.results.into_iter().map(MovieRaw::into_movie).collect();
        results.truncate(PAGE_SIZE);

        let total_results = self.total_results.unwrap_or(results.len() as u32);
        let total_pages = self.total_pages.unwrap_or(1).max(1);

        MovieResponse {
            page,
            results,
            total_pages,
            total_results,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MovieRaw {
    id: u64,
    title: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    release_date: Option<String>,
    vote_average: Option<f32>,
    vote_count: Option<u32>,
    popularity: Option<f32>,
    genre_ids: Option<Vec<u32>>,
}

impl MovieRaw {
    fn into_movie(self) -> Movie {
        Movie {
            id: self.id.to_string(),
            title: self.title.unwrap_or_default(),
            overview: self.overview.unwrap_or_default(),
            poster_path: urls::absolutize(self.poster_path.as_deref()),
            backdrop_path: urls::absolutize(self.backdrop_path.as_deref()),
            release_date: self.release_date.unwrap_or_default(),
            // TMDB ratings are already out of 10
            vote_average: clamp_rating(self.vote_average),
            vote_count: self.vote_count.unwrap_or(0),
            popularity: self.popularity.unwrap_or(0.0),
            genre_ids: self.genre_ids.unwrap_or_default(),
            trailer_thumbnail: None,
        }
    }

    fn into_images(self) -> PosterImages {
        PosterImages {
            poster_url: self.poster_path.as_deref().map(urls::poster_url),
            backdrop_url: self.backdrop_path.as_deref().map(urls::backdrop_url),
            thumbnail_url: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DetailRaw {
    poster_path: Option<String>,
    backdrop_path: Option<String>,
}

impl DetailRaw {
    fn into_images(self) -> PosterImages {
        PosterImages {
            poster_url: self.poster_path.as_deref().map(urls::poster_url),
            backdrop_url: self.backdrop_path.as_deref().map(urls::backdrop_url),
            thumbnail_url: None,
        }
    }
}
