//! Streaming-availability catalog client (RapidAPI)
//!
//! Primary movie catalog: title search, genre search, and region search.
//! Ratings arrive on a 0-100 scale and are rescaled to the canonical 0-10.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::time::Duration;

use crate::api::ProviderError;
use crate::models::{clamp_rating, Movie, MovieResponse, PAGE_SIZE};
use crate::urls;

const RAPIDAPI_HOST: &str = "streaming-availability.p.rapidapi.com";

/// Streaming-availability API client
pub struct StreamingClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl StreamingClient {
    /// Create a new client with the given RapidAPI key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, format!("https://{}", RAPIDAPI_HOST))
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

    /// Search movies by title. A blank title returns popular content,
    /// which is how trending is defined upstream.
    pub async fn search_by_title(
        &self,
        title: &str,
        page: u32,
    ) -> Result<MovieResponse, ProviderError> {
        let endpoint = format!(
            "/shows/search/title?{}&title={}&page={}",
            common_params(),
            urlencoding::encode(title),
            page
        );
        let raw: PageRaw = self.get(&endpoint).await?;
        Ok(raw.into_response(page))
    }

    /// Search movies by provider genre id
    pub async fn by_genre(&self, genre_id: u32, page: u32) -> Result<MovieResponse, ProviderError> {
        let endpoint = format!(
            "/shows/search/basic?{}&genres={}&page={}",
            common_params(),
            genre_id,
            page
        );
        let raw: PageRaw = self.get(&endpoint).await?;
        Ok(raw.into_response(page))
    }

    /// Search movies by production country, keeping only recent releases
    pub async fn by_region(&self, country: &str, page: u32) -> Result<MovieResponse, ProviderError> {
        let endpoint = format!(
            "/shows/search/basic?{}&country={}&sort_by=year&page={}",
            common_params(),
            urlencoding::encode(country),
            page
        );
        let raw: PageRaw = self.get(&endpoint).await?;

        // Narrow to the recent-release window after transformation
        let today = chrono::Local::now().date_naive();
        let mut response = raw.into_response(page);
        response.results.retain(|m| in_release_window(&m.release_date, today));
        response.total_results = response.results.len() as u32;
        Ok(response)
    }

    /// Issue one authenticated GET and deserialize the body
    async fn get<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", RAPIDAPI_HOST)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ProviderError::Malformed(format!("JSON parse error: {}", e)))
    }
}

/// Query parameters shared by every catalog endpoint
fn common_params() -> String {
    format!(
        "series_granularity=show&show_type=movie&output_language=en&limit={}",
        PAGE_SIZE
    )
}

/// True when the date falls in the recent-release window. The catalog only
/// reports release years, so month granularity collapses to the year check.
fn in_release_window(release_date: &str, today: NaiveDate) -> bool {
    release_date
        .get(..4)
        .and_then(|y| y.parse::<i32>().ok())
        .is_some_and(|year| year == today.year())
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

/// One page of catalog results. A missing `result` array is a malformed
/// response and fails deserialization; missing pagination metadata is fine.
#[derive(Debug, Deserialize)]
struct PageRaw {
    result: Vec<ShowRaw>,
    total_pages: Option<f64>,
    total_results: Option<u32>,
}

impl PageRaw {
    fn into_response(self, page: u32) -> MovieResponse {
        let mut results: Vec<Movie> = self.result.into_iter().map(ShowRaw::into_movie).collect();
        results.truncate(PAGE_SIZE);

        let total_results = self.total_results.unwrap_or(results.len() as u32);
        let total_pages = self
            .total_pages
            .map(|p| p.ceil() as u32)
            .unwrap_or(1)
            .max(1);

        MovieResponse {
            page,
            results,
            total_pages,
            total_results,
        }
    }
}

/// Ids arrive as either numbers or strings depending on catalog version
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdValue {
    Num(u64),
    Text(String),
}

impl IdValue {
    fn into_text(self) -> String {
        match self {
            IdValue::Num(n) => n.to_string(),
            IdValue::Text(s) => s,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ImageSet {
    original: Option<String>,
    #[serde(rename = "500")]
    w500: Option<String>,
    #[serde(rename = "1280")]
    w1280: Option<String>,
}

impl ImageSet {
    fn poster_pick(&self) -> Option<&str> {
        self.original.as_deref().or(self.w500.as_deref())
    }

    fn backdrop_pick(&self) -> Option<&str> {
        self.original.as_deref().or(self.w1280.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GenreRaw {
    id: u32,
}

#[derive(Debug, Deserialize)]
struct ShowRaw {
    #[serde(rename = "tmdbID")]
    tmdb_id: Option<IdValue>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    title: Option<String>,
    overview: Option<String>,
    #[serde(rename = "posterURLs")]
    poster_urls: Option<ImageSet>,
    #[serde(rename = "backdropURLs")]
    backdrop_urls: Option<ImageSet>,
    year: Option<u16>,
    #[serde(rename = "tmdbRating")]
    tmdb_rating: Option<f32>,
    #[serde(rename = "tmdbVotes")]
    tmdb_votes: Option<u32>,
    popularity: Option<f32>,
    genres: Option<Vec<GenreRaw>>,
}

impl ShowRaw {
    fn into_movie(self) -> Movie {
        let id = self
            .tmdb_id
            .map(IdValue::into_text)
            .or(self.imdb_id)
            .unwrap_or_default();

        let poster_path = urls::absolutize(self.poster_urls.as_ref().and_then(ImageSet::poster_pick));
        let backdrop_path =
            urls::absolutize(self.backdrop_urls.as_ref().and_then(ImageSet::backdrop_pick));

        Movie {
            id,
            title: self.title.unwrap_or_default(),
            overview: self.overview.unwrap_or_default(),
            poster_path,
            backdrop_path,
            release_date: self.year.map(|y| format!("{}-01-01", y)).unwrap_or_default(),
            // Catalog ratings are out of 100
            vote_average: clamp_rating(self.tmdb_rating.map(|r| r / 10.0)),
            vote_count: self.tmdb_votes.unwrap_or(0),
            popularity: self.popularity.unwrap_or(0.0),
            genre_ids: self
                .genres
                .map(|gs| gs.into_iter().map(|g| g.id).collect())
                .unwrap_or_default(),
            trailer_thumbnail: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(year: Option<u16>, rating: Option<f32>) -> ShowRaw {
        ShowRaw {
            tmdb_id: None,
            imdb_id: None,
            title: Some("Test".to_string()),
            overview: None,
            poster_urls: None,
            backdrop_urls: None,
            year,
            tmdb_rating: rating,
            tmdb_votes: None,
            popularity: None,
            genres: None,
        }
    }

    #[test]
    fn test_rating_rescaled_from_100() {
        assert_eq!(show(None, Some(78.0)).into_movie().vote_average, 7.8);
        assert_eq!(show(None, None).into_movie().vote_average, 0.0);
    }

    #[test]
    fn test_missing_fields_default() {
        let movie = show(None, None).into_movie();
        assert_eq!(movie.id, "");
        assert_eq!(movie.overview, "");
        assert_eq!(movie.release_date, "");
        assert!(movie.genre_ids.is_empty());
    }

    #[test]
    fn test_year_becomes_january_first() {
        assert_eq!(show(Some(2022), None).into_movie().release_date, "2022-01-01");
    }

    #[test]
    fn test_id_prefers_tmdb_over_imdb() {
        let mut raw = show(None, None);
        raw.tmdb_id = Some(IdValue::Num(414906));
        raw.imdb_id = Some("tt1877830".to_string());
        assert_eq!(raw.into_movie().id, "414906");

        let mut raw = show(None, None);
        raw.imdb_id = Some("tt1877830".to_string());
        assert_eq!(raw.into_movie().id, "tt1877830");
    }

    #[test]
    fn test_release_window_is_current_year() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert!(in_release_window("2024-01-01", today));
        assert!(!in_release_window("2019-01-01", today));
        assert!(!in_release_window("", today));
    }

    #[test]
    fn test_pagination_defaults() {
        let raw = PageRaw {
            result: vec![show(None, None)],
            total_pages: None,
            total_results: None,
        };
        let response = raw.into_response(1);
        assert_eq!(response.total_pages, 1);
        assert_eq!(response.total_results, 1);

        let raw = PageRaw {
            result: vec![],
            total_pages: Some(4.2),
            total_results: Some(83),
        };
        let response = raw.into_response(2);
        assert_eq!(response.total_pages, 5);
        assert_eq!(response.total_results, 83);
    }
}
