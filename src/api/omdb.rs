//! OMDb API client
//!
//! Legacy poster fallback. OMDb only carries posters (no backdrops) and
//! reports misses in-band: a 200 body with `Response: "False"` or a Poster
//! field holding the literal sentinel "N/A".

use serde::Deserialize;
use std::time::Duration;

use crate::api::ProviderError;

/// OMDb API client
pub struct OmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OmdbClient {
    /// Create a new OMDb client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://www.omdbapi.com")
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

    /// Poster URL for a movie by IMDb id, if OMDb has one
    pub async fn poster_by_imdb_id(&self, imdb_id: &str) -> Result<Option<String>, ProviderError> {
        let url = format!(
            "{}/?i={}&apikey={}",
            self.base_url,
            urlencoding::encode(imdb_id),
            self.api_key
        );
        self.fetch_poster(&url).await
    }

    /// Poster URL for a movie by title (and year when known)
    pub async fn poster_by_title(
        &self,
        title: &str,
        year: Option<u16>,
    ) -> Result<Option<String>, ProviderError> {
        let mut url = format!(
            "{}/?t={}&apikey={}",
            self.base_url,
            urlencoding::encode(title),
            self.api_key
        );
        if let Some(year) = year {
            url.push_str(&format!("&y={}", year));
        }
        self.fetch_poster(&url).await
    }

    async fn fetch_poster(&self, url: &str) -> Result<Option<String>, ProviderError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let data: LookupRaw = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Malformed(format!("JSON parse error: {}", e)))?;

        Ok(data.into_poster())
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct LookupRaw {
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Response")]
    response: Option<String>,
}

impl LookupRaw {
    fn into_poster(self) -> Option<String> {
        if self.response.as_deref() == Some("False") {
            return None;
        }
        match self.poster {
            Some(url) if url != "N/A" && !url.is_empty() => Some(url),
            _ => None,
        }
    }
}
