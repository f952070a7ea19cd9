//! YouTube Data API client
//!
//! Trailer thumbnail lookups. The thumbnail URL is not taken from the search
//! payload; it is the fixed youtube image CDN path templated with the first
//! hit's video id.

use serde::Deserialize;
use std::time::Duration;

use crate::api::ProviderError;

/// YouTube search client
pub struct YouTubeClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Create a new YouTube client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://www.googleapis.com/youtube/v3")
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

    /// Thumbnail URL for the first video matching the query, if any
    pub async fn trailer_thumbnail(&self, query: &str) -> Result<Option<String>, ProviderError> {
        let url = format!(
            "{}/search?part=snippet&maxResults=1&type=video&q={}&key={}",
            self.base_url,
            urlencoding::encode(query),
            self.api_key
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let data: SearchRaw = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Malformed(format!("JSON parse error: {}", e)))?;

        Ok(data.into_thumbnail())
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchRaw {
    #[serde(default)]
    items: Vec<ItemRaw>,
}

impl SearchRaw {
    fn into_thumbnail(self) -> Option<String> {
        let video_id = self.items.into_iter().next()?.id?.video_id?;
        Some(thumbnail_url(&video_id))
    }
}

#[derive(Debug, Deserialize)]
struct ItemRaw {
    id: Option<VideoIdRaw>,
}

#[derive(Debug, Deserialize)]
struct VideoIdRaw {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

/// Fixed CDN path for a video's highest-resolution still
fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_url_template() {
        assert_eq!(
            thumbnail_url("dQw4w9WgXcQ"),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
    }

    #[test]
    fn test_empty_items_is_none() {
        let raw = SearchRaw { items: vec![] };
        assert_eq!(raw.into_thumbnail(), None);
    }

    #[test]
    fn test_first_item_wins() {
        let raw = SearchRaw {
            items: vec![
                ItemRaw {
                    id: Some(VideoIdRaw {
                        video_id: Some("first".to_string()),
                    }),
                },
                ItemRaw {
                    id: Some(VideoIdRaw {
                        video_id: Some("second".to_string()),
                    }),
                },
            ],
        };
        assert_eq!(
            raw.into_thumbnail().as_deref(),
            Some("https://img.youtube.com/vi/first/maxresdefault.jpg")
        );
    }
}
