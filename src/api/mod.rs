//! API clients for external movie providers
//!
//! - Streaming-availability: primary catalog (search, genre, region)
//! - TMDB: secondary catalog and high-quality poster/backdrop lookups
//! - OMDb: legacy poster fallback
//! - YouTube: trailer thumbnail lookups
//!
//! Each client issues exactly one HTTP call per invocation; retries and
//! fallbacks are the resolution pipeline's job, not the adapters'.

use thiserror::Error;

pub mod omdb;
pub mod streaming;
pub mod tmdb;
pub mod youtube;

pub use omdb::OmdbClient;
pub use streaming::StreamingClient;
pub use tmdb::TmdbClient;
pub use youtube::YouTubeClient;

/// Errors a provider call can surface.
///
/// `Status` and `Transport` cover non-2xx responses and network failures;
/// `Malformed` covers 2xx bodies missing fields the transform cannot default
/// (an absent result array, unparseable JSON). Partial payloads that *can* be
/// defaulted never error — individual fields degrade to their defaults.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(String),
}
