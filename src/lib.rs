//! flickfetch - Multi-provider movie metadata aggregation
//!
//! Aggregates movie metadata and imagery from several independent, unreliable
//! providers into one consistent shape, degrading gracefully all the way down
//! to a bundled mock catalog when every live provider fails.
//!
//! # Modules
//!
//! - `models` - Canonical Movie / MovieResponse / PosterImages shapes
//! - `api` - Provider clients (streaming catalog, TMDB, OMDb, YouTube)
//! - `catalog` - Resolution pipeline with ordered fallback tiers
//! - `enrich` - Concurrent best-effort image enrichment
//! - `mock` - Static fallback catalog
//! - `urls` - Image URL normalization
//! - `config` - Provider credentials

pub mod api;
pub mod catalog;
pub mod config;
pub mod enrich;
pub mod mock;
pub mod models;
pub mod urls;

// Re-export commonly used types
pub use api::{OmdbClient, ProviderError, StreamingClient, TmdbClient, YouTubeClient};
pub use catalog::Catalog;
pub use config::Config;
pub use enrich::ImageEnricher;
pub use models::{Movie, MovieResponse, PosterImages, PAGE_SIZE};
