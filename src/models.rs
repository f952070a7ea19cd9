//! Data structures and types for flickfetch
//!
//! Contains the canonical, provider-agnostic shapes shared across the crate:
//! - **Movie**: the record every provider adapter must produce
//! - **MovieResponse**: one page of movies with pagination metadata
//! - **PosterImages**: the result of an image-enrichment lookup

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum results per page, matching the `limit=20` requested from providers.
pub const PAGE_SIZE: usize = 20;

// =============================================================================
// Canonical Movie
// =============================================================================

/// A movie in the canonical shape, regardless of which provider produced it.
///
/// Every field has a defined default (empty string / zero / empty vec / None)
/// so consumers only ever need emptiness checks. The `id` is provider-native:
/// a numeric TMDB id or a "tt"-prefixed IMDb id, carried as text — ids are not
/// comparable across providers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// ISO date ("2024-01-01") or empty string when unknown
    pub release_date: String,
    /// Always within 0.0..=10.0; a missing provider rating maps to 0
    pub vote_average: f32,
    pub vote_count: u32,
    pub popularity: f32,
    /// Provider-specific genre numbering, not comparable across providers
    pub genre_ids: Vec<u32>,
    /// Supplementary trailer still, attached by the enrichment stage
    pub trailer_thumbnail: Option<String>,
}

impl Movie {
    /// Release year parsed from `release_date`, if one is present
    pub fn release_year(&self) -> Option<u16> {
        extract_year(&self.release_date)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.release_year() {
            Some(year) => write!(f, "{} ({}) - ⭐ {:.1}", self.title, year, self.vote_average),
            None => write!(f, "{} - ⭐ {:.1}", self.title, self.vote_average),
        }
    }
}

/// One page of movies with pagination metadata.
///
/// Invariants: `results.len() <= PAGE_SIZE` and `total_pages >= 1`, even when
/// the provider omitted pagination metadata entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieResponse {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl MovieResponse {
    /// Build a single-page response, as used for unpaginated fallback data
    pub fn single_page(page: u32, results: Vec<Movie>) -> Self {
        let total_results = results.len() as u32;
        Self {
            page,
            results,
            total_pages: 1,
            total_results,
        }
    }
}

// =============================================================================
// Enrichment Models
// =============================================================================

/// Images found for one movie by the enrichment lookups.
///
/// Each URL is independently nullable; a missing poster says nothing about
/// the backdrop or the trailer thumbnail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PosterImages {
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

// =============================================================================
// Field Helpers
// =============================================================================

/// Clamp a provider-reported rating into the canonical 0-10 scale.
///
/// Providers occasionally report out-of-range values; the Movie contract
/// promises the range, so we clamp rather than trust upstream. A missing or
/// non-finite rating maps to 0.
pub fn clamp_rating(raw: Option<f32>) -> f32 {
    match raw {
        Some(v) if v.is_finite() => v.clamp(0.0, 10.0),
        _ => 0.0,
    }
}

/// Extract year from a date string like "2022-03-04". Provider dates arrive
/// unvalidated, so the slice must be boundary-checked rather than indexed.
pub(crate) fn extract_year(date: &str) -> Option<u16> {
    date.get(..4)?.parse().ok()
}
