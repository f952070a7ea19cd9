//! Image URL normalization
//!
//! Providers hand back image locations in three conventions: absolute URLs,
//! root-relative TMDB paths ("/abc.jpg"), and bare filenames. Everything is
//! normalized to an absolute URL against the TMDB image CDN. Pure string
//! transforms, no network access.

/// TMDB image CDN origin at full resolution
pub const IMAGE_ORIGINAL: &str = "https://image.tmdb.org/t/p/original";

/// TMDB image CDN origin at medium (w500) resolution
pub const IMAGE_W500: &str = "https://image.tmdb.org/t/p/w500";

/// Normalize a provider image path into an absolute URL.
///
/// - `None` or empty input stays `None`
/// - already-absolute URLs (http/https) pass through unchanged
/// - root-relative paths are served at "original" resolution
/// - bare filenames are served at "w500" resolution
pub fn absolutize(path: Option<&str>) -> Option<String> {
    let path = path?;
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http") {
        return Some(path.to_string());
    }
    if path.starts_with('/') {
        return Some(format!("{}{}", IMAGE_ORIGINAL, path));
    }
    Some(format!("{}/{}", IMAGE_W500, path))
}

/// Build a w500 poster URL from a root-relative TMDB path
pub fn poster_url(path: &str) -> String {
    format!("{}{}", IMAGE_W500, path)
}

/// Build a full-resolution backdrop URL from a root-relative TMDB path
pub fn backdrop_url(path: &str) -> String {
    format!("{}{}", IMAGE_ORIGINAL, path)
}
