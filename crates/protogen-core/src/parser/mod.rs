//! Listing extractor for Kikiskothek pages
//!
//! The listing page is scraped with patterns over the raw markup, not a DOM:
//! - `seasons`: season selector links (`href="?season=..."`)
//! - `episodes`: episode cards (`<a class="... episode-card ...">`)
//! - `text`: entity decoding and thumbnail URL normalization
//!
//! Every rule is best-effort. A fragment missing its required id is skipped,
//! missing optional fields fall back to defaults, and nothing here can fail.

pub mod episodes;
pub mod seasons;
pub mod text;

use crate::client::UPSTREAM_ORIGIN;
use crate::types::Listing;

// Re-export main parsing functions
pub use episodes::{parse_duration_badge, parse_episodes};
pub use seasons::parse_seasons;
pub use text::{absolutize_url, decode_entities};

/// Extract seasons and episodes from a listing page.
///
/// Relative thumbnails are joined to the upstream origin.
///
/// # Examples
/// ```
/// use protogen_core::parser::extract;
///
/// let listing = extract("<html><body>nothing here</body></html>");
/// assert!(listing.seasons.is_empty());
/// assert!(listing.episodes.is_empty());
/// ```
pub fn extract(html: &str) -> Listing {
    parse_listing(html, UPSTREAM_ORIGIN)
}

/// Extract seasons and episodes, joining relative thumbnails to `origin`.
pub fn parse_listing(html: &str, origin: &str) -> Listing {
    Listing {
        seasons: parse_seasons(html),
        episodes: parse_episodes(html, origin),
    }
}
