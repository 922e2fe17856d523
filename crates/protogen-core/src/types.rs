//! Data types for the Kikiskothek listing
//!
//! Field names match the JSON the proxy returns to the web player.

use serde::{Deserialize, Serialize};

/// Season selector link found on a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSummary {
    /// Raw value of the `season=` query parameter
    pub series_id: String,
    /// `"Saison {N}"`, or `"Autre"` when no numeral is present
    pub season_name: String,
    /// Number of episodes announced by the link, 0 when absent
    pub episode_count: u32,
}

/// Episode card found on a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// Id taken from the `/watch/{id}` link
    pub video_id: String,
    /// Ordinal following `Ep.`, 0 when absent
    pub episode_number: u32,
    /// Card heading with `&#039;`, `&quot;` and `&amp;` decoded
    pub title: String,
    /// Absolute thumbnail URL
    pub thumbnail: Option<String>,
    /// Duration badge text, `"00:00"` when absent
    pub duration: String,
}

/// Everything extracted from one listing page, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub seasons: Vec<SeasonSummary>,
    pub episodes: Vec<EpisodeSummary>,
}

impl Listing {
    /// Whether nothing was found on the page
    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty() && self.episodes.is_empty()
    }
}

/// Success envelope returned by the listing route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    pub success: bool,
    pub seasons: Vec<SeasonSummary>,
    pub episodes: Vec<EpisodeSummary>,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            success: true,
            seasons: listing.seasons,
            episodes: listing.episodes,
        }
    }
}
