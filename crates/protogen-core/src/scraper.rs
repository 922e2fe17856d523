//! Kikiskothek listing scraper
//!
//! Combines the upstream client with the listing extractor: one page fetch,
//! one extraction, no caching.

use tracing::info;

use crate::client::ProtogenClient;
use crate::error::{ProtogenError, Result};
use crate::parser::parse_listing;
use crate::types::Listing;

/// Query token that selects the calendar collection
const KALANDAR_TOKEN: &str = "season=kalandar";

/// Calendar view served for the `kalandar` collection
const KALANDAR_PATH: &str = "/kikiskothek/kalandar?tab=kalandar&year=2025";

/// Listing page root on the upstream
const LISTING_PATH: &str = "/kikiskothek";

/// Scraper for Kikiskothek listing pages
///
/// # Example
/// ```no_run
/// use protogen_core::KikiskothekScraper;
///
/// # async fn example() -> Result<(), protogen_core::ProtogenError> {
/// let scraper = KikiskothekScraper::new()?;
/// let listing = scraper.listing("/series?season=42").await?;
/// println!("{} seasons, {} episodes", listing.seasons.len(), listing.episodes.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct KikiskothekScraper {
    client: ProtogenClient,
}

impl KikiskothekScraper {
    /// Create a new scraper against the real upstream.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: ProtogenClient::new()?,
        })
    }

    /// Create a new scraper with a custom client.
    ///
    /// # Arguments
    /// * `client` - Pre-configured ProtogenClient instance
    pub fn with_client(client: ProtogenClient) -> Self {
        Self { client }
    }

    /// Upstream URL for a listing request.
    ///
    /// `suffix` is the inbound path and query after the route prefix. It is
    /// appended to `/kikiskothek`, except that any suffix mentioning
    /// `season=kalandar` is replaced wholesale by the calendar view.
    ///
    /// # Errors
    /// Returns `ProtogenError::InvalidUrl` if `suffix` is not a path.
    ///
    /// # Example
    /// ```
    /// use protogen_core::KikiskothekScraper;
    ///
    /// let scraper = KikiskothekScraper::new().unwrap();
    /// assert_eq!(
    ///     scraper.listing_target("/show?season=42").unwrap(),
    ///     "https://v2.protogen.fr/kikiskothek/show?season=42"
    /// );
    /// assert_eq!(
    ///     scraper.listing_target("/show?season=kalandar").unwrap(),
    ///     "https://v2.protogen.fr/kikiskothek/kalandar?tab=kalandar&year=2025"
    /// );
    /// ```
    pub fn listing_target(&self, suffix: &str) -> Result<String> {
        if suffix.contains(KALANDAR_TOKEN) {
            return self.client.url(KALANDAR_PATH);
        }

        if !suffix.is_empty() && !suffix.starts_with('/') && !suffix.starts_with('?') {
            return Err(ProtogenError::InvalidUrl(suffix.to_string()));
        }
        self.client.url(&format!("{}{}", LISTING_PATH, suffix))
    }

    /// Fetch a listing page and extract its seasons and episodes.
    ///
    /// # Arguments
    /// * `suffix` - Inbound path and query after the route prefix
    ///
    /// # Returns
    /// * `Ok(Listing)` - possibly empty if the page shape is unexpected
    /// * `Err(ProtogenError::UpstreamStatus)` if the upstream answered non-2xx
    /// * `Err(ProtogenError::HttpError)` if the upstream is unreachable
    pub async fn listing(&self, suffix: &str) -> Result<Listing> {
        let target = self.listing_target(suffix)?;
        info!(%target, "fetching kikiskothek listing");

        let html = self.client.fetch_html(&target).await?;
        let listing = parse_listing(&html, self.client.base_url());

        info!(
            seasons = listing.seasons.len(),
            episodes = listing.episodes.len(),
            "kikiskothek listing extracted"
        );

        Ok(listing)
    }
}
