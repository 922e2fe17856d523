//! GET /kikiskothek-api/* - listing page scraped to JSON.

use axum::extract::State;
use axum::http::Uri;
use axum::Json;
use protogen_core::{ListingResponse, ProtogenError};
use tracing::{error, warn};

use super::suffix_after;
use crate::error::ProxyError;
use crate::state::AppState;

const ROUTE_PREFIX: &str = "/kikiskothek-api";

pub async fn listing(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<ListingResponse>, ProxyError> {
    let suffix = suffix_after(&uri, ROUTE_PREFIX);

    match state.scraper.listing(&suffix).await {
        Ok(listing) => Ok(Json(listing.into())),
        Err(ProtogenError::UpstreamStatus { status, url }) => {
            warn!(%status, %url, "kikiskothek page unavailable");
            Err(ProxyError::ListingUnavailable(status))
        }
        Err(e) => {
            error!(error = %e, "kikiskothek scrape failed");
            Err(e.into())
        }
    }
}
