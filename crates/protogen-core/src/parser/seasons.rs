//! Season selector links.
//!
//! A season link looks like
//! `<a href="?season=42" ...>Saison 3 <span>8 épisodes</span></a>`.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::text::parse_count;
use crate::types::SeasonSummary;

/// Label used for links without a season numeral
pub const OTHER_SEASON_LABEL: &str = "Autre";

static SEASON_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a[^>]*href="\?season=[^"]*"[^>]*>[\s\S]*?</a>"#)
        .expect("season link pattern is valid")
});

static SEASON_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"season=([^"]+)"#).expect("season id pattern is valid"));

static SEASON_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Saison[\s\x{A0}]+(\d+)|\bAutre\b").expect("season label pattern is valid")
});

// regex-lite folds ASCII case only, so both accented forms are spelled out.
// `\s` is ASCII-only as well; French pages put U+00A0 between number and word.
static EPISODE_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)[\s\x{A0}]*(?:é|É|&eacute;|&Eacute;|e)pisodes?")
        .expect("episode count pattern is valid")
});

/// Parse every season link on a listing page, in document order.
///
/// Links without a `season=` id, or with neither a label nor an episode
/// count, are skipped.
///
/// # Examples
/// ```
/// use protogen_core::parser::parse_seasons;
///
/// let seasons = parse_seasons(r#"<a href="?season=42">Saison 3</a>"#);
/// assert_eq!(seasons[0].series_id, "42");
/// assert_eq!(seasons[0].season_name, "Saison 3");
/// assert_eq!(seasons[0].episode_count, 0);
/// ```
pub fn parse_seasons(html: &str) -> Vec<SeasonSummary> {
    SEASON_LINK
        .find_iter(html)
        .filter_map(|m| parse_season_link(m.as_str()))
        .collect()
}

/// Parse one season link fragment.
fn parse_season_link(fragment: &str) -> Option<SeasonSummary> {
    let series_id = SEASON_ID.captures(fragment)?.get(1)?.as_str().to_string();

    let label = extract_season_label(fragment);
    let episode_count = extract_episode_count(fragment);

    if label.is_none() && episode_count.is_none() {
        return None;
    }

    Some(SeasonSummary {
        series_id,
        season_name: label.unwrap_or_else(|| OTHER_SEASON_LABEL.to_string()),
        episode_count: episode_count.unwrap_or(0),
    })
}

/// Extract `"Saison N"` or `"Autre"`, whichever appears first.
fn extract_season_label(fragment: &str) -> Option<String> {
    let caps = SEASON_LABEL.captures(fragment)?;
    match caps.get(1) {
        Some(number) => Some(format!("Saison {}", number.as_str())),
        None => Some(OTHER_SEASON_LABEL.to_string()),
    }
}

/// Extract the count from text like `"12 épisodes"`.
fn extract_episode_count(fragment: &str) -> Option<u32> {
    let caps = EPISODE_COUNT.captures(fragment)?;
    Some(parse_count(caps.get(1)?.as_str()))
}
