//! Episode cards.
//!
//! A card is an anchor whose class contains `episode-card`:
//!
//! ```text
//! <a href="/watch/abc123" class="group episode-card">
//!     <img src="/thumbs/abc123.jpg">
//!     <div class="absolute bottom-2 right-2 ...">12:34</div>
//!     <span>Ep. 4</span>
//!     <h3>Title</h3>
//! </a>
//! ```

use std::sync::LazyLock;

use regex_lite::Regex;

use super::text::{absolutize_url, decode_entities, parse_count};
use crate::types::EpisodeSummary;

/// Title used when a card has no heading
pub const UNTITLED: &str = "Sans titre";

/// Duration used when a card has no duration badge
pub const DEFAULT_DURATION: &str = "00:00";

/// Class tokens that mark the duration badge in the card's bottom-right corner
const DURATION_BADGE_CLASSES: [&str; 3] = ["absolute", "bottom-2", "right-2"];

static EPISODE_CARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a[^>]*class="[^"]*episode-card[^"]*"[^>]*>[\s\S]*?</a>"#)
        .expect("episode card pattern is valid")
});

static WATCH_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="/watch/([^"?]+)"#).expect("watch id pattern is valid"));

static EPISODE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Ep\.[\s\x{A0}]*(\d+)").expect("episode number pattern is valid")
});

static TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<h3[^>]*>\s*([^<]+)\s*</h3>").expect("title pattern is valid")
});

static IMAGE_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img[^>]+src="([^"]+)""#).expect("image pattern is valid")
});

static TIMED_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<[a-z][a-z0-9]*\s[^>]*class="([^"]*)"[^>]*>[\s\x{A0}]*(\d{1,2}:\d{2}(?::\d{2})?)[\s\x{A0}]*</"#,
    )
    .expect("duration badge pattern is valid")
});

/// Parse every episode card on a listing page, in document order.
///
/// Cards without a `/watch/{id}` link are skipped. Relative thumbnails are
/// joined to `origin`.
///
/// # Examples
/// ```
/// use protogen_core::parser::parse_episodes;
///
/// let html = r#"<a href="/watch/abc123?x=1" class="episode-card"><h3>It&#039;s Fine</h3></a>"#;
/// let episodes = parse_episodes(html, "https://v2.protogen.fr");
/// assert_eq!(episodes[0].video_id, "abc123");
/// assert_eq!(episodes[0].title, "It's Fine");
/// assert_eq!(episodes[0].duration, "00:00");
/// assert_eq!(episodes[0].episode_number, 0);
/// ```
pub fn parse_episodes(html: &str, origin: &str) -> Vec<EpisodeSummary> {
    EPISODE_CARD
        .find_iter(html)
        .filter_map(|m| parse_episode_card(m.as_str(), origin))
        .collect()
}

/// Parse one episode card fragment.
fn parse_episode_card(fragment: &str, origin: &str) -> Option<EpisodeSummary> {
    let video_id = WATCH_ID.captures(fragment)?.get(1)?.as_str().to_string();

    let episode_number = EPISODE_NUMBER
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| parse_count(m.as_str()))
        .unwrap_or(0);

    let title = TITLE
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or(UNTITLED);

    let thumbnail = IMAGE_SRC
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| absolutize_url(m.as_str(), origin));

    let duration =
        parse_duration_badge(fragment).unwrap_or_else(|| DEFAULT_DURATION.to_string());

    Some(EpisodeSummary {
        video_id,
        episode_number,
        title: decode_entities(title),
        thumbnail,
        duration,
    })
}

/// Find the duration badge of a card.
///
/// Only an element whose class carries all of `absolute`, `bottom-2` and
/// `right-2` counts, and its whole text must look like `MM:SS` or `H:MM:SS`.
///
/// # Examples
/// ```
/// use protogen_core::parser::parse_duration_badge;
///
/// let badge = r#"<div class="absolute bottom-2 right-2 text-xs">1:02:03</div>"#;
/// assert_eq!(parse_duration_badge(badge), Some("1:02:03".to_string()));
/// assert_eq!(parse_duration_badge("<p>Diffusé à 20:45</p>"), None);
/// ```
pub fn parse_duration_badge(fragment: &str) -> Option<String> {
    TIMED_ELEMENT
        .captures_iter(fragment)
        .find(|caps| {
            caps.get(1)
                .map(|class| is_duration_badge(class.as_str()))
                .unwrap_or(false)
        })
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_string())
}

fn is_duration_badge(class: &str) -> bool {
    let tokens: Vec<&str> = class.split_whitespace().collect();
    DURATION_BADGE_CLASSES
        .iter()
        .all(|wanted| tokens.iter().any(|token| token.eq_ignore_ascii_case(wanted)))
}
