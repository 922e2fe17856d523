//! Text normalization helpers shared by the listing rules.

/// Decode the three entities the listing markup uses in titles.
///
/// `&#039;`, `&quot;` and `&amp;` are replaced in that order, each in a
/// single pass. No other entity is touched, so `&amp;quot;` becomes
/// `&quot;` and not `"`.
///
/// # Examples
/// ```
/// use protogen_core::parser::decode_entities;
///
/// assert_eq!(decode_entities("It&#039;s Fine"), "It's Fine");
/// assert_eq!(decode_entities("Tom &amp; Jerry"), "Tom & Jerry");
/// assert_eq!(decode_entities("&lt;b&gt;"), "&lt;b&gt;");
/// ```
pub fn decode_entities(text: &str) -> String {
    text.replace("&#039;", "'")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

/// Make a thumbnail `src` absolute against `origin`.
///
/// Anything starting with `http` is left alone. Relative paths get exactly
/// one `/` between the origin and the path.
///
/// # Examples
/// ```
/// use protogen_core::parser::absolutize_url;
///
/// let origin = "https://v2.protogen.fr";
/// assert_eq!(absolutize_url("/thumbs/a.jpg", origin), "https://v2.protogen.fr/thumbs/a.jpg");
/// assert_eq!(absolutize_url("thumbs/a.jpg", origin), "https://v2.protogen.fr/thumbs/a.jpg");
/// assert_eq!(absolutize_url("https://cdn.example.org/a.jpg", origin), "https://cdn.example.org/a.jpg");
/// ```
pub fn absolutize_url(src: &str, origin: &str) -> String {
    if src.starts_with("http") {
        return src.to_string();
    }

    let origin = origin.trim_end_matches('/');
    if src.starts_with('/') {
        format!("{}{}", origin, src)
    } else {
        format!("{}/{}", origin, src)
    }
}

/// Parse a run of ASCII digits, falling back to 0 on overflow.
pub(crate) fn parse_count(digits: &str) -> u32 {
    digits.parse().unwrap_or(0)
}
