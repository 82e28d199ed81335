use super::domain::{extract_domain, is_video_host, SHORT_LINK_HOST};
use url::Url;

/// Extracts a video id from a parsed URL
///
/// Extraction order, first match wins:
/// 1. Short-link host: the path is the id
/// 2. `/watch`: the `v` query parameter
/// 3. `/shorts/<id>`
/// 4. `/embed/<id>`
///
/// # Returns
///
/// * `Some(String)` - The video id
/// * `None` - Foreign host or no recognizable video shape
pub fn extract_video_id(url: &Url) -> Option<String> {
    let domain = extract_domain(url)?;
    if !is_video_host(&domain) {
        return None;
    }

    if domain == SHORT_LINK_HOST {
        return non_empty(url.path().trim_start_matches('/'));
    }

    let path = url.path();
    if path.eq_ignore_ascii_case("/watch") {
        return url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .and_then(|(_, value)| non_empty(&value));
    }

    for prefix in ["/shorts/", "/embed/"] {
        if let Some(rest) = path.strip_prefix(prefix) {
            return rest.split('/').next().and_then(non_empty);
        }
    }

    None
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
