use url::Url;

/// Host used by the platform's short links (`https://youtu.be/<id>`)
pub const SHORT_LINK_HOST: &str = "youtu.be";

/// Hosts that serve watch, shorts, embed and channel pages
const SITE_HOSTS: [&str; 3] = ["www.youtube.com", "youtube.com", "m.youtube.com"];

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use yt_harvest::url::extract_domain;
///
/// let url = Url::parse("https://WWW.YouTube.com/watch?v=x").unwrap();
/// assert_eq!(extract_domain(&url), Some("www.youtube.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns true if a host can carry a video id (site hosts plus the short-link host)
pub fn is_video_host(domain: &str) -> bool {
    domain == SHORT_LINK_HOST || SITE_HOSTS.contains(&domain)
}

/// Returns true if a host can carry a channel path (short links never do)
pub fn is_channel_host(domain: &str) -> bool {
    SITE_HOSTS.contains(&domain)
}
