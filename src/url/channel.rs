use super::domain::{extract_domain, is_channel_host};
use percent_encoding::percent_decode_str;
use url::Url;

/// A channel reference found in a URL path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelRef {
    /// `/channel/<id>`
    Id(String),
    /// `/@<handle>`; the value keeps its leading `@`
    Handle(String),
}

impl ChannelRef {
    /// Returns the handle without its leading `@`, as the API expects it
    pub fn api_handle(handle: &str) -> &str {
        handle.trim_start_matches('@')
    }
}

/// Extracts a channel reference from a parsed URL
///
/// Only the full site hosts are recognized. Trailing slashes are ignored
/// and the id or handle is percent-decoded; segments that do not decode to
/// UTF-8 are not recognized. Vanity paths (`/c/...`, `/user/...`) need a search lookup and
/// are not resolved.
pub fn extract_channel_identifier(url: &Url) -> Option<ChannelRef> {
    let domain = extract_domain(url)?;
    if !is_channel_host(&domain) {
        return None;
    }

    let path = url.path().trim_end_matches('/');

    if let Some(id) = path.strip_prefix("/channel/") {
        if !id.is_empty() && !id.contains('/') {
            return decode_segment(id).map(ChannelRef::Id);
        }
        return None;
    }

    let rest = path.strip_prefix('/')?;
    if rest.len() > 1 && rest.starts_with('@') && !rest.contains('/') {
        return decode_segment(rest).map(ChannelRef::Handle);
    }

    None
}

/// `Url::path` keeps non-ASCII characters percent-encoded
fn decode_segment(segment: &str) -> Option<String> {
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}
