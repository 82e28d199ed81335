//! Payload normalization
//!
//! Maps raw Data API items into the typed entities in [`super::models`].
//! Missing strings stay `None`; missing or non-numeric counters become 0.

use super::duration::parse_duration;
use super::models::{Channel, Comment, Video};
use crate::fetch::Fields;
use chrono::{DateTime, Utc};

/// Site base used for synthesized channel and video URLs
pub const SITE_BASE_URL: &str = "https://www.youtube.com";

/// Normalizes a `channels` item
///
/// Returns `None` if the item has no id.
pub fn normalize_channel(item: Fields<'_>) -> Option<Channel> {
    let id = item.string_at(&["id"]).filter(|id| !id.is_empty())?;
    let snippet = item.at(&["snippet"]);
    let statistics = item.at(&["statistics"]);

    let url = channel_url(snippet.str_at(&["customUrl"]), &id);

    Some(Channel {
        url,
        name: snippet.string_at(&["title"]),
        description: snippet.string_at(&["description"]),
        location: snippet.string_at(&["country"]),
        view_count: statistics.count_at(&["viewCount"]),
        subscriber_count: statistics.count_at(&["subscriberCount"]),
        uploads_playlist_id: item
            .string_at(&["contentDetails", "relatedPlaylists", "uploads"])
            .filter(|playlist| !playlist.is_empty()),
        id,
    })
}

/// Normalizes a `videos` item
///
/// The id comes from the caller since it is what was asked for.
pub fn normalize_video(item: Fields<'_>, video_id: &str) -> Video {
    let snippet = item.at(&["snippet"]);
    let statistics = item.at(&["statistics"]);

    Video {
        id: video_id.to_string(),
        title: snippet.string_at(&["title"]),
        url: video_url(video_id),
        duration_seconds: item
            .str_at(&["contentDetails", "duration"])
            .and_then(parse_duration),
        view_count: statistics.count_at(&["viewCount"]),
        like_count: statistics.count_at(&["likeCount"]),
        comment_count: statistics.count_at(&["commentCount"]),
        published_at: parse_timestamp(snippet.str_at(&["publishedAt"])),
        channel_id: snippet
            .string_at(&["channelId"])
            .filter(|channel| !channel.is_empty()),
    }
}

/// Normalizes a `commentThreads` item into its top-level comment
///
/// Returns `None` if the thread has no id.
pub fn normalize_comment(item: Fields<'_>) -> Option<Comment> {
    let id = item.string_at(&["id"]).filter(|id| !id.is_empty())?;
    let thread = item.at(&["snippet"]);
    let snippet = thread.at(&["topLevelComment", "snippet"]);

    let text = snippet
        .str_at(&["textDisplay"])
        .filter(|text| !text.is_empty())
        .or_else(|| snippet.str_at(&["textOriginal"]))
        .map(str::to_string);

    Some(Comment {
        id,
        author_name: snippet.string_at(&["authorDisplayName"]),
        text,
        published_at: parse_timestamp(snippet.str_at(&["publishedAt"])),
        like_count: snippet.count_at(&["likeCount"]),
        reply_count: thread.count_at(&["totalReplyCount"]),
    })
}

/// Canonical watch URL for a video id
pub fn video_url(video_id: &str) -> String {
    format!("{}/watch?v={}", SITE_BASE_URL, video_id)
}

/// Channel URL from the snippet's custom URL, or the canonical path
///
/// Custom URLs come back as bare handles (`@name`) and are made absolute.
pub fn channel_url(custom_url: Option<&str>, channel_id: &str) -> String {
    match custom_url.map(str::trim).filter(|custom| !custom.is_empty()) {
        Some(custom) if custom.starts_with("http://") || custom.starts_with("https://") => {
            custom.to_string()
        }
        Some(custom) => format!("{}/{}", SITE_BASE_URL, custom.trim_start_matches('/')),
        None => format!("{}/channel/{}", SITE_BASE_URL, channel_id),
    }
}

fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?;
    match DateTime::parse_from_rfc3339(value) {
        Ok(timestamp) => Some(timestamp.with_timezone(&Utc)),
        Err(e) => {
            tracing::debug!("Unparseable timestamp '{}': {}", value, e);
            None
        }
    }
}
