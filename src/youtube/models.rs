//! Typed entities produced by the normalizers

use chrono::{DateTime, Utc};

/// Channel metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    /// Custom URL if the channel has one, otherwise the canonical `/channel/<id>` URL
    pub url: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Country code from the channel snippet
    pub location: Option<String>,
    pub view_count: u64,
    pub subscriber_count: u64,
    /// Playlist holding the channel's uploads
    pub uploads_playlist_id: Option<String>,
}

/// Video metadata and statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub title: Option<String>,
    pub url: String,
    /// `None` when the API gave no usable duration
    pub duration_seconds: Option<u64>,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub published_at: Option<DateTime<Utc>>,
    /// Owning channel; required to build output records
    pub channel_id: Option<String>,
}

/// A top-level comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub author_name: Option<String>,
    pub text: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub like_count: u64,
    pub reply_count: u64,
}

/// A video's transcript in one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    pub language_code: String,
    pub language_name: String,
    /// Entry texts joined with single spaces, whitespace collapsed
    pub text: String,
}
