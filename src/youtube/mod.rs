//! Video platform Data API access
//!
//! This module contains:
//! - The endpoint client for channels, videos, uploads and comment threads
//! - Normalizers from raw payloads to typed entities
//! - The compact duration parser

mod api;
mod duration;
mod models;
mod normalize;

pub use api::{YouTubeApi, COMMENT_PAGE_MAX, PLAYLIST_PAGE_MAX};
pub use duration::parse_duration;
pub use models::{Caption, Channel, Comment, Video};
pub use normalize::{
    channel_url, normalize_channel, normalize_comment, normalize_video, video_url,
    SITE_BASE_URL,
};
