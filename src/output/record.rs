//! The flat output record
//!
//! One record per comment, or one per video when it has no comments. Channel
//! and video fields are always filled; comment and caption fields are
//! serialized as `null` when absent so every record has the same keys in the
//! same order.

use crate::youtube::{Caption, Channel, Comment, Video};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Uniform-schema output row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    pub channel_id: String,
    pub channel_url: String,
    pub channel_name: Option<String>,
    pub channel_description: Option<String>,
    pub channel_location: Option<String>,
    pub channel_views: u64,
    pub channel_subscribers: u64,
    pub video_id: String,
    pub video_title: Option<String>,
    pub video_url: String,
    pub video_duration: Option<u64>,
    pub video_views: u64,
    pub video_likes: u64,
    pub video_comments: u64,
    pub video_date: Option<DateTime<Utc>>,
    #[serde(rename = "caption_languageCode")]
    pub caption_language_code: Option<String>,
    #[serde(rename = "caption_languageName")]
    pub caption_language_name: Option<String>,
    pub caption_text: Option<String>,
    pub comment_id: Option<String>,
    pub comment_author_name: Option<String>,
    pub comment_text: Option<String>,
    pub comment_date: Option<DateTime<Utc>>,
    pub comment_likes: Option<u64>,
    pub comment_replies: Option<u64>,
}

impl OutputRecord {
    /// Flattens one channel, video, optional comment and optional caption
    pub fn build(
        channel: &Channel,
        video: &Video,
        comment: Option<&Comment>,
        caption: Option<&Caption>,
    ) -> Self {
        Self {
            channel_id: channel.id.clone(),
            channel_url: channel.url.clone(),
            channel_name: channel.name.clone(),
            channel_description: channel.description.clone(),
            channel_location: channel.location.clone(),
            channel_views: channel.view_count,
            channel_subscribers: channel.subscriber_count,
            video_id: video.id.clone(),
            video_title: video.title.clone(),
            video_url: video.url.clone(),
            video_duration: video.duration_seconds,
            video_views: video.view_count,
            video_likes: video.like_count,
            video_comments: video.comment_count,
            video_date: video.published_at,
            caption_language_code: caption.map(|c| c.language_code.clone()),
            caption_language_name: caption.map(|c| c.language_name.clone()),
            caption_text: caption.map(|c| c.text.clone()),
            comment_id: comment.map(|c| c.id.clone()),
            comment_author_name: comment.and_then(|c| c.author_name.clone()),
            comment_text: comment.and_then(|c| c.text.clone()),
            comment_date: comment.and_then(|c| c.published_at),
            comment_likes: comment.map(|c| c.like_count),
            comment_replies: comment.map(|c| c.reply_count),
        }
    }

    /// Builds the records for one video: one per comment, or a single
    /// comment-less record when there are none
    pub fn for_video(
        channel: &Channel,
        video: &Video,
        comments: &[Comment],
        caption: Option<&Caption>,
    ) -> Vec<Self> {
        if comments.is_empty() {
            return vec![Self::build(channel, video, None, caption)];
        }

        comments
            .iter()
            .map(|comment| Self::build(channel, video, Some(comment), caption))
            .collect()
    }
}
