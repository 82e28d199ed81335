//! Data API endpoint client
//!
//! Thin wrappers over the four endpoints the harvester consumes: channel
//! lookup, video lookup, uploads listing and comment threads. Each one builds
//! its query, goes through the shared [`Fetcher`], and normalizes the items.

use super::models::{Channel, Comment, Video};
use super::normalize::{normalize_channel, normalize_comment, normalize_video};
use crate::config::ApiConfig;
use crate::fetch::{collect, Collected, FetchError, Fetcher, Payload, ACCEPT_OK};
use crate::url::ChannelRef;

/// Largest page the uploads listing serves
pub const PLAYLIST_PAGE_MAX: usize = 50;

/// Largest page the comment threads listing serves
pub const COMMENT_PAGE_MAX: usize = 100;

/// Comment threads answer 403 when comments are disabled and 404 for unknown
/// videos; both come back with a JSON error body.
const COMMENT_ACCEPT: &[u16] = &[200, 403, 404];

const RESOURCE_PARTS: &str = "snippet,statistics,contentDetails";

/// Client for the Data API endpoints
#[derive(Debug, Clone)]
pub struct YouTubeApi {
    fetcher: Fetcher,
    base_url: String,
    api_key: String,
}

impl YouTubeApi {
    pub fn new(fetcher: Fetcher, base_url: &str, api_key: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Builds a client from the `[api]` section
    pub fn from_config(fetcher: Fetcher, config: &ApiConfig) -> Self {
        Self::new(fetcher, &config.base_url, &config.key)
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    /// Looks up a channel by id or handle
    ///
    /// Handles are sent without their leading `@`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Channel))` - The channel was found
    /// * `Ok(None)` - The API returned no items (or an error document)
    /// * `Err(FetchError)` - No usable response
    pub async fn channel(&self, lookup: &ChannelRef) -> Result<Option<Channel>, FetchError> {
        let mut params = vec![
            ("part", RESOURCE_PARTS.to_string()),
            ("maxResults", "1".to_string()),
            ("key", self.api_key.clone()),
        ];
        match lookup {
            ChannelRef::Id(id) => params.push(("id", id.clone())),
            ChannelRef::Handle(handle) => {
                params.push(("forHandle", ChannelRef::api_handle(handle).to_string()))
            }
        }

        let payload = self
            .fetcher
            .fetch_json(&self.endpoint("channels"), &params, ACCEPT_OK)
            .await?;
        if let Some(message) = payload.api_error() {
            tracing::warn!("Channel lookup {:?} failed: {}", lookup, message);
            return Ok(None);
        }

        let channel = payload.items().next().and_then(normalize_channel);
        if channel.is_none() {
            tracing::warn!("No channel items returned for {:?}", lookup);
        }
        Ok(channel)
    }

    /// Looks up a video by id
    pub async fn video(&self, video_id: &str) -> Result<Option<Video>, FetchError> {
        let params = [
            ("part", RESOURCE_PARTS.to_string()),
            ("id", video_id.to_string()),
            ("key", self.api_key.clone()),
        ];

        let payload = self
            .fetcher
            .fetch_json(&self.endpoint("videos"), &params, ACCEPT_OK)
            .await?;
        if let Some(message) = payload.api_error() {
            tracing::warn!("Video lookup {} failed: {}", video_id, message);
            return Ok(None);
        }

        let video = payload
            .items()
            .next()
            .map(|item| normalize_video(item, video_id));
        if video.is_none() {
            tracing::warn!("No video details found for {}", video_id);
        }
        Ok(video)
    }

    /// Lists up to `cap` video ids from an uploads playlist, newest first
    pub async fn upload_video_ids(&self, playlist_id: &str, cap: usize) -> Collected<String> {
        let url = self.endpoint("playlistItems");
        let base = vec![
            ("part", "contentDetails".to_string()),
            ("playlistId", playlist_id.to_string()),
            ("maxResults", cap.clamp(1, PLAYLIST_PAGE_MAX).to_string()),
            ("key", self.api_key.clone()),
        ];
        let fetcher = &self.fetcher;
        let url = url.as_str();

        collect(
            |cursor| {
                let params = with_cursor(&base, cursor);
                async move { fetcher.fetch_json(url, &params, ACCEPT_OK).await }
            },
            |payload: &Payload| {
                payload
                    .items()
                    .filter_map(|item| item.string_at(&["contentDetails", "videoId"]))
                    .filter(|id| !id.is_empty())
                    .collect()
            },
            Payload::next_page_token,
            cap,
        )
        .await
    }

    /// Lists up to `cap` top-level comments of a video, most relevant first
    ///
    /// Disabled comments surface as an empty collection whose outcome is
    /// [`crate::fetch::CollectOutcome::ApiError`].
    pub async fn comments(&self, video_id: &str, cap: usize) -> Collected<Comment> {
        let url = self.endpoint("commentThreads");
        let base = vec![
            ("part", "snippet".to_string()),
            ("videoId", video_id.to_string()),
            ("maxResults", cap.clamp(1, COMMENT_PAGE_MAX).to_string()),
            ("textFormat", "plainText".to_string()),
            ("order", "relevance".to_string()),
            ("key", self.api_key.clone()),
        ];
        let fetcher = &self.fetcher;
        let url = url.as_str();

        collect(
            |cursor| {
                let params = with_cursor(&base, cursor);
                async move { fetcher.fetch_json(url, &params, COMMENT_ACCEPT).await }
            },
            |payload: &Payload| payload.items().filter_map(normalize_comment).collect(),
            Payload::next_page_token,
            cap,
        )
        .await
    }
}

fn with_cursor(
    base: &[(&'static str, String)],
    cursor: Option<String>,
) -> Vec<(&'static str, String)> {
    let mut params = base.to_vec();
    if let Some(token) = cursor {
        params.push(("pageToken", token));
    }
    params
}
