//! Harvester - per-URL orchestration
//!
//! The harvester processes input URLs strictly one after another. For each
//! URL it:
//! - Resolves the URL to a channel or video identifier
//! - Looks up the channel (and its uploads) or the video (and its channel)
//! - Fetches comments and, when enabled, a caption for every video
//! - Flattens everything into [`OutputRecord`]s
//!
//! Failures are contained per URL: they are logged and counted, and the run
//! moves on to the next URL.

use crate::config::{CaptionConfig, Config, HarvestConfig};
use crate::fetch::{CollectOutcome, Fetcher};
use crate::output::{log_summary, HarvestSummary, OutputRecord};
use crate::transcript::{fetch_caption, TranscriptProvider};
use crate::url::{resolve, ChannelRef, Identifier};
use crate::youtube::{Channel, YouTubeApi};
use crate::{HarvestError, Result};

/// Main harvest coordinator
pub struct Harvester<P> {
    api: YouTubeApi,
    transcripts: P,
    limits: HarvestConfig,
    captions: CaptionConfig,
    summary: HarvestSummary,
}

impl<P: TranscriptProvider> Harvester<P> {
    /// Creates a harvester over an API client and a transcript provider
    pub fn new(
        api: YouTubeApi,
        transcripts: P,
        limits: HarvestConfig,
        captions: CaptionConfig,
    ) -> Self {
        Self {
            api,
            transcripts,
            limits,
            captions,
            summary: HarvestSummary::new(),
        }
    }

    /// Creates a harvester from the run configuration
    ///
    /// Builds the HTTP client once; it is shared by every request of the run.
    pub fn from_config(config: &Config, transcripts: P) -> Result<Self> {
        let fetcher = Fetcher::from_config(&config.http)?;
        let api = YouTubeApi::from_config(fetcher, &config.api);
        Ok(Self::new(
            api,
            transcripts,
            config.harvest.clone(),
            config.captions.clone(),
        ))
    }

    /// Returns the counters of the run so far
    pub fn summary(&self) -> &HarvestSummary {
        &self.summary
    }

    /// Processes every URL in order and returns all records produced
    pub async fn run(&mut self, urls: &[String]) -> Vec<OutputRecord> {
        let mut records = Vec::new();

        for (index, url) in urls.iter().enumerate() {
            tracing::info!("[{}/{}] Processing {}", index + 1, urls.len(), url);
            self.summary.urls_total += 1;

            match self.process_url(url).await {
                Ok(None) => {
                    tracing::warn!("Could not resolve a channel or video from {}", url);
                    self.summary.urls_skipped += 1;
                }
                Ok(Some(produced)) if produced.is_empty() => {
                    tracing::warn!("No records produced for {}", url);
                    self.summary.urls_failed += 1;
                }
                Ok(Some(produced)) => {
                    tracing::info!("Collected {} records from {}", produced.len(), url);
                    self.summary.urls_processed += 1;
                    self.summary.records += produced.len();
                    records.extend(produced);
                }
                Err(e) => {
                    tracing::error!("Failed to process {}: {}", url, e);
                    self.summary.urls_failed += 1;
                }
            }
        }

        log_summary(&self.summary);
        records
    }

    /// Processes a single URL
    ///
    /// # Returns
    ///
    /// * `Ok(Some(records))` - The URL resolved; records may be empty
    /// * `Ok(None)` - The URL did not resolve to a supported shape
    /// * `Err(HarvestError)` - A required lookup failed
    pub async fn process_url(&mut self, url: &str) -> Result<Option<Vec<OutputRecord>>> {
        let identifier = resolve(url);
        tracing::debug!("Resolved {} to {}", url, identifier);

        let records = match identifier {
            Identifier::VideoId(id) => self.process_video(&id, None).await?,
            Identifier::ChannelId(id) => self.process_channel(&ChannelRef::Id(id)).await?,
            Identifier::ChannelHandle(handle) => {
                self.process_channel(&ChannelRef::Handle(handle)).await?
            }
            Identifier::Unrecognized => return Ok(None),
        };
        Ok(Some(records))
    }

    /// Channel flow: channel, its uploads, then each upload in turn
    async fn process_channel(&mut self, lookup: &ChannelRef) -> Result<Vec<OutputRecord>> {
        let channel = self
            .api
            .channel(lookup)
            .await?
            .ok_or_else(|| HarvestError::NotFound {
                entity: "Channel",
                id: Identifier::from(lookup.clone()).to_string(),
            })?;

        let playlist_id =
            channel
                .uploads_playlist_id
                .clone()
                .ok_or_else(|| HarvestError::MissingLinkage {
                    id: channel.id.clone(),
                    message: "channel has no uploads playlist".to_string(),
                })?;

        let uploads = self
            .api
            .upload_video_ids(&playlist_id, self.limits.max_videos_per_channel)
            .await;
        match &uploads.outcome {
            CollectOutcome::ApiError(message) => {
                tracing::warn!("Uploads listing for {} ended early: {}", channel.id, message)
            }
            CollectOutcome::FetchFailed(e) => {
                tracing::warn!("Uploads listing for {} ended early: {}", channel.id, e)
            }
            CollectOutcome::CapReached | CollectOutcome::Exhausted => {}
        }
        tracing::info!(
            "Found {} videos for channel {} ({} pages)",
            uploads.items.len(),
            channel.id,
            uploads.pages
        );

        let mut records = Vec::new();
        for video_id in &uploads.items {
            match self.process_video(video_id, Some(&channel)).await {
                Ok(produced) => records.extend(produced),
                Err(e) => tracing::warn!("Skipping video {}: {}", video_id, e),
            }
        }
        Ok(records)
    }

    /// Video flow: video, its channel, caption, then comments
    ///
    /// A channel already fetched by the caller is reused; otherwise it is
    /// looked up through the video's channel id.
    async fn process_video(
        &mut self,
        video_id: &str,
        known_channel: Option<&Channel>,
    ) -> Result<Vec<OutputRecord>> {
        let video = self
            .api
            .video(video_id)
            .await?
            .ok_or_else(|| HarvestError::NotFound {
                entity: "Video",
                id: video_id.to_string(),
            })?;

        let fetched;
        let channel = match known_channel {
            Some(channel) => channel,
            None => {
                let channel_id =
                    video
                        .channel_id
                        .clone()
                        .ok_or_else(|| HarvestError::MissingLinkage {
                            id: video.id.clone(),
                            message: "video has no channel id".to_string(),
                        })?;
                fetched = self
                    .api
                    .channel(&ChannelRef::Id(channel_id.clone()))
                    .await?
                    .ok_or(HarvestError::NotFound {
                        entity: "Channel",
                        id: channel_id,
                    })?;
                &fetched
            }
        };

        let caption = if self.captions.enabled {
            fetch_caption(&self.transcripts, &video.id, &self.captions.languages).await
        } else {
            None
        };

        let comments = self.api.comments(&video.id, self.limits.comment_limit).await;
        match &comments.outcome {
            CollectOutcome::ApiError(message) => {
                tracing::info!("Comments unavailable for {}: {}", video.id, message)
            }
            CollectOutcome::FetchFailed(e) => {
                tracing::warn!("Comment listing for {} ended early: {}", video.id, e)
            }
            CollectOutcome::CapReached | CollectOutcome::Exhausted => {}
        }
        tracing::debug!("Fetched {} comments for {}", comments.items.len(), video.id);

        let records = OutputRecord::for_video(channel, &video, &comments.items, caption.as_ref());
        self.summary.videos += 1;
        Ok(records)
    }
}
