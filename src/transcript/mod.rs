//! Caption transcripts
//!
//! A [`TranscriptProvider`] lists a video's caption tracks and fetches their
//! timed entries. Which track to use is decided here by [`select_track`], so
//! every provider gets the same language fallback:
//!
//! 1. For each preferred language in order: a manual track, then a generated one
//! 2. The first manual track in any language
//! 3. The first generated track in any language

mod select;
mod watch_page;

pub use select::select_track;
pub use watch_page::{parse_caption_tracks, parse_timed_text, WatchPageTranscripts};

use crate::fetch::FetchError;
use crate::youtube::Caption;
use std::future::Future;
use thiserror::Error;

/// Errors from a transcript provider; all of them mean "no caption"
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Transcripts unavailable: {0}")]
    Unavailable(String),

    #[error("Transcript request failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to parse transcript data: {0}")]
    Parse(String),
}

/// One caption track offered for a video
#[derive(Debug, Clone, PartialEq)]
pub struct TrackInfo {
    pub language_code: String,
    /// Human-readable language name as the platform labels it
    pub language_name: String,
    /// True for automatically generated (speech recognition) tracks
    pub generated: bool,
    /// Where the track's timed text lives
    pub base_url: String,
}

/// A single timed line of a transcript
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Source of caption tracks and their entries
pub trait TranscriptProvider {
    /// Lists the caption tracks available for a video, manual tracks first
    fn list_tracks(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<Vec<TrackInfo>, TranscriptError>>;

    /// Fetches the timed entries of one track
    fn fetch_entries(
        &self,
        track: &TrackInfo,
    ) -> impl Future<Output = Result<Vec<TranscriptEntry>, TranscriptError>>;
}

/// Fetches the best available caption for a video
///
/// Returns `None` when the video has no usable track or any step fails;
/// failures are logged, never propagated.
pub async fn fetch_caption<P: TranscriptProvider>(
    provider: &P,
    video_id: &str,
    preferred_languages: &[String],
) -> Option<Caption> {
    let tracks = match provider.list_tracks(video_id).await {
        Ok(tracks) => tracks,
        Err(e) => {
            tracing::info!("No transcripts available for video {}: {}", video_id, e);
            return None;
        }
    };

    let Some(track) = select_track(&tracks, preferred_languages) else {
        tracing::info!("Could not find any transcript for {}", video_id);
        return None;
    };

    let entries = match provider.fetch_entries(track).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Failed to fetch transcript for {}: {}", video_id, e);
            return None;
        }
    };

    Some(Caption {
        language_code: track.language_code.clone(),
        language_name: track.language_name.clone(),
        text: join_entries(&entries),
    })
}

/// Joins entry texts with single spaces, collapsing all inner whitespace
pub fn join_entries(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .flat_map(|entry| entry.text.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}
