//! Transcript provider backed by the public watch page
//!
//! The watch page embeds the player response, whose `captionTracks` array
//! lists every caption track with a timed-text URL. The timed text is a small
//! XML document of `<text start=".." dur="..">` elements.

use super::{TrackInfo, TranscriptEntry, TranscriptError, TranscriptProvider};
use crate::fetch::Fetcher;
use scraper::{Html, Selector};
use serde::Deserialize;

const CAPTION_TRACKS_KEY: &str = "\"captionTracks\":";

/// Reads caption tracks from watch pages
#[derive(Debug, Clone)]
pub struct WatchPageTranscripts {
    fetcher: Fetcher,
    watch_base_url: String,
}

impl WatchPageTranscripts {
    pub fn new(fetcher: Fetcher, watch_base_url: &str) -> Self {
        Self {
            fetcher,
            watch_base_url: watch_base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl TranscriptProvider for WatchPageTranscripts {
    async fn list_tracks(&self, video_id: &str) -> Result<Vec<TrackInfo>, TranscriptError> {
        let url = format!("{}/watch", self.watch_base_url);
        let params = [("v", video_id.to_string()), ("hl", "en".to_string())];
        let html = self.fetcher.fetch_text(&url, &params).await?;
        parse_caption_tracks(&html)
    }

    async fn fetch_entries(&self, track: &TrackInfo) -> Result<Vec<TranscriptEntry>, TranscriptError> {
        let xml = self.fetcher.fetch_text(&track.base_url, &[]).await?;
        parse_timed_text(&xml)
    }
}

#[derive(Debug, Deserialize)]
struct RawTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(default)]
    name: RawName,
    #[serde(rename = "languageCode")]
    language_code: String,
    #[serde(default)]
    kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawName {
    #[serde(rename = "simpleText")]
    simple_text: Option<String>,
    #[serde(default)]
    runs: Vec<RawRun>,
}

#[derive(Debug, Deserialize)]
struct RawRun {
    text: String,
}

impl RawName {
    fn label(&self) -> Option<String> {
        self.simple_text.clone().or_else(|| {
            let joined: String = self.runs.iter().map(|run| run.text.as_str()).collect();
            (!joined.is_empty()).then_some(joined)
        })
    }
}

/// Extracts the caption track list from a watch page
///
/// Manual tracks are ordered before generated ones, each group keeping the
/// page's order.
pub fn parse_caption_tracks(html: &str) -> Result<Vec<TrackInfo>, TranscriptError> {
    let document = Html::parse_document(html);
    let script_selector = selector("script")?;

    // The array is followed by the rest of the player response; the stream
    // deserializer stops after the first complete value.
    let raw_tracks = document
        .select(&script_selector)
        .map(|script| script.text().collect::<String>())
        .find_map(|text| {
            let start = text.find(CAPTION_TRACKS_KEY)? + CAPTION_TRACKS_KEY.len();
            let tracks = serde_json::Deserializer::from_str(&text[start..])
                .into_iter::<Vec<RawTrack>>()
                .next();
            tracks
        })
        .ok_or_else(|| TranscriptError::Unavailable("no caption tracks on watch page".to_string()))?
        .map_err(|e| TranscriptError::Parse(e.to_string()))?;

    let (manual, generated): (Vec<_>, Vec<_>) = raw_tracks
        .into_iter()
        .map(|raw| TrackInfo {
            language_name: raw.name.label().unwrap_or_else(|| raw.language_code.clone()),
            generated: raw.kind.as_deref() == Some("asr"),
            language_code: raw.language_code,
            base_url: raw.base_url,
        })
        .partition(|track| !track.generated);

    Ok(manual.into_iter().chain(generated).collect())
}

/// Parses a timed-text XML document into transcript entries
pub fn parse_timed_text(xml: &str) -> Result<Vec<TranscriptEntry>, TranscriptError> {
    let fragment = Html::parse_fragment(xml);
    let text_selector = selector("text")?;

    Ok(fragment
        .select(&text_selector)
        .map(|element| {
            let attr = |name: &str| {
                element
                    .value()
                    .attr(name)
                    .and_then(|value| value.parse::<f64>().ok())
                    .unwrap_or(0.0)
            };
            TranscriptEntry {
                text: decode_entities(&element.text().collect::<String>()),
                start: attr("start"),
                duration: attr("dur"),
            }
        })
        .collect())
}

fn selector(css: &str) -> Result<Selector, TranscriptError> {
    Selector::parse(css).map_err(|_| TranscriptError::Parse(format!("invalid selector '{}'", css)))
}

/// Timed text is escaped twice; parsing the track undoes one level and a
/// second parse of the entry text undoes the other
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    Html::parse_fragment(text)
        .root_element()
        .text()
        .collect()
}
