//! URL handling module for yt-harvest
//!
//! This module turns input URL strings into typed identifiers: a video id,
//! a channel id, or a channel handle. Anything else resolves to
//! [`Identifier::Unrecognized`]; resolution never fails.

mod channel;
mod domain;
mod video;

use std::fmt;

// Re-export main functions
pub use channel::{extract_channel_identifier, ChannelRef};
pub use domain::{extract_domain, is_channel_host, is_video_host, SHORT_LINK_HOST};
pub use video::extract_video_id;

/// A resolved reference to a channel or video
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// A video id (e.g. `dQw4w9WgXcQ`)
    VideoId(String),
    /// A canonical channel id (e.g. `UC...`)
    ChannelId(String),
    /// A channel handle, including its leading `@`
    ChannelHandle(String),
    /// The URL is malformed or does not match a supported shape
    Unrecognized,
}

impl Identifier {
    /// Returns a short label for the identifier kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::VideoId(_) => "video",
            Self::ChannelId(_) => "channel-id",
            Self::ChannelHandle(_) => "channel-handle",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Returns true if the identifier refers to a channel
    pub fn is_channel(&self) -> bool {
        matches!(self, Self::ChannelId(_) | Self::ChannelHandle(_))
    }

    /// Returns true if the URL resolved to something usable
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VideoId(id) | Self::ChannelId(id) | Self::ChannelHandle(id) => {
                write!(f, "{}:{}", self.kind(), id)
            }
            Self::Unrecognized => f.write_str("unrecognized"),
        }
    }
}

impl From<ChannelRef> for Identifier {
    fn from(channel: ChannelRef) -> Self {
        match channel {
            ChannelRef::Id(id) => Self::ChannelId(id),
            ChannelRef::Handle(handle) => Self::ChannelHandle(handle),
        }
    }
}

/// Resolves a URL string into an [`Identifier`]
///
/// Channel shapes are checked first, then video shapes. Malformed URLs,
/// unknown hosts and unsupported paths (such as `/c/<name>` or
/// `/user/<name>` vanity paths) all yield [`Identifier::Unrecognized`].
///
/// # Examples
///
/// ```
/// use yt_harvest::url::{resolve, Identifier};
///
/// assert_eq!(
///     resolve("https://www.youtube.com/watch?v=ABC&extra=1"),
///     Identifier::VideoId("ABC".to_string())
/// );
/// assert_eq!(
///     resolve("https://youtube.com/@someHandle"),
///     Identifier::ChannelHandle("@someHandle".to_string())
/// );
/// assert_eq!(resolve("https://www.youtube.com/c/vanity"), Identifier::Unrecognized);
/// ```
pub fn resolve(input: &str) -> Identifier {
    let parsed = match ::url::Url::parse(input.trim()) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!("Failed to parse URL {}: {}", input, e);
            return Identifier::Unrecognized;
        }
    };

    if let Some(channel) = extract_channel_identifier(&parsed) {
        return channel.into();
    }

    match extract_video_id(&parsed) {
        Some(video_id) => Identifier::VideoId(video_id),
        None => Identifier::Unrecognized,
    }
}
