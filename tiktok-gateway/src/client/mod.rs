//! Boundary to the scraping client
//!
//! The gateway never scrapes anything itself. Every lookup goes through a
//! [`ScraperClient`], constructed once at startup and shared by all requests.
//! [`HttpScraperClient`] is the production implementation; tests substitute
//! an in-memory fake.
//!
//! Paged capabilities return a [`PageStream`]. Single-shot capabilities
//! return the complete value directly.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::models::{
    Audio, AudioInfo, Tag, TagInfo, User, UserInfo, Video, VideoInfo, VideoSummary,
};
use crate::pagination::PageStream;

pub mod http;

pub use http::HttpScraperClient;

/// Failure raised by a client capability
#[derive(Debug, Error)]
pub enum ClientError {
    /// The identifier is malformed or unsupported for this lookup
    #[error("{0}")]
    InvalidIdentifier(String),

    /// The identifier has no backing entity
    #[error("{0}")]
    NotFound(String),

    /// The upstream answered with a status the client does not interpret
    #[error("Upstream returned {status}: {message}")]
    Upstream {
        /// HTTP status returned by the upstream
        status: u16,
        /// Message extracted from the upstream response
        message: String,
    },

    /// The upstream could not be reached
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// The upstream response could not be decoded
    #[error("Invalid upstream response: {0}")]
    Decode(String),
}

/// Coarse category the error classifier dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Malformed or unsupported identifier
    InvalidIdentifier,
    /// Resolved identifier without a backing entity
    NotFound,
    /// Anything else, including transport failures
    Unclassified,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentifier => write!(f, "invalid_identifier"),
            Self::NotFound => write!(f, "not_found"),
            Self::Unclassified => write!(f, "unclassified"),
        }
    }
}

impl ClientError {
    /// Category of this failure
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidIdentifier(_) => FailureKind::InvalidIdentifier,
            Self::NotFound(_) => FailureKind::NotFound,
            Self::Upstream { .. } | Self::Transport(_) | Self::Decode(_) => {
                FailureKind::Unclassified
            }
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Capabilities the gateway consumes from the scraping client
///
/// Implementations own their connection and session handling and must be
/// safe to share between concurrent requests.
#[async_trait]
pub trait ScraperClient: Send + Sync {
    /// Current trending videos as one complete list
    async fn trending_videos(&self) -> Result<Vec<VideoSummary>, ClientError>;

    /// Current trending videos, page by page
    fn trending_pages(&self) -> PageStream<'_, VideoSummary>;

    /// Handle for a numeric user ID; performs no I/O
    fn user_by_id(&self, id: &str) -> User;

    /// Look up a user by username
    async fn user_by_name(&self, username: &str) -> Result<User, ClientError>;

    /// Profile details for a user
    async fn user_info(&self, user: &User) -> Result<UserInfo, ClientError>;

    /// Videos the user uploaded, newest first
    fn recent_videos(&self, user: &User) -> PageStream<'_, VideoSummary>;

    /// Videos the user liked
    fn liked_videos(&self, user: &User) -> PageStream<'_, VideoSummary>;

    /// Handle for a video ID
    fn video(&self, id: &str) -> Result<Video, ClientError>;

    /// Full details for a video
    async fn video_info(&self, video: &Video) -> Result<VideoInfo, ClientError>;

    /// Handle for an audio ID
    fn audio(&self, id: &str) -> Result<Audio, ClientError>;

    /// Details for an audio track
    async fn audio_info(&self, audio: &Audio) -> Result<AudioInfo, ClientError>;

    /// Most popular videos using an audio track
    fn audio_top_videos(&self, audio: &Audio) -> PageStream<'_, VideoSummary>;

    /// Look up a hashtag by name
    async fn tag(&self, name: &str) -> Result<Tag, ClientError>;

    /// Details for a hashtag
    async fn tag_info(&self, tag: &Tag) -> Result<TagInfo, ClientError>;

    /// Most popular videos under a hashtag
    fn tag_top_videos(&self, tag: &Tag) -> PageStream<'_, VideoSummary>;

    /// Check that the client can reach its backend
    async fn ping(&self) -> Result<(), ClientError>;
}
