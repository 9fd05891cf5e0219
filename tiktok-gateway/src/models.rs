//! Domain records returned by the scraping client
//!
//! Handles (`User`, `Video`, `Audio`, `Tag`) are cheap references that later
//! calls accept. Info records are the full payloads the gateway serializes.
//! Everything is camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to a user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric account ID as a string
    pub id: String,

    /// Username, when the handle was resolved by name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl User {
    /// Handle for a known numeric ID
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: None,
        }
    }
}

/// Reference to a single video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
}

/// Reference to an audio track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audio {
    pub id: String,
}

/// Reference to a hashtag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,

    /// Tag text without the leading `#`
    pub title: String,
}

/// Profile details for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user: User,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub follower_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub video_count: u64,
}

/// Engagement counters attached to a video
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStats {
    #[serde(default)]
    pub play_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub share_count: u64,
}

/// Record carried in video pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub video: Video,
    pub author: User,
    #[serde(default)]
    pub description: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub stats: VideoStats,
}

/// Full details for a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub video: Video,
    pub author: User,
    #[serde(default)]
    pub description: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub duration_secs: u32,
    #[serde(default)]
    pub audio: Option<Audio>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub stats: VideoStats,
    #[serde(default)]
    pub cover_url: Option<String>,
}

/// Details for an audio track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioInfo {
    pub audio: Audio,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub original: bool,
    #[serde(default)]
    pub video_count: u64,
    #[serde(default)]
    pub play_url: Option<String>,
}

/// Details for a hashtag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagInfo {
    pub tag: Tag,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video_count: u64,
    #[serde(default)]
    pub view_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_handle_skips_missing_username() {
        let value = serde_json::to_value(User::from_id("6745191554350760966")).unwrap();
        assert_eq!(value, json!({ "id": "6745191554350760966" }));
    }

    #[test]
    fn test_video_summary_reads_epoch_seconds() {
        let summary: VideoSummary = serde_json::from_value(json!({
            "video": { "id": "7001" },
            "author": { "id": "42", "username": "someuser" },
            "createdAt": 1_600_000_000,
            "stats": { "playCount": 10 }
        }))
        .unwrap();

        assert_eq!(summary.created_at.timestamp(), 1_600_000_000);
        assert_eq!(summary.stats.play_count, 10);
        assert_eq!(summary.stats.like_count, 0);
        assert!(summary.description.is_empty());
    }
}
