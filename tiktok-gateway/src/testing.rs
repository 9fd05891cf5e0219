//! In-memory scraping client for unit and router tests
//!
//! Records every capability invoked so tests can assert which lookup path a
//! request took and that nothing ran after a failure.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use futures::stream;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::client::{ClientError, ScraperClient};
use crate::ids::Identifier;
use crate::models::{
    Audio, AudioInfo, Tag, TagInfo, User, UserInfo, Video, VideoInfo, VideoStats, VideoSummary,
};
use crate::pagination::{Page, PageStream};

/// A capability invocation, with the identifier it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Trending,
    TrendingPages,
    UserById(String),
    UserByName(String),
    UserInfo(String),
    RecentVideos(String),
    LikedVideos(String),
    Video(String),
    VideoInfo(String),
    Audio(String),
    AudioInfo(String),
    AudioTopVideos(String),
    Tag(String),
    TagInfo(String),
    TagTopVideos(String),
    Ping,
}

#[derive(Debug, Clone)]
enum Step {
    Items(Vec<VideoSummary>),
    Fail,
}

/// Scripted [`ScraperClient`]
#[derive(Debug, Default)]
pub struct FakeScraperClient {
    users: HashMap<String, String>,
    tags: HashMap<String, String>,
    missing: HashSet<String>,
    trending: Vec<VideoSummary>,
    pages: HashMap<String, Vec<Step>>,
    ping_fails: bool,
    calls: Mutex<Vec<Call>>,
}

/// Minimal video record with the given ID
pub fn summary(id: &str) -> VideoSummary {
    VideoSummary {
        video: Video { id: id.to_string() },
        author: User::from_id("1"),
        description: format!("video {id}"),
        created_at: Utc.timestamp_opt(1_600_000_000, 0).single().unwrap_or_default(),
        stats: VideoStats::default(),
    }
}

impl FakeScraperClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a username and the ID it resolves to
    pub fn with_user(mut self, username: &str, id: &str) -> Self {
        self.users.insert(username.to_string(), id.to_string());
        self
    }

    /// Register a tag name and its ID
    pub fn with_tag(mut self, name: &str, id: &str) -> Self {
        self.tags.insert(name.to_string(), id.to_string());
        self
    }

    /// Make info lookups for this ID fail with NotFound
    pub fn with_missing(mut self, id: &str) -> Self {
        self.missing.insert(id.to_string());
        self
    }

    /// Single-shot trending result
    pub fn with_trending(mut self, videos: Vec<VideoSummary>) -> Self {
        self.trending = videos;
        self
    }

    /// Script the pages for a paged capability
    ///
    /// Keys are `trending`, `recent:<user id>`, `liked:<user id>`,
    /// `audio:<audio id>` and `tag:<tag id>`.
    pub fn with_pages(mut self, key: &str, pages: Vec<Vec<VideoSummary>>) -> Self {
        self.pages
            .entry(key.to_string())
            .or_default()
            .extend(pages.into_iter().map(Step::Items));
        self
    }

    /// Append a failing page to a paged capability
    pub fn with_page_error(mut self, key: &str) -> Self {
        self.pages.entry(key.to_string()).or_default().push(Step::Fail);
        self
    }

    /// Make `ping` fail
    pub fn with_failing_ping(mut self) -> Self {
        self.ping_fails = true;
        self
    }

    /// Capabilities invoked so far, in order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: Call) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn check_present(&self, kind: &str, id: &str) -> Result<(), ClientError> {
        if self.missing.contains(id) {
            Err(ClientError::NotFound(format!("{kind} with ID {id} not found")))
        } else {
            Ok(())
        }
    }

    fn numeric(kind: &str, id: &str) -> Result<(), ClientError> {
        if Identifier::parse(id).is_numeric() {
            Ok(())
        } else {
            Err(ClientError::InvalidIdentifier(format!(
                "{kind} ID must be numeric: {id}"
            )))
        }
    }

    fn stream(&self, key: String) -> PageStream<'_, VideoSummary> {
        let steps = self.pages.get(&key).cloned().unwrap_or_default();
        let last = steps.len().saturating_sub(1);
        let key_for_error = key.clone();
        Box::pin(stream::iter(steps.into_iter().enumerate().map(
            move |(index, step)| match step {
                Step::Items(items) => Ok(Page::new(items, index < last)),
                Step::Fail => Err(ClientError::Transport(format!(
                    "page fetch for {key_for_error} failed"
                ))),
            },
        )))
    }
}

#[async_trait]
impl ScraperClient for FakeScraperClient {
    async fn trending_videos(&self) -> Result<Vec<VideoSummary>, ClientError> {
        self.record(Call::Trending);
        Ok(self.trending.clone())
    }

    fn trending_pages(&self) -> PageStream<'_, VideoSummary> {
        self.record(Call::TrendingPages);
        self.stream("trending".to_string())
    }

    fn user_by_id(&self, id: &str) -> User {
        self.record(Call::UserById(id.to_string()));
        User::from_id(id)
    }

    async fn user_by_name(&self, username: &str) -> Result<User, ClientError> {
        self.record(Call::UserByName(username.to_string()));
        self.users
            .get(username)
            .map(|id| User {
                id: id.clone(),
                username: Some(username.to_string()),
            })
            .ok_or_else(|| {
                ClientError::NotFound(format!("User with username {username} not found"))
            })
    }

    async fn user_info(&self, user: &User) -> Result<UserInfo, ClientError> {
        self.record(Call::UserInfo(user.id.clone()));
        self.check_present("User", &user.id)?;
        Ok(UserInfo {
            user: user.clone(),
            nickname: format!("nick {}", user.id),
            avatar: None,
            signature: String::new(),
            verified: false,
            private: false,
            follower_count: 10,
            following_count: 2,
            like_count: 100,
            video_count: 3,
        })
    }

    fn recent_videos(&self, user: &User) -> PageStream<'_, VideoSummary> {
        self.record(Call::RecentVideos(user.id.clone()));
        self.stream(format!("recent:{}", user.id))
    }

    fn liked_videos(&self, user: &User) -> PageStream<'_, VideoSummary> {
        self.record(Call::LikedVideos(user.id.clone()));
        self.stream(format!("liked:{}", user.id))
    }

    fn video(&self, id: &str) -> Result<Video, ClientError> {
        self.record(Call::Video(id.to_string()));
        Self::numeric("Video", id)?;
        Ok(Video { id: id.to_string() })
    }

    async fn video_info(&self, video: &Video) -> Result<VideoInfo, ClientError> {
        self.record(Call::VideoInfo(video.id.clone()));
        self.check_present("Video", &video.id)?;
        let base = summary(&video.id);
        Ok(VideoInfo {
            video: base.video,
            author: base.author,
            description: base.description,
            created_at: base.created_at,
            duration_secs: 15,
            audio: None,
            tags: Vec::new(),
            stats: base.stats,
            cover_url: None,
        })
    }

    fn audio(&self, id: &str) -> Result<Audio, ClientError> {
        self.record(Call::Audio(id.to_string()));
        Self::numeric("Audio", id)?;
        Ok(Audio { id: id.to_string() })
    }

    async fn audio_info(&self, audio: &Audio) -> Result<AudioInfo, ClientError> {
        self.record(Call::AudioInfo(audio.id.clone()));
        self.check_present("Audio", &audio.id)?;
        Ok(AudioInfo {
            audio: audio.clone(),
            title: format!("track {}", audio.id),
            author_name: "artist".to_string(),
            original: true,
            video_count: 5,
            play_url: None,
        })
    }

    fn audio_top_videos(&self, audio: &Audio) -> PageStream<'_, VideoSummary> {
        self.record(Call::AudioTopVideos(audio.id.clone()));
        self.stream(format!("audio:{}", audio.id))
    }

    async fn tag(&self, name: &str) -> Result<Tag, ClientError> {
        self.record(Call::Tag(name.to_string()));
        self.tags
            .get(name)
            .map(|id| Tag {
                id: id.clone(),
                title: name.to_string(),
            })
            .ok_or_else(|| ClientError::NotFound(format!("Tag with name {name} not found")))
    }

    async fn tag_info(&self, tag: &Tag) -> Result<TagInfo, ClientError> {
        self.record(Call::TagInfo(tag.id.clone()));
        self.check_present("Tag", &tag.id)?;
        Ok(TagInfo {
            tag: tag.clone(),
            description: String::new(),
            video_count: 7,
            view_count: 700,
        })
    }

    fn tag_top_videos(&self, tag: &Tag) -> PageStream<'_, VideoSummary> {
        self.record(Call::TagTopVideos(tag.id.clone()));
        self.stream(format!("tag:{}", tag.id))
    }

    async fn ping(&self) -> Result<(), ClientError> {
        self.record(Call::Ping);
        if self.ping_fails {
            Err(ClientError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}
