//! Scraping client backed by an upstream scraper's JSON API
//!
//! Every capability maps to one GET under the configured base URL:
//!
//! | Capability         | Path                          |
//! |--------------------|-------------------------------|
//! | trending           | `/trending`                   |
//! | user by name       | `/users/by-name/{username}`   |
//! | user info          | `/users/{id}`                 |
//! | recent / liked     | `/users/{id}/videos`, `/users/{id}/liked` |
//! | video info         | `/videos/{id}`                |
//! | audio info / top   | `/audio/{id}`, `/audio/{id}/videos` |
//! | tag by name        | `/tags/by-name/{name}`        |
//! | tag info / top     | `/tags/{id}`, `/tags/{id}/videos` |
//! | ping               | `/health`                     |
//!
//! Paged paths take `count` and `cursor` query parameters and answer with
//! `{"items": [...], "cursor": "...", "hasMore": true}`. The page stream
//! follows the cursor until the upstream reports `hasMore: false`.

use async_trait::async_trait;
use futures::stream;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ClientError, ScraperClient};
use crate::config::UpstreamConfig;
use crate::ids::Identifier;
use crate::models::{
    Audio, AudioInfo, Tag, TagInfo, User, UserInfo, Video, VideoInfo, VideoSummary,
};
use crate::pagination::{Page, PageStream};

/// Upstream page envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageBody<T> {
    items: Vec<T>,
    #[serde(default)]
    cursor: Option<String>,
    #[serde(default)]
    has_more: bool,
}

/// Upstream error envelope
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: String,
}

/// [`ScraperClient`] talking to an upstream scraper over HTTP
#[derive(Debug, Clone)]
pub struct HttpScraperClient {
    http: reqwest::Client,
    base_url: Url,
    page_size: u32,
}

impl HttpScraperClient {
    /// Build a client from configuration without contacting the upstream
    pub fn new(config: &UpstreamConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ClientError::Transport(format!("invalid upstream URL '{}': {}", config.base_url, e))
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            base_url,
            page_size: config.page_size,
        })
    }

    /// Build a client and check that the upstream answers
    ///
    /// An unreachable upstream is logged but not fatal; requests made while
    /// it is down fail individually.
    pub async fn connect(config: &UpstreamConfig) -> Result<Self, ClientError> {
        let client = Self::new(config)?;

        match client.ping().await {
            Ok(()) => tracing::info!(upstream = %client.base_url, "Upstream scraper reachable"),
            Err(e) => tracing::warn!(
                upstream = %client.base_url,
                "Upstream scraper not reachable at startup: {}",
                e
            ),
        }

        Ok(client)
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Transport(format!("upstream URL '{}' cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.url(segments)?;
        tracing::debug!(%url, "Upstream request");

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<UpstreamErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                if text.is_empty() {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                } else {
                    text
                }
            });

        Err(match status {
            StatusCode::BAD_REQUEST => ClientError::InvalidIdentifier(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            _ => ClientError::Upstream {
                status: status.as_u16(),
                message,
            },
        })
    }

    /// Stream the pages under `segments`, following the upstream cursor
    fn paged<T>(&self, segments: Vec<String>) -> PageStream<'_, T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        // `Some(cursor)` means another page is due; `None` ends the stream.
        let start: Option<Option<String>> = Some(None);

        Box::pin(stream::try_unfold(start, move |state| {
            let segments = segments.clone();
            async move {
                let Some(cursor) = state else {
                    return Ok::<_, ClientError>(None);
                };

                let mut query = vec![("count", self.page_size.to_string())];
                if let Some(cursor) = cursor {
                    query.push(("cursor", cursor));
                }

                let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
                let body: PageBody<T> = self.get_json(&segments, &query).await?;

                let next = match (body.has_more, body.cursor) {
                    (true, Some(cursor)) => Some(Some(cursor)),
                    (true, None) => {
                        tracing::warn!("Upstream reported more pages without a cursor");
                        None
                    }
                    (false, _) => None,
                };

                Ok::<_, ClientError>(Some((Page::new(body.items, next.is_some()), next)))
            }
        }))
    }

    fn require_numeric(kind: &str, id: &str) -> Result<(), ClientError> {
        if Identifier::parse(id).is_numeric() {
            Ok(())
        } else {
            Err(ClientError::InvalidIdentifier(format!(
                "{} ID must be numeric: {}",
                kind, id
            )))
        }
    }
}

#[async_trait]
impl ScraperClient for HttpScraperClient {
    async fn trending_videos(&self) -> Result<Vec<VideoSummary>, ClientError> {
        let query = [("count", self.page_size.to_string())];
        let body: PageBody<VideoSummary> = self.get_json(&["trending"], &query).await?;
        Ok(body.items)
    }

    fn trending_pages(&self) -> PageStream<'_, VideoSummary> {
        self.paged(vec!["trending".to_string()])
    }

    fn user_by_id(&self, id: &str) -> User {
        User::from_id(id)
    }

    async fn user_by_name(&self, username: &str) -> Result<User, ClientError> {
        self.get_json(&["users", "by-name", username], &[]).await
    }

    async fn user_info(&self, user: &User) -> Result<UserInfo, ClientError> {
        self.get_json(&["users", user.id.as_str()], &[]).await
    }

    fn recent_videos(&self, user: &User) -> PageStream<'_, VideoSummary> {
        self.paged(vec!["users".to_string(), user.id.clone(), "videos".to_string()])
    }

    fn liked_videos(&self, user: &User) -> PageStream<'_, VideoSummary> {
        self.paged(vec!["users".to_string(), user.id.clone(), "liked".to_string()])
    }

    fn video(&self, id: &str) -> Result<Video, ClientError> {
        Self::require_numeric("Video", id)?;
        Ok(Video { id: id.to_string() })
    }

    async fn video_info(&self, video: &Video) -> Result<VideoInfo, ClientError> {
        self.get_json(&["videos", video.id.as_str()], &[]).await
    }

    fn audio(&self, id: &str) -> Result<Audio, ClientError> {
        Self::require_numeric("Audio", id)?;
        Ok(Audio { id: id.to_string() })
    }

    async fn audio_info(&self, audio: &Audio) -> Result<AudioInfo, ClientError> {
        self.get_json(&["audio", audio.id.as_str()], &[]).await
    }

    fn audio_top_videos(&self, audio: &Audio) -> PageStream<'_, VideoSummary> {
        self.paged(vec!["audio".to_string(), audio.id.clone(), "videos".to_string()])
    }

    async fn tag(&self, name: &str) -> Result<Tag, ClientError> {
        self.get_json(&["tags", "by-name", name], &[]).await
    }

    async fn tag_info(&self, tag: &Tag) -> Result<TagInfo, ClientError> {
        self.get_json(&["tags", tag.id.as_str()], &[]).await
    }

    fn tag_top_videos(&self, tag: &Tag) -> PageStream<'_, VideoSummary> {
        self.paged(vec!["tags".to_string(), tag.id.clone(), "videos".to_string()])
    }

    async fn ping(&self) -> Result<(), ClientError> {
        let url = self.url(&["health"])?;
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Upstream {
                status: status.as_u16(),
                message: "health check failed".to_string(),
            })
        }
    }
}
