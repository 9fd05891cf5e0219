//! User profile and user video routes
//!
//! `{identifier}` is either a numeric user ID or a username; see
//! [`resolve_user`].

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::{UserInfo, VideoSummary};
use crate::pagination::drain_all;
use crate::resolver::resolve_user;
use crate::state::AppState;

/// GET /api/user/{identifier}
#[tracing::instrument(skip(state))]
pub async fn get_user_info(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<UserInfo>> {
    let client = state.client();
    let user = resolve_user(client, &identifier).await?;
    let info = client.user_info(&user).await?;
    Ok(Json(info))
}

/// GET /api/user/{identifier}/videos
#[tracing::instrument(skip(state))]
pub async fn get_recent_videos(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<Vec<VideoSummary>>> {
    let client = state.client();
    let user = resolve_user(client, &identifier).await?;
    let videos = drain_all(client.recent_videos(&user)).await?;
    Ok(Json(videos))
}

/// GET /api/user/{identifier}/liked
#[tracing::instrument(skip(state))]
pub async fn get_liked_videos(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<Vec<VideoSummary>>> {
    let client = state.client();
    let user = resolve_user(client, &identifier).await?;
    let videos = drain_all(client.liked_videos(&user)).await?;
    Ok(Json(videos))
}
