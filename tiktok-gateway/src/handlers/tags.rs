use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::{TagInfo, VideoSummary};
use crate::pagination::drain_all;
use crate::state::AppState;

/// GET /api/tag/{id}
#[tracing::instrument(skip(state))]
pub async fn get_tag_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TagInfo>> {
    let client = state.client();
    let tag = client.tag(&id).await?;
    let info = client.tag_info(&tag).await?;
    Ok(Json(info))
}

/// GET /api/tag/{id}/videos
///
/// A tag that cannot be resolved ends the request before any video page is
/// requested.
#[tracing::instrument(skip(state))]
pub async fn get_tag_top_videos(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<VideoSummary>>> {
    let client = state.client();
    let tag = client.tag(&id).await?;
    let videos = drain_all(client.tag_top_videos(&tag)).await?;
    Ok(Json(videos))
}
