use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::{AudioInfo, VideoSummary};
use crate::pagination::drain_all;
use crate::state::AppState;

/// GET /api/audio/{id}
#[tracing::instrument(skip(state))]
pub async fn get_audio_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AudioInfo>> {
    let client = state.client();
    let audio = client.audio(&id)?;
    let info = client.audio_info(&audio).await?;
    Ok(Json(info))
}

/// GET /api/audio/{id}/videos
#[tracing::instrument(skip(state))]
pub async fn get_audio_top_videos(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<VideoSummary>>> {
    let client = state.client();
    let audio = client.audio(&id)?;
    let videos = drain_all(client.audio_top_videos(&audio)).await?;
    Ok(Json(videos))
}
