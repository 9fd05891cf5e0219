use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::VideoInfo;
use crate::state::AppState;

/// GET /api/video/{id}
#[tracing::instrument(skip(state))]
pub async fn get_video_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VideoInfo>> {
    let client = state.client();
    let video = client.video(&id)?;
    let info = client.video_info(&video).await?;
    Ok(Json(info))
}
