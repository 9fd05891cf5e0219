use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::VideoSummary;
use crate::pagination::drain_all;
use crate::state::AppState;

/// GET /api/trending, draining every trending page
#[tracing::instrument(skip_all)]
pub async fn get_trending_paged(State(state): State<AppState>) -> Result<Json<Vec<VideoSummary>>> {
    let videos = drain_all(state.client().trending_pages()).await?;
    Ok(Json(videos))
}

/// GET /api/trending, returning the client's complete list as is
#[tracing::instrument(skip_all)]
pub async fn get_trending_single_shot(
    State(state): State<AppState>,
) -> Result<Json<Vec<VideoSummary>>> {
    let videos = state.client().trending_videos().await?;
    Ok(Json(videos))
}
