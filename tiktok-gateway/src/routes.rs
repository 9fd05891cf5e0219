//! Router construction
//!
//! The router takes everything it needs through [`AppState`]; there is no
//! process-wide client.

use axum::{routing::get, Router};

use crate::handlers;
use crate::health::{health, readiness};
use crate::pagination::ResultShape;
use crate::state::AppState;

/// Build the gateway router with all routes and the given state
pub fn build_router(state: AppState) -> Router {
    let trending = match state.config().routes.trending_shape {
        ResultShape::Paged => get(handlers::get_trending_paged),
        ResultShape::SingleShot => get(handlers::get_trending_single_shot),
    };

    let api = Router::new()
        .route("/trending", trending)
        .route("/user/{identifier}", get(handlers::get_user_info))
        .route("/user/{identifier}/videos", get(handlers::get_recent_videos))
        .route("/user/{identifier}/liked", get(handlers::get_liked_videos))
        .route("/video/{id}", get(handlers::get_video_info))
        .route("/audio/{id}", get(handlers::get_audio_info))
        .route("/audio/{id}/videos", get(handlers::get_audio_top_videos))
        .route("/tag/{id}", get(handlers::get_tag_info))
        .route("/tag/{id}/videos", get(handlers::get_tag_top_videos));

    Router::new()
        .route("/health", get(health))
        .route("/ready", get(readiness))
        .nest("/api", api)
        .with_state(state)
}
