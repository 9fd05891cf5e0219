//! # tiktok-gateway
//!
//! REST gateway that exposes a social-media scraping client as read-only JSON
//! endpoints: trending videos, user profiles, user videos and likes, videos,
//! audio tracks and hashtags.
//!
//! ## Features
//!
//! - **Uniform errors**: every failure renders as `{"error": "..."}` with 400, 404 or 500
//! - **Paged upstream**: listing endpoints drain the upstream cursor and return one array
//! - **Identifier resolution**: users are looked up by numeric ID or by username
//! - **Middleware stack**: request IDs, CORS, compression, timeouts, panic recovery
//! - **Health checks**: liveness and upstream-aware readiness probes
//! - **Graceful shutdown**: proper signal handling (SIGTERM, SIGINT)
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tiktok_gateway::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config);
//!
//!     let client = HttpScraperClient::connect(&config.upstream).await?;
//!     let state = AppState::new(config.clone(), Arc::new(client));
//!
//!     Server::new(config).serve(build_router(state)).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod pagination;
pub mod resolver;
pub mod routes;
pub mod server;
pub mod state;

#[cfg(test)]
mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{ClientError, FailureKind, HttpScraperClient, ScraperClient};
    pub use crate::config::Config;
    pub use crate::error::{classify, Error, ErrorBody, Result};
    pub use crate::health::{health, readiness};
    pub use crate::ids::{Identifier, MakeTypedRequestId, RequestId, RequestIdError};
    pub use crate::middleware::{
        request_id_layer, request_id_propagation_layer, sensitive_headers_layer,
        SENSITIVE_HEADERS,
    };
    pub use crate::models::*;
    pub use crate::observability::init_tracing;
    pub use crate::pagination::{drain_all, Page, PageStream, ResultShape};
    pub use crate::resolver::resolve_user;
    pub use crate::routes::build_router;
    pub use crate::server::Server;
    pub use crate::state::AppState;
}
