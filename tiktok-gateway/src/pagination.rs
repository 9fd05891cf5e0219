//! Paged results and the drain that aggregates them
//!
//! Paged client capabilities hand back a [`PageStream`]: a lazy, pull-based
//! sequence of [`Page`]s that may suspend between pages while the client
//! performs I/O. Route handlers that answer with a complete list pass the
//! stream to [`drain_all`], which concatenates every page in arrival order
//! and returns only once the stream has ended.
//!
//! Whether an endpoint is paged or single-shot is fixed when the router is
//! built (see [`ResultShape`]); it is never inferred from the value a client
//! returns.
//!
//! ## Example
//!
//! ```rust
//! use futures::stream;
//! use tiktok_gateway::pagination::{drain_all, Page, PageStream};
//!
//! # tokio_test_block(async {
//! let pages: PageStream<'static, u32> = Box::pin(stream::iter(vec![
//!     Ok(Page::new(vec![1, 2], true)),
//!     Ok(Page::new(vec![], true)),
//!     Ok(Page::new(vec![3], false)),
//! ]));
//!
//! assert_eq!(drain_all(pages).await.unwrap(), vec![1, 2, 3]);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use futures::stream::BoxStream;
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::client::ClientError;

/// One batch of records plus its continuation marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records in source order
    pub items: Vec<T>,

    /// Whether the producer has more pages after this one
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, has_more: bool) -> Self {
        Self { items, has_more }
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no records
    ///
    /// An empty page says nothing about completion; only the end of the
    /// stream does.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Lazy sequence of pages produced by a paged client capability
pub type PageStream<'a, T> = BoxStream<'a, Result<Page<T>, ClientError>>;

/// How an endpoint obtains its list result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultShape {
    /// The client returns the complete list in one call
    SingleShot,

    /// The client returns a page stream that the handler drains
    #[default]
    Paged,
}

impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleShot => write!(f, "single_shot"),
            Self::Paged => write!(f, "paged"),
        }
    }
}

/// Consume every page of `source` into one ordered collection
///
/// Items are appended page by page in the order the stream yields them.
/// Empty pages are skipped over; the drain finishes only when the stream
/// itself ends. The first failed page aborts the drain and its error is
/// returned; items gathered before it are dropped.
pub async fn drain_all<T>(mut source: PageStream<'_, T>) -> Result<Vec<T>, ClientError> {
    let mut items = Vec::new();
    let mut pages = 0usize;

    while let Some(page) = source.try_next().await? {
        pages += 1;
        items.extend(page.items);
    }

    tracing::debug!(pages, items = items.len(), "Drained paged result");

    Ok(items)
}
