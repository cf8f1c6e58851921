//! Access to the external record store.
//!
//! The store is an opaque collaborator reached over HTTP; everything here
//! speaks the `{ data, meta: { filter_count } }` envelope with page/limit
//! parameters. `fetch_all` pages through until a fetched page is empty or
//! shorter than the requested size, which guarantees termination, and
//! checks a cancellation flag between pages.

pub mod http;
pub mod memory;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use contracts::shared::query::{ListRequest, ListResponse};

pub use http::HttpRecordStore;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store returned HTTP {code}")]
    Status { code: u16 },

    #[error("fetch cancelled")]
    Cancelled,
}

/// Cooperative cancellation for multi-page fetches. Cloning shares the
/// flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// One queryable record endpoint.
#[async_trait]
pub trait RecordStore<T>: Send + Sync {
    async fn fetch_page(&self, req: &ListRequest) -> Result<ListResponse<T>, StoreError>;
}

/// Accumulate the complete matching dataset by advancing the page cursor
/// until a fetched page is empty or shorter than the requested size.
pub async fn fetch_all<T, S>(
    store: &S,
    mut req: ListRequest,
    cancel: &CancelFlag,
) -> Result<Vec<T>, StoreError>
where
    T: Send,
    S: RecordStore<T> + ?Sized,
{
    let mut out = Vec::new();
    req.page = 1;

    loop {
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }

        let page = store.fetch_page(&req).await?;
        let fetched = page.data.len();
        out.extend(page.data);

        tracing::debug!(
            page = req.page,
            fetched,
            total = out.len(),
            "fetched store page"
        );

        if fetched == 0 || fetched < req.limit as usize {
            break;
        }
        req.page += 1;
    }

    Ok(out)
}
