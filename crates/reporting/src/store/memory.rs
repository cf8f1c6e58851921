use async_trait::async_trait;
use contracts::shared::query::{ListRequest, ListResponse, ResponseMeta};

use super::{RecordStore, StoreError};

/// In-memory record store used by tests and demos. Serves pages exactly the
/// way the HTTP endpoint does: page/limit slicing over the full set, with
/// `filter_count` in the meta envelope.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore<T> {
    items: Vec<T>,
}

impl<T> MemoryStore<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl<T> RecordStore<T> for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    async fn fetch_page(&self, req: &ListRequest) -> Result<ListResponse<T>, StoreError> {
        let limit = req.limit as usize;
        let start = (req.page.max(1) as usize - 1) * limit;
        let data: Vec<T> = self
            .items
            .iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();

        Ok(ListResponse {
            data,
            meta: ResponseMeta {
                filter_count: self.items.len() as u64,
            },
        })
    }
}
