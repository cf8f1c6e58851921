use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use contracts::shared::query::{ListRequest, ListResponse};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

use super::{RecordStore, StoreError};

/// Shared client; connection pooling across all stores.
static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Record store endpoint reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRecordStore<T> {
    base_url: String,
    path: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> HttpRecordStore<T> {
    pub fn new(base_url: impl Into<String>, path: &'static str) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            path,
            _marker: PhantomData,
        }
    }

    fn url_for(&self, req: &ListRequest) -> String {
        let query: Vec<String> = req
            .to_query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
            .collect();
        format!("{}{}?{}", self.base_url, self.path, query.join("&"))
    }
}

#[async_trait]
impl<T> RecordStore<T> for HttpRecordStore<T>
where
    T: DeserializeOwned + Send + Sync,
{
    async fn fetch_page(&self, req: &ListRequest) -> Result<ListResponse<T>, StoreError> {
        let url = self.url_for(req);
        tracing::debug!(%url, "fetching record page");

        let response = CLIENT.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, code = status.as_u16(), "store rejected request");
            return Err(StoreError::Status {
                code: status.as_u16(),
            });
        }

        Ok(response.json::<ListResponse<T>>().await?)
    }
}
