//! The three report views. Each instantiates the same pipeline with its
//! own grouping chain, bucket set and record shape.

pub mod r401_logistics_summary;
pub mod r402_pending_deliveries;
pub mod r403_dispatch_summary;
pub mod table_view;

use contracts::shared::query::{FilterCriteria, ListRequest};

use crate::error::ReportError;
use crate::store::{fetch_all, CancelFlag, RecordStore};

/// Fetch the complete matching dataset for the given criteria. Search and
/// date narrow server-side; the full filter pipeline still runs locally
/// over whatever comes back.
pub(crate) async fn fetch_records<T, S>(
    store: &S,
    batch_size: u32,
    criteria: &FilterCriteria,
    cancel: &CancelFlag,
) -> Result<Vec<T>, ReportError>
where
    T: Send,
    S: RecordStore<T> + ?Sized,
{
    let req = ListRequest::new(batch_size)
        .with_search(Some(criteria.search.clone()))
        .with_date(criteria.date.as_ref());
    Ok(fetch_all(store, req, cancel).await?)
}
