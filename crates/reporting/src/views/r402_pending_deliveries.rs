//! Pending deliveries: a flat matrix grouped cluster → customer → salesman
//! with one amount column per delivery status bucket.

use std::path::{Path, PathBuf};

use contracts::reports::r402_pending_deliveries::PendingDeliveryDto;
use contracts::shared::status::StatusCategory;

use crate::engine::{BucketDescriptor, FlatRow, ViewConfig};
use crate::error::ReportError;
use crate::export::{build_document, write_document, DocumentRenderer, ExportScope};
use crate::store::{CancelFlag, HttpRecordStore, RecordStore};

use super::table_view::{build_table_view, TableQuery, TableView};

pub const CONFIG: ViewConfig = ViewConfig {
    slug: "pending-deliveries",
    title: "Pending Deliveries",
    levels: &["Cluster", "Customer", "Salesman"],
    buckets: &[
        BucketDescriptor {
            key: "for_dispatch",
            label: "For Dispatch",
            category: Some(StatusCategory::ForDispatch),
        },
        BucketDescriptor {
            key: "loading",
            label: "Loading",
            category: Some(StatusCategory::Loading),
        },
        BucketDescriptor {
            key: "in_transit",
            label: "In Transit",
            category: Some(StatusCategory::InTransit),
        },
        BucketDescriptor {
            key: "delivered",
            label: "Delivered",
            category: Some(StatusCategory::Delivered),
        },
    ],
};

/// The endpoint already delivers one row per record; only the key chain
/// and the bucket vector need assembling. Matrix rows carry no raw status,
/// their category lives in the buckets.
pub fn flat_rows(records: &[PendingDeliveryDto]) -> Vec<FlatRow> {
    records
        .iter()
        .map(|dto| {
            FlatRow::new(
                dto.id.clone(),
                vec![
                    dto.cluster.clone(),
                    dto.customer.clone(),
                    dto.salesman.clone(),
                ],
                vec![dto.for_dispatch, dto.loading, dto.in_transit, dto.delivered],
                dto.order_date,
                "",
                &[
                    dto.cluster.as_str(),
                    dto.customer.as_str(),
                    dto.salesman.as_str(),
                    dto.id.as_str(),
                ],
            )
        })
        .collect()
}

pub struct PendingDeliveriesView<S> {
    store: S,
    batch_size: u32,
}

impl PendingDeliveriesView<HttpRecordStore<PendingDeliveryDto>> {
    pub fn over_http(base_url: impl Into<String>, batch_size: u32) -> Self {
        Self::new(
            HttpRecordStore::new(base_url, "/api/reports/pending-deliveries"),
            batch_size,
        )
    }
}

impl<S: RecordStore<PendingDeliveryDto>> PendingDeliveriesView<S> {
    pub fn new(store: S, batch_size: u32) -> Self {
        Self { store, batch_size }
    }

    pub async fn table(
        &self,
        query: &TableQuery,
        cancel: &CancelFlag,
    ) -> Result<TableView, ReportError> {
        let records =
            super::fetch_records(&self.store, self.batch_size, &query.criteria, cancel).await?;
        Ok(build_table_view(flat_rows(&records), &CONFIG, query))
    }

    pub async fn export(
        &self,
        scope: &ExportScope,
        renderer: &dyn DocumentRenderer,
        out_dir: &Path,
        cancel: &CancelFlag,
    ) -> Result<PathBuf, ReportError> {
        let records =
            super::fetch_records(&self.store, self.batch_size, &scope.criteria, cancel).await?;
        if cancel.is_cancelled() {
            return Err(ReportError::Cancelled);
        }
        let doc = build_document(
            &CONFIG,
            flat_rows(&records),
            scope,
            chrono::Utc::now().naive_utc(),
        );
        write_document(&doc, renderer, out_dir).await
    }
}
