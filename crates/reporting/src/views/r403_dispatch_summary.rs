//! Dispatch summary: plan lines grouped vehicle → driver → cluster with a
//! single amount column and a raw dispatch status per line.

use std::path::{Path, PathBuf};

use contracts::reports::r403_dispatch_summary::DispatchLineDto;

use crate::engine::{BucketDescriptor, FlatRow, ViewConfig};
use crate::error::ReportError;
use crate::export::{build_document, write_document, DocumentRenderer, ExportScope};
use crate::store::{CancelFlag, HttpRecordStore, RecordStore};

use super::table_view::{build_table_view, TableQuery, TableView};

pub const CONFIG: ViewConfig = ViewConfig {
    slug: "dispatch-summary",
    title: "Dispatch Summary",
    levels: &["Vehicle", "Driver", "Cluster"],
    buckets: &[BucketDescriptor {
        key: "amount",
        label: "Amount",
        category: None,
    }],
};

pub fn flat_rows(lines: &[DispatchLineDto]) -> Vec<FlatRow> {
    lines
        .iter()
        .map(|dto| {
            FlatRow::new(
                dto.delivery_no.clone(),
                vec![
                    dto.vehicle_plate.clone(),
                    dto.driver.clone(),
                    dto.cluster.clone(),
                ],
                vec![dto.amount],
                dto.dispatch_date,
                dto.status.clone(),
                &[
                    dto.vehicle_plate.as_str(),
                    dto.driver.as_str(),
                    dto.cluster.as_str(),
                    dto.delivery_no.as_str(),
                    dto.status.as_str(),
                ],
            )
        })
        .collect()
}

pub struct DispatchSummaryView<S> {
    store: S,
    batch_size: u32,
}

impl DispatchSummaryView<HttpRecordStore<DispatchLineDto>> {
    pub fn over_http(base_url: impl Into<String>, batch_size: u32) -> Self {
        Self::new(
            HttpRecordStore::new(base_url, "/api/reports/dispatch-summary"),
            batch_size,
        )
    }
}

impl<S: RecordStore<DispatchLineDto>> DispatchSummaryView<S> {
    pub fn new(store: S, batch_size: u32) -> Self {
        Self { store, batch_size }
    }

    pub async fn table(
        &self,
        query: &TableQuery,
        cancel: &CancelFlag,
    ) -> Result<TableView, ReportError> {
        let lines =
            super::fetch_records(&self.store, self.batch_size, &query.criteria, cancel).await?;
        Ok(build_table_view(flat_rows(&lines), &CONFIG, query))
    }

    pub async fn export(
        &self,
        scope: &ExportScope,
        renderer: &dyn DocumentRenderer,
        out_dir: &Path,
        cancel: &CancelFlag,
    ) -> Result<PathBuf, ReportError> {
        let lines =
            super::fetch_records(&self.store, self.batch_size, &scope.criteria, cancel).await?;
        if cancel.is_cancelled() {
            return Err(ReportError::Cancelled);
        }
        let doc = build_document(
            &CONFIG,
            flat_rows(&lines),
            scope,
            chrono::Utc::now().naive_utc(),
        );
        write_document(&doc, renderer, out_dir).await
    }
}
