//! Logistics summary: trips grouped vehicle → driver → cluster → customer
//! with a single amount column.

use std::path::{Path, PathBuf};

use contracts::reports::r401_logistics_summary::{TripLeaf, TripNode};

use crate::engine::flatten::{self, Nested};
use crate::engine::{BucketDescriptor, FlatRow, ViewConfig};
use crate::error::ReportError;
use crate::export::{build_document, write_document, DocumentRenderer, ExportScope};
use crate::store::{CancelFlag, HttpRecordStore, RecordStore};

use super::table_view::{build_table_view, TableQuery, TableView};

pub const CONFIG: ViewConfig = ViewConfig {
    slug: "logistics-summary",
    title: "Logistics Summary",
    levels: &["Vehicle", "Driver", "Cluster", "Customer"],
    buckets: &[BucketDescriptor {
        key: "amount",
        label: "Amount",
        category: None,
    }],
};

impl Nested for TripNode {
    type Leaf = TripLeaf;

    fn group(&self) -> Option<(&str, &[Self])> {
        match self {
            TripNode::Group { key, children } => Some((key, children)),
            TripNode::Leaf(_) => None,
        }
    }

    fn leaf(&self) -> Option<&<TripNode as Nested>::Leaf> {
        match self {
            TripNode::Leaf(leaf) => Some(leaf),
            TripNode::Group { .. } => None,
        }
    }
}

/// Flatten the nested endpoint shape into engine rows. The customer name
/// becomes the innermost key; short chains are padded with empty keys so
/// every row spans all four levels.
pub fn flat_rows(nodes: &[TripNode]) -> Vec<FlatRow> {
    let mut rows = Vec::new();
    flatten::flatten(nodes, |path, leaf: &TripLeaf| {
        let mut keys: Vec<String> = path.to_vec();
        keys.push(leaf.customer.clone());
        keys.resize(CONFIG.levels.len(), String::new());

        let search: Vec<&str> = keys
            .iter()
            .map(String::as_str)
            .chain([leaf.trip_id.as_str(), leaf.status.as_str()])
            .collect();
        rows.push(FlatRow::new(
            leaf.trip_id.clone(),
            keys.clone(),
            vec![leaf.amount],
            leaf.trip_date,
            leaf.status.clone(),
            &search,
        ));
    });
    rows
}

pub struct LogisticsSummaryView<S> {
    store: S,
    batch_size: u32,
}

impl LogisticsSummaryView<HttpRecordStore<TripNode>> {
    pub fn over_http(base_url: impl Into<String>, batch_size: u32) -> Self {
        Self::new(
            HttpRecordStore::new(base_url, "/api/reports/logistics-summary"),
            batch_size,
        )
    }
}

impl<S: RecordStore<TripNode>> LogisticsSummaryView<S> {
    pub fn new(store: S, batch_size: u32) -> Self {
        Self { store, batch_size }
    }

    /// Fetch the matching dataset and build one table page. The flag lets
    /// a debounced refresh drop a superseded fetch mid-flight.
    pub async fn table(
        &self,
        query: &TableQuery,
        cancel: &CancelFlag,
    ) -> Result<TableView, ReportError> {
        let nodes =
            super::fetch_records(&self.store, self.batch_size, &query.criteria, cancel).await?;
        Ok(build_table_view(flat_rows(&nodes), &CONFIG, query))
    }

    /// Export the complete dataset under the given scope, independent of
    /// any live table state.
    pub async fn export(
        &self,
        scope: &ExportScope,
        renderer: &dyn DocumentRenderer,
        out_dir: &Path,
        cancel: &CancelFlag,
    ) -> Result<PathBuf, ReportError> {
        let nodes =
            super::fetch_records(&self.store, self.batch_size, &scope.criteria, cancel).await?;
        if cancel.is_cancelled() {
            return Err(ReportError::Cancelled);
        }
        let doc = build_document(
            &CONFIG,
            flat_rows(&nodes),
            scope,
            chrono::Utc::now().naive_utc(),
        );
        write_document(&doc, renderer, out_dir).await
    }
}
