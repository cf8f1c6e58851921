//! Shared live-table assembly.
//!
//! Every view runs the same fixed pipeline over its flattened rows:
//! filter, then sort, then span computation over the whole list, then the
//! page slice. The summary is built from the full filtered set before
//! slicing, so it reconciles with an export under the same scope.

use contracts::shared::query::{FilterCriteria, SortKey, SortSpec};

use crate::engine::summary::{self, SummaryTable};
use crate::engine::{filter, paginate, sort, span, FlatRow, ViewConfig};
use crate::export::{columns, ColumnDescriptor};

/// Everything the live table depends on. Pagination state is part of the
/// query, not of the pipeline.
#[derive(Debug, Clone)]
pub struct TableQuery {
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl TableQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::new(),
            sort: SortSpec::default(),
            page: 1,
            page_size,
        }
    }
}

/// One rendered page plus the whole-dataset figures that accompany it.
#[derive(Debug, Clone)]
pub struct TableView {
    pub columns: Vec<ColumnDescriptor>,
    /// Rows of the requested page, spans already computed globally.
    pub rows: Vec<FlatRow>,
    /// Summary over the full filtered set, not the page.
    pub summary: SummaryTable,
    pub filtered_count: usize,
    pub page: usize,
    pub page_count: usize,
    /// Whether group cells should render merged. False when the primary
    /// sort key is not a grouping level and runs are not contiguous.
    pub merged_cells: bool,
}

/// Run the full pipeline over the flattened dataset and cut one page.
pub fn build_table_view(rows: Vec<FlatRow>, cfg: &ViewConfig, query: &TableQuery) -> TableView {
    let mut rows = filter::apply(rows, &query.criteria, cfg);
    sort::sort(&mut rows, &query.sort);

    let merged_cells = matches!(query.sort.key, SortKey::Level { .. });
    if merged_cells {
        span::compute_spans(&mut rows, cfg.level_count());
    } else {
        span::flat_spans(&mut rows, cfg.level_count());
    }

    let summary = summary::build(&rows, &query.criteria.status, cfg);
    let filtered_count = rows.len();
    let page_rows = paginate::page_slice(&rows, query.page, query.page_size).to_vec();

    tracing::debug!(
        report = cfg.slug,
        filtered = filtered_count,
        page = query.page,
        page_rows = page_rows.len(),
        "built table view"
    );

    TableView {
        columns: columns(cfg, &query.criteria.status),
        rows: page_rows,
        summary,
        filtered_count,
        page: query.page,
        page_count: paginate::page_count(filtered_count, query.page_size),
        merged_cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BucketDescriptor;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    const CFG: ViewConfig = ViewConfig {
        slug: "test",
        title: "Test",
        levels: &["Vehicle", "Driver"],
        buckets: &[BucketDescriptor {
            key: "amount",
            label: "Amount",
            category: None,
        }],
    };

    fn row(vehicle: &str, driver: &str, amount: i64) -> FlatRow {
        FlatRow::new(
            format!("{vehicle}/{driver}/{amount}"),
            vec![vehicle.to_string(), driver.to_string()],
            vec![Decimal::from(amount)],
            NaiveDate::from_ymd_opt(2025, 3, 10)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            "open",
            &[vehicle, driver],
        )
    }

    #[test]
    fn test_spans_computed_before_pagination() {
        // Four rows of one vehicle, page size two: the second page must not
        // restart the vehicle group.
        let rows = vec![
            row("V1", "D1", 1),
            row("V1", "D2", 2),
            row("V1", "D3", 3),
            row("V1", "D4", 4),
        ];
        let mut query = TableQuery::new(2);
        query.page = 2;

        let view = build_table_view(rows, &CFG, &query);
        assert!(view.merged_cells);
        assert_eq!(view.rows.len(), 2);
        // Continuation rows of the global run carry span 0.
        assert_eq!(view.rows[0].spans[0], 0);
        assert_eq!(view.rows[1].spans[0], 0);
        assert_eq!(view.filtered_count, 4);
        assert_eq!(view.page_count, 2);
    }

    #[test]
    fn test_value_sort_disables_merged_cells() {
        let rows = vec![row("V1", "D1", 5), row("V2", "D2", 1), row("V1", "D3", 3)];
        let mut query = TableQuery::new(10);
        query.sort = SortSpec {
            key: SortKey::Total,
            ascending: true,
        };

        let view = build_table_view(rows, &CFG, &query);
        assert!(!view.merged_cells);
        assert!(view.rows.iter().all(|r| r.spans.iter().all(|&s| s == 1)));
        let totals: Vec<Decimal> = view.rows.iter().map(|r| r.total).collect();
        assert_eq!(
            totals,
            vec![Decimal::from(1), Decimal::from(3), Decimal::from(5)]
        );
    }

    #[test]
    fn test_summary_covers_full_set_not_page() {
        let rows = vec![
            row("V1", "D1", 10),
            row("V1", "D2", 20),
            row("V2", "D1", 30),
        ];
        let query = TableQuery::new(1);

        let view = build_table_view(rows, &CFG, &query);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.summary.grand.total, Decimal::from(60));
        assert_eq!(view.filtered_count, 3);
        assert_eq!(view.page_count, 3);
    }

    #[test]
    fn test_empty_dataset_yields_empty_view() {
        let view = build_table_view(vec![], &CFG, &TableQuery::new(50));
        assert!(view.rows.is_empty());
        assert_eq!(view.filtered_count, 0);
        assert_eq!(view.page_count, 0);
        assert!(view.summary.groups.is_empty());
    }
}
