//! Column descriptors as a pure function of the status scope.
//!
//! One descriptor list drives the on-screen table and the exported
//! document; the conditional bucket logic is not duplicated per renderer.

use contracts::shared::status::StatusScope;

use crate::engine::ViewConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Grouping dimension at the given level index.
    Group(usize),
    /// Status-bucket amount at the given bucket index.
    Bucket(usize),
    /// Row total across all buckets.
    RowTotal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub kind: ColumnKind,
    pub label: String,
}

/// Base grouping columns are always present. Scope `All` adds every bucket
/// column plus a row-total column (the row total is omitted for
/// single-bucket views, whose one amount column already is the total); a
/// specific status adds only that bucket's column, with no row total.
pub fn columns(cfg: &ViewConfig, scope: &StatusScope) -> Vec<ColumnDescriptor> {
    let mut cols: Vec<ColumnDescriptor> = cfg
        .levels
        .iter()
        .enumerate()
        .map(|(i, label)| ColumnDescriptor {
            kind: ColumnKind::Group(i),
            label: (*label).to_string(),
        })
        .collect();

    for index in cfg.active_buckets(scope) {
        cols.push(ColumnDescriptor {
            kind: ColumnKind::Bucket(index),
            label: cfg.buckets[index].label.to_string(),
        });
    }

    if scope.is_all() && cfg.buckets.len() > 1 {
        cols.push(ColumnDescriptor {
            kind: ColumnKind::RowTotal,
            label: "Total".to_string(),
        });
    }

    cols
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BucketDescriptor;
    use contracts::shared::status::StatusCategory;

    const MATRIX: ViewConfig = ViewConfig {
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

    const SINGLE: ViewConfig = ViewConfig {
        slug: "dispatch-summary",
        title: "Dispatch Summary",
        levels: &["Vehicle", "Driver", "Cluster"],
        buckets: &[BucketDescriptor {
            key: "amount",
            label: "Amount",
            category: None,
        }],
    };

    fn labels(cols: &[ColumnDescriptor]) -> Vec<&str> {
        cols.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_all_scope_adds_every_bucket_plus_row_total() {
        let cols = columns(&MATRIX, &StatusScope::All);
        assert_eq!(
            labels(&cols),
            vec![
                "Cluster",
                "Customer",
                "Salesman",
                "For Dispatch",
                "Loading",
                "In Transit",
                "Delivered",
                "Total"
            ]
        );
    }

    #[test]
    fn test_specific_status_adds_only_its_bucket() {
        let scope = StatusScope::Category {
            category: StatusCategory::Loading,
        };
        let cols = columns(&MATRIX, &scope);
        assert_eq!(
            labels(&cols),
            vec!["Cluster", "Customer", "Salesman", "Loading"]
        );
        assert!(!cols.iter().any(|c| c.kind == ColumnKind::RowTotal));
    }

    #[test]
    fn test_single_bucket_view_has_no_duplicate_total() {
        let cols = columns(&SINGLE, &StatusScope::All);
        assert_eq!(labels(&cols), vec!["Vehicle", "Driver", "Cluster", "Amount"]);
    }
}
