//! Multi-predicate filter pipeline.
//!
//! A row passes only if every active predicate accepts it (AND semantics);
//! inactive predicates — empty search, `None` date, `All` scopes — are
//! skipped entirely.

use contracts::shared::query::FilterCriteria;
use contracts::shared::status::{StatusCategory, StatusScope};
use rust_decimal::Decimal;

use super::{FlatRow, ViewConfig};

/// Apply the criteria to a flat row list, keeping source order.
pub fn apply(rows: Vec<FlatRow>, criteria: &FilterCriteria, cfg: &ViewConfig) -> Vec<FlatRow> {
    let needle = criteria.search.trim().to_lowercase();
    rows.into_iter()
        .filter(|row| matches(row, criteria, &needle, cfg))
        .collect()
}

fn matches(row: &FlatRow, criteria: &FilterCriteria, needle: &str, cfg: &ViewConfig) -> bool {
    if !needle.is_empty() && !row.search_text.contains(needle) {
        return false;
    }

    if let Some(range) = &criteria.date {
        if !range.contains(row.timestamp) {
            return false;
        }
    }

    for dim in &criteria.dimensions {
        if row.keys.get(dim.level) != Some(&dim.value) {
            return false;
        }
    }

    status_matches(row, &criteria.status, cfg)
}

fn status_matches(row: &FlatRow, scope: &StatusScope, cfg: &ViewConfig) -> bool {
    match scope {
        StatusScope::All => true,
        StatusScope::Raw { status } => row.raw_status.eq_ignore_ascii_case(status),
        StatusScope::Category { category } => {
            if cfg.buckets.len() > 1 {
                // Bucket-matrix rows carry no single status; the row belongs
                // to a category when that category's bucket holds an amount.
                cfg.buckets_of(*category)
                    .iter()
                    .any(|&i| row.buckets.get(i).copied().unwrap_or(Decimal::ZERO) != Decimal::ZERO)
            } else {
                StatusCategory::of_raw(&row.raw_status) == *category
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BucketDescriptor;
    use chrono::NaiveDate;
    use contracts::shared::period::DateRange;
    use contracts::shared::query::FilterCriteria;

    const SINGLE: ViewConfig = ViewConfig {
        slug: "test",
        title: "Test",
        levels: &["Cluster", "Customer"],
        buckets: &[BucketDescriptor {
            key: "amount",
            label: "Amount",
            category: None,
        }],
    };

    const MATRIX: ViewConfig = ViewConfig {
        slug: "test-matrix",
        title: "Test Matrix",
        levels: &["Cluster"],
        buckets: &[
            BucketDescriptor {
                key: "for_dispatch",
                label: "For Dispatch",
                category: Some(StatusCategory::ForDispatch),
            },
            BucketDescriptor {
                key: "delivered",
                label: "Delivered",
                category: Some(StatusCategory::Delivered),
            },
        ],
    };

    fn ts(day: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn row(cluster: &str, customer: &str, status: &str, day: u32) -> FlatRow {
        FlatRow::new(
            format!("{cluster}-{customer}-{day}"),
            vec![cluster.to_string(), customer.to_string()],
            vec![Decimal::from(100)],
            ts(day),
            status,
            &[cluster, customer, status],
        )
    }

    #[test]
    fn test_inactive_criteria_pass_everything() {
        let rows = vec![row("North", "Acme", "open", 5), row("South", "Bay", "loaded", 6)];
        let out = apply(rows, &FilterCriteria::new(), &SINGLE);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_predicates_are_anded() {
        let rows = vec![
            row("North", "Acme", "open", 5),
            row("North", "Bay", "open", 5),
            row("North", "Acme", "open", 20),
        ];
        let criteria = FilterCriteria::new()
            .with_dimension(0, "North")
            .with_search("acme")
            .with_date(Some(DateRange::new(
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            )));
        let out = apply(rows, &criteria, &SINGLE);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].keys[1], "Acme");
    }

    #[test]
    fn test_date_bounds_inclusive() {
        let rows = vec![row("North", "Acme", "open", 1), row("North", "Acme", "open", 10)];
        let criteria = FilterCriteria::new().with_date(Some(DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        )));
        assert_eq!(apply(rows, &criteria, &SINGLE).len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let rows = vec![row("North", "Acme Mart", "open", 5)];
        let criteria = FilterCriteria::new().with_search("ACME");
        assert_eq!(apply(rows.clone(), &criteria, &SINGLE).len(), 1);
        let criteria = FilterCriteria::new().with_search("acme hardware");
        assert_eq!(apply(rows, &criteria, &SINGLE).len(), 0);
    }

    #[test]
    fn test_category_scope_via_raw_status() {
        let rows = vec![
            row("North", "Acme", "allocated", 5),
            row("North", "Bay", "delivered", 5),
        ];
        let criteria = FilterCriteria::new().with_status(StatusScope::Category {
            category: StatusCategory::ForDispatch,
        });
        let out = apply(rows, &criteria, &SINGLE);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].raw_status, "allocated");
    }

    #[test]
    fn test_category_scope_on_bucket_matrix() {
        let mut a = FlatRow::new(
            "a",
            vec!["North".to_string()],
            vec![Decimal::from(500), Decimal::ZERO],
            ts(5),
            "",
            &["north"],
        );
        a.spans = vec![0];
        let b = FlatRow::new(
            "b",
            vec!["South".to_string()],
            vec![Decimal::ZERO, Decimal::from(250)],
            ts(5),
            "",
            &["south"],
        );

        let criteria = FilterCriteria::new().with_status(StatusScope::Category {
            category: StatusCategory::Delivered,
        });
        let out = apply(vec![a, b], &criteria, &MATRIX);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "b");
    }

    #[test]
    fn test_raw_scope_exact_match() {
        let rows = vec![
            row("North", "Acme", "allocated", 5),
            row("North", "Bay", "confirmed", 5),
        ];
        let criteria = FilterCriteria::new().with_status(StatusScope::Raw {
            status: "Allocated".to_string(),
        });
        let out = apply(rows, &criteria, &SINGLE);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].raw_status, "allocated");
    }
}
