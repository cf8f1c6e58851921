//! Multi-key sorting with a fixed tie-break chain.
//!
//! The primary key and direction come from the user; ties then fall through
//! the grouping levels, outermost first, each compared ascending regardless
//! of the primary direction. The underlying sort is stable, so equal rows
//! keep their source order and re-sorting by the same key is idempotent.

use std::cmp::Ordering;

use contracts::shared::query::{SortKey, SortSpec};
use rust_decimal::Decimal;

use super::FlatRow;

pub fn sort(rows: &mut [FlatRow], spec: &SortSpec) {
    rows.sort_by(|a, b| compare(a, b, spec));
}

fn compare(a: &FlatRow, b: &FlatRow, spec: &SortSpec) -> Ordering {
    let primary = primary_cmp(a, b, spec.key);
    let primary = if spec.ascending {
        primary
    } else {
        primary.reverse()
    };
    if primary != Ordering::Equal {
        return primary;
    }

    // Fixed tie-break chain: grouping levels outer→inner, always ascending.
    for level in 0..a.keys.len().min(b.keys.len()) {
        let tie = cmp_ci(&a.keys[level], &b.keys[level]);
        if tie != Ordering::Equal {
            return tie;
        }
    }
    Ordering::Equal
}

fn primary_cmp(a: &FlatRow, b: &FlatRow, key: SortKey) -> Ordering {
    match key {
        SortKey::Level { index } => cmp_ci(
            a.keys.get(index).map(String::as_str).unwrap_or(""),
            b.keys.get(index).map(String::as_str).unwrap_or(""),
        ),
        SortKey::Bucket { index } => bucket(a, index).cmp(&bucket(b, index)),
        SortKey::Total => a.total.cmp(&b.total),
        SortKey::Date => a.timestamp.cmp(&b.timestamp),
    }
}

fn bucket(row: &FlatRow, index: usize) -> Decimal {
    row.buckets.get(index).copied().unwrap_or(Decimal::ZERO)
}

/// Case-insensitive lexicographic comparison, tie-broken by the raw bytes
/// so distinct casings still order deterministically.
pub(crate) fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(day: u32, hour: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn row(id: &str, cluster: &str, customer: &str, amount: i64, day: u32) -> FlatRow {
        FlatRow::new(
            id,
            vec![cluster.to_string(), customer.to_string()],
            vec![Decimal::from(amount)],
            ts(day, 8),
            "open",
            &[cluster, customer],
        )
    }

    fn ids(rows: &[FlatRow]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_primary_direction_applied() {
        let mut rows = vec![
            row("a", "North", "Acme", 100, 5),
            row("b", "South", "Bay", 300, 5),
            row("c", "East", "Cove", 200, 5),
        ];
        sort(&mut rows, &SortSpec::new(SortKey::Total));
        assert_eq!(ids(&rows), vec!["a", "c", "b"]);

        let desc = SortSpec {
            key: SortKey::Total,
            ascending: false,
        };
        sort(&mut rows, &desc);
        assert_eq!(ids(&rows), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_string_keys_compare_case_insensitively() {
        let mut rows = vec![
            row("a", "south", "x", 1, 5),
            row("b", "NORTH", "x", 1, 5),
            row("c", "East", "x", 1, 5),
        ];
        sort(&mut rows, &SortSpec::default());
        assert_eq!(ids(&rows), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_tie_break_chain_is_ascending_regardless_of_direction() {
        // Equal totals: ties resolved by cluster then customer, ascending,
        // even though the primary direction is descending.
        let mut rows = vec![
            row("a", "South", "Bay", 100, 5),
            row("b", "North", "Acme", 100, 5),
            row("c", "North", "Zest", 100, 5),
        ];
        let desc = SortSpec {
            key: SortKey::Total,
            ascending: false,
        };
        sort(&mut rows, &desc);
        assert_eq!(ids(&rows), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut rows = vec![
            row("a", "North", "Acme", 100, 5),
            row("b", "North", "Acme", 100, 5),
            row("c", "East", "Cove", 50, 4),
        ];
        let spec = SortSpec::new(SortKey::Date);
        sort(&mut rows, &spec);
        let once = ids(&rows).iter().map(|s| s.to_string()).collect::<Vec<_>>();
        sort(&mut rows, &spec);
        assert_eq!(ids(&rows), once);
    }
}
