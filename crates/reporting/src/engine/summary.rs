//! Per-group subtotals and the grand total.
//!
//! Always computed over the full filtered set, never the current page, so
//! the on-screen summary and the exported document reconcile exactly.
//! Sums use decimal arithmetic; repeated runs over the same data cannot
//! drift.

use std::collections::BTreeMap;

use contracts::shared::status::StatusScope;
use rust_decimal::Decimal;

use super::{FlatRow, ViewConfig};

/// Subtotals for one value of the coarsest grouping dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub label: String,
    /// One sum per active bucket, aligned with `ViewConfig::active_buckets`.
    pub buckets: Vec<Decimal>,
    /// Group total under the active scope.
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTable {
    /// Alphabetically ordered by group label.
    pub groups: Vec<GroupSummary>,
    pub grand: GroupSummary,
}

/// Group the full filtered set by the coarsest dimension and sum the
/// buckets active under the scope.
pub fn build(rows: &[FlatRow], scope: &StatusScope, cfg: &ViewConfig) -> SummaryTable {
    let active = cfg.active_buckets(scope);
    let scoped_total = |row: &FlatRow| -> Decimal {
        if scope.is_all() {
            row.total
        } else {
            active
                .iter()
                .map(|&i| row.buckets.get(i).copied().unwrap_or(Decimal::ZERO))
                .sum()
        }
    };

    // BTreeMap keyed case-insensitively for the alphabetical ordering, with
    // the original label kept for display.
    let mut groups: BTreeMap<(String, String), GroupSummary> = BTreeMap::new();
    for row in rows {
        let label = row.keys.first().cloned().unwrap_or_default();
        let entry = groups
            .entry((label.to_lowercase(), label.clone()))
            .or_insert_with(|| GroupSummary {
                label,
                buckets: vec![Decimal::ZERO; active.len()],
                total: Decimal::ZERO,
            });
        for (slot, &i) in entry.buckets.iter_mut().zip(active.iter()) {
            *slot += row.buckets.get(i).copied().unwrap_or(Decimal::ZERO);
        }
        entry.total += scoped_total(row);
    }

    let groups: Vec<GroupSummary> = groups.into_values().collect();
    let mut grand = GroupSummary {
        label: "Grand Total".to_string(),
        buckets: vec![Decimal::ZERO; active.len()],
        total: Decimal::ZERO,
    };
    for g in &groups {
        for (slot, v) in grand.buckets.iter_mut().zip(g.buckets.iter()) {
            *slot += *v;
        }
        grand.total += g.total;
    }

    SummaryTable { groups, grand }
}
