//! The aggregation pipeline: flattening, filtering, sorting, group-span
//! computation, pagination and summary building. Every function here is a
//! synchronous pure function over in-memory rows; criteria and sort specs
//! are explicit values, never ambient state.

pub mod filter;
pub mod flatten;
pub mod paginate;
pub mod row;
pub mod sort;
pub mod span;
pub mod summary;

pub use row::FlatRow;

use contracts::shared::status::StatusCategory;

/// One named status-bucket amount column.
#[derive(Debug, Clone, Copy)]
pub struct BucketDescriptor {
    /// Stable key, matches the record field name.
    pub key: &'static str,
    pub label: &'static str,
    /// Category the bucket represents. `None` for single-amount views whose
    /// category comes from the row's raw status instead.
    pub category: Option<StatusCategory>,
}

/// Static description of one report view: its grouping levels (coarsest
/// first) and its amount buckets. Shared by the live table, the summary
/// and the exporter so the three never disagree on shape.
#[derive(Debug, Clone, Copy)]
pub struct ViewConfig {
    pub slug: &'static str,
    pub title: &'static str,
    /// Grouping level labels, outermost first.
    pub levels: &'static [&'static str],
    pub buckets: &'static [BucketDescriptor],
}

impl ViewConfig {
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Indices of the buckets belonging to a status category.
    pub fn buckets_of(&self, category: StatusCategory) -> Vec<usize> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, b)| b.category == Some(category))
            .map(|(i, _)| i)
            .collect()
    }

    /// Bucket indices active under a status scope. Drives both the summary
    /// sums and the export column set, so the two always agree.
    pub fn active_buckets(&self, scope: &contracts::shared::status::StatusScope) -> Vec<usize> {
        use contracts::shared::status::StatusScope;

        let all: Vec<usize> = (0..self.buckets.len()).collect();
        if self.buckets.len() <= 1 {
            return all;
        }
        match scope {
            StatusScope::All => all,
            StatusScope::Category { category } => {
                let picked = self.buckets_of(*category);
                if picked.is_empty() {
                    all
                } else {
                    picked
                }
            }
            StatusScope::Raw { status } => {
                let picked = self.buckets_of(StatusCategory::of_raw(status));
                if picked.is_empty() {
                    all
                } else {
                    picked
                }
            }
        }
    }
}
