use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// One leaf record after flattening, decorated with span metadata.
///
/// The key chain always equals the path the row was flattened from;
/// flattening never reorders ancestor keys.
#[derive(Debug, Clone)]
pub struct FlatRow {
    /// Stable record identity.
    pub id: String,
    /// Ancestor key chain, outermost grouping level first.
    pub keys: Vec<String>,
    /// Amounts aligned with the view's bucket descriptors.
    pub buckets: Vec<Decimal>,
    /// Row total across all buckets.
    pub total: Decimal,
    /// Timestamp used by the date predicate.
    pub timestamp: NaiveDateTime,
    /// Raw store status; empty for bucket-matrix rows.
    pub raw_status: String,
    /// Lowercased haystack of the view's searchable text fields.
    pub search_text: String,
    /// Per-level merged-cell span. A nonzero value marks the first row of a
    /// contiguous run and holds the run length; all other rows carry 0.
    /// Filled by the span calculator.
    pub spans: Vec<usize>,
}

impl FlatRow {
    pub fn new(
        id: impl Into<String>,
        keys: Vec<String>,
        buckets: Vec<Decimal>,
        timestamp: NaiveDateTime,
        raw_status: impl Into<String>,
        search_fields: &[&str],
    ) -> Self {
        let total = buckets.iter().copied().sum();
        let level_count = keys.len();
        Self {
            id: id.into(),
            keys,
            buckets,
            total,
            timestamp,
            raw_status: raw_status.into(),
            search_text: search_fields.join("\n").to_lowercase(),
            spans: vec![0; level_count],
        }
    }
}
