use serde::{Deserialize, Serialize};

use super::period::DateRange;
use super::status::StatusScope;

/// Sentinel value that disables a dimension predicate.
pub const ALL: &str = "All";

/// Equality constraint on one grouping level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionFilter {
    /// Index of the grouping level (0 = coarsest).
    pub level: usize,
    pub value: String,
}

/// Immutable query value: one per request, never read from ambient state.
/// The same criteria drive the live table and an independently scoped export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Resolved date interval; `None` means no date filter.
    pub date: Option<DateRange>,
    /// Active dimension-equality constraints. `"All"` values are dropped
    /// at construction, so everything stored here is active.
    pub dimensions: Vec<DimensionFilter>,
    /// Free-text search; empty means inactive.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusScope,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: Option<DateRange>) -> Self {
        self.date = date;
        self
    }

    /// Add a dimension constraint; the `"All"` sentinel is a pass-through
    /// and is not recorded.
    pub fn with_dimension(mut self, level: usize, value: impl Into<String>) -> Self {
        let value = value.into();
        if value != ALL && !value.is_empty() {
            self.dimensions.push(DimensionFilter { level, value });
        }
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: StatusScope) -> Self {
        self.status = status;
        self
    }

    /// Human-readable active-filter summary for report headers.
    /// `level_labels` names the grouping levels, coarsest first.
    pub fn describe(&self, level_labels: &[&str]) -> String {
        let mut parts = Vec::new();
        if !self.search.trim().is_empty() {
            parts.push(format!("search \"{}\"", self.search.trim()));
        }
        for d in &self.dimensions {
            let label = level_labels.get(d.level).copied().unwrap_or("?");
            parts.push(format!("{} = {}", label, d.value));
        }
        if !self.status.is_all() {
            parts.push(self.status.describe());
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join("; ")
        }
    }
}

/// Primary sort key. Grouping levels are addressed by index, status
/// buckets by their position in the view's bucket list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SortKey {
    Level { index: usize },
    Bucket { index: usize },
    Total,
    Date,
}

/// User-selected sort. The fixed tie-break chain (grouping levels,
/// outer to inner, always ascending) is applied by the sort engine and
/// is not part of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub ascending: bool,
}

impl SortSpec {
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
            ascending: true,
        }
    }

    /// Re-selecting the current key toggles direction; a new key resets
    /// to ascending.
    pub fn toggled(&self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                ascending: !self.ascending,
            }
        } else {
            Self::new(key)
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortKey::Level { index: 0 })
    }
}

/// Page request against the external record store endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRequest {
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Composite date filter: `"<start>T00:00:00,<end>T23:59:59"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ListRequest {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            search: None,
            date: None,
        }
    }

    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn with_date(mut self, date: Option<&DateRange>) -> Self {
        self.date = date.map(DateRange::to_query_param);
        self
    }

    /// Query pairs in endpoint parameter order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(date) = &self.date {
            pairs.push(("date", date.clone()));
        }
        pairs
    }
}

/// Record store response envelope: `{ data, meta: { filter_count } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub meta: ResponseMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Total records matching the server-side filters, across all pages.
    pub filter_count: u64,
}
