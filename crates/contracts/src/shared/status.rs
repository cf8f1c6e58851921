use serde::{Deserialize, Serialize};

/// Coarse status category used for filtering, charting and bucket columns.
///
/// Many raw store statuses collapse into one category; anything unmapped
/// lands in `Other` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCategory {
    ForDispatch,
    Loading,
    InTransit,
    Delivered,
    Cancelled,
    Other,
}

impl StatusCategory {
    /// Map a raw store status string to its category.
    pub fn of_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "open" | "confirmed" | "allocated" | "ready" | "for dispatch" | "for_dispatch" => {
                Self::ForDispatch
            }
            "loading" | "loaded" | "staged" | "at dock" => Self::Loading,
            "departed" | "in transit" | "in_transit" | "on road" | "on_road" => Self::InTransit,
            "arrived" | "unloaded" | "delivered" | "completed" | "pod received"
            | "pod_received" => Self::Delivered,
            "cancelled" | "canceled" | "void" => Self::Cancelled,
            _ => Self::Other,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ForDispatch => "For Dispatch",
            Self::Loading => "Loading",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Other => "Other",
        }
    }
}

/// Status constraint of a query. `All` disables the predicate; where the
/// view offers it, an exact raw status can be targeted instead of the
/// coarse category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusScope {
    #[default]
    All,
    Category {
        category: StatusCategory,
    },
    Raw {
        status: String,
    },
}

impl StatusScope {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Human-readable form for filter summaries.
    pub fn describe(&self) -> String {
        match self {
            Self::All => "All statuses".to_string(),
            Self::Category { category } => category.display_name().to_string(),
            Self::Raw { status } => format!("status \"{}\"", status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_statuses_collapse_to_categories() {
        assert_eq!(StatusCategory::of_raw("allocated"), StatusCategory::ForDispatch);
        assert_eq!(StatusCategory::of_raw("Confirmed"), StatusCategory::ForDispatch);
        assert_eq!(StatusCategory::of_raw("loaded"), StatusCategory::Loading);
        assert_eq!(StatusCategory::of_raw("on_road"), StatusCategory::InTransit);
        assert_eq!(StatusCategory::of_raw("POD Received"), StatusCategory::Delivered);
        assert_eq!(StatusCategory::of_raw("canceled"), StatusCategory::Cancelled);
    }

    #[test]
    fn test_unmapped_raw_falls_into_other() {
        assert_eq!(StatusCategory::of_raw("quarantined"), StatusCategory::Other);
        assert_eq!(StatusCategory::of_raw(""), StatusCategory::Other);
    }
}
