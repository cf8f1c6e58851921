use chrono::{NaiveDate, NaiveDateTime};
use contracts::shared::period::{DateRange, RangePreset};
use contracts::shared::query::{FilterCriteria, SortSpec};

use crate::engine::summary::SummaryTable;
use crate::engine::FlatRow;
use crate::error::ReportError;
use crate::shared::format;

use super::columns::ColumnDescriptor;

/// Export scope chosen in the export dialog; fully independent of whatever
/// the live view currently shows.
#[derive(Debug, Clone)]
pub struct ExportScope {
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
    /// Preset the date interval was resolved from, kept for the period
    /// label only.
    pub preset: Option<RangePreset>,
}

/// Header metadata of an exported document.
#[derive(Debug, Clone)]
pub struct ReportHeader {
    pub title: String,
    pub document_id: String,
    pub period_label: String,
    pub generated_at: NaiveDateTime,
    /// Human-readable active-filter summary.
    pub filter_summary: String,
}

/// Assembled report over the complete matching dataset. Exists only for
/// the duration of the export; a document with zero rows is still
/// well-formed.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    /// View slug; drives the artifact filename independently of the
    /// display title.
    pub slug: String,
    pub header: ReportHeader,
    pub columns: Vec<ColumnDescriptor>,
    /// Full sorted row set — never a pagination slice.
    pub rows: Vec<FlatRow>,
    pub summary: SummaryTable,
}

/// External document-rendering collaborator. Produces the complete encoded
/// artifact in memory so a failure can never leave a partial file behind.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, doc: &ReportDocument) -> Result<Vec<u8>, ReportError>;

    /// File extension of the produced artifact, without the dot.
    fn extension(&self) -> &'static str;
}

/// Deterministic artifact name: report type plus generation date.
pub fn export_filename(slug: &str, generated_on: NaiveDate, extension: &str) -> String {
    format!("{}_{}.{}", slug, generated_on.format("%Y-%m-%d"), extension)
}

/// Resolved period label for the document header.
pub fn period_label(preset: Option<RangePreset>, range: Option<&DateRange>) -> String {
    match (preset, range) {
        (Some(p), _) if p != RangePreset::Custom => p.display_name().to_string(),
        (_, Some(r)) => format!(
            "{} — {}",
            format::format_date(r.start.date()),
            format::format_date(r.end.date())
        ),
        (_, None) => "All dates".to_string(),
    }
}
