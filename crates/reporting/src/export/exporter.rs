//! Document assembly and the final write.
//!
//! The exporter re-runs filter → sort → aggregate over the complete
//! dataset under its own scope; nothing is shared with the live table
//! except the pure pipeline functions, so an export can never disturb the
//! on-screen state. The document is rendered fully in memory and written
//! in one call — a failed export leaves no partial artifact.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::engine::{filter, sort, summary, FlatRow, ViewConfig};
use crate::error::ReportError;

use super::columns;
use super::document::{
    export_filename, period_label, DocumentRenderer, ExportScope, ReportDocument, ReportHeader,
};

/// Run the aggregation pipeline over the complete flattened dataset and
/// assemble the document. Pure; the injectable `generated_at` keeps
/// headers testable.
pub fn build_document(
    cfg: &ViewConfig,
    rows: Vec<FlatRow>,
    scope: &ExportScope,
    generated_at: NaiveDateTime,
) -> ReportDocument {
    let mut rows = filter::apply(rows, &scope.criteria, cfg);
    sort::sort(&mut rows, &scope.sort);
    let summary = summary::build(&rows, &scope.criteria.status, cfg);

    tracing::info!(
        report = cfg.slug,
        rows = rows.len(),
        groups = summary.groups.len(),
        "assembled report document"
    );

    ReportDocument {
        slug: cfg.slug.to_string(),
        header: ReportHeader {
            title: cfg.title.to_string(),
            document_id: uuid::Uuid::new_v4().to_string(),
            period_label: period_label(scope.preset, scope.criteria.date.as_ref()),
            generated_at,
            filter_summary: scope.criteria.describe(cfg.levels),
        },
        columns: columns::columns(cfg, &scope.criteria.status),
        rows,
        summary,
    }
}

/// Render and write the document under its deterministic name. Rendering
/// happens entirely before the file is created.
pub async fn write_document(
    doc: &ReportDocument,
    renderer: &dyn DocumentRenderer,
    out_dir: &Path,
) -> Result<PathBuf, ReportError> {
    let bytes = renderer.render(doc)?;

    let name = export_filename(
        &doc.slug,
        doc.header.generated_at.date(),
        renderer.extension(),
    );
    let path = out_dir.join(name);

    tokio::fs::create_dir_all(out_dir).await?;
    tokio::fs::write(&path, bytes).await?;

    tracing::info!(path = %path.display(), "report written");
    Ok(path)
}
