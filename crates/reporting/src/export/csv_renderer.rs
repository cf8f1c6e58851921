use rust_decimal::Decimal;

use crate::engine::FlatRow;
use crate::error::ReportError;
use crate::shared::format;

use super::columns::{ColumnDescriptor, ColumnKind};
use super::document::{DocumentRenderer, ReportDocument};

/// UTF-8 byte order mark so spreadsheet applications detect the encoding.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV renderer: semicolon-delimited, UTF-8 with BOM, header block, main
/// table, per-group summary table and grand-total row.
#[derive(Debug, Clone)]
pub struct CsvRenderer {
    delimiter: u8,
}

impl CsvRenderer {
    pub fn new() -> Self {
        Self { delimiter: b';' }
    }
}

impl Default for CsvRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for CsvRenderer {
    fn render(&self, doc: &ReportDocument) -> Result<Vec<u8>, ReportError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_writer(Vec::new());

        // Header block
        writer.write_record([doc.header.title.as_str()])?;
        writer.write_record(["Document ID", doc.header.document_id.as_str()])?;
        writer.write_record(["Period", doc.header.period_label.as_str()])?;
        writer.write_record([
            "Generated",
            &doc.header
                .generated_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        ])?;
        writer.write_record(["Filters", doc.header.filter_summary.as_str()])?;
        writer.write_record::<_, &str>([""])?;

        // Main table
        let labels: Vec<&str> = doc.columns.iter().map(|c| c.label.as_str()).collect();
        writer.write_record(&labels)?;
        for row in &doc.rows {
            let cells: Vec<String> = doc.columns.iter().map(|c| cell(row, c)).collect();
            writer.write_record(&cells)?;
        }

        // Per-group summary and grand total
        writer.write_record::<_, &str>([""])?;
        writer.write_record(["Summary"])?;
        let group_label = doc
            .columns
            .iter()
            .find(|c| c.kind == ColumnKind::Group(0))
            .map(|c| c.label.as_str())
            .unwrap_or("Group");
        let mut summary_header = vec![group_label.to_string()];
        summary_header.extend(
            doc.columns
                .iter()
                .filter(|c| matches!(c.kind, ColumnKind::Bucket(_)))
                .map(|c| c.label.clone()),
        );
        summary_header.push("Total".to_string());
        writer.write_record(&summary_header)?;

        for group in &doc.summary.groups {
            writer.write_record(summary_record(&group.label, &group.buckets, group.total))?;
        }
        writer.write_record(summary_record(
            &doc.summary.grand.label,
            &doc.summary.grand.buckets,
            doc.summary.grand.total,
        ))?;

        let inner = writer
            .into_inner()
            .map_err(|e| ReportError::Io(std::io::Error::other(e)))?;

        let mut bytes = Vec::with_capacity(BOM.len() + inner.len());
        bytes.extend_from_slice(BOM);
        bytes.extend_from_slice(&inner);
        Ok(bytes)
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}

fn cell(row: &FlatRow, column: &ColumnDescriptor) -> String {
    match column.kind {
        ColumnKind::Group(level) => row.keys.get(level).cloned().unwrap_or_default(),
        ColumnKind::Bucket(index) => format::format_money(
            row.buckets.get(index).copied().unwrap_or(Decimal::ZERO),
        ),
        ColumnKind::RowTotal => format::format_money(row.total),
    }
}

fn summary_record(label: &str, buckets: &[Decimal], total: Decimal) -> Vec<String> {
    let mut record = vec![label.to_string()];
    record.extend(buckets.iter().map(|b| format::format_money(*b)));
    record.push(format::format_money(total));
    record
}
