//! Report export: column descriptors, document assembly and rendering.

pub mod columns;
pub mod csv_renderer;
pub mod document;
pub mod exporter;

pub use columns::{columns, ColumnDescriptor, ColumnKind};
pub use csv_renderer::CsvRenderer;
pub use document::{DocumentRenderer, ExportScope, ReportDocument, ReportHeader};
pub use exporter::{build_document, write_document};
