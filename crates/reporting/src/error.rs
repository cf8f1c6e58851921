use crate::store::StoreError;

/// Error type for table-view building and report export.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Record store fetch failed. The live view must show an empty table,
    /// not a stale one; an export must leave the screen untouched.
    #[error("record store error: {0}")]
    Store(#[from] StoreError),

    /// Document rendering failed before anything was written.
    #[error("document rendering error: {0}")]
    Render(#[from] csv::Error),

    /// Writing the finished document to disk failed.
    #[error("document write error: {0}")]
    Io(#[from] std::io::Error),

    /// The operation was cancelled before completion.
    #[error("operation cancelled")]
    Cancelled,
}

impl ReportError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Store(StoreError::Cancelled))
    }
}
