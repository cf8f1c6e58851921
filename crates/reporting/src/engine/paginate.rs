//! Fixed-size page slicing of the fully processed row list.
//!
//! Pagination is the last pipeline stage: the slice is taken after filter,
//! sort and span computation, so a page boundary never restarts a group.

use super::FlatRow;

/// Slice one 1-based page. Out-of-range pages yield an empty slice, never
/// an error.
pub fn page_slice(rows: &[FlatRow], page: usize, page_size: usize) -> &[FlatRow] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1) * page_size;
    if start >= rows.len() {
        return &[];
    }
    let end = (start + page_size).min(rows.len());
    &rows[start..end]
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}
