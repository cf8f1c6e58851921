//! Group-span computation for merged-cell rendering.
//!
//! For every grouping level, contiguous rows sharing that level's key and
//! every outer level's key form a run. The first row of a run carries the
//! run length as its span; every other row carries 0, telling the renderer
//! to suppress the cell. Spans must be computed over the entire
//! filtered+sorted list before pagination, so a page boundary never
//! artificially restarts a group.

use super::FlatRow;

/// Single forward pass maintaining the current run start per level;
/// O(n·levels) total.
pub fn compute_spans(rows: &mut [FlatRow], level_count: usize) {
    for row in rows.iter_mut() {
        row.spans = vec![0; level_count];
    }
    if rows.is_empty() {
        return;
    }

    let mut run_start = vec![0usize; level_count];

    for i in 1..rows.len() {
        // Outermost level whose key changed; that level and every inner
        // one start a new run here.
        let changed = (0..level_count)
            .find(|&l| rows[i].keys.get(l) != rows[i - 1].keys.get(l))
            .unwrap_or(level_count);

        for l in changed..level_count {
            let start = run_start[l];
            rows[start].spans[l] = i - start;
            run_start[l] = i;
        }
    }

    let n = rows.len();
    for l in 0..level_count {
        let start = run_start[l];
        rows[start].spans[l] = n - start;
    }
}

/// Mark every row as its own run (all spans 1). Used when the primary sort
/// key is not a grouping level, where contiguity is not guaranteed and the
/// renderer degrades to flat rows.
pub fn flat_spans(rows: &mut [FlatRow], level_count: usize) {
    for row in rows.iter_mut() {
        row.spans = vec![1; level_count];
    }
}
