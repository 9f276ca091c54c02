//! Track sizing: per-column widths, per-row heights, and draw boxes.
//!
//! Each column/row gets a single extent large enough for every cell it
//! holds, chosen per the configured sizing policy. Once tracks are final,
//! every real cell is annotated with the draw box it actually gets
//! (spanned track extents plus interior gaps).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::grid::GridConfig;
use crate::template::{Cell, transpose};

/// Policy for deriving uniform track extents from per-cell candidates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SizingMode {
    /// Every track gets the global maximum candidate.
    Max,
    /// Each track keeps its own maximum candidate.
    Min,
    /// Like [`Min`](Self::Min), but tracks covered by one spanning cell are
    /// raised to be mutually equal.
    Auto,
    /// Every track gets the configured default size; behaves as
    /// [`Max`](Self::Max) when no default is set.
    Fixed,
}

/// Resolve final column widths and row heights, then annotate every real
/// cell with its draw box (`max_width`/`max_height`).
pub(crate) fn resolve_tracks(grid: &mut [Vec<Cell>], config: &GridConfig) -> (Vec<f64>, Vec<f64>) {
    let columns = transpose(grid);

    // Candidates: the largest per-unit size in each track. Placeholders
    // carry their anchor's unit size and participate; non-finite values
    // are ignored.
    let mut col_widths: Vec<f64> = columns
        .iter()
        .map(|col| track_max(col.iter().map(|cell| cell.width)))
        .collect();
    let mut row_heights: Vec<f64> = grid
        .iter()
        .map(|row| track_max(row.iter().map(|cell| cell.height)))
        .collect();

    match effective(config.width_type, config.width) {
        SizingMode::Max => {
            let max = track_max(col_widths.iter().copied());
            col_widths.fill(max);
        }
        SizingMode::Min => {}
        SizingMode::Auto => {
            for row in grid.iter() {
                for (c, cell) in row.iter().enumerate() {
                    if cell.col_span >= 2 {
                        equalize(&mut col_widths, c, c + cell.col_span);
                    }
                }
            }
        }
        SizingMode::Fixed => {
            // effective() guarantees the default is present.
            if let Some(width) = config.width {
                col_widths.fill(width);
            }
        }
    }

    match effective(config.height_type, config.height) {
        SizingMode::Max => {
            let max = track_max(row_heights.iter().copied());
            row_heights.fill(max);
        }
        SizingMode::Min => {}
        SizingMode::Auto => {
            for column in &columns {
                for (r, cell) in column.iter().enumerate() {
                    if cell.row_span >= 2 {
                        equalize(&mut row_heights, r, r + cell.row_span);
                    }
                }
            }
        }
        SizingMode::Fixed => {
            if let Some(height) = config.height {
                row_heights.fill(height);
            }
        }
    }

    annotate_draw_boxes(grid, &col_widths, &row_heights, config);
    (col_widths, row_heights)
}

/// Draw box of each real cell: spanned track extents plus interior gaps.
/// Column spans are clipped at the right edge.
fn annotate_draw_boxes(
    grid: &mut [Vec<Cell>],
    col_widths: &[f64],
    row_heights: &[f64],
    config: &GridConfig,
) {
    let num_cols = col_widths.len();
    for (r, row) in grid.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            if cell.is_placeholder() {
                continue;
            }
            let cols = cell.col_span.min(num_cols - c);
            let rows = cell.row_span.min(row_heights.len() - r);
            let width: f64 = col_widths[c..c + cols].iter().sum();
            let height: f64 = row_heights[r..r + rows].iter().sum();
            cell.max_width = width + (cols as f64 - 1.0) * config.gap.col;
            cell.max_height = height + (rows as f64 - 1.0) * config.gap.row;
        }
    }
}

/// `Fixed` without a configured default downgrades to `Max`.
fn effective(mode: SizingMode, default: Option<f64>) -> SizingMode {
    match mode {
        SizingMode::Fixed if default.is_none() => SizingMode::Max,
        other => other,
    }
}

fn track_max(values: impl Iterator<Item = f64>) -> f64 {
    values.filter(|v| v.is_finite()).fold(0.0, f64::max)
}

/// Raise every track in `start..end` (clipped) to the largest among them.
fn equalize(tracks: &mut [f64], start: usize, end: usize) {
    let end = end.min(tracks.len());
    let max = track_max(tracks[start..end].iter().copied());
    tracks[start..end].fill(max);
}
