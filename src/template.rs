//! Grid template construction.
//!
//! Consumes the flat item list and produces a rectangular grid of placed
//! cells. A spanning cell occupies its anchor position plus placeholder
//! cells for every other position in its footprint; positions never reached
//! by any item are filled with zero-size placeholders so the grid is never
//! jagged.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::grid::GridConfig;
use crate::render::ImageSource;

/// Alignment of content within its draw box, per axis.
///
/// Used for both `align_items` (vertical) and `justify_items` (horizontal).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Flush to the top/left edge of the box.
    Start,
    /// Centered in the box.
    #[default]
    Center,
    /// Flush to the bottom/right edge of the box.
    End,
}

/// How content is scaled into its allotted draw box, like CSS `object-fit`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ObjectFit {
    /// Like [`Contain`](Self::Contain), but never upscales. Content smaller
    /// than the box is drawn at its natural size.
    Auto,
    /// Scale to fit entirely within the box, preserving aspect ratio.
    #[default]
    Contain,
    /// Stretch to the exact box dimensions, distorting aspect ratio.
    Fill,
    /// Scale to fill the box, preserving aspect ratio; overflow is cropped
    /// out of the source. Justify/align select which region stays visible.
    Cover,
}

/// A single grid entry before placement.
///
/// Spans default to 1 (zero is coerced to 1). The content size used for
/// object-fit scaling resolves as: explicit `width`/`height`, else the
/// image's intrinsic size, else the configured default cell size, else 0.
#[derive(Clone, Debug)]
pub struct Item<I> {
    /// Columns this entry spans.
    pub col_span: usize,
    /// Rows this entry spans.
    pub row_span: usize,
    /// Content image handle, if any.
    pub image: Option<I>,
    /// Explicit content width, overriding the image's intrinsic width.
    pub width: Option<f64>,
    /// Explicit content height, overriding the image's intrinsic height.
    pub height: Option<f64>,
    /// Per-item vertical alignment override.
    pub align_items: Option<Align>,
    /// Per-item horizontal alignment override.
    pub justify_items: Option<Align>,
    /// Per-item object-fit override.
    pub object_fit: Option<ObjectFit>,
}

impl<I> Default for Item<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Item<I> {
    /// An empty 1×1 item with no content.
    pub const fn new() -> Self {
        Self {
            col_span: 1,
            row_span: 1,
            image: None,
            width: None,
            height: None,
            align_items: None,
            justify_items: None,
            object_fit: None,
        }
    }

    /// A 1×1 item carrying an image.
    pub fn with_image(image: I) -> Self {
        Self {
            image: Some(image),
            ..Self::new()
        }
    }

    /// Set the column span.
    pub fn col_span(mut self, span: usize) -> Self {
        self.col_span = span;
        self
    }

    /// Set the row span.
    pub fn row_span(mut self, span: usize) -> Self {
        self.row_span = span;
        self
    }

    /// Set an explicit content size.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Override only the content width; height still resolves from the
    /// image or the config default.
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Override only the content height.
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Override vertical alignment for this item.
    pub fn align_items(mut self, align: Align) -> Self {
        self.align_items = Some(align);
        self
    }

    /// Override horizontal alignment for this item.
    pub fn justify_items(mut self, justify: Align) -> Self {
        self.justify_items = Some(justify);
        self
    }

    /// Override object-fit for this item.
    pub fn object_fit(mut self, fit: ObjectFit) -> Self {
        self.object_fit = Some(fit);
        self
    }
}

/// A resolved grid position.
///
/// Either a real content-bearing cell (spans ≥ 1, anchored at its top-left
/// position) or a placeholder covering a position claimed by a spanning
/// neighbor or never reached at all (both spans 0).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell {
    /// Columns spanned; 0 marks a placeholder.
    pub col_span: usize,
    /// Rows spanned; 0 marks a placeholder.
    pub row_span: usize,
    /// Per-unit width: the cell's share of one column before track
    /// reconciliation.
    pub width: f64,
    /// Per-unit height: the cell's share of one row.
    pub height: f64,
    /// Content's intended width (drives object-fit scaling).
    pub real_width: f64,
    /// Content's intended height.
    pub real_height: f64,
    /// Final allotted draw-box width; 0 until sizing resolution.
    pub max_width: f64,
    /// Final allotted draw-box height; 0 until sizing resolution.
    pub max_height: f64,
    /// Resolved vertical alignment.
    pub align_items: Align,
    /// Resolved horizontal alignment.
    pub justify_items: Align,
    /// Resolved object-fit.
    pub object_fit: ObjectFit,
    /// Anchor's index into the item list; `None` for placeholders.
    pub item: Option<usize>,
}

impl Cell {
    /// Placeholder carrying the covering anchor's unit size (or zero for
    /// never-reached positions).
    pub(crate) const fn placeholder(width: f64, height: f64) -> Self {
        Self {
            col_span: 0,
            row_span: 0,
            width,
            height,
            real_width: 0.0,
            real_height: 0.0,
            max_width: 0.0,
            max_height: 0.0,
            align_items: Align::Center,
            justify_items: Align::Center,
            object_fit: ObjectFit::Contain,
            item: None,
        }
    }

    /// Whether this position is covered by a spanning neighbor or unused.
    pub const fn is_placeholder(&self) -> bool {
        self.row_span == 0 && self.col_span == 0
    }
}

/// Layout failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// An item's spans and gaps make its per-unit width resolve negative.
    NegativeCellWidth {
        /// Index of the offending item.
        item: usize,
    },
    /// An item's spans and gaps make its per-unit height resolve negative.
    NegativeCellHeight {
        /// Index of the offending item.
        item: usize,
    },
}

/// Place every item into a rectangular grid of cells.
///
/// A cursor walks positions left-to-right, top-to-bottom. Positions already
/// claimed by an earlier spanning cell are skipped without consuming the
/// current item. Column spans are clipped at the right edge; row spans grow
/// the grid downward as needed.
pub(crate) fn build_template<I: ImageSource>(
    config: &GridConfig,
    items: &[Item<I>],
) -> Result<Vec<Vec<Cell>>, LayoutError> {
    let cols = config.col;
    let mut grid: Vec<Vec<Option<Cell>>> = Vec::new();
    let mut row = 0usize;
    let mut col = 0usize;

    for (index, item) in items.iter().enumerate() {
        // Find the next unoccupied position for this item.
        loop {
            ensure_rows(&mut grid, row + 1, cols);
            if grid[row][col].is_none() {
                break;
            }
            col += 1;
            if col >= cols {
                col = 0;
                row += 1;
            }
        }

        let col_span = item.col_span.max(1);
        let row_span = item.row_span.max(1);

        let real_width = resolve_real(item.width, image_width(item), config.width);
        let real_height = resolve_real(item.height, image_height(item), config.height);

        // Unit size: the declared size minus interior gaps, split evenly
        // across the span. A configured default acts as a per-unit minimum.
        let unit_w = (real_width - (col_span as f64 - 1.0) * config.gap.col) / col_span as f64;
        let unit_h = (real_height - (row_span as f64 - 1.0) * config.gap.row) / row_span as f64;
        let width = apply_min(unit_w, config.width);
        let height = apply_min(unit_h, config.height);
        if width < 0.0 {
            return Err(LayoutError::NegativeCellWidth { item: index });
        }
        if height < 0.0 {
            return Err(LayoutError::NegativeCellHeight { item: index });
        }

        grid[row][col] = Some(Cell {
            col_span,
            row_span,
            width,
            height,
            real_width,
            real_height,
            max_width: 0.0,
            max_height: 0.0,
            align_items: item.align_items.unwrap_or(config.align_items),
            justify_items: item.justify_items.unwrap_or(config.justify_items),
            object_fit: item.object_fit.unwrap_or(config.object_fit),
            item: Some(index),
        });

        // Claim the footprint. Column spans never cross the right edge;
        // existing cells keep their slot (first writer wins).
        let clipped = col_span.min(cols - col);
        ensure_rows(&mut grid, row + row_span, cols);
        for r in row..row + row_span {
            for c in col..col + clipped {
                let slot = &mut grid[r][c];
                if slot.is_none() {
                    *slot = Some(Cell::placeholder(width, height));
                }
            }
        }

        col += col_span;
        if col >= cols {
            col = 0;
            row += 1;
        }
    }

    // Positions never reached by any item become zero-size placeholders.
    Ok(grid
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|slot| slot.unwrap_or(Cell::placeholder(0.0, 0.0)))
                .collect()
        })
        .collect())
}

/// Column-major view of the grid, used for per-column aggregation.
pub(crate) fn transpose(grid: &[Vec<Cell>]) -> Vec<Vec<Cell>> {
    let cols = grid.first().map_or(0, Vec::len);
    (0..cols)
        .map(|c| grid.iter().map(|row| row[c]).collect())
        .collect()
}

fn ensure_rows(grid: &mut Vec<Vec<Option<Cell>>>, rows: usize, cols: usize) {
    while grid.len() < rows {
        grid.push(vec![None; cols]);
    }
}

/// Explicit size wins even when zero; a zero intrinsic size falls through
/// to the configured default.
fn resolve_real(explicit: Option<f64>, intrinsic: f64, default: Option<f64>) -> f64 {
    match explicit {
        Some(v) => v,
        None if intrinsic != 0.0 => intrinsic,
        None => default.unwrap_or(0.0),
    }
}

fn apply_min(unit: f64, default: Option<f64>) -> f64 {
    match default {
        Some(d) if unit < d => d,
        _ => unit,
    }
}

fn image_width<I: ImageSource>(item: &Item<I>) -> f64 {
    item.image.as_ref().map_or(0.0, ImageSource::width)
}

fn image_height<I: ImageSource>(item: &Item<I>) -> f64 {
    item.image.as_ref().map_or(0.0, ImageSource::height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridConfig;

    struct Img(f64, f64);

    impl ImageSource for Img {
        fn width(&self) -> f64 {
            self.0
        }
        fn height(&self) -> f64 {
            self.1
        }
    }

    fn items(specs: &[(usize, usize)]) -> Vec<Item<Img>> {
        specs
            .iter()
            .map(|&(c, r)| Item::new().size(30.0, 30.0).col_span(c).row_span(r))
            .collect()
    }

    fn anchor_of(grid: &[Vec<Cell>], row: usize, col: usize) -> Option<usize> {
        grid[row][col].item
    }

    // ── placement ───────────────────────────────────────────────────────

    #[test]
    fn spanning_anchor_golden_fixture() {
        // 3 columns; item 0 spans 2×2, the rest are 1×1.
        let config = GridConfig::new().columns(3);
        let list = items(&[(2, 2), (1, 1), (1, 1), (1, 1), (1, 1)]);
        let grid = build_template(&config, &list).unwrap();

        assert_eq!(grid.len(), 3);
        for row in &grid {
            assert_eq!(row.len(), 3);
        }

        // Anchor at (0,0) covers (0,0)-(1,1).
        assert_eq!(anchor_of(&grid, 0, 0), Some(0));
        assert!(grid[0][1].is_placeholder());
        assert!(grid[1][0].is_placeholder());
        assert!(grid[1][1].is_placeholder());

        // Item 1 lands next to the span; item 2 skips the covered row start.
        assert_eq!(anchor_of(&grid, 0, 2), Some(1));
        assert_eq!(anchor_of(&grid, 1, 2), Some(2));
        assert_eq!(anchor_of(&grid, 2, 0), Some(3));
        assert_eq!(anchor_of(&grid, 2, 1), Some(4));

        // Last position was never reached: zero-size placeholder.
        assert!(grid[2][2].is_placeholder());
        assert_eq!(grid[2][2].width, 0.0);
    }

    #[test]
    fn grid_is_rectangular() {
        let config = GridConfig::new().columns(4);
        let grid = build_template(&config, &items(&[(1, 1); 7])).unwrap();
        assert_eq!(grid.len(), 2);
        assert!(grid.iter().all(|row| row.len() == 4));
    }

    #[test]
    fn col_span_clipped_at_right_edge() {
        // Anchor in the last column asks for 3 columns; footprint stays in
        // column 2 and the cursor wraps.
        let config = GridConfig::new().columns(3);
        let list = items(&[(1, 1), (1, 1), (3, 1), (1, 1)]);
        let grid = build_template(&config, &list).unwrap();

        assert_eq!(anchor_of(&grid, 0, 2), Some(2));
        assert_eq!(grid[0][2].col_span, 3);
        assert_eq!(anchor_of(&grid, 1, 0), Some(3));
    }

    #[test]
    fn zero_span_treated_as_one() {
        let config = GridConfig::new().columns(3);
        let list = vec![Item::<Img>::new().size(30.0, 30.0).col_span(0).row_span(0)];
        let grid = build_template(&config, &list).unwrap();
        assert_eq!(grid[0][0].col_span, 1);
        assert_eq!(grid[0][0].row_span, 1);
    }

    #[test]
    fn placeholder_carries_anchor_unit_size() {
        let config = GridConfig::new().columns(3).gap(crate::Gap::uniform(10.0));
        let list = items(&[(2, 1)]);
        let grid = build_template(&config, &list).unwrap();
        // Unit width = (30 - 10) / 2 = 10.
        assert_eq!(grid[0][0].width, 10.0);
        assert!(grid[0][1].is_placeholder());
        assert_eq!(grid[0][1].width, 10.0);
    }

    // ── content size resolution ─────────────────────────────────────────

    #[test]
    fn explicit_size_beats_image_size() {
        let config = GridConfig::new();
        let list = vec![Item::with_image(Img(200.0, 100.0)).size(40.0, 20.0)];
        let grid = build_template(&config, &list).unwrap();
        assert_eq!(grid[0][0].real_width, 40.0);
        assert_eq!(grid[0][0].real_height, 20.0);
    }

    #[test]
    fn image_size_beats_config_default() {
        let config = GridConfig::new().cell_size(50.0, 50.0);
        let list = vec![Item::with_image(Img(200.0, 100.0))];
        let grid = build_template(&config, &list).unwrap();
        assert_eq!(grid[0][0].real_width, 200.0);
        // Unit width 200 exceeds the 50 minimum, kept as-is.
        assert_eq!(grid[0][0].width, 200.0);
    }

    #[test]
    fn config_default_is_a_per_unit_minimum() {
        let config = GridConfig::new().cell_size(50.0, 50.0);
        let list = vec![Item::with_image(Img(20.0, 20.0))];
        let grid = build_template(&config, &list).unwrap();
        assert_eq!(grid[0][0].real_width, 20.0);
        assert_eq!(grid[0][0].width, 50.0);
    }

    #[test]
    fn no_size_anywhere_resolves_to_zero() {
        let config = GridConfig::new();
        let grid = build_template(&config, &[Item::<Img>::new()]).unwrap();
        assert_eq!(grid[0][0].real_width, 0.0);
        assert_eq!(grid[0][0].width, 0.0);
    }

    #[test]
    fn negative_unit_width_is_an_error() {
        // 10 wide over 5 columns with gap 10: (10 - 40) / 5 < 0.
        let config = GridConfig::new().columns(5);
        let list = vec![Item::<Img>::new().size(10.0, 10.0).col_span(5)];
        assert_eq!(
            build_template(&config, &list),
            Err(LayoutError::NegativeCellWidth { item: 0 })
        );
    }

    #[test]
    fn negative_unit_height_is_an_error() {
        // 10 tall over 5 rows with gap 10: (10 - 40) / 5 < 0.
        let config = GridConfig::new().columns(1);
        let list = vec![Item::<Img>::new().size(10.0, 10.0).row_span(5)];
        assert_eq!(
            build_template(&config, &list),
            Err(LayoutError::NegativeCellHeight { item: 0 })
        );
    }

    #[test]
    fn single_axis_override_keeps_image_other_axis() {
        let config = GridConfig::new();
        let list = vec![Item::with_image(Img(200.0, 100.0)).width(40.0)];
        let grid = build_template(&config, &list).unwrap();
        assert_eq!(grid[0][0].real_width, 40.0);
        assert_eq!(grid[0][0].real_height, 100.0);
    }

    // ── transpose ───────────────────────────────────────────────────────

    #[test]
    fn transpose_is_column_major() {
        let config = GridConfig::new().columns(2);
        let grid = build_template(&config, &items(&[(1, 1), (1, 1), (1, 1)])).unwrap();
        let cols = transpose(&grid);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].len(), 2);
        assert_eq!(cols[0][0].item, Some(0));
        assert_eq!(cols[1][0].item, Some(1));
        assert_eq!(cols[0][1].item, Some(2));
    }
}
