//! Grid configuration, the pure layout entry point, and the stateful
//! wrapper tying layout to a surface.
//!
//! Layout is a pure function of `(config, items)`; [`Grid`] is a thin
//! owner of config, item list, and surface that re-invokes it on every
//! mutation. Nothing is updated in place — each pass rebuilds every cell
//! and track from scratch.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::geometry::{Gap, Padding, Rgba};
use crate::render::{ImageSource, Surface, render_grid, surface_size};
use crate::sizing::{SizingMode, resolve_tracks};
use crate::template::{Align, Cell, Item, LayoutError, ObjectFit, build_template};

/// Invalid configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Column count is zero.
    ZeroColumns,
    /// Row or column gap is negative.
    NegativeGap,
    /// A padding side is negative.
    NegativePadding,
}

/// Any failure from building or relaying out a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// An item could not be laid out.
    Layout(LayoutError),
}

impl From<ConfigError> for GridError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<LayoutError> for GridError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

/// Grid settings, immutable once a [`Grid`] is constructed.
///
/// # Example
///
/// ```
/// use gridfit::{Align, GridConfig, ObjectFit, SizingMode};
///
/// let config = GridConfig::new()
///     .columns(4)
///     .cell_size(120.0, 90.0)
///     .width_type(SizingMode::Fixed)
///     .object_fit(ObjectFit::Cover)
///     .justify_items(Align::Start);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Default cell width; also the per-unit minimum and the `Fixed` track
    /// width.
    pub width: Option<f64>,
    /// Default cell height.
    pub height: Option<f64>,
    /// Outer padding, applied as a render-time translate.
    pub padding: Padding,
    /// Row/column gap between tracks.
    pub gap: Gap,
    /// Number of columns.
    pub col: usize,
    /// Default vertical alignment of content within its draw box.
    pub align_items: Align,
    /// Default horizontal alignment.
    pub justify_items: Align,
    /// Column sizing policy.
    pub width_type: SizingMode,
    /// Row sizing policy.
    pub height_type: SizingMode,
    /// Default object-fit.
    pub object_fit: ObjectFit,
    /// Surface background fill, if any.
    pub background: Option<Rgba>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GridConfig {
    /// Defaults: 3 columns, padding and gap of 10, centered content,
    /// `Max` column widths, `Auto` row heights, `Contain` fit.
    pub const fn new() -> Self {
        Self {
            width: None,
            height: None,
            padding: Padding::uniform(10.0),
            gap: Gap::uniform(10.0),
            col: 3,
            align_items: Align::Center,
            justify_items: Align::Center,
            width_type: SizingMode::Max,
            height_type: SizingMode::Auto,
            object_fit: ObjectFit::Contain,
            background: None,
        }
    }

    /// Set the column count.
    pub const fn columns(mut self, col: usize) -> Self {
        self.col = col;
        self
    }

    /// Set the default cell size.
    pub const fn cell_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the outer padding.
    pub const fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the track gap.
    pub const fn gap(mut self, gap: Gap) -> Self {
        self.gap = gap;
        self
    }

    /// Set the default vertical alignment.
    pub const fn align_items(mut self, align: Align) -> Self {
        self.align_items = align;
        self
    }

    /// Set the default horizontal alignment.
    pub const fn justify_items(mut self, justify: Align) -> Self {
        self.justify_items = justify;
        self
    }

    /// Set the column sizing policy.
    pub const fn width_type(mut self, mode: SizingMode) -> Self {
        self.width_type = mode;
        self
    }

    /// Set the row sizing policy.
    pub const fn height_type(mut self, mode: SizingMode) -> Self {
        self.height_type = mode;
        self
    }

    /// Set the default object-fit.
    pub const fn object_fit(mut self, fit: ObjectFit) -> Self {
        self.object_fit = fit;
        self
    }

    /// Set the surface background color.
    pub const fn background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    /// Check boundary constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.col < 1 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.gap.any_negative() {
            return Err(ConfigError::NegativeGap);
        }
        if self.padding.any_negative() {
            return Err(ConfigError::NegativePadding);
        }
        Ok(())
    }
}

/// A fully computed layout: the cell grid, final track extents, and the
/// surface dimensions they imply.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutResult {
    /// Rectangular cell grid (every row has exactly `col` entries).
    pub cells: Vec<Vec<Cell>>,
    /// Final per-column widths.
    pub col_widths: Vec<f64>,
    /// Final per-row heights.
    pub row_heights: Vec<f64>,
    /// Surface width: content + interior gaps + one gap margin per side.
    pub surface_width: f64,
    /// Surface height.
    pub surface_height: f64,
}

impl LayoutResult {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.col_widths.len()
    }

    /// Cell at a position, if in bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }
}

/// Compute a layout for the given configuration and item list.
///
/// Pure: the same inputs always produce the same result, and nothing is
/// retained between calls.
///
/// # Example
///
/// ```
/// use gridfit::{GridConfig, Item, layout};
///
/// # struct Img;
/// # impl gridfit::ImageSource for Img {
/// #     fn width(&self) -> f64 { 0.0 }
/// #     fn height(&self) -> f64 { 0.0 }
/// # }
/// let config = GridConfig::new().columns(2);
/// let items = [
///     Item::<Img>::new().size(50.0, 50.0),
///     Item::new().size(50.0, 50.0),
///     Item::new().size(50.0, 50.0),
/// ];
/// let result = layout(&config, &items).unwrap();
/// assert_eq!(result.rows(), 2);
/// assert_eq!(result.col_widths, [50.0, 50.0]);
/// ```
pub fn layout<I: ImageSource>(
    config: &GridConfig,
    items: &[Item<I>],
) -> Result<LayoutResult, GridError> {
    config.validate()?;
    let mut cells = build_template(config, items)?;
    let (col_widths, row_heights) = resolve_tracks(&mut cells, config);
    let (surface_width, surface_height) = surface_size(&col_widths, &row_heights, config.gap);
    Ok(LayoutResult {
        cells,
        col_widths,
        row_heights,
        surface_width,
        surface_height,
    })
}

/// An image grid bound to a drawing surface.
///
/// Owns the configuration, the accumulated item list, and the surface.
/// Construction and every append trigger a full synchronous relayout and
/// re-render; there is no incremental update.
pub struct Grid<S: Surface> {
    config: GridConfig,
    items: Vec<Item<S::Image>>,
    surface: S,
    layout: LayoutResult,
}

impl<S: Surface> Grid<S> {
    /// Lay out and render `items` onto `surface`.
    pub fn new(config: GridConfig, surface: S, items: Vec<Item<S::Image>>) -> Result<Self, GridError> {
        let result = layout(&config, &items)?;
        let mut grid = Self {
            config,
            items,
            surface,
            layout: result,
        };
        grid.redraw();
        Ok(grid)
    }

    /// Append items and rebuild.
    ///
    /// The whole accumulated list is laid out from scratch; the result is
    /// identical to constructing a fresh grid from the concatenated list.
    pub fn append_data(
        &mut self,
        items: impl IntoIterator<Item = Item<S::Image>>,
    ) -> Result<(), GridError> {
        self.items.extend(items);
        self.relayout()
    }

    /// Recompute the layout and re-render. Idempotent for unchanged inputs.
    pub fn relayout(&mut self) -> Result<(), GridError> {
        self.layout = layout(&self.config, &self.items)?;
        self.redraw();
        Ok(())
    }

    /// The current layout.
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// The configuration this grid was built with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The accumulated item list.
    pub fn items(&self) -> &[Item<S::Image>] {
        &self.items
    }

    /// Borrow the surface (for the collaborator's own export API).
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutably borrow the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give up the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn redraw(&mut self) {
        render_grid(&mut self.surface, &self.layout, &self.items, &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Img(f64, f64);

    impl ImageSource for Img {
        fn width(&self) -> f64 {
            self.0
        }
        fn height(&self) -> f64 {
            self.1
        }
    }

    // ── validation ──────────────────────────────────────────────────────

    #[test]
    fn zero_columns_rejected() {
        assert_eq!(
            GridConfig::new().columns(0).validate(),
            Err(ConfigError::ZeroColumns)
        );
    }

    #[test]
    fn negative_gap_rejected() {
        let config = GridConfig::new().gap(Gap::new(-1.0, 10.0));
        assert_eq!(config.validate(), Err(ConfigError::NegativeGap));
    }

    #[test]
    fn negative_padding_rejected() {
        let config = GridConfig::new().padding(Padding::new(0.0, 0.0, -2.0, 0.0));
        assert_eq!(config.validate(), Err(ConfigError::NegativePadding));
    }

    #[test]
    fn layout_propagates_config_error() {
        let config = GridConfig::new().columns(0);
        let err = layout::<Img>(&config, &[]).unwrap_err();
        assert_eq!(err, GridError::Config(ConfigError::ZeroColumns));
    }

    // ── layout ──────────────────────────────────────────────────────────

    #[test]
    fn single_cell_surface_is_cell_plus_margins() {
        // 50 + 10·0 interior + 10·2 margin = 70 on both axes.
        let config = GridConfig::new().columns(1);
        let items = [Item::<Img>::new().size(50.0, 50.0)];
        let result = layout(&config, &items).unwrap();
        assert_eq!(result.surface_width, 70.0);
        assert_eq!(result.surface_height, 70.0);
    }

    #[test]
    fn empty_list_degrades_to_margins() {
        let config = GridConfig::new();
        let result = layout::<Img>(&config, &[]).unwrap();
        assert_eq!(result.rows(), 0);
        assert_eq!(result.surface_width, 20.0);
        assert_eq!(result.surface_height, 20.0);
    }

    #[test]
    fn layout_is_deterministic() {
        let config = GridConfig::new().columns(2);
        let items = [
            Item::with_image(Img(120.0, 80.0)),
            Item::with_image(Img(60.0, 90.0)).col_span(2),
            Item::with_image(Img(30.0, 30.0)),
        ];
        let a = layout(&config, &items).unwrap();
        let b = layout(&config, &items).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn cell_accessor_bounds_checked() {
        let config = GridConfig::new().columns(2);
        let items = [Item::<Img>::new().size(10.0, 10.0)];
        let result = layout(&config, &items).unwrap();
        assert!(result.cell(0, 1).is_some());
        assert!(result.cell(0, 2).is_none());
        assert!(result.cell(1, 0).is_none());
    }
}
