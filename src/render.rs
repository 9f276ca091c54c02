//! Surface collaborators and draw geometry.
//!
//! The crate never touches pixels. Rendering walks the laid-out grid and
//! issues calls against a [`Surface`] — an abstract 2D target with a
//! translate stack, modeled on the canvas 2D context. Positioning is done
//! entirely through `save`/`translate`/`restore` so per-cell draw math
//! stays in local coordinates.

use crate::geometry::{Gap, Rgba};
use crate::grid::{GridConfig, LayoutResult};
use crate::template::{Align, Item, ObjectFit};

/// An opaque image handle with intrinsic pixel dimensions.
pub trait ImageSource {
    /// Intrinsic width in pixels.
    fn width(&self) -> f64;
    /// Intrinsic height in pixels.
    fn height(&self) -> f64;
}

/// Abstract drawing surface.
///
/// Mirrors the subset of a canvas 2D context the renderer needs. All
/// coordinates are in the surface's current (translated) coordinate space.
/// Exporting the finished surface is the implementor's own concern.
pub trait Surface {
    /// Image handle type this surface can draw.
    type Image: ImageSource;

    /// Allocate or resize the backing store to the given dimensions.
    fn create_or_resize(&mut self, width: f64, height: f64);

    /// Clear a rectangle to transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Set the fill color for subsequent [`fill_rect`](Self::fill_rect) calls.
    fn set_fill_style(&mut self, color: Rgba);

    /// Fill a rectangle with the current fill color.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Draw the whole image scaled into the destination rectangle.
    fn draw_image(&mut self, image: &Self::Image, dx: f64, dy: f64, dw: f64, dh: f64);

    /// Draw a source region of the image scaled into the destination
    /// rectangle (the nine-argument canvas `drawImage` form).
    #[allow(clippy::too_many_arguments)]
    fn draw_image_region(
        &mut self,
        image: &Self::Image,
        sx: f64,
        sy: f64,
        sw: f64,
        sh: f64,
        dx: f64,
        dy: f64,
        dw: f64,
        dh: f64,
    );

    /// Push the current transform state.
    fn save(&mut self);

    /// Pop to the previously saved transform state.
    fn restore(&mut self);

    /// Translate the origin by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64);
}

/// A resolved draw rectangle within a cell's draw box.
///
/// `source` is set only for [`ObjectFit::Cover`], which crops the source
/// instead of letterboxing the destination.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct FitRect {
    pub source: Option<(f64, f64, f64, f64)>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scale and position content of size `(rw, rh)` inside a box of
/// `(mw, mh)` per the object-fit policy. All four sizes must be positive.
pub(crate) fn fit_rect(
    fit: ObjectFit,
    rw: f64,
    rh: f64,
    mw: f64,
    mh: f64,
    justify: Align,
    align: Align,
) -> FitRect {
    match fit {
        ObjectFit::Contain => {
            let scale = (rw / mw).max(rh / mh);
            place(rw / scale, rh / scale, mw, mh, justify, align)
        }
        ObjectFit::Fill => place(mw, mh, mw, mh, justify, align),
        ObjectFit::Auto => {
            let scale = (rw / mw).max(rh / mh);
            if scale > 1.0 {
                place(rw / scale, rh / scale, mw, mh, justify, align)
            } else {
                place(rw, rh, mw, mh, justify, align)
            }
        }
        ObjectFit::Cover => {
            // Fill the box, crop the overflow out of the source. Justify and
            // align choose which source region stays visible.
            let scale = (mw / rw).max(mh / rh);
            let sw = mw / scale;
            let sh = mh / scale;
            let sx = align_offset(justify, rw - sw);
            let sy = align_offset(align, rh - sh);
            FitRect {
                source: Some((sx, sy, sw, sh)),
                x: 0.0,
                y: 0.0,
                width: mw,
                height: mh,
            }
        }
    }
}

fn place(dw: f64, dh: f64, mw: f64, mh: f64, justify: Align, align: Align) -> FitRect {
    FitRect {
        source: None,
        x: align_offset(justify, mw - dw),
        y: align_offset(align, mh - dh),
        width: dw,
        height: dh,
    }
}

fn align_offset(align: Align, slack: f64) -> f64 {
    match align {
        Align::Start => 0.0,
        Align::Center => slack * 0.5,
        Align::End => slack,
    }
}

/// Surface dimensions for the laid-out tracks: content plus interior gaps
/// plus a one-gap outer margin on each side. An empty grid degrades to the
/// outer margins alone.
pub(crate) fn surface_size(col_widths: &[f64], row_heights: &[f64], gap: Gap) -> (f64, f64) {
    let content_w: f64 = col_widths.iter().sum();
    let content_h: f64 = row_heights.iter().sum();
    let gap_w = gap.col * col_widths.len().saturating_sub(1) as f64;
    let gap_h = gap.row * row_heights.len().saturating_sub(1) as f64;
    (
        content_w + gap_w + gap.col * 2.0,
        content_h + gap_h + gap.row * 2.0,
    )
}

/// Issue the draw calls for a computed layout.
///
/// Resizes and clears the surface, fills the background if configured,
/// then walks rows and columns with cumulative translate offsets, drawing
/// every cell that has an image and a positive draw box. Zero-size boxes
/// skip the draw call rather than failing.
pub(crate) fn render_grid<S: Surface>(
    surface: &mut S,
    layout: &LayoutResult,
    items: &[Item<S::Image>],
    config: &GridConfig,
) {
    surface.create_or_resize(layout.surface_width, layout.surface_height);
    surface.clear_rect(0.0, 0.0, layout.surface_width, layout.surface_height);
    if let Some(color) = config.background {
        surface.save();
        surface.set_fill_style(color);
        surface.fill_rect(0.0, 0.0, layout.surface_width, layout.surface_height);
        surface.restore();
    }

    surface.save();
    surface.translate(config.padding.left, config.padding.top);
    let mut y = 0.0;
    for (r, row) in layout.cells.iter().enumerate() {
        surface.save();
        surface.translate(0.0, y);
        let mut x = 0.0;
        for (c, cell) in row.iter().enumerate() {
            let drawable = cell.max_width > 0.0
                && cell.max_height > 0.0
                && cell.real_width > 0.0
                && cell.real_height > 0.0;
            if drawable
                && let Some(image) = cell.item.and_then(|i| items[i].image.as_ref())
            {
                let fit = fit_rect(
                    cell.object_fit,
                    cell.real_width,
                    cell.real_height,
                    cell.max_width,
                    cell.max_height,
                    cell.justify_items,
                    cell.align_items,
                );
                surface.save();
                surface.translate(x, 0.0);
                match fit.source {
                    Some((sx, sy, sw, sh)) => surface
                        .draw_image_region(image, sx, sy, sw, sh, fit.x, fit.y, fit.width, fit.height),
                    None => surface.draw_image(image, fit.x, fit.y, fit.width, fit.height),
                }
                surface.restore();
            }
            x += layout.col_widths[c] + config.gap.col;
        }
        surface.restore();
        y += layout.row_heights[r] + config.gap.row;
    }
    surface.restore();
}
