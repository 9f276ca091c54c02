//! Input normalization for padding, gaps, and colors.
//!
//! The configuration surface accepts shorthand forms (a single number for
//! all four padding sides, a pair for row/column gaps). Everything is
//! normalized here into fixed-arity structs so the rest of the crate never
//! sees a shape union.

/// Four-sided padding in CSS order (top, right, bottom, left).
///
/// Applied as a translate offset at render time; it does not grow the
/// surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

impl Padding {
    /// Equal padding on all four sides.
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Explicit per-side padding (top, right, bottom, left).
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Normalize a shorthand slice.
    ///
    /// Empty → default. Otherwise the slice is tiled up to four values and
    /// truncated: `[a]` → `(a,a,a,a)`, `[a,b]` → `(a,b,a,b)`,
    /// `[a,b,c]` → `(a,b,c,a)`, four or more → first four.
    pub fn from_slice(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let at = |i: usize| values[i % values.len()];
        Self {
            top: at(0),
            right: at(1),
            bottom: at(2),
            left: at(3),
        }
    }

    /// True when any side is negative.
    pub fn any_negative(&self) -> bool {
        self.top < 0.0 || self.right < 0.0 || self.bottom < 0.0 || self.left < 0.0
    }
}

/// Row and column gap between grid tracks.
///
/// The row gap separates rows vertically; the column gap separates columns
/// horizontally. One extra gap width is also used as the outer surface
/// margin on each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gap {
    pub row: f64,
    pub col: f64,
}

impl Default for Gap {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

impl Gap {
    /// Same gap on both axes.
    pub const fn uniform(value: f64) -> Self {
        Self {
            row: value,
            col: value,
        }
    }

    /// Explicit (row, col) gap.
    pub const fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Normalize a shorthand slice.
    ///
    /// Two or more values → `(v[0], v[1])`. Anything shorter falls back to
    /// the default — a one-element slice is not treated as uniform.
    pub fn from_slice(values: &[f64]) -> Self {
        if values.len() >= 2 {
            Self::new(values[0], values[1])
        } else {
            Self::default()
        }
    }

    /// True when either axis is negative.
    pub fn any_negative(&self) -> bool {
        self.row < 0.0 || self.col < 0.0
    }
}

/// Surface background color (8-bit sRGB with alpha).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully opaque color from RGB channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// White, fully opaque.
    pub const fn white() -> Self {
        Self::opaque(255, 255, 255)
    }

    /// Black, fully opaque.
    pub const fn black() -> Self {
        Self::opaque(0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Padding ─────────────────────────────────────────────────────────

    #[test]
    fn padding_default_is_ten() {
        assert_eq!(Padding::default(), Padding::new(10.0, 10.0, 10.0, 10.0));
    }

    #[test]
    fn padding_from_empty_slice_is_default() {
        assert_eq!(Padding::from_slice(&[]), Padding::default());
    }

    #[test]
    fn padding_tiles_one_element() {
        assert_eq!(Padding::from_slice(&[5.0]), Padding::uniform(5.0));
    }

    #[test]
    fn padding_tiles_two_elements() {
        // [a, b] → (a, b, a, b)
        assert_eq!(
            Padding::from_slice(&[5.0, 8.0]),
            Padding::new(5.0, 8.0, 5.0, 8.0)
        );
    }

    #[test]
    fn padding_tiles_three_elements() {
        // [a, b, c] → (a, b, c, a)
        assert_eq!(
            Padding::from_slice(&[1.0, 2.0, 3.0]),
            Padding::new(1.0, 2.0, 3.0, 1.0)
        );
    }

    #[test]
    fn padding_truncates_long_slice() {
        assert_eq!(
            Padding::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            Padding::new(1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn padding_negative_detection() {
        assert!(Padding::new(1.0, -1.0, 0.0, 0.0).any_negative());
        assert!(!Padding::uniform(0.0).any_negative());
    }

    // ── Gap ─────────────────────────────────────────────────────────────

    #[test]
    fn gap_default_is_ten() {
        assert_eq!(Gap::default(), Gap::new(10.0, 10.0));
    }

    #[test]
    fn gap_from_pair() {
        assert_eq!(Gap::from_slice(&[4.0, 6.0]), Gap::new(4.0, 6.0));
    }

    #[test]
    fn gap_extra_values_ignored() {
        assert_eq!(Gap::from_slice(&[4.0, 6.0, 9.0]), Gap::new(4.0, 6.0));
    }

    #[test]
    fn gap_single_element_falls_back_to_default() {
        assert_eq!(Gap::from_slice(&[4.0]), Gap::default());
    }

    #[test]
    fn gap_uniform() {
        assert_eq!(Gap::uniform(3.0), Gap::new(3.0, 3.0));
    }

    // ── Rgba ────────────────────────────────────────────────────────────

    #[test]
    fn rgba_consts() {
        assert_eq!(Rgba::white(), Rgba::opaque(255, 255, 255));
        assert_eq!(Rgba::black().a, 255);
    }
}
