//! Grid layout and rendering for image collages.
//!
//! Arranges rectangular image items into a grid — with row/column spans,
//! track sizing policies, alignment, and CSS `object-fit` scaling — and
//! issues draw calls against an abstract surface. Pure geometry: pixels,
//! decoding, and export belong to the [`Surface`] implementor.
//!
//! # Modules
//!
//! - [`geometry`] — padding/gap normalization and colors
//! - [`template`] — items, cells, and grid placement
//! - [`sizing`] — track sizing policies and per-cell draw boxes
//! - [`render`] — surface collaborator traits and object-fit math
//! - [`grid`] — configuration, the pure layout entry point, and the
//!   stateful [`Grid`] wrapper

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod geometry;
pub mod grid;
pub mod render;
pub mod sizing;
pub mod template;

pub use geometry::{Gap, Padding, Rgba};
pub use grid::{ConfigError, Grid, GridConfig, GridError, LayoutResult, layout};
pub use render::{ImageSource, Surface};
pub use sizing::SizingMode;
pub use template::{Align, Cell, Item, LayoutError, ObjectFit};
