//! Error type shared by every Wayfield crate.
//!
//! All failures are programmer errors (bad layer, coordinate off the grid,
//! impossible dimensions). Nothing here is transient, so nothing is retried.

use crate::coord::GridCoord;
use std::error::Error;
use std::fmt;

/// Errors from grid construction, setup, builds, and queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// A layer index outside `[0, layers)`.
    LayerOutOfRange {
        /// The offending layer.
        layer: usize,
        /// Number of layers the field was built with.
        layers: usize,
    },
    /// A coordinate outside the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: GridCoord,
        /// Grid width in cells.
        width: u32,
        /// Grid height in cells.
        height: u32,
    },
    /// Attempted to construct a grid with zero width or height.
    EmptyGrid,
    /// Attempted to construct a field with zero navigation layers.
    NoLayers,
    /// `width * height * layers` does not fit in memory indexing.
    GridTooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Requested layer count.
        layers: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LayerOutOfRange { layer, layers } => {
                write!(f, "layer {layer} out of range: field has {layers} layers")
            }
            Self::CoordOutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(
                    f,
                    "coordinate {coord} out of bounds: [0, {width}) x [0, {height})"
                )
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::NoLayers => write!(f, "field must have at least one layer"),
            Self::GridTooLarge {
                width,
                height,
                layers,
            } => {
                write!(
                    f,
                    "grid too large: {width} x {height} cells x {layers} layers overflows"
                )
            }
        }
    }
}

impl Error for FieldError {}
