//! Wayfield: layered flow fields for steering many agents over a 2D grid.
//!
//! A [`FlowField`] holds a grid of cells, each with an entry whitelist
//! (which directions an agent may travel to step into it) and a flag
//! allowing diagonal entry. On top of that grid sit any number of
//! navigation layers. Building a layer runs one multi-source breadth-first
//! fill from a set of points of interest and leaves every reachable cell
//! pointing one step toward the nearest of them. Agents then read their
//! next move in constant time.
//!
//! # Quick start
//!
//! ```rust
//! use wayfield::prelude::*;
//!
//! // 5×3 room, open everywhere, with a one-way door in the middle column.
//! let mut field = FlowField::builder()
//!     .size(5, 3)
//!     .layers(2)
//!     .open_cells()
//!     .build()
//!     .unwrap();
//! field.set_entry_mask(GridCoord::new(2, 0), EntryMask::WALL).unwrap();
//! field.set_entry_mask(GridCoord::new(2, 2), EntryMask::WALL).unwrap();
//! field
//!     .set_entry_mask(GridCoord::new(2, 1), EntryMask::from(Direction::EAST))
//!     .unwrap();
//!
//! // Layer 0 flows east, through the door.
//! field.add_points_of_interest(0, &[GridCoord::new(4, 1)]).unwrap();
//! assert_eq!(field.direction(0, GridCoord::new(0, 1)).unwrap(), Direction::EAST);
//!
//! // Layer 1 flows west, but the door only admits eastbound agents.
//! field.add_points_of_interest(1, &[GridCoord::new(0, 1)]).unwrap();
//! assert_eq!(field.direction(1, GridCoord::new(4, 1)).unwrap(), Direction::STOP);
//! ```
//!
//! # Crates
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wayfield-core` | `Direction`, `EntryMask`, `GridCoord`, build ids, errors |
//! | [`grid`] | `wayfield-grid` | `Cell`, `LayerSlot`, `Grid`, `GridConfig`, index helpers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod field;
mod flood;
mod query;

pub use field::{FlowField, FlowFieldBuilder};
pub use flood::BuildSummary;

/// Core vocabulary types (`wayfield-core`).
pub use wayfield_core as types;

/// Dense layered grid storage (`wayfield-grid`).
///
/// Reachable through [`FlowField::grid`] for read-only inspection, e.g.
/// rendering a layer or checking build stamps.
pub use wayfield_grid as grid;

/// Common imports for typical Wayfield usage.
///
/// ```rust
/// use wayfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{BuildSummary, FlowField, FlowFieldBuilder};
    pub use wayfield_core::{BuildId, Direction, EntryMask, FieldError, GridCoord};
    pub use wayfield_grid::Cell;
}
