//! Dense layered cell grid for Wayfield flow fields.
//!
//! A [`Grid`] owns one [`Cell`] per position (entry mask and diagonal
//! flag, shared by every layer) and one [`LayerSlot`] per position per
//! navigation layer (direction and build stamp). Layers are stored
//! contiguously so a build can borrow one layer mutably while reading the
//! shared cells.
//!
//! # Indexing
//!
//! Positions are row-major: `index = y * width + x`. The free functions in
//! [`index`] convert between coordinates and indices and step an index
//! one cell in a [`Direction`](wayfield_core::Direction).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod grid;
pub mod index;

pub use cell::{Cell, LayerSlot};
pub use config::GridConfig;
pub use grid::Grid;
pub use index::{coord_to_index, index_to_coord, neighbours, step_index, Neighbours};
