//! Core types for the Wayfield flow-field workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the grid and the field builder: the 4-bit
//! [`Direction`] codec, per-cell [`EntryMask`] whitelists, [`GridCoord`],
//! the per-field [`BuildId`] generation, and the [`FieldError`] enum.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod direction;
pub mod error;
pub mod id;

pub use coord::GridCoord;
pub use direction::{Direction, EntryMask};
pub use error::FieldError;
pub use id::{Advance, BuildCounter, BuildId};
