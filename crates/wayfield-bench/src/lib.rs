//! Benchmark profiles for the Wayfield flow-field builder.
//!
//! - [`open_profile`]: a fully open square with one goal in the middle
//! - [`random_profile`]: a seeded random map with goals along the top row
//!
//! Both return an unbuilt field plus the points of interest to build with,
//! so benches can time the build on its own.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use wayfield::prelude::*;
use wayfield_test_utils::random_map;

/// Layers allocated by every profile.
pub const PROFILE_LAYERS: usize = 2;

/// A `side * side` open field and its single central goal.
pub fn open_profile(side: u32) -> Result<(FlowField, Vec<GridCoord>), FieldError> {
    let field = FlowField::builder()
        .size(side, side)
        .layers(PROFILE_LAYERS)
        .open_cells()
        .build()?;
    Ok((field, vec![GridCoord::new(side / 2, side / 2)]))
}

/// A `side * side` seeded random map and every open cell of its top row
/// as goals.
pub fn random_profile(side: u32, seed: u64) -> Result<(FlowField, Vec<GridCoord>), FieldError> {
    let map = random_map(side, side, seed);
    let mut field = FlowField::builder()
        .size(side, side)
        .layers(PROFILE_LAYERS)
        .build()?;
    map.apply_to(field.cells_mut());
    let pois = map.open_coords().into_iter().filter(|c| c.y == 0).collect();
    Ok((field, pois))
}

/// Every in-grid coordinate of `field`, row-major.
pub fn all_coords(field: &FlowField) -> Vec<GridCoord> {
    field.grid().cells().map(|(coord, _)| coord).collect()
}
