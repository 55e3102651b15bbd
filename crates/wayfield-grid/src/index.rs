//! Row-major index arithmetic for 2D grids.
//!
//! These are free functions over `(width, height)` so that a build can run
//! them while holding a mutable borrow of a layer.

use smallvec::SmallVec;
use wayfield_core::{Direction, GridCoord};

/// In-grid neighbours of a cell as `(direction, index)`, in
/// [`Direction::SEARCH_ORDER`]. Interior cells have 8, edges 5, corners 3.
pub type Neighbours = SmallVec<[(Direction, usize); 8]>;

/// `y * width + x`. Does not check bounds.
pub fn coord_to_index(coord: GridCoord, width: u32) -> usize {
    coord.y as usize * width as usize + coord.x as usize
}

/// Inverse of [`coord_to_index`].
pub fn index_to_coord(index: usize, width: u32) -> GridCoord {
    let w = width as usize;
    GridCoord::new((index % w) as u32, (index / w) as u32)
}

/// Index of the cell one step from `index` in `dir`.
///
/// Returns `None` if the step leaves the grid, if `index` is not inside
/// the grid, or if `dir` is not one of the eight compass directions.
pub fn step_index(index: usize, dir: Direction, width: u32, height: u32) -> Option<usize> {
    let w = width as usize;
    let h = height as usize;
    if w == 0 || index >= w * h || !dir.is_movement() {
        return None;
    }
    let (dx, dy) = dir.axis_delta();
    let x = (index % w).checked_add_signed(dx as isize)?;
    let y = (index / w).checked_add_signed(dy as isize)?;
    if x >= w || y >= h {
        return None;
    }
    Some(y * w + x)
}

/// All in-grid neighbours of `index`, in search order.
pub fn neighbours(index: usize, width: u32, height: u32) -> Neighbours {
    Direction::SEARCH_ORDER
        .iter()
        .filter_map(|&dir| step_index(index, dir, width, height).map(|n| (dir, n)))
        .collect()
}
