//! Following and drawing a built layer.

use wayfield_core::{FieldError, GridCoord};
use wayfield_grid::{index_to_coord, step_index, Grid};

/// Follow `layer`'s directions from `start` until a non-moving cell.
///
/// The returned path starts with `start` and ends on the first cell whose
/// direction is not a movement (normally `DEST`). Gives up after
/// `cell_count` steps, so a cyclic layer yields a path of
/// `cell_count + 1` entries instead of looping forever.
pub fn trace_path(grid: &Grid, layer: usize, start: GridCoord) -> Result<Vec<GridCoord>, FieldError> {
    let slots = grid.layer_slots(layer)?;
    let mut index = grid.index_of(start)?;
    let mut path = vec![start];
    for _ in 0..grid.cell_count() {
        let dir = slots[index].direction();
        match step_index(index, dir, grid.width(), grid.height()) {
            Some(next) => {
                index = next;
                path.push(index_to_coord(next, grid.width()));
            }
            None => break,
        }
    }
    Ok(path)
}

/// One line per row, one arrow glyph per cell, separated by spaces.
///
/// `#` marks walls and unreached cells, `X` points of interest.
pub fn render_layer(grid: &Grid, layer: usize) -> Result<String, FieldError> {
    let slots = grid.layer_slots(layer)?;
    let lines: Vec<String> = slots
        .chunks(grid.width() as usize)
        .map(|row| {
            row.iter()
                .map(|slot| slot.direction().glyph().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    Ok(lines.join("\n"))
}
