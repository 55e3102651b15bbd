//! The dense layered grid.

use crate::cell::{Cell, LayerSlot};
use crate::config::GridConfig;
use crate::index::{self, Neighbours};
use wayfield_core::{BuildId, FieldError, GridCoord};

/// A fixed `width * height` grid of [`Cell`]s with `layers` navigation
/// layers of [`LayerSlot`]s.
///
/// Slots are stored layer-major in one buffer of `width * height * layers`
/// entries, so `slots[layer * cell_count + index]` is the slot of cell
/// `index` on `layer`. Every per-layer accessor checks the layer index.
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    layers: usize,
    cells: Vec<Cell>,
    slots: Vec<LayerSlot>,
}

impl Grid {
    /// Allocate a grid from `config`.
    ///
    /// # Errors
    ///
    /// Propagates [`GridConfig::validate`] failures.
    pub fn new(config: &GridConfig) -> Result<Self, FieldError> {
        let (cell_count, slot_count) = config.validate()?;
        let cell = Cell::new(config.initial_entry, config.initial_allow_diagonal);
        Ok(Self {
            width: config.width,
            height: config.height,
            layers: config.layers,
            cells: vec![cell; cell_count],
            slots: vec![LayerSlot::default(); slot_count],
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of navigation layers.
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// `width * height`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Row-major index of `coord`.
    ///
    /// # Errors
    ///
    /// [`FieldError::CoordOutOfBounds`] if `coord` is outside the grid.
    pub fn index_of(&self, coord: GridCoord) -> Result<usize, FieldError> {
        if !self.contains(coord) {
            return Err(FieldError::CoordOutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            });
        }
        Ok(index::coord_to_index(coord, self.width))
    }

    /// Coordinate of `index`, or `None` past the last cell.
    pub fn coord_of(&self, index: usize) -> Option<GridCoord> {
        (index < self.cells.len()).then(|| index::index_to_coord(index, self.width))
    }

    /// In-grid neighbours of `index` in search order.
    pub fn neighbours(&self, index: usize) -> Neighbours {
        index::neighbours(index, self.width, self.height)
    }

    /// Fail unless `0 <= layer < layers`.
    pub fn check_layer(&self, layer: usize) -> Result<(), FieldError> {
        if layer >= self.layers {
            return Err(FieldError::LayerOutOfRange {
                layer,
                layers: self.layers,
            });
        }
        Ok(())
    }

    /// The cell at `coord`.
    pub fn cell(&self, coord: GridCoord) -> Result<&Cell, FieldError> {
        let i = self.index_of(coord)?;
        Ok(&self.cells[i])
    }

    /// Mutable access to the cell at `coord`, for setup.
    pub fn cell_mut(&mut self, coord: GridCoord) -> Result<&mut Cell, FieldError> {
        let i = self.index_of(coord)?;
        Ok(&mut self.cells[i])
    }

    /// All cells in row-major order with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (GridCoord, &Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (index::index_to_coord(i, width), c))
    }

    /// Mutable iteration over all cells with their coordinates.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = (GridCoord, &mut Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(i, c)| (index::index_to_coord(i, width), c))
    }

    /// The slot of `coord` on `layer`.
    pub fn layer_slot(&self, coord: GridCoord, layer: usize) -> Result<&LayerSlot, FieldError> {
        let i = self.index_of(coord)?;
        Ok(&self.layer_slots(layer)?[i])
    }

    /// Mutable slot of `coord` on `layer`.
    pub fn layer_slot_mut(
        &mut self,
        coord: GridCoord,
        layer: usize,
    ) -> Result<&mut LayerSlot, FieldError> {
        let i = self.index_of(coord)?;
        let (_, slots) = self.split_layer_mut(layer)?;
        Ok(&mut slots[i])
    }

    /// Every slot of `layer`, indexed like the cells.
    pub fn layer_slots(&self, layer: usize) -> Result<&[LayerSlot], FieldError> {
        self.check_layer(layer)?;
        let n = self.cells.len();
        Ok(&self.slots[layer * n..(layer + 1) * n])
    }

    /// The shared cells together with `layer`'s slots, the latter mutable.
    ///
    /// This is the borrow a build needs: read entry constraints while
    /// writing one layer.
    pub fn split_layer_mut(
        &mut self,
        layer: usize,
    ) -> Result<(&[Cell], &mut [LayerSlot]), FieldError> {
        self.check_layer(layer)?;
        let n = self.cells.len();
        Ok((&self.cells, &mut self.slots[layer * n..(layer + 1) * n]))
    }

    /// Reset every slot stamp on every layer to [`BuildId::NEVER`].
    ///
    /// Directions are kept. Required when a build counter wraps.
    pub fn reset_build_ids(&mut self) {
        for slot in &mut self.slots {
            slot.set_build_id(BuildId::NEVER);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfield_core::{Direction, EntryMask};

    fn grid(width: u32, height: u32, layers: usize) -> Grid {
        Grid::new(&GridConfig::new(width, height).with_layers(layers)).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_allocates_cells_and_slots() {
        let g = grid(10, 8, 2);
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 8);
        assert_eq!(g.layers(), 2);
        assert_eq!(g.cell_count(), 80);
        assert!(g.cells().all(|(_, c)| c.is_wall()));
        assert!(g.layer_slots(1).unwrap().iter().all(|s| *s == LayerSlot::default()));
    }

    #[test]
    fn new_applies_initial_cell_state() {
        let g = Grid::new(&GridConfig::new(3, 3).open()).unwrap();
        assert!(g.cells().all(|(_, c)| *c == Cell::open()));
    }

    #[test]
    fn new_rejects_empty_grid() {
        assert!(matches!(
            Grid::new(&GridConfig::new(0, 3)),
            Err(FieldError::EmptyGrid)
        ));
    }

    // ── Coordinates ─────────────────────────────────────────────

    #[test]
    fn index_of_checks_bounds() {
        let g = grid(10, 8, 1);
        assert_eq!(g.index_of(GridCoord::new(3, 2)), Ok(23));
        assert_eq!(
            g.index_of(GridCoord::new(10, 0)),
            Err(FieldError::CoordOutOfBounds {
                coord: GridCoord::new(10, 0),
                width: 10,
                height: 8,
            })
        );
        assert!(g.index_of(GridCoord::new(0, 8)).is_err());
    }

    #[test]
    fn coord_of_inverts_index_of() {
        let g = grid(4, 3, 1);
        for (coord, _) in g.cells() {
            let i = g.index_of(coord).unwrap();
            assert_eq!(g.coord_of(i), Some(coord));
        }
        assert_eq!(g.coord_of(12), None);
    }

    #[test]
    fn cells_iterate_row_major() {
        let g = grid(3, 2, 1);
        let coords: Vec<GridCoord> = g.cells().map(|(c, _)| c).collect();
        assert_eq!(coords[0], GridCoord::new(0, 0));
        assert_eq!(coords[2], GridCoord::new(2, 0));
        assert_eq!(coords[3], GridCoord::new(0, 1));
        assert_eq!(coords.len(), 6);
    }

    #[test]
    fn cells_mut_configures_in_place() {
        let mut g = grid(3, 3, 1);
        for (coord, cell) in g.cells_mut() {
            if coord.y == 1 {
                cell.set_entry_mask(EntryMask::ALL);
            }
        }
        assert!(!g.cell(GridCoord::new(2, 1)).unwrap().is_wall());
        assert!(g.cell(GridCoord::new(2, 2)).unwrap().is_wall());
    }

    // ── Layers ──────────────────────────────────────────────────

    #[test]
    fn layer_access_is_bounds_checked() {
        let mut g = grid(2, 2, 2);
        assert!(g.layer_slots(1).is_ok());
        assert_eq!(
            g.layer_slots(2).unwrap_err(),
            FieldError::LayerOutOfRange {
                layer: 2,
                layers: 2
            }
        );
        assert!(g.split_layer_mut(5).is_err());
        assert!(g.layer_slot(GridCoord::new(0, 0), 2).is_err());
    }

    #[test]
    fn layers_do_not_alias() {
        let mut g = grid(2, 2, 2);
        let c = GridCoord::new(1, 1);
        g.layer_slot_mut(c, 0).unwrap().set_direction(Direction::EAST);
        g.layer_slot_mut(c, 1).unwrap().set_direction(Direction::WEST);
        assert_eq!(g.layer_slot(c, 0).unwrap().direction(), Direction::EAST);
        assert_eq!(g.layer_slot(c, 1).unwrap().direction(), Direction::WEST);
    }

    #[test]
    fn reset_build_ids_keeps_directions() {
        let mut g = grid(2, 2, 2);
        let c = GridCoord::new(0, 1);
        {
            let slot = g.layer_slot_mut(c, 1).unwrap();
            slot.set_direction(Direction::NORTH);
            slot.set_build_id(BuildId(9));
        }
        g.reset_build_ids();
        let slot = g.layer_slot(c, 1).unwrap();
        assert_eq!(slot.build_id(), BuildId::NEVER);
        assert_eq!(slot.direction(), Direction::NORTH);
    }

    #[test]
    fn neighbours_of_corner() {
        let g = grid(3, 3, 1);
        let n = g.neighbours(0);
        assert_eq!(
            n.as_slice(),
            &[
                (Direction::EAST, 1),
                (Direction::SOUTH, 3),
                (Direction::SOUTH_EAST, 4)
            ]
        );
    }
}
