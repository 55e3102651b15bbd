//! Read-only steering queries on a built [`FlowField`].
//!
//! All queries are bounds-checked on both the layer and the coordinate.
//! None of them need a layer to have been built: an unbuilt slot reads as
//! [`Direction::STOP`].

use crate::field::FlowField;
use wayfield_core::{Direction, FieldError, GridCoord};
use wayfield_grid::step_index;

impl FlowField {
    /// The stored direction of `coord` on `layer`.
    ///
    /// One of the eight compass directions, or [`Direction::DEST`] (at a
    /// point of interest), [`Direction::WALL`] / [`Direction::STOP`] (no
    /// way forward).
    pub fn direction(&self, layer: usize, coord: GridCoord) -> Result<Direction, FieldError> {
        Ok(self.grid.layer_slot(coord, layer)?.direction())
    }

    /// The stored direction as an `f32` vector.
    ///
    /// Cardinals are unit length; diagonals have components of ±0.5.
    /// Non-moving values give `(0.0, 0.0)`. Y grows southward.
    pub fn direction_vector(&self, layer: usize, coord: GridCoord) -> Result<(f32, f32), FieldError> {
        Ok(self.direction(layer, coord)?.vector_f32())
    }

    /// `f64` counterpart of [`direction_vector`](Self::direction_vector).
    pub fn direction_vector_f64(
        &self,
        layer: usize,
        coord: GridCoord,
    ) -> Result<(f64, f64), FieldError> {
        Ok(self.direction(layer, coord)?.vector_f64())
    }

    /// The integer step `(dx, dy)` toward the nearest point of interest,
    /// each component in `{-1, 0, 1}`.
    pub fn step_delta(&self, layer: usize, coord: GridCoord) -> Result<(i32, i32), FieldError> {
        Ok(self.direction(layer, coord)?.axis_delta())
    }

    /// The neighbour an agent on `coord` should move to.
    ///
    /// Returns `coord` itself when the stored direction is not a movement,
    /// so check [`direction`](Self::direction) to detect arrival or a dead
    /// end.
    pub fn next_cell(&self, layer: usize, coord: GridCoord) -> Result<GridCoord, FieldError> {
        let index = self.grid.index_of(coord)?;
        let dir = self.grid.layer_slots(layer)?[index].direction();
        let (width, height) = (self.grid.width(), self.grid.height());
        Ok(step_index(index, dir, width, height)
            .and_then(|next| self.grid.coord_of(next))
            .unwrap_or(coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfield_core::EntryMask;

    fn open_field(width: u32, height: u32) -> FlowField {
        FlowField::builder()
            .size(width, height)
            .open_cells()
            .build()
            .unwrap()
    }

    #[test]
    fn unbuilt_layer_reads_stop() {
        let field = open_field(2, 2);
        let c = GridCoord::new(1, 1);
        assert_eq!(field.direction(0, c).unwrap(), Direction::STOP);
        assert_eq!(field.direction_vector(0, c).unwrap(), (0.0, 0.0));
        assert_eq!(field.step_delta(0, c).unwrap(), (0, 0));
        assert_eq!(field.next_cell(0, c).unwrap(), c);
    }

    #[test]
    fn diagonal_vector_is_half_per_axis() {
        let mut field = open_field(3, 3);
        field
            .add_points_of_interest(0, &[GridCoord::new(2, 0)])
            .unwrap();
        let corner = GridCoord::new(0, 2);
        assert_eq!(field.direction(0, corner).unwrap(), Direction::NORTH_EAST);
        assert_eq!(field.direction_vector(0, corner).unwrap(), (0.5, -0.5));
        assert_eq!(field.direction_vector_f64(0, corner).unwrap(), (0.5, -0.5));
        assert_eq!(field.step_delta(0, corner).unwrap(), (1, -1));
        assert_eq!(field.next_cell(0, corner).unwrap(), GridCoord::new(1, 1));
    }

    #[test]
    fn cardinal_vector_is_unit() {
        let mut field = open_field(3, 1);
        field
            .add_points_of_interest(0, &[GridCoord::new(2, 0)])
            .unwrap();
        assert_eq!(
            field.direction_vector(0, GridCoord::new(0, 0)).unwrap(),
            (1.0, 0.0)
        );
    }

    #[test]
    fn destination_and_wall_do_not_move() {
        let mut field = open_field(3, 1);
        field
            .set_entry_mask(GridCoord::new(1, 0), EntryMask::WALL)
            .unwrap();
        field
            .add_points_of_interest(0, &[GridCoord::new(0, 0)])
            .unwrap();

        let goal = GridCoord::new(0, 0);
        assert_eq!(field.direction(0, goal).unwrap(), Direction::DEST);
        assert_eq!(field.direction_vector(0, goal).unwrap(), (0.0, 0.0));
        assert_eq!(field.next_cell(0, goal).unwrap(), goal);

        let wall = GridCoord::new(1, 0);
        assert_eq!(field.direction(0, wall).unwrap(), Direction::WALL);
        assert_eq!(field.next_cell(0, wall).unwrap(), wall);

        // Sealed off behind the wall.
        assert_eq!(
            field.direction(0, GridCoord::new(2, 0)).unwrap(),
            Direction::STOP
        );
    }

    #[test]
    fn next_cell_reads_the_requested_layer() {
        let mut field = FlowField::builder()
            .size(3, 1)
            .layers(2)
            .open_cells()
            .build()
            .unwrap();
        field
            .add_points_of_interest(0, &[GridCoord::new(0, 0)])
            .unwrap();
        field
            .add_points_of_interest(1, &[GridCoord::new(2, 0)])
            .unwrap();
        let mid = GridCoord::new(1, 0);
        assert_eq!(field.next_cell(0, mid).unwrap(), GridCoord::new(0, 0));
        assert_eq!(field.next_cell(1, mid).unwrap(), GridCoord::new(2, 0));
        assert!(matches!(
            field.next_cell(2, mid),
            Err(FieldError::LayerOutOfRange { layer: 2, layers: 2 })
        ));
    }

    #[test]
    fn queries_check_layer_and_coord() {
        let field = open_field(2, 2);
        assert_eq!(
            field.direction(1, GridCoord::new(0, 0)).unwrap_err(),
            FieldError::LayerOutOfRange { layer: 1, layers: 1 }
        );
        assert!(matches!(
            field.next_cell(0, GridCoord::new(2, 0)),
            Err(FieldError::CoordOutOfBounds { .. })
        ));
        assert!(field.direction_vector(0, GridCoord::new(0, 5)).is_err());
        assert!(field.direction_vector_f64(3, GridCoord::new(0, 0)).is_err());
        assert!(field.step_delta(0, GridCoord::new(9, 9)).is_err());
    }
}
