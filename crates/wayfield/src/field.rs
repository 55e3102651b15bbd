//! The layered flow field: construction, cell setup, and builds.

use crate::flood::{self, BuildSummary};
use wayfield_core::{Advance, BuildCounter, BuildId, EntryMask, FieldError, GridCoord};
use wayfield_grid::{Cell, Grid, GridConfig};

/// A grid of movement constraints plus `layers` independent flow fields
/// over it.
///
/// Typical use:
///
/// 1. configure cells with [`set_entry_mask`](Self::set_entry_mask),
///    [`set_allow_diagonal`](Self::set_allow_diagonal) or
///    [`cells_mut`](Self::cells_mut);
/// 2. build each layer with
///    [`add_points_of_interest`](Self::add_points_of_interest);
/// 3. steer agents with [`direction`](Self::direction),
///    [`next_cell`](Self::next_cell) and friends.
///
/// # Examples
///
/// ```
/// use wayfield::prelude::*;
///
/// let mut field = FlowField::builder().size(4, 1).open_cells().build().unwrap();
/// field.add_points_of_interest(0, &[GridCoord::new(0, 0)]).unwrap();
///
/// assert_eq!(field.direction(0, GridCoord::new(3, 0)).unwrap(), Direction::WEST);
/// assert_eq!(field.next_cell(0, GridCoord::new(3, 0)).unwrap(), GridCoord::new(2, 0));
/// assert_eq!(field.direction(0, GridCoord::new(0, 0)).unwrap(), Direction::DEST);
/// ```
#[derive(Clone, Debug)]
pub struct FlowField {
    pub(crate) grid: Grid,
    builds: BuildCounter,
}

/// Builder for [`FlowField`].
///
/// Required: `size`. Defaults: one layer, every cell a wall.
#[derive(Clone, Debug)]
pub struct FlowFieldBuilder {
    config: GridConfig,
}

impl FlowField {
    /// Create a new builder for configuring a `FlowField`.
    pub fn builder() -> FlowFieldBuilder {
        FlowFieldBuilder {
            config: GridConfig::new(0, 0),
        }
    }

    /// A `width * height` field with `layers` layers, every cell a wall.
    pub fn new(width: u32, height: u32, layers: usize) -> Result<Self, FieldError> {
        Self::from_config(&GridConfig::new(width, height).with_layers(layers))
    }

    /// A field allocated from an explicit grid config.
    pub fn from_config(config: &GridConfig) -> Result<Self, FieldError> {
        Ok(Self {
            grid: Grid::new(config)?,
            builds: BuildCounter::new(),
        })
    }

    /// The underlying grid, read-only.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Number of navigation layers.
    pub fn layers(&self) -> usize {
        self.grid.layers()
    }

    /// Stamp of the most recent build on any layer, or [`BuildId::NEVER`].
    pub fn last_build(&self) -> BuildId {
        self.builds.last()
    }

    // ── Setup ───────────────────────────────────────────────────

    /// The cell at `coord`.
    pub fn cell(&self, coord: GridCoord) -> Result<&Cell, FieldError> {
        self.grid.cell(coord)
    }

    /// Mutable cell at `coord`.
    ///
    /// Changes take effect at the next build of each layer; existing
    /// layers are not recomputed.
    pub fn cell_mut(&mut self, coord: GridCoord) -> Result<&mut Cell, FieldError> {
        self.grid.cell_mut(coord)
    }

    /// Every cell with its coordinate, for bulk setup.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = (GridCoord, &mut Cell)> + '_ {
        self.grid.cells_mut()
    }

    /// Set the entry whitelist of one cell. [`EntryMask::WALL`] makes it a
    /// wall.
    pub fn set_entry_mask(&mut self, coord: GridCoord, mask: EntryMask) -> Result<(), FieldError> {
        self.grid.cell_mut(coord)?.set_entry_mask(mask);
        Ok(())
    }

    /// Allow or forbid diagonal entry into one cell.
    pub fn set_allow_diagonal(&mut self, coord: GridCoord, allow: bool) -> Result<(), FieldError> {
        self.grid.cell_mut(coord)?.set_allow_diagonal(allow);
        Ok(())
    }

    // ── Build ───────────────────────────────────────────────────

    /// Recompute `layer` from scratch, flowing toward `pois`.
    ///
    /// Every cell reachable from a point of interest gets the direction of
    /// one step toward the nearest one; points of interest themselves get
    /// [`Direction::DEST`](wayfield_core::Direction::DEST). Cells the fill
    /// does not reach keep their previous contents. Other layers are not
    /// touched.
    ///
    /// An empty `pois` is a no-op and returns a default summary.
    ///
    /// # Errors
    ///
    /// - [`FieldError::LayerOutOfRange`] for a bad `layer`
    /// - [`FieldError::CoordOutOfBounds`] for any point of interest off the
    ///   grid; checked before anything is written
    pub fn add_points_of_interest(
        &mut self,
        layer: usize,
        pois: &[GridCoord],
    ) -> Result<BuildSummary, FieldError> {
        self.grid.check_layer(layer)?;
        let seeds = pois
            .iter()
            .map(|&poi| self.grid.index_of(poi))
            .collect::<Result<Vec<_>, _>>()?;
        if seeds.is_empty() {
            return Ok(BuildSummary::default());
        }

        let advance = self.builds.advance();
        if let Advance::Wrapped(_) = advance {
            tracing::debug!("build counter wrapped, clearing slot stamps");
            self.grid.reset_build_ids();
        }
        let build = advance.id();

        let (width, height) = (self.grid.width(), self.grid.height());
        let (cells, slots) = self.grid.split_layer_mut(layer)?;
        let summary = flood::flood_fill(cells, slots, width, height, &seeds, build);

        tracing::debug!(
            layer,
            build = %summary.build,
            seeds = summary.seeds,
            reached = summary.reached,
            walls = summary.walls,
            "flow field layer rebuilt"
        );
        Ok(summary)
    }

    /// Replace the build counter, e.g. to resume numbering.
    #[cfg(test)]
    pub(crate) fn set_build_counter(&mut self, counter: BuildCounter) {
        self.builds = counter;
    }
}

impl FlowFieldBuilder {
    /// Grid dimensions in cells.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Number of navigation layers. Default: 1.
    pub fn layers(mut self, layers: usize) -> Self {
        self.config.layers = layers;
        self
    }

    /// Start every cell open from all directions with diagonals allowed.
    /// Default: every cell starts as a wall.
    pub fn open_cells(mut self) -> Self {
        self.config = self.config.open();
        self
    }

    /// Initial entry mask and diagonal flag for every cell.
    pub fn initial_cell(mut self, entry: EntryMask, allow_diagonal: bool) -> Self {
        self.config.initial_entry = entry;
        self.config.initial_allow_diagonal = allow_diagonal;
        self
    }

    /// Build the field, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `size` was not set or has a zero dimension
    /// - `layers` is 0
    /// - the slot count overflows
    pub fn build(self) -> Result<FlowField, FieldError> {
        FlowField::from_config(&self.config)
    }
}
