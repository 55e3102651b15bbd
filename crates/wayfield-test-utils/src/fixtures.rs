//! ASCII map fixtures.
//!
//! One glyph per cell, rows top to bottom. The default legend:
//!
//! | Glyph | Entry mask | Diagonal |
//! |-------|------------|----------|
//! | `.` | all four cardinals | yes |
//! | `1` | north | yes |
//! | `9` | north-west | yes |
//! | `3` | north-east | yes |
//! | `2` | east | yes |
//! | `4` | south | yes |
//! | `8` | west | yes |
//! | `C` | south-west | yes |
//! | `6` | south-east | yes |
//! | `w` | wall | no |
//!
//! Each one-way glyph is the hex value of its mask (north `0x1`, east `0x2`,
//! south `0x4`, west `0x8`), so `1` is a cell entered only by agents moving
//! north.

use indexmap::IndexMap;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wayfield_core::{Direction, EntryMask, GridCoord};
use wayfield_grid::{Cell, Grid, GridConfig};

/// What one glyph sets on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSpec {
    pub entry: EntryMask,
    pub allow_diagonal: bool,
}

impl CellSpec {
    pub fn new(entry: impl Into<EntryMask>, allow_diagonal: bool) -> Self {
        Self {
            entry: entry.into(),
            allow_diagonal,
        }
    }

    pub fn to_cell(self) -> Cell {
        Cell::new(self.entry, self.allow_diagonal)
    }
}

/// The legend described in the module docs, in declaration order.
pub fn default_legend() -> IndexMap<char, CellSpec> {
    let mut legend = IndexMap::new();
    legend.insert('.', CellSpec::new(EntryMask::ALL, true));
    legend.insert('1', CellSpec::new(Direction::NORTH, true));
    legend.insert('9', CellSpec::new(Direction::NORTH_WEST, true));
    legend.insert('3', CellSpec::new(Direction::NORTH_EAST, true));
    legend.insert('2', CellSpec::new(Direction::EAST, true));
    legend.insert('4', CellSpec::new(Direction::SOUTH, true));
    legend.insert('8', CellSpec::new(Direction::WEST, true));
    legend.insert('C', CellSpec::new(Direction::SOUTH_WEST, true));
    legend.insert('6', CellSpec::new(Direction::SOUTH_EAST, true));
    legend.insert('w', CellSpec::new(EntryMask::WALL, false));
    legend
}

/// A rectangular ASCII map plus the legend that gives its glyphs meaning.
#[derive(Clone, Debug)]
pub struct MapFixture {
    width: u32,
    height: u32,
    glyphs: Vec<char>,
    legend: IndexMap<char, CellSpec>,
}

impl MapFixture {
    /// Parse `rows` with [`default_legend`].
    ///
    /// # Panics
    ///
    /// On an empty map, ragged rows, or a glyph missing from the legend.
    pub fn parse(rows: &[&str]) -> Self {
        Self::with_legend(rows, default_legend())
    }

    /// Parse `rows` with a custom legend.
    ///
    /// # Panics
    ///
    /// As [`parse`](Self::parse).
    pub fn with_legend(rows: &[&str], legend: IndexMap<char, CellSpec>) -> Self {
        assert!(!rows.is_empty(), "map has no rows");
        let width = rows[0].chars().count();
        assert!(width > 0, "map has an empty first row");

        let mut glyphs = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let before = glyphs.len();
            for glyph in row.chars() {
                assert!(
                    legend.contains_key(&glyph),
                    "glyph {glyph:?} in row {y} is not in the legend"
                );
                glyphs.push(glyph);
            }
            assert_eq!(
                glyphs.len() - before,
                width,
                "row {y} has a different width than row 0"
            );
        }

        Self {
            width: width as u32,
            height: rows.len() as u32,
            glyphs,
            legend,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn legend(&self) -> &IndexMap<char, CellSpec> {
        &self.legend
    }

    /// Glyph at `coord`, or `None` off the map.
    pub fn glyph_at(&self, coord: GridCoord) -> Option<char> {
        if coord.x >= self.width || coord.y >= self.height {
            return None;
        }
        Some(self.glyphs[(coord.y * self.width + coord.x) as usize])
    }

    /// Cell settings at `coord`, or `None` off the map.
    pub fn spec_at(&self, coord: GridCoord) -> Option<CellSpec> {
        self.glyph_at(coord)
            .and_then(|glyph| self.legend.get(&glyph).copied())
    }

    /// A solid grid config of the map's size.
    pub fn grid_config(&self, layers: usize) -> GridConfig {
        GridConfig::new(self.width, self.height).with_layers(layers)
    }

    /// Overwrite every cell yielded by `cells` that lies on the map.
    ///
    /// Takes the output of `Grid::cells_mut` or `FlowField::cells_mut`.
    pub fn apply_to<'a>(&self, cells: impl IntoIterator<Item = (GridCoord, &'a mut Cell)>) {
        for (coord, cell) in cells {
            if let Some(spec) = self.spec_at(coord) {
                *cell = spec.to_cell();
            }
        }
    }

    /// A fresh grid with `layers` layers and the map applied.
    ///
    /// # Panics
    ///
    /// If `layers` is 0.
    pub fn build_grid(&self, layers: usize) -> Grid {
        let mut grid = Grid::new(&self.grid_config(layers)).unwrap();
        self.apply_to(grid.cells_mut());
        grid
    }

    /// Coordinates of every non-wall cell, row-major.
    pub fn open_coords(&self) -> Vec<GridCoord> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| GridCoord::new(x, y)))
            .filter(|&c| self.spec_at(c).is_some_and(|s| !s.entry.is_wall()))
            .collect()
    }
}

/// A map plus the points of interest to build on each layer.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub map: MapFixture,
    /// `pois[layer]` are that layer's points of interest.
    pub pois: Vec<Vec<GridCoord>>,
}

/// The 10×8 two-lane map.
///
/// Two open rooms joined by a south-only lane at column 3 and a north-only
/// lane at column 6. Layer 0 targets the south room's row 7, layer 1 the
/// north room's row 1.
pub fn example_map() -> Scenario {
    let map = MapFixture::parse(&[
        "wwwwwwwwww",
        "w........w",
        "www4ww1www",
        "www4ww1www",
        "www4ww1www",
        "www4ww1www",
        "w........w",
        "w........w",
    ]);
    let row = |y| (3..=6).map(|x| GridCoord::new(x, y)).collect::<Vec<_>>();
    Scenario {
        map,
        pois: vec![row(7), row(1)],
    }
}

/// A seeded random `width * height` map.
///
/// Roughly a quarter of the cells are walls and one in ten is a one-way
/// cell. Another tenth is open but refuses diagonal entry; the rest are
/// fully open. Same seed, same map.
pub fn random_map(width: u32, height: u32, seed: u64) -> MapFixture {
    const ONE_WAY: [char; 8] = ['1', '9', '3', '2', '4', '8', 'C', '6'];

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut legend = default_legend();
    // Same as '.' but without diagonal entry.
    legend.insert(',', CellSpec::new(EntryMask::ALL, false));

    let rows: Vec<String> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| match rng.next_u32() % 100 {
                    0..=24 => 'w',
                    25..=34 => ONE_WAY[(rng.next_u32() % 8) as usize],
                    35..=44 => ',',
                    _ => '.',
                })
                .collect()
        })
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    MapFixture::with_legend(&rows, legend)
}
