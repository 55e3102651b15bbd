//! Per-position cell state and per-layer slots.

use std::fmt;
use wayfield_core::{BuildId, Direction, EntryMask};

/// Bits 0-3: entry mask.
const ENTRY_BITS: u8 = 0x0F;
/// Bit 4: diagonal entry allowed.
const DIAGONAL_BIT: u8 = 0x10;

/// Movement constraints of one grid position, shared by every layer.
///
/// The entry mask and diagonal flag are packed into a single byte; use the
/// accessors. A default cell is a wall with diagonals disallowed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    access: u8,
}

impl Cell {
    /// A cell with the given entry mask and diagonal flag.
    pub fn new(entry: EntryMask, allow_diagonal: bool) -> Self {
        let mut cell = Self::default();
        cell.set_entry_mask(entry);
        cell.set_allow_diagonal(allow_diagonal);
        cell
    }

    /// A cell enterable from every direction, diagonals included.
    pub fn open() -> Self {
        Self::new(EntryMask::ALL, true)
    }

    /// Replace the entry whitelist. [`EntryMask::WALL`] makes this a wall.
    pub fn set_entry_mask(&mut self, mask: EntryMask) {
        self.access = (self.access & !ENTRY_BITS) | mask.bits();
    }

    /// The entry whitelist.
    pub fn entry_mask(&self) -> EntryMask {
        EntryMask::from_bits(self.access & ENTRY_BITS)
    }

    /// Allow or forbid entering this cell along a diagonal.
    ///
    /// Independent of the entry mask: a diagonal entry needs this flag
    /// *and* both cardinal components in the mask.
    pub fn set_allow_diagonal(&mut self, allow: bool) {
        if allow {
            self.access |= DIAGONAL_BIT;
        } else {
            self.access &= !DIAGONAL_BIT;
        }
    }

    /// Whether diagonal entry is allowed.
    pub fn allow_diagonal(&self) -> bool {
        self.access & DIAGONAL_BIT != 0
    }

    /// True iff the entry mask is empty.
    pub fn is_wall(&self) -> bool {
        self.entry_mask().is_wall()
    }

    /// True iff an agent travelling in `dir` may enter this cell, i.e.
    /// `dir` is a non-empty subset of the entry mask.
    ///
    /// The diagonal flag is not consulted here.
    pub fn can_enter_from(&self, dir: Direction) -> bool {
        self.entry_mask().permits(dir)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("entry", &self.entry_mask())
            .field("allow_diagonal", &self.allow_diagonal())
            .finish()
    }
}

/// One layer's view of one position: the direction to move and the build
/// that last wrote it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct LayerSlot {
    direction: Direction,
    build: BuildId,
}

impl LayerSlot {
    /// Stored direction: a compass direction, [`Direction::STOP`] /
    /// [`Direction::WALL`], or [`Direction::DEST`] on a point of interest.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Overwrite the direction, leaving the build stamp untouched.
    pub fn set_direction(&mut self, dir: Direction) {
        self.direction = dir;
    }

    /// Record the position as blocked.
    pub fn mark_wall(&mut self) {
        self.direction = Direction::WALL;
    }

    /// Record the position as having no onward movement.
    pub fn mark_stop(&mut self) {
        self.direction = Direction::STOP;
    }

    /// The build that last wrote this slot.
    pub fn build_id(&self) -> BuildId {
        self.build
    }

    /// Stamp the slot as written by `id`, leaving the direction untouched.
    pub fn set_build_id(&mut self, id: BuildId) {
        self.build = id;
    }
}
