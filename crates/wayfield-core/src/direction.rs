//! 4-bit compass direction codec and per-cell entry masks.
//!
//! Each cardinal direction owns one bit:
//!
//! ```text
//! NORTH = 0b0001   EAST = 0b0010   SOUTH = 0b0100   WEST = 0b1000
//! ```
//!
//! A diagonal is the OR of its two cardinal components, so directions
//! double as bitmasks. `0b0000` and `0b1111` never name a real direction
//! and are used as control values: [`Direction::STOP`] / [`Direction::WALL`]
//! and [`Direction::DEST`].

use std::fmt;
use std::ops::BitOr;

const NORTH_BIT: u8 = 0x1;
const EAST_BIT: u8 = 0x2;
const SOUTH_BIT: u8 = 0x4;
const WEST_BIT: u8 = 0x8;

const NORTH_SOUTH: u8 = NORTH_BIT | SOUTH_BIT;
const EAST_WEST: u8 = EAST_BIT | WEST_BIT;
const NIBBLE: u8 = 0xF;

/// A compass direction or a control value, packed into the low 4 bits.
///
/// In a flow field the stored direction is the way an agent standing on
/// the cell should move. Screen convention: north is `y - 1`, east is
/// `x + 1`.
///
/// # Examples
///
/// ```
/// use wayfield_core::Direction;
///
/// assert_eq!(Direction::NORTH | Direction::EAST, Direction::NORTH_EAST);
/// assert_eq!(Direction::NORTH_EAST.reverse(), Direction::SOUTH_WEST);
/// assert_eq!(Direction::SOUTH_WEST.axis_delta(), (-1, 1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Direction(u8);

impl Direction {
    /// One cell up (`y - 1`).
    pub const NORTH: Self = Self(NORTH_BIT);
    /// One cell right (`x + 1`).
    pub const EAST: Self = Self(EAST_BIT);
    /// One cell down (`y + 1`).
    pub const SOUTH: Self = Self(SOUTH_BIT);
    /// One cell left (`x - 1`).
    pub const WEST: Self = Self(WEST_BIT);
    /// Up and right.
    pub const NORTH_EAST: Self = Self(NORTH_BIT | EAST_BIT);
    /// Down and right.
    pub const SOUTH_EAST: Self = Self(SOUTH_BIT | EAST_BIT);
    /// Down and left.
    pub const SOUTH_WEST: Self = Self(SOUTH_BIT | WEST_BIT);
    /// Up and left.
    pub const NORTH_WEST: Self = Self(NORTH_BIT | WEST_BIT);

    /// No movement: the cell was never reached, or the agent has arrived.
    pub const STOP: Self = Self(0);
    /// Same bit pattern as [`STOP`](Self::STOP); used when a wall is stamped.
    pub const WALL: Self = Self(0);
    /// Marks a point of interest. All four bits set, never a real direction.
    pub const DEST: Self = Self(NIBBLE);

    /// The eight compass directions in flood-fill check order:
    /// N, E, S, W, NW, NE, SE, SW.
    ///
    /// Breadth-first ties are resolved by this order, so it is part of the
    /// observable behaviour of a build.
    pub const SEARCH_ORDER: [Self; 8] = [
        Self::NORTH,
        Self::EAST,
        Self::SOUTH,
        Self::WEST,
        Self::NORTH_WEST,
        Self::NORTH_EAST,
        Self::SOUTH_EAST,
        Self::SOUTH_WEST,
    ];

    /// Build a direction from raw bits. Only the low nibble is kept.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & NIBBLE)
    }

    /// The raw 4-bit value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The opposite direction.
    ///
    /// Swaps the north/east bit pair with the south/west bit pair, which
    /// reverses compound directions correctly (north-east becomes
    /// south-west). Self-inverse on the eight compass directions and on
    /// [`STOP`](Self::STOP). Must not be called on [`DEST`](Self::DEST).
    pub const fn reverse(self) -> Self {
        debug_assert!(self.0 != NIBBLE, "DEST has no reverse");
        let low = self.0 & 0x3;
        let high = (self.0 >> 2) & 0x3;
        Self((low << 2) | high)
    }

    /// True for the eight compass directions.
    pub const fn is_movement(self) -> bool {
        let ns = self.0 & NORTH_SOUTH;
        let ew = self.0 & EAST_WEST;
        self.0 != 0 && ns != NORTH_SOUTH && ew != EAST_WEST
    }

    /// True for N, E, S and W.
    pub const fn is_cardinal(self) -> bool {
        self.is_movement() && self.0.count_ones() == 1
    }

    /// True for NE, SE, SW and NW.
    pub const fn is_diagonal(self) -> bool {
        self.is_movement() && self.0.count_ones() == 2
    }

    /// Per-axis step `(dx, dy)` in `{-1, 0, 1}`.
    ///
    /// An axis whose two bits are both set or both clear contributes 0, so
    /// the control values all map to `(0, 0)`.
    pub const fn axis_delta(self) -> (i32, i32) {
        let dx = match self.0 & EAST_WEST {
            EAST_BIT => 1,
            WEST_BIT => -1,
            _ => 0,
        };
        let dy = match self.0 & NORTH_SOUTH {
            NORTH_BIT => -1,
            SOUTH_BIT => 1,
            _ => 0,
        };
        (dx, dy)
    }

    /// Number of axes with a nonzero step: 1 for cardinals, 2 for diagonals.
    const fn active_axes(self) -> i32 {
        let (dx, dy) = self.axis_delta();
        (dx != 0) as i32 + (dy != 0) as i32
    }

    /// Direction as an `f32` vector.
    ///
    /// Each nonzero axis is divided by the number of active axes, so
    /// cardinals have length 1 and diagonals have components of 0.5
    /// (length ≈ 0.707, not normalised). Control values give `(0, 0)`.
    pub fn vector_f32(self) -> (f32, f32) {
        let axes = self.active_axes();
        if axes == 0 {
            return (0.0, 0.0);
        }
        let (dx, dy) = self.axis_delta();
        (dx as f32 / axes as f32, dy as f32 / axes as f32)
    }

    /// `f64` counterpart of [`vector_f32`](Self::vector_f32).
    pub fn vector_f64(self) -> (f64, f64) {
        let axes = self.active_axes();
        if axes == 0 {
            return (0.0, 0.0);
        }
        let (dx, dy) = self.axis_delta();
        (f64::from(dx) / f64::from(axes), f64::from(dy) / f64::from(axes))
    }

    /// Single-character arrow for debug rendering.
    ///
    /// `#` for [`STOP`](Self::STOP)/[`WALL`](Self::WALL), `X` for anything
    /// that is not a movement direction (including [`DEST`](Self::DEST)).
    pub const fn glyph(self) -> char {
        match self.0 {
            0x0 => '#',
            NORTH_BIT => '↑',
            EAST_BIT => '→',
            SOUTH_BIT => '↓',
            WEST_BIT => '←',
            0x3 => '↗',
            0x6 => '↘',
            0xC => '↙',
            0x9 => '↖',
            _ => 'X',
        }
    }

    fn name(self) -> Option<&'static str> {
        Some(match self.0 {
            0x0 => "STOP",
            NORTH_BIT => "NORTH",
            EAST_BIT => "EAST",
            SOUTH_BIT => "SOUTH",
            WEST_BIT => "WEST",
            0x3 => "NORTH_EAST",
            0x6 => "SOUTH_EAST",
            0xC => "SOUTH_WEST",
            0x9 => "NORTH_WEST",
            NIBBLE => "DEST",
            _ => return None,
        })
    }
}

impl BitOr for Direction {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Direction::{name}"),
            None => write!(f, "Direction({:#06b})", self.0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#06b}", self.0),
        }
    }
}

/// Whitelist of the directions of travel with which an agent may enter a
/// cell.
///
/// A cell whose mask is [`EntryMask::WALL`] can never be entered. A
/// south-only mask builds a one-way lane that agents can only traverse
/// moving south.
///
/// # Examples
///
/// ```
/// use wayfield_core::{Direction, EntryMask};
///
/// let mask = EntryMask::from(Direction::SOUTH) | Direction::EAST;
/// assert!(mask.permits(Direction::SOUTH_EAST));
/// assert!(!mask.permits(Direction::SOUTH_WEST));
/// assert!(!mask.permits(Direction::STOP));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct EntryMask(u8);

impl EntryMask {
    /// Entry from every direction.
    pub const ALL: Self = Self(NIBBLE);
    /// No entry at all: the cell is a wall.
    pub const WALL: Self = Self(0);

    /// Build a mask from raw bits. Only the low nibble is kept.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & NIBBLE)
    }

    /// The raw 4-bit value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when no direction may enter.
    pub const fn is_wall(self) -> bool {
        self.0 == 0
    }

    /// True iff `dir` is non-empty and every bit of `dir` is in the mask.
    ///
    /// A diagonal needs both of its cardinal components.
    pub const fn permits(self, dir: Direction) -> bool {
        let d = dir.bits();
        d != 0 && (self.0 & d) == d
    }
}

impl From<Direction> for EntryMask {
    fn from(dir: Direction) -> Self {
        Self(dir.bits())
    }
}

impl BitOr for EntryMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Direction> for EntryMask {
    type Output = Self;

    fn bitor(self, rhs: Direction) -> Self {
        Self(self.0 | rhs.bits())
    }
}

impl fmt::Debug for EntryMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryMask({:#06b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const COMPASS: [Direction; 8] = Direction::SEARCH_ORDER;

    // ── Reverse ─────────────────────────────────────────────────

    #[test]
    fn reverse_cardinals() {
        assert_eq!(Direction::NORTH.reverse(), Direction::SOUTH);
        assert_eq!(Direction::SOUTH.reverse(), Direction::NORTH);
        assert_eq!(Direction::EAST.reverse(), Direction::WEST);
        assert_eq!(Direction::WEST.reverse(), Direction::EAST);
    }

    #[test]
    fn reverse_diagonals() {
        assert_eq!(Direction::NORTH_EAST.reverse(), Direction::SOUTH_WEST);
        assert_eq!(Direction::SOUTH_WEST.reverse(), Direction::NORTH_EAST);
        assert_eq!(Direction::NORTH_WEST.reverse(), Direction::SOUTH_EAST);
        assert_eq!(Direction::SOUTH_EAST.reverse(), Direction::NORTH_WEST);
    }

    #[test]
    fn reverse_is_involution() {
        for d in COMPASS {
            assert_eq!(d.reverse().reverse(), d, "{d}");
        }
    }

    #[test]
    fn reverse_stop_is_stop() {
        assert_eq!(Direction::STOP.reverse(), Direction::STOP);
    }

    #[test]
    fn reverse_negates_axis_delta() {
        for d in COMPASS {
            let (dx, dy) = d.axis_delta();
            assert_eq!(d.reverse().axis_delta(), (-dx, -dy), "{d}");
        }
    }

    // ── Classification ──────────────────────────────────────────

    #[test]
    fn search_order_has_cardinals_first() {
        assert!(COMPASS[..4].iter().all(|d| d.is_cardinal()));
        assert!(COMPASS[4..].iter().all(|d| d.is_diagonal()));
    }

    #[test]
    fn control_values_are_not_movement() {
        assert!(!Direction::STOP.is_movement());
        assert!(!Direction::WALL.is_movement());
        assert!(!Direction::DEST.is_movement());
        assert!(!(Direction::NORTH | Direction::SOUTH).is_movement());
        assert!(!(Direction::EAST | Direction::WEST).is_movement());
    }

    #[test]
    fn stop_and_wall_share_encoding() {
        assert_eq!(Direction::STOP, Direction::WALL);
        assert_eq!(Direction::default(), Direction::STOP);
    }

    // ── Vectors ─────────────────────────────────────────────────

    #[test]
    fn axis_delta_uses_screen_convention() {
        assert_eq!(Direction::NORTH.axis_delta(), (0, -1));
        assert_eq!(Direction::EAST.axis_delta(), (1, 0));
        assert_eq!(Direction::SOUTH_EAST.axis_delta(), (1, 1));
        assert_eq!(Direction::NORTH_WEST.axis_delta(), (-1, -1));
        assert_eq!(Direction::DEST.axis_delta(), (0, 0));
    }

    #[test]
    fn vector_divides_diagonals_by_two() {
        assert_eq!(Direction::WEST.vector_f32(), (-1.0, 0.0));
        assert_eq!(Direction::NORTH_EAST.vector_f32(), (0.5, -0.5));
        assert_eq!(Direction::SOUTH_WEST.vector_f64(), (-0.5, 0.5));
    }

    #[test]
    fn vector_of_control_values_is_zero() {
        assert_eq!(Direction::STOP.vector_f32(), (0.0, 0.0));
        assert_eq!(Direction::DEST.vector_f64(), (0.0, 0.0));
    }

    // ── Formatting ──────────────────────────────────────────────

    #[test]
    fn glyphs_and_names() {
        assert_eq!(Direction::NORTH.glyph(), '↑');
        assert_eq!(Direction::SOUTH_WEST.glyph(), '↙');
        assert_eq!(Direction::WALL.glyph(), '#');
        assert_eq!(Direction::DEST.glyph(), 'X');
        assert_eq!(Direction::NORTH_WEST.to_string(), "NORTH_WEST");
        assert_eq!(format!("{:?}", Direction::DEST), "Direction::DEST");
        assert_eq!(format!("{:?}", Direction::from_bits(0x5)), "Direction(0b0101)");
    }

    // ── Entry masks ─────────────────────────────────────────────

    #[test]
    fn wall_mask_permits_nothing() {
        assert!(EntryMask::WALL.is_wall());
        for d in COMPASS {
            assert!(!EntryMask::WALL.permits(d));
        }
    }

    #[test]
    fn full_mask_permits_every_direction_but_not_stop() {
        for d in COMPASS {
            assert!(EntryMask::ALL.permits(d));
        }
        assert!(!EntryMask::ALL.permits(Direction::STOP));
    }

    #[test]
    fn diagonal_needs_both_components() {
        let mask = EntryMask::from(Direction::NORTH);
        assert!(mask.permits(Direction::NORTH));
        assert!(!mask.permits(Direction::NORTH_EAST));
        assert!(!mask.permits(Direction::NORTH_WEST));
        assert!((mask | Direction::EAST).permits(Direction::NORTH_EAST));
    }

    #[test]
    fn from_bits_masks_high_nibble() {
        assert_eq!(EntryMask::from_bits(0xF3).bits(), 0x3);
        assert_eq!(Direction::from_bits(0x14), Direction::SOUTH);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_compass() -> impl Strategy<Value = Direction> {
        prop::sample::select(COMPASS.to_vec())
    }

    proptest! {
        #[test]
        fn reverse_twice_is_identity(d in arb_compass()) {
            prop_assert_eq!(d.reverse().reverse(), d);
            prop_assert!(d.reverse().is_movement());
            prop_assert_ne!(d.reverse(), d);
        }

        #[test]
        fn permits_iff_subset(mask in 0u8..16, dir in 0u8..16) {
            let m = EntryMask::from_bits(mask);
            let d = Direction::from_bits(dir);
            let subset = dir != 0 && (dir & !mask) == 0;
            prop_assert_eq!(m.permits(d), subset);
        }
    }
}
