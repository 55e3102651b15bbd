//! Build identifiers and the per-field build counter.

use std::fmt;

/// Generation stamp written into every layer slot a build touches.
///
/// A slot whose stamp equals the running build's id has already been
/// finalised in that pass; anything else is stale data from an earlier
/// build and may be overwritten. This lets a layer be rebuilt in place
/// without clearing the grid first.
///
/// [`BuildId::NEVER`] is the stamp of a slot no build has touched. The
/// counter never hands it out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BuildId(pub u32);

impl BuildId {
    /// Stamp of a slot that no build has written.
    pub const NEVER: Self = Self(0);
}

impl fmt::Display for BuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BuildId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Result of [`BuildCounter::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Advance {
    /// A fresh id that no slot can already carry.
    Next(BuildId),
    /// The counter wrapped and restarted. The caller must reset every slot
    /// stamp to [`BuildId::NEVER`] before using the id, otherwise a stale
    /// slot could collide with it.
    Wrapped(BuildId),
}

impl Advance {
    /// The id to stamp with.
    pub fn id(self) -> BuildId {
        match self {
            Self::Next(id) | Self::Wrapped(id) => id,
        }
    }
}

/// Monotonic source of [`BuildId`]s, owned by a single flow field.
///
/// Scoping the counter to one field means builds on different fields or
/// layers never compete for the same id space.
#[derive(Clone, Debug, Default)]
pub struct BuildCounter {
    last: BuildId,
}

impl BuildCounter {
    /// A counter that has issued nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A counter whose next id follows `last`.
    ///
    /// Only sound if no slot carries a stamp greater than `last`.
    pub fn starting_after(last: BuildId) -> Self {
        Self { last }
    }

    /// The most recently issued id, or [`BuildId::NEVER`].
    pub fn last(&self) -> BuildId {
        self.last
    }

    /// Issue the next id, wrapping from `u32::MAX` back to 1.
    pub fn advance(&mut self) -> Advance {
        match self.last.0.checked_add(1) {
            Some(next) => {
                self.last = BuildId(next);
                Advance::Next(self.last)
            }
            None => {
                self.last = BuildId(1);
                Advance::Wrapped(self.last)
            }
        }
    }
}
