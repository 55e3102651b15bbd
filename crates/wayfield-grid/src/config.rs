//! Grid configuration parameters.

use wayfield_core::{EntryMask, FieldError};

/// Configuration for a [`Grid`](crate::Grid).
///
/// Controls dimensions, layer count, and the state every cell starts in.
/// Validated at construction; dimensions and layer count are fixed for the
/// grid's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of columns. Must be at least 1.
    pub width: u32,

    /// Number of rows. Must be at least 1.
    pub height: u32,

    /// Number of independent navigation layers sharing the cells.
    ///
    /// Default: 1. Must be at least 1.
    pub layers: usize,

    /// Entry mask every cell starts with.
    ///
    /// Default: [`EntryMask::WALL`], so an unconfigured grid is solid.
    pub initial_entry: EntryMask,

    /// Diagonal flag every cell starts with. Default: `false`.
    pub initial_allow_diagonal: bool,
}

impl GridConfig {
    /// Default layer count.
    pub const DEFAULT_LAYERS: usize = 1;

    /// A config for a `width * height` grid with default values for all
    /// other parameters.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            layers: Self::DEFAULT_LAYERS,
            initial_entry: EntryMask::WALL,
            initial_allow_diagonal: false,
        }
    }

    /// Same config with `layers` navigation layers.
    pub fn with_layers(mut self, layers: usize) -> Self {
        self.layers = layers;
        self
    }

    /// Same config with every cell starting open from all directions,
    /// diagonals included.
    pub fn open(mut self) -> Self {
        self.initial_entry = EntryMask::ALL;
        self.initial_allow_diagonal = true;
        self
    }

    /// Check dimensions and return `(cell_count, slot_count)`.
    ///
    /// # Errors
    ///
    /// - [`FieldError::EmptyGrid`] if `width` or `height` is 0
    /// - [`FieldError::NoLayers`] if `layers` is 0
    /// - [`FieldError::GridTooLarge`] if the slot count overflows `usize`
    pub fn validate(&self) -> Result<(usize, usize), FieldError> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::EmptyGrid);
        }
        if self.layers == 0 {
            return Err(FieldError::NoLayers);
        }
        let too_large = || FieldError::GridTooLarge {
            width: self.width,
            height: self.height,
            layers: self.layers,
        };
        let cells = (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or_else(too_large)?;
        let slots = cells.checked_mul(self.layers).ok_or_else(too_large)?;
        Ok((cells, slots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GridConfig::new(10, 8);
        assert_eq!(config.layers, GridConfig::DEFAULT_LAYERS);
        assert!(config.initial_entry.is_wall());
        assert!(!config.initial_allow_diagonal);
        assert_eq!(config.validate(), Ok((80, 80)));
    }

    #[test]
    fn slot_count_scales_with_layers() {
        let config = GridConfig::new(10, 8).with_layers(3).open();
        assert_eq!(config.validate(), Ok((80, 240)));
        assert_eq!(config.initial_entry, EntryMask::ALL);
        assert!(config.initial_allow_diagonal);
    }

    #[test]
    fn rejects_empty_and_layerless() {
        assert_eq!(GridConfig::new(0, 4).validate(), Err(FieldError::EmptyGrid));
        assert_eq!(GridConfig::new(4, 0).validate(), Err(FieldError::EmptyGrid));
        assert_eq!(
            GridConfig::new(4, 4).with_layers(0).validate(),
            Err(FieldError::NoLayers)
        );
    }

    #[test]
    fn rejects_overflowing_slot_count() {
        let config = GridConfig::new(u32::MAX, u32::MAX).with_layers(usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(FieldError::GridTooLarge { .. })
        ));
    }
}
