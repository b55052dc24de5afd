//! Horizontal compass directions on the voxel grid.
//!
//! The grid is y-up. North points towards negative z and east towards
//! positive x.

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// One of the four horizontal directions a block can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards negative z.
    North,
    /// Towards positive x.
    East,
    /// Towards positive z.
    South,
    /// Towards negative x.
    West,
}

impl Direction {
    /// All horizontal directions ordered by [`Direction::horizontal_index`].
    pub const HORIZONTAL: [Self; 4] = [Self::South, Self::West, Self::North, Self::East];

    /// Returns the direction pointing the other way.
    ///
    /// # Examples
    ///
    /// ```
    /// use stumble::terrain::Direction;
    /// assert_eq!(Direction::North.opposite(), Direction::South);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Unit step one block in this direction.
    #[must_use]
    pub const fn offset(self) -> IVec3 {
        match self {
            Self::North => IVec3::new(0, 0, -1),
            Self::East => IVec3::new(1, 0, 0),
            Self::South => IVec3::new(0, 0, 1),
            Self::West => IVec3::new(-1, 0, 0),
        }
    }

    /// Discrete horizontal value, counting clockwise from south.
    #[must_use]
    pub const fn horizontal_index(self) -> u8 {
        match self {
            Self::South => 0,
            Self::West => 1,
            Self::North => 2,
            Self::East => 3,
        }
    }

    /// Inverse of [`Direction::horizontal_index`], wrapping values above 3.
    #[must_use]
    pub const fn from_horizontal_index(index: u8) -> Self {
        match index % 4 {
            0 => Self::South,
            1 => Self::West,
            2 => Self::North,
            _ => Self::East,
        }
    }
}
