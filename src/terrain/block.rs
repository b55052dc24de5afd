//! Block kinds stored in the terrain grid.

use serde::{Deserialize, Serialize};

use super::Direction;

/// Which half of its cell a stair block's slab occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StairHalf {
    /// Upside-down stair with the slab against the ceiling.
    Top,
    /// Ordinary stair resting on the floor.
    Bottom,
}

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BlockState {
    /// Empty space.
    #[default]
    Air,
    /// Any full, non-stair block.
    Solid,
    /// Stair block. `facing` points towards the tall back of the stair.
    Stairs {
        /// Half of the cell holding the slab.
        half: StairHalf,
        /// Direction of the riser.
        facing: Direction,
    },
}

impl BlockState {
    /// Ordinary floor-standing stair facing `facing`.
    #[must_use]
    pub const fn bottom_stairs(facing: Direction) -> Self {
        Self::Stairs {
            half: StairHalf::Bottom,
            facing,
        }
    }

    /// Upside-down stair facing `facing`.
    #[must_use]
    pub const fn top_stairs(facing: Direction) -> Self {
        Self::Stairs {
            half: StairHalf::Top,
            facing,
        }
    }

    /// Returns `true` for empty cells.
    #[must_use]
    pub const fn is_air(self) -> bool {
        matches!(self, Self::Air)
    }
}
