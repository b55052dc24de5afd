//! Sparse voxel terrain queried by the slip mechanic.
//!
//! Only non-air cells are stored. Every coordinate missing from the grid is
//! air, so the world is unbounded in all directions.

mod block;
mod direction;

use bevy::prelude::Resource;
use glam::IVec3;
use hashbrown::HashMap;
use log::trace;

pub use block::{BlockState, StairHalf};
pub use direction::Direction;

/// In-memory block grid shared by host systems and the slip mechanic.
#[derive(Resource, Debug, Default, Clone)]
pub struct Terrain {
    blocks: HashMap<IVec3, BlockState>,
}

impl Terrain {
    /// Creates an empty terrain where every cell is air.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the block stored at `pos`, or [`BlockState::Air`].
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::IVec3;
    /// use stumble::terrain::{BlockState, Terrain};
    /// let mut terrain = Terrain::new();
    /// terrain.set_block(IVec3::new(1, 2, 3), BlockState::Solid);
    /// assert_eq!(terrain.block_at(IVec3::new(1, 2, 3)), BlockState::Solid);
    /// assert!(terrain.is_air(IVec3::ZERO));
    /// ```
    #[must_use]
    pub fn block_at(&self, pos: IVec3) -> BlockState {
        self.blocks.get(&pos).copied().unwrap_or_default()
    }

    /// Returns `true` when nothing occupies `pos`.
    #[must_use]
    pub fn is_air(&self, pos: IVec3) -> bool {
        self.block_at(pos).is_air()
    }

    /// Places `block` at `pos`, returning whatever was there before.
    ///
    /// Placing [`BlockState::Air`] clears the cell.
    pub fn set_block(&mut self, pos: IVec3, block: BlockState) -> BlockState {
        trace!("terrain cell {pos} set to {block:?}");
        let previous = if block.is_air() {
            self.blocks.remove(&pos)
        } else {
            self.blocks.insert(pos, block)
        };
        previous.unwrap_or_default()
    }

    /// Number of non-air cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` when the terrain holds no blocks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates over every stored block in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, BlockState)> + '_ {
        self.blocks.iter().map(|(&pos, &block)| (pos, block))
    }
}

impl FromIterator<(IVec3, BlockState)> for Terrain {
    fn from_iter<I: IntoIterator<Item = (IVec3, BlockState)>>(iter: I) -> Self {
        let mut terrain = Self::new();
        for (pos, block) in iter {
            terrain.set_block(pos, block);
        }
        terrain
    }
}
