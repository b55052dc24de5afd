//! Detects stair blocks directly beneath a player's feet.
//!
//! Only the block straight below is examined, so brushing against the side
//! of a stair's riser is never reported.

use glam::{IVec3, Vec3};

use crate::terrain::{BlockState, Direction, StairHalf, Terrain};

/// Stair block a player is standing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StairFooting {
    /// Grid cell holding the stair.
    pub position: IVec3,
    /// Half of the cell the slab occupies.
    pub half: StairHalf,
    /// Direction of the stair's riser.
    pub facing: Direction,
}

/// Grid cell containing a point.
#[must_use]
pub fn block_pos(point: Vec3) -> IVec3 {
    point.floor().as_ivec3()
}

/// Returns the stair below `feet`, if any.
///
/// # Examples
///
/// ```
/// use glam::{IVec3, Vec3};
/// use stumble::slip::stair_footing;
/// use stumble::terrain::{BlockState, Direction, Terrain};
/// let mut terrain = Terrain::new();
/// terrain.set_block(IVec3::new(0, 10, 0), BlockState::bottom_stairs(Direction::North));
/// let footing = stair_footing(&terrain, Vec3::new(0.5, 11.0, 0.5));
/// assert_eq!(footing.map(|f| f.facing), Some(Direction::North));
/// assert!(stair_footing(&terrain, Vec3::new(3.5, 11.0, 0.5)).is_none());
/// ```
#[must_use]
pub fn stair_footing(terrain: &Terrain, feet: Vec3) -> Option<StairFooting> {
    let position = block_pos(feet) + IVec3::NEG_Y;
    match terrain.block_at(position) {
        BlockState::Stairs { half, facing } => Some(StairFooting {
            position,
            half,
            facing,
        }),
        BlockState::Air | BlockState::Solid => None,
    }
}
