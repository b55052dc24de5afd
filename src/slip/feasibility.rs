//! Decides whether a player can slide off the stair they stand on.

use glam::{IVec3, Vec3};

use crate::terrain::{Direction, StairHalf, Terrain};

use super::footing::stair_footing;

/// Returns the direction a player at `feet` would slip in, if any.
///
/// The player must stand on a bottom-half stair. The slide goes over the
/// stair's low edge, opposite its facing, and needs both the neighbouring
/// cell and the cell above it to be empty so the body has room to drop.
#[must_use]
pub fn slip_direction(terrain: &Terrain, feet: Vec3) -> Option<Direction> {
    let footing = stair_footing(terrain, feet)?;
    if footing.half != StairHalf::Bottom {
        return None;
    }
    let outward = footing.facing.opposite();
    let neighbour = footing.position + outward.offset();
    (terrain.is_air(neighbour) && terrain.is_air(neighbour + IVec3::Y)).then_some(outward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::BlockState;
    use rstest::rstest;

    const STAIR: IVec3 = IVec3::new(0, 10, 0);
    const FEET: Vec3 = Vec3::new(0.5, 11.0, 0.5);

    fn terrain_with(block: BlockState) -> Terrain {
        [(STAIR, block)].into_iter().collect()
    }

    #[rstest]
    #[case(Direction::North, Direction::South)]
    #[case(Direction::East, Direction::West)]
    #[case(Direction::South, Direction::North)]
    #[case(Direction::West, Direction::East)]
    fn open_edge_slips_away_from_riser(#[case] facing: Direction, #[case] expected: Direction) {
        let terrain = terrain_with(BlockState::bottom_stairs(facing));
        assert_eq!(slip_direction(&terrain, FEET), Some(expected));
    }

    #[rstest]
    fn top_half_never_slips() {
        let terrain = terrain_with(BlockState::top_stairs(Direction::North));
        assert_eq!(slip_direction(&terrain, FEET), None);
    }

    #[rstest]
    #[case(IVec3::new(0, 10, 1))]
    #[case(IVec3::new(0, 11, 1))]
    fn blocked_exit_prevents_slip(#[case] obstacle: IVec3) {
        let mut terrain = terrain_with(BlockState::bottom_stairs(Direction::North));
        terrain.set_block(obstacle, BlockState::Solid);
        assert_eq!(slip_direction(&terrain, FEET), None);
    }

    #[rstest]
    fn obstacle_on_riser_side_is_irrelevant() {
        let mut terrain = terrain_with(BlockState::bottom_stairs(Direction::North));
        terrain.set_block(IVec3::new(0, 10, -1), BlockState::Solid);
        terrain.set_block(IVec3::new(0, 11, -1), BlockState::Solid);
        assert_eq!(slip_direction(&terrain, FEET), Some(Direction::South));
    }

    #[rstest]
    fn solid_ground_never_slips() {
        let terrain = terrain_with(BlockState::Solid);
        assert_eq!(slip_direction(&terrain, FEET), None);
    }
}
