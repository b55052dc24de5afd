//! JSON world layouts describing terrain and the players placed on it.
//!
//! A layout is a flat list of blocks plus a list of player spawns:
//!
//! ```json
//! {
//!   "blocks": [
//!     { "x": 0, "y": 10, "z": 0, "kind": "stairs", "half": "bottom", "facing": "north" },
//!     { "x": 0, "y": 9, "z": 1, "kind": "solid" }
//!   ],
//!   "players": [
//!     { "name": "runner", "x": 0.5, "y": 11.0, "z": 0.5, "sprinting": true }
//!   ]
//! }
//! ```
//!
//! Players default to standing on the ground, walking, at full health.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use glam::IVec3;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::{Locomotion, Player};
use crate::simulation::Health;
use crate::slip::block_pos;
use crate::terrain::{BlockState, Direction, Terrain};
use crate::DEFAULT_PLAYER_HEALTH;

/// Failure while loading or validating a [`Layout`].
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The layout file could not be read.
    #[error("failed to read layout {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The layout is not valid JSON or does not match the schema.
    #[error("invalid layout: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two blocks occupy the same cell.
    #[error("more than one block placed at {0}")]
    DuplicateBlock(IVec3),
    /// A player's feet are inside a non-air cell.
    #[error("player {name} spawns inside the block at {cell}")]
    BuriedPlayer {
        /// Name of the offending player.
        name: String,
        /// Cell containing the player's feet.
        cell: IVec3,
    },
}

/// A block at a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedBlock {
    /// Cell x coordinate.
    pub x: i32,
    /// Cell y coordinate.
    pub y: i32,
    /// Cell z coordinate.
    pub z: i32,
    /// Block occupying the cell.
    #[serde(flatten)]
    pub block: BlockState,
}

impl PlacedBlock {
    /// Places `block` at `cell`.
    #[must_use]
    pub const fn new(cell: IVec3, block: BlockState) -> Self {
        Self {
            x: cell.x,
            y: cell.y,
            z: cell.z,
            block,
        }
    }

    /// Grid cell of the block.
    #[must_use]
    pub const fn cell(&self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

const fn grounded() -> bool {
    true
}

const fn full_health() -> u16 {
    DEFAULT_PLAYER_HEALTH
}

/// Where and how a player enters the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpawn {
    /// Display name.
    pub name: String,
    /// Feet x coordinate.
    pub x: f32,
    /// Feet y coordinate.
    pub y: f32,
    /// Feet z coordinate.
    pub z: f32,
    /// Whether the player starts on the ground.
    #[serde(default = "grounded")]
    pub on_ground: bool,
    /// Whether the player starts sprinting.
    #[serde(default)]
    pub sprinting: bool,
    /// Starting and maximum health.
    #[serde(default = "full_health")]
    pub health: u16,
}

impl PlayerSpawn {
    /// Feet position.
    #[must_use]
    pub const fn feet(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Components for a freshly spawned player.
    #[must_use]
    pub fn bundle(&self) -> impl Bundle {
        (
            Player::new(self.name.clone()),
            Transform::from_translation(self.feet()),
            Locomotion {
                on_ground: self.on_ground,
                sprinting: self.sprinting,
            },
            Health::full(self.health),
        )
    }
}

/// Terrain and players making up a world.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Non-air blocks.
    #[serde(default)]
    pub blocks: Vec<PlacedBlock>,
    /// Players to spawn.
    #[serde(default)]
    pub players: Vec<PlayerSpawn>,
}

impl Layout {
    /// Parses a layout from JSON text.
    ///
    /// # Errors
    /// Returns [`LayoutError::Parse`] when the text is not a valid layout.
    pub fn from_json_str(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a layout file.
    ///
    /// # Errors
    /// Returns [`LayoutError::Read`] when the file cannot be read and
    /// [`LayoutError::Parse`] when its contents are not a valid layout.
    pub fn from_path(path: &Path) -> Result<Self, LayoutError> {
        let json = fs::read_to_string(path).map_err(|source| LayoutError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// A sprinting runner at the top of a five-step staircase that descends
    /// southwards onto a flat landing, and a walker standing on the landing.
    #[must_use]
    pub fn demo_staircase() -> Self {
        let steps = (0..5).map(|step| {
            PlacedBlock::new(
                IVec3::new(0, 10 - step, step),
                BlockState::bottom_stairs(Direction::North),
            )
        });
        let landing = (5..9).map(|z| PlacedBlock::new(IVec3::new(0, 6, z), BlockState::Solid));
        let walker_ground = PlacedBlock::new(IVec3::new(3, 6, 6), BlockState::Solid);
        Self {
            blocks: steps.chain(landing).chain([walker_ground]).collect(),
            players: vec![
                PlayerSpawn {
                    name: "runner".to_owned(),
                    x: 0.5,
                    y: 11.0,
                    z: 0.5,
                    on_ground: true,
                    sprinting: true,
                    health: DEFAULT_PLAYER_HEALTH,
                },
                PlayerSpawn {
                    name: "walker".to_owned(),
                    x: 3.5,
                    y: 7.0,
                    z: 6.5,
                    on_ground: true,
                    sprinting: false,
                    health: DEFAULT_PLAYER_HEALTH,
                },
            ],
        }
    }

    /// Builds the terrain described by the layout.
    ///
    /// # Errors
    /// Returns [`LayoutError::DuplicateBlock`] when two blocks share a cell
    /// and [`LayoutError::BuriedPlayer`] when a player spawns inside a block.
    pub fn terrain(&self) -> Result<Terrain, LayoutError> {
        let mut terrain = Terrain::new();
        for placed in &self.blocks {
            let cell = placed.cell();
            if !terrain.is_air(cell) {
                return Err(LayoutError::DuplicateBlock(cell));
            }
            terrain.set_block(cell, placed.block);
        }
        for spawn in &self.players {
            let cell = block_pos(spawn.feet());
            if !terrain.is_air(cell) {
                return Err(LayoutError::BuriedPlayer {
                    name: spawn.name.clone(),
                    cell,
                });
            }
        }
        Ok(terrain)
    }

    /// Replaces the world's terrain and spawns every player.
    ///
    /// Returns the spawned player entities in layout order.
    ///
    /// # Errors
    /// Propagates validation failures from [`Layout::terrain`]. The world is
    /// left untouched on error.
    pub fn install(&self, world: &mut World) -> Result<Vec<Entity>, LayoutError> {
        let terrain = self.terrain()?;
        info!(
            "installing layout with {} blocks and {} players",
            terrain.len(),
            self.players.len()
        );
        world.insert_resource(terrain);
        Ok(self
            .players
            .iter()
            .map(|spawn| world.spawn(spawn.bundle()).id())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::StairHalf;
    use rstest::rstest;

    #[rstest]
    fn parses_blocks_and_defaults_player_fields() {
        let layout = Layout::from_json_str(
            r#"{
                "blocks": [
                    { "x": 0, "y": 10, "z": 0, "kind": "stairs", "half": "top", "facing": "east" },
                    { "x": 1, "y": 10, "z": 0, "kind": "solid" }
                ],
                "players": [ { "name": "ada", "x": 0.5, "y": 11.0, "z": 0.5 } ]
            }"#,
        )
        .expect("layout parses");
        assert_eq!(
            layout.blocks,
            vec![
                PlacedBlock::new(
                    IVec3::new(0, 10, 0),
                    BlockState::Stairs {
                        half: StairHalf::Top,
                        facing: Direction::East,
                    },
                ),
                PlacedBlock::new(IVec3::new(1, 10, 0), BlockState::Solid),
            ]
        );
        let ada = layout.players.first().expect("one player");
        assert!(ada.on_ground);
        assert!(!ada.sprinting);
        assert_eq!(ada.health, DEFAULT_PLAYER_HEALTH);
    }

    #[rstest]
    #[case(r#"{ "blocks": [ { "x": 0, "y": 0, "z": 0, "kind": "lava" } ] }"#)]
    #[case(r#"{ "blocks": [ { "x": 0, "y": 0, "z": 0, "kind": "stairs" } ] }"#)]
    #[case("not json")]
    fn rejects_malformed_layouts(#[case] json: &str) {
        assert!(matches!(
            Layout::from_json_str(json),
            Err(LayoutError::Parse(_))
        ));
    }

    #[rstest]
    fn duplicate_cells_are_rejected() {
        let cell = IVec3::new(2, 2, 2);
        let layout = Layout {
            blocks: vec![
                PlacedBlock::new(cell, BlockState::Solid),
                PlacedBlock::new(cell, BlockState::bottom_stairs(Direction::West)),
            ],
            players: Vec::new(),
        };
        assert!(matches!(
            layout.terrain(),
            Err(LayoutError::DuplicateBlock(at)) if at == cell
        ));
    }

    #[rstest]
    fn buried_players_are_rejected() {
        let mut layout = Layout::demo_staircase();
        if let Some(runner) = layout.players.first_mut() {
            runner.y = 10.2;
        }
        assert!(matches!(
            layout.terrain(),
            Err(LayoutError::BuriedPlayer { ref name, .. }) if name == "runner"
        ));
    }

    #[rstest]
    fn missing_file_reports_path() {
        let path = Path::new("/definitely/not/a/layout.json");
        let err = Layout::from_path(path).expect_err("file is missing");
        assert!(err.to_string().contains("/definitely/not/a/layout.json"));
    }

    #[rstest]
    fn demo_staircase_installs_cleanly() {
        let mut world = World::new();
        let players = Layout::demo_staircase()
            .install(&mut world)
            .expect("demo layout is valid");
        assert_eq!(players.len(), 2);
        let terrain = world.resource::<Terrain>();
        assert_eq!(
            terrain.block_at(IVec3::new(0, 10, 0)),
            BlockState::bottom_stairs(Direction::North)
        );
        for player in players {
            assert!(world.get::<Player>(player).is_some());
            assert!(world.get::<Locomotion>(player).is_some());
        }
    }
}
