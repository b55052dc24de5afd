//! ECS components describing players as seen by the slip mechanic.
//! Spawning a [`Player`] pulls in its position, movement flags and vitals.
use bevy::prelude::*;

use crate::simulation::{DamageCooldown, Health};

/// Marks an entity as a player taking part in the simulation.
#[derive(Component, Debug, Clone, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
#[require(Transform, Locomotion, Health, DamageCooldown)]
pub struct Player {
    /// Display name used in log output.
    pub name: String,
}

impl Player {
    /// Creates a player marker with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Movement flags maintained by the host's movement code.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub struct Locomotion {
    /// The player is touching the ground.
    pub on_ground: bool,
    /// The player is sprinting.
    pub sprinting: bool,
}

impl Locomotion {
    /// Grounded and sprinting.
    pub const SPRINTING: Self = Self {
        on_ground: true,
        sprinting: true,
    };

    /// Grounded and walking.
    pub const WALKING: Self = Self {
        on_ground: true,
        sprinting: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_player_keeps_its_name() {
        assert_eq!(Player::new("ada").name, "ada");
    }

    #[rstest]
    fn spawning_a_player_inserts_required_components() {
        let mut world = World::new();
        let player = world.spawn(Player::new("ada")).id();
        assert_eq!(world.get::<Locomotion>(player), Some(&Locomotion::default()));
        assert!(world.get::<Transform>(player).is_some());
        assert!(world.get::<Health>(player).is_some());
        assert!(world.get::<DamageCooldown>(player).is_some());
    }
}
