//! Minimal simulation host the slip mechanic runs inside.
//!
//! Provides the world clock, terrain storage and damage cooldown bookkeeping
//! that a full game server would otherwise supply.

mod clock;
mod damage;

use bevy::prelude::*;

use crate::terrain::Terrain;

pub use clock::{advance_world_clock, Tick, WorldClock};
pub use damage::{
    apply_damage, decay_damage_cooldowns, DamageCooldown, DamageOutcome, DamageSource, Health,
};

/// Systems that bring host state up to date before gameplay systems run.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimulationSystems;

/// Bevy plugin installing the host resources and per-tick bookkeeping.
#[derive(Default)]
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WorldClock>();
        app.init_resource::<Terrain>();
        app.add_systems(
            Update,
            (advance_world_clock, decay_damage_cooldowns)
                .chain()
                .in_set(SimulationSystems),
        );
    }
}
