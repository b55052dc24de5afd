//! Events announcing slip steps and recoveries, plus their log observers.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use glam::IVec3;
use log::info;

use crate::components::Player;
use crate::simulation::DamageOutcome;
use crate::terrain::Direction;

/// A player slid one step down a staircase.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slipped {
    /// Player that slipped.
    pub player: Entity,
    /// Direction of the slide.
    pub direction: Direction,
    /// Cell the player landed in.
    pub target: IVec3,
    /// Fall damage taken on landing.
    pub damage: DamageOutcome,
}

/// A slipping player found their footing again.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recovered {
    /// Player that stopped slipping.
    pub player: Entity,
}

fn display_name(players: &Query<&Player>, entity: Entity) -> String {
    players
        .get(entity)
        .map_or_else(|_| format!("{entity}"), |player| player.name.clone())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub(crate) fn log_slip(event: On<Slipped>, players: Query<&Player>) {
    let Slipped {
        player,
        direction,
        target,
        damage,
    } = *event.event();
    info!(
        "{} slipped {direction:?} into {target} ({damage:?})",
        display_name(&players, player)
    );
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub(crate) fn log_recovery(event: On<Recovered>, players: Query<&Player>) {
    info!(
        "{} regained their footing",
        display_name(&players, event.event().player)
    );
}
