//! Per-tick systems driving the slip state machine.

use bevy::prelude::*;
use bevy_ecs::prelude::RemovedComponents;
use log::debug;

use crate::components::{Locomotion, Player};
use crate::simulation::{DamageCooldown, Health, WorldClock};
use crate::terrain::Terrain;
use crate::DEBOUNCE_TICKS;

use super::effect::apply_slip;
use super::events::{Recovered, Slipped};
use super::feasibility::slip_direction;
use super::schedule::SlipSchedule;
use super::trigger::should_start_slipping;

type SlipperQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static Locomotion,
        &'static mut Transform,
        &'static mut Health,
        &'static mut DamageCooldown,
    ),
    With<Player>,
>;

/// Runs the slip state machine for one world tick.
///
/// Stable players who are grounded and sprinting enter the schedule first.
/// Every slipping player whose debounce window has elapsed then either takes
/// a slip step or, when the terrain no longer allows it, recovers.
pub fn stumble_tick_system(
    clock: Res<WorldClock>,
    terrain: Res<Terrain>,
    mut schedule: ResMut<SlipSchedule>,
    mut players: SlipperQuery<'_, '_>,
    mut commands: Commands,
) {
    let now = clock.tick();

    for (player, locomotion, _, _, _) in players.iter() {
        if !schedule.is_slipping(player) && should_start_slipping(locomotion) {
            debug!("{player} lost their balance at tick {now}");
            schedule.begin(player, now);
        }
    }

    for player in schedule.due(now) {
        let Ok((_, _, mut transform, mut health, mut cooldown)) = players.get_mut(player) else {
            debug!("dropping slip entry for missing player {player}");
            schedule.end(player);
            continue;
        };
        match slip_direction(&terrain, transform.translation) {
            Some(direction) => {
                let outcome = apply_slip(&mut transform, &mut health, &mut cooldown, direction);
                schedule.reschedule(player, now.saturating_add(DEBOUNCE_TICKS));
                commands.trigger(Slipped {
                    player,
                    direction,
                    target: outcome.target,
                    damage: outcome.damage,
                });
            }
            None => {
                schedule.end(player);
                commands.trigger(Recovered { player });
            }
        }
    }
}

/// Forgets slip entries for players that despawned or stopped being players.
pub fn prune_departed_players(
    mut departed: RemovedComponents<Player>,
    mut schedule: ResMut<SlipSchedule>,
) {
    for player in departed.read() {
        if schedule.end(player) {
            debug!("pruned slip entry for departed player {player}");
        }
    }
}
