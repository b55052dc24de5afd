//! The slip mechanic: sprinting onto the low edge of a stair can send a
//! player sliding down it.
//!
//! Each world tick, grounded sprinting players enter the [`SlipSchedule`].
//! Scheduled players whose debounce window has passed slide one step outward
//! and down for as long as the cells beyond the stair's edge stay open. The
//! first time they do not, the player recovers and leaves the schedule.

mod effect;
mod events;
mod feasibility;
mod footing;
mod schedule;
mod systems;
mod trigger;

use bevy::prelude::*;

use crate::simulation::{SimulationPlugin, SimulationSystems};

pub use effect::{apply_slip, slip_target, SlipOutcome};
pub use events::{Recovered, Slipped};
pub use feasibility::slip_direction;
pub use footing::{block_pos, stair_footing, StairFooting};
pub use schedule::SlipSchedule;
pub use systems::{prune_departed_players, stumble_tick_system};
pub use trigger::should_start_slipping;

/// Systems belonging to the slip mechanic.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StumbleSystems;

/// Registers the slip mechanic to run once per world tick.
///
/// Installs [`SimulationPlugin`] as well when the app does not have it yet.
#[derive(Default)]
pub struct StumblePlugin;

impl Plugin for StumblePlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<SimulationPlugin>() {
            app.add_plugins(SimulationPlugin);
        }
        app.init_resource::<SlipSchedule>();
        app.add_observer(events::log_slip);
        app.add_observer(events::log_recovery);
        app.add_systems(
            Update,
            (prune_departed_players, stumble_tick_system)
                .chain()
                .in_set(StumbleSystems)
                .after(SimulationSystems),
        );
    }
}
