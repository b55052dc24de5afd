#![cfg_attr(docsrs, feature(doc_cfg))]
//! Stair slipping for a voxel game.
//!
//! Players who sprint onto the low edge of a bottom-half stair may lose their
//! footing and slide off it one block at a time, taking a point of fall
//! damage per step, until the way ahead is blocked. Add [`StumblePlugin`] to a
//! Bevy app to run the mechanic once per world tick.
pub mod components;
pub mod constants;
pub mod layout;
pub mod logging;
pub mod simulation;
pub mod slip;
pub mod terrain;
pub use constants::*;

// Re-export commonly used items
pub use components::{Locomotion, Player};
pub use layout::{Layout, LayoutError, PlacedBlock, PlayerSpawn};
pub use logging::init as init_logging;
pub use simulation::{
    DamageCooldown, DamageOutcome, DamageSource, Health, SimulationPlugin, SimulationSystems,
    Tick, WorldClock,
};
pub use slip::{Recovered, SlipSchedule, Slipped, StumblePlugin, StumbleSystems};
pub use terrain::{BlockState, Direction, StairHalf, Terrain};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use stumble::prelude::*;
    //! ```

    pub use crate::slip::{slip_direction, stair_footing, StumblePlugin};
    pub use crate::terrain::{BlockState, Direction, Terrain};
    pub use crate::{Health, Locomotion, Player, SlipSchedule, WorldClock};
}
