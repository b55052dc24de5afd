//! World tick counter.

use bevy::prelude::*;

/// Simulation time measured in whole ticks.
pub type Tick = u64;

/// Monotonic tick counter advanced once per frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorldClock {
    tick: Tick,
}

impl WorldClock {
    /// Clock whose next advance lands on `tick + 1`.
    #[must_use]
    pub const fn starting_at(tick: Tick) -> Self {
        Self { tick }
    }

    /// Current tick.
    #[must_use]
    pub const fn tick(&self) -> Tick {
        self.tick
    }

    /// Steps the clock forward by one tick and returns the new value.
    pub const fn advance(&mut self) -> Tick {
        self.tick = self.tick.saturating_add(1);
        self.tick
    }
}

/// Advances the [`WorldClock`] at the start of every frame.
pub fn advance_world_clock(mut clock: ResMut<WorldClock>) {
    let now = clock.advance();
    log::trace!("world tick {now}");
}
