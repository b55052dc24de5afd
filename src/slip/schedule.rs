//! Debounce table tracking which players are mid-slip.

use bevy::prelude::{Entity, Resource};
use hashbrown::HashMap;

use crate::simulation::Tick;

/// Players currently slipping, mapped to the tick after which they may take
/// their next step.
///
/// A player is present exactly while a slip sequence is active. Absent
/// players are stable.
#[derive(Resource, Debug, Default, Clone)]
pub struct SlipSchedule {
    next_eligible: HashMap<Entity, Tick>,
}

impl SlipSchedule {
    /// Returns `true` while `player` is in a slip sequence.
    #[must_use]
    pub fn is_slipping(&self, player: Entity) -> bool {
        self.next_eligible.contains_key(&player)
    }

    /// Tick stored for `player`, or `None` when they are stable.
    #[must_use]
    pub fn next_eligible(&self, player: Entity) -> Option<Tick> {
        self.next_eligible.get(&player).copied()
    }

    /// Starts a slip sequence for a stable player.
    ///
    /// Returns `false` and leaves the entry untouched when the player is
    /// already slipping.
    pub fn begin(&mut self, player: Entity, now: Tick) -> bool {
        if self.is_slipping(player) {
            return false;
        }
        self.next_eligible.insert(player, now);
        true
    }

    /// Pushes a slipping player's next step out to `tick`.
    pub fn reschedule(&mut self, player: Entity, tick: Tick) {
        if let Some(next) = self.next_eligible.get_mut(&player) {
            *next = tick;
        }
    }

    /// Ends `player`'s slip sequence. Returns `true` if one was active.
    pub fn end(&mut self, player: Entity) -> bool {
        self.next_eligible.remove(&player).is_some()
    }

    /// Slipping players whose debounce window has elapsed by `now`.
    #[must_use]
    pub fn due(&self, now: Tick) -> Vec<Entity> {
        self.next_eligible
            .iter()
            .filter(|&(_, &next)| next < now)
            .map(|(&player, _)| player)
            .collect()
    }

    /// Number of players mid-slip.
    #[must_use]
    pub fn len(&self) -> usize {
        self.next_eligible.len()
    }

    /// Returns `true` when every player is stable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.next_eligible.is_empty()
    }
}
