//! Decides when a player loses their balance.

use crate::components::Locomotion;

/// Returns `true` when a stable player should start slipping.
///
/// Only governs the start of a slip sequence. Once slipping, a player keeps
/// going for as long as the terrain allows, whatever their movement flags.
#[must_use]
pub const fn should_start_slipping(locomotion: &Locomotion) -> bool {
    locomotion.on_ground && locomotion.sprinting
}
