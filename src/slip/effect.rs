//! Moves a slipping player down one step and hurts them.

use bevy::prelude::Transform;
use glam::{IVec3, Vec3};

use crate::simulation::{apply_damage, DamageCooldown, DamageOutcome, DamageSource, Health};
use crate::terrain::Direction;
use crate::{BLOCK_CENTRE_OFFSET, DAMAGE_COOLDOWN_THRESHOLD, SLIP_DAMAGE};

use super::footing::block_pos;

/// What a single slip step did to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlipOutcome {
    /// Cell the player was moved into.
    pub target: IVec3,
    /// Result of the fall damage.
    pub damage: DamageOutcome,
}

/// Cell a player at `feet` lands in after slipping towards `direction`.
#[must_use]
pub fn slip_target(feet: Vec3, direction: Direction) -> IVec3 {
    block_pos(feet) + direction.offset() + IVec3::NEG_Y
}

/// Teleports the player one step down towards `direction` and deals
/// [`SLIP_DAMAGE`] fall damage.
///
/// The player lands on the horizontal centre of the target cell at its base
/// height. Rotation is left alone. The damage cooldown is primed just below
/// [`DAMAGE_COOLDOWN_THRESHOLD`] so a leftover cooldown cannot swallow the
/// hit, and the hit itself re-arms the cooldown.
pub fn apply_slip(
    transform: &mut Transform,
    health: &mut Health,
    cooldown: &mut DamageCooldown,
    direction: Direction,
) -> SlipOutcome {
    let target = slip_target(transform.translation, direction);
    transform.translation =
        target.as_vec3() + Vec3::new(BLOCK_CENTRE_OFFSET, 0.0, BLOCK_CENTRE_OFFSET);
    cooldown.0 = DAMAGE_COOLDOWN_THRESHOLD - 1;
    let damage = apply_damage(health, cooldown, DamageSource::Fall, SLIP_DAMAGE);
    SlipOutcome { target, damage }
}
