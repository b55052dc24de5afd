//! Health, damage cooldown and the host damage routine.
//!
//! A hit only lands while the victim's [`DamageCooldown`] is at or below
//! [`DAMAGE_COOLDOWN_THRESHOLD`]. Every landed hit re-arms the cooldown to
//! [`DAMAGE_COOLDOWN_TICKS`], and the cooldown decays by one each tick.

use bevy::prelude::*;
use log::debug;

use crate::{DAMAGE_COOLDOWN_THRESHOLD, DAMAGE_COOLDOWN_TICKS, DEFAULT_PLAYER_HEALTH};

/// Hit points of a living entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Health {
    /// Remaining hit points.
    pub current: u16,
    /// Upper bound for `current`.
    pub max: u16,
}

impl Health {
    /// Full health with the given maximum.
    #[must_use]
    pub const fn full(max: u16) -> Self {
        Self { current: max, max }
    }

    /// Returns `true` once no hit points remain.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::full(DEFAULT_PLAYER_HEALTH)
    }
}

/// Ticks of damage immunity left.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub struct DamageCooldown(pub u32);

/// Classification of incoming damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageSource {
    /// Damage from falling or slipping. Not elemental.
    Fall,
    /// Damage from any other cause.
    Generic,
}

/// Result of a call to [`apply_damage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The hit landed.
    Applied {
        /// Hit points removed.
        amount: u16,
        /// Hit points left afterwards.
        remaining: u16,
    },
    /// The hit was swallowed by the damage cooldown.
    Suppressed,
}

/// Applies `amount` damage of kind `source`, honouring the damage cooldown.
///
/// # Examples
///
/// ```
/// use stumble::simulation::{apply_damage, DamageCooldown, DamageOutcome, DamageSource, Health};
/// let mut health = Health::full(20);
/// let mut cooldown = DamageCooldown::default();
/// let outcome = apply_damage(&mut health, &mut cooldown, DamageSource::Fall, 3);
/// assert_eq!(outcome, DamageOutcome::Applied { amount: 3, remaining: 17 });
/// assert_eq!(
///     apply_damage(&mut health, &mut cooldown, DamageSource::Fall, 3),
///     DamageOutcome::Suppressed
/// );
/// ```
pub fn apply_damage(
    health: &mut Health,
    cooldown: &mut DamageCooldown,
    source: DamageSource,
    amount: u16,
) -> DamageOutcome {
    if cooldown.0 > DAMAGE_COOLDOWN_THRESHOLD {
        debug!("{source:?} damage of {amount} suppressed by cooldown {}", cooldown.0);
        return DamageOutcome::Suppressed;
    }
    let dealt = amount.min(health.current);
    health.current -= dealt;
    cooldown.0 = DAMAGE_COOLDOWN_TICKS;
    debug!(
        "{source:?} damage of {dealt} applied, {} hit points remain",
        health.current
    );
    DamageOutcome::Applied {
        amount: dealt,
        remaining: health.current,
    }
}

/// Lets every damage cooldown run down by one tick.
pub fn decay_damage_cooldowns(mut cooldowns: Query<&mut DamageCooldown>) {
    for mut cooldown in &mut cooldowns {
        if cooldown.0 > 0 {
            cooldown.0 -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(DAMAGE_COOLDOWN_THRESHOLD, true)]
    #[case(DAMAGE_COOLDOWN_THRESHOLD + 1, false)]
    #[case(DAMAGE_COOLDOWN_TICKS, false)]
    fn cooldown_gates_damage(#[case] cooldown_ticks: u32, #[case] lands: bool) {
        let mut health = Health::full(20);
        let mut cooldown = DamageCooldown(cooldown_ticks);
        let outcome = apply_damage(&mut health, &mut cooldown, DamageSource::Generic, 4);
        if lands {
            assert_eq!(outcome, DamageOutcome::Applied { amount: 4, remaining: 16 });
            assert_eq!(cooldown.0, DAMAGE_COOLDOWN_TICKS);
        } else {
            assert_eq!(outcome, DamageOutcome::Suppressed);
            assert_eq!(health.current, 20);
            assert_eq!(cooldown.0, cooldown_ticks);
        }
    }

    #[rstest]
    fn damage_saturates_at_zero() {
        let mut health = Health { current: 2, max: 20 };
        let mut cooldown = DamageCooldown::default();
        let outcome = apply_damage(&mut health, &mut cooldown, DamageSource::Fall, 5);
        assert_eq!(outcome, DamageOutcome::Applied { amount: 2, remaining: 0 });
        assert!(health.is_depleted());
    }

    #[rstest]
    fn cooldowns_decay_once_per_run() {
        let mut world = World::new();
        let hot = world.spawn(DamageCooldown(3)).id();
        let cold = world.spawn(DamageCooldown(0)).id();
        world
            .run_system_once(decay_damage_cooldowns)
            .expect("decay system runs");
        assert_eq!(world.get::<DamageCooldown>(hot), Some(&DamageCooldown(2)));
        assert_eq!(world.get::<DamageCooldown>(cold), Some(&DamageCooldown(0)));
    }
}
