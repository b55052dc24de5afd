//! Headless harness for driving the slip mechanic in tests.
//!
//! [`StumbleHarness`] wraps a Bevy [`App`] running [`StumblePlugin`] and
//! records every [`Slipped`] and [`Recovered`] event with the tick it fired
//! on. [`SharedHarness`] makes the harness usable as an `rspec` environment.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use glam::IVec3;
use stumble::{
    BlockState, DamageCooldown, Health, Locomotion, Player, Recovered, SlipSchedule, Slipped,
    StumblePlugin, Terrain, Tick, WorldClock,
};

/// Events observed while the harness ran.
#[derive(Resource, Debug, Default)]
pub struct EventLog {
    /// Slip steps with the tick they happened on.
    pub slips: Vec<(Tick, Slipped)>,
    /// Recoveries with the tick they happened on.
    pub recoveries: Vec<(Tick, Entity)>,
}

fn record_slip(event: On<Slipped>, clock: Res<WorldClock>, mut log: ResMut<EventLog>) {
    log.slips.push((clock.tick(), *event.event()));
}

fn record_recovery(event: On<Recovered>, clock: Res<WorldClock>, mut log: ResMut<EventLog>) {
    log.recoveries.push((clock.tick(), event.event().player));
}

/// Bevy app running the slip mechanic with an inspectable world.
pub struct StumbleHarness {
    app: App,
}

impl fmt::Debug for StumbleHarness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StumbleHarness")
            .field("tick", &self.now())
            .field("slipping", &self.schedule().len())
            .finish_non_exhaustive()
    }
}

impl Default for StumbleHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl StumbleHarness {
    /// App with [`MinimalPlugins`], [`StumblePlugin`] and event recording.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(StumblePlugin);
        app.init_resource::<EventLog>();
        app.add_observer(record_slip);
        app.add_observer(record_recovery);
        Self { app }
    }

    /// Sets the clock so the next [`StumbleHarness::tick`] runs at `tick`.
    pub fn first_tick_at(&mut self, tick: Tick) -> &mut Self {
        self.app
            .insert_resource(WorldClock::starting_at(tick.saturating_sub(1)));
        self
    }

    /// Places a block in the terrain.
    pub fn place(&mut self, cell: IVec3, block: BlockState) -> &mut Self {
        self.app
            .world_mut()
            .resource_mut::<Terrain>()
            .set_block(cell, block);
        self
    }

    /// Spawns a player with their feet at `feet`.
    pub fn spawn_player(&mut self, name: &str, feet: Vec3, locomotion: Locomotion) -> Entity {
        self.app
            .world_mut()
            .spawn((Player::new(name), Transform::from_translation(feet), locomotion))
            .id()
    }

    /// Runs one world tick and returns its number.
    pub fn tick(&mut self) -> Tick {
        self.app.update();
        self.now()
    }

    /// Runs `count` world ticks and returns the last tick number.
    pub fn run(&mut self, count: u64) -> Tick {
        for _ in 0..count {
            self.app.update();
        }
        self.now()
    }

    /// Current world tick.
    pub fn now(&self) -> Tick {
        self.app.world().resource::<WorldClock>().tick()
    }

    /// Feet position of `player`.
    ///
    /// # Panics
    /// Panics if `player` has no `Transform`.
    pub fn feet(&self, player: Entity) -> Vec3 {
        self.component::<Transform>(player).translation
    }

    /// Full transform of `player`.
    ///
    /// # Panics
    /// Panics if `player` has no `Transform`.
    pub fn transform(&self, player: Entity) -> Transform {
        *self.component::<Transform>(player)
    }

    /// Remaining health of `player`.
    ///
    /// # Panics
    /// Panics if `player` has no `Health`.
    pub fn health(&self, player: Entity) -> u16 {
        self.component::<Health>(player).current
    }

    /// Damage cooldown of `player`.
    ///
    /// # Panics
    /// Panics if `player` has no `DamageCooldown`.
    pub fn cooldown(&self, player: Entity) -> u32 {
        self.component::<DamageCooldown>(player).0
    }

    /// Overwrites the movement flags of `player`.
    ///
    /// # Panics
    /// Panics if `player` does not exist.
    pub fn set_locomotion(&mut self, player: Entity, locomotion: Locomotion) {
        self.app.world_mut().entity_mut(player).insert(locomotion);
    }

    /// Replaces the transform of `player`.
    ///
    /// # Panics
    /// Panics if `player` does not exist.
    pub fn set_transform(&mut self, player: Entity, transform: Transform) {
        self.app.world_mut().entity_mut(player).insert(transform);
    }

    /// Despawns `player`.
    ///
    /// # Panics
    /// Panics if `player` does not exist.
    pub fn despawn(&mut self, player: Entity) {
        self.app.world_mut().entity_mut(player).despawn();
    }

    /// Removes the [`Player`] marker while keeping the entity alive.
    ///
    /// # Panics
    /// Panics if `player` does not exist.
    pub fn demote(&mut self, player: Entity) {
        self.app.world_mut().entity_mut(player).remove::<Player>();
    }

    /// Debounce table.
    pub fn schedule(&self) -> &SlipSchedule {
        self.app.world().resource::<SlipSchedule>()
    }

    /// Next eligible tick stored for `player`.
    pub fn next_eligible(&self, player: Entity) -> Option<Tick> {
        self.schedule().next_eligible(player)
    }

    /// Ticks on which `player` slipped.
    pub fn slip_ticks(&self, player: Entity) -> Vec<Tick> {
        self.events()
            .slips
            .iter()
            .filter(|(_, slipped)| slipped.player == player)
            .map(|&(tick, _)| tick)
            .collect()
    }

    /// Ticks on which `player` recovered.
    pub fn recovery_ticks(&self, player: Entity) -> Vec<Tick> {
        self.events()
            .recoveries
            .iter()
            .filter(|&&(_, recovered)| recovered == player)
            .map(|&(tick, _)| tick)
            .collect()
    }

    /// Events recorded so far.
    pub fn events(&self) -> &EventLog {
        self.app.world().resource::<EventLog>()
    }

    fn component<C: Component>(&self, player: Entity) -> &C {
        self.app
            .world()
            .get::<C>(player)
            .unwrap_or_else(|| panic!("{player} is missing {}", std::any::type_name::<C>()))
    }
}

/// Harness wrapper that forwards `Send` and `Sync` for `rspec` environments.
#[derive(Debug, Default)]
pub struct SyncHarness(pub StumbleHarness);

impl Deref for SyncHarness {
    type Target = StumbleHarness;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SyncHarness {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// SAFETY: rspec requires `Send + Sync` environments but runs suites on one
// thread when configured serially, and every access goes through the mutex
// in `SharedHarness`.
unsafe impl Send for SyncHarness {}
unsafe impl Sync for SyncHarness {}

/// Shared, lockable harness.
pub type SharedHarness = Arc<Mutex<SyncHarness>>;

/// Wraps `harness` for sharing.
pub fn share(harness: StumbleHarness) -> SharedHarness {
    Arc::new(Mutex::new(SyncHarness(harness)))
}

/// Locks the shared harness, recovering from a poisoned mutex.
pub fn lock(harness: &SharedHarness) -> MutexGuard<'_, SyncHarness> {
    harness.lock().unwrap_or_else(PoisonError::into_inner)
}
