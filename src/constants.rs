//! Tuning constants shared by the slip mechanic and the simulation host.
//!
//! Only [`DEBOUNCE_TICKS`] and [`SLIP_DAMAGE`] belong to the mechanic itself.
//! The remaining values describe the host's damage routine and voxel grid.

/// Minimum number of ticks between two successive slip steps for one player.
///
/// High values give the player a chance to break their fall. Very low values
/// make the descent unnaturally fast.
pub const DEBOUNCE_TICKS: u64 = 1;

/// Fall damage applied for every slip step.
pub const SLIP_DAMAGE: u16 = 1;

/// Damage is suppressed while a player's cooldown is above this value.
pub const DAMAGE_COOLDOWN_THRESHOLD: u32 = 10;

/// Cooldown armed by every hit that lands.
pub const DAMAGE_COOLDOWN_TICKS: u32 = 20;

/// Offset from a block's minimum corner to its horizontal centre.
pub const BLOCK_CENTRE_OFFSET: f32 = 0.5;

/// Maximum and starting health of a freshly spawned player.
pub const DEFAULT_PLAYER_HEALTH: u16 = 20;
