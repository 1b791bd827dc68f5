//! AI tuning constants, in 16.16 fixed point where the original used
//! `fixed_t`.

use crate::fixed::Fixed;

// --- Combat ranges ---

/// Melee engagement range.
pub const MELEERANGE: Fixed = Fixed(64 << 16);

/// Beyond this, an actor never attempts a missile attack.
pub const MISSILERANGE: Fixed = Fixed(32 * 64 << 16);

// --- Lost Soul / Pain Elemental ---

/// Lost Soul charge-attack speed.
pub const SKULLSPEED: Fixed = Fixed(20 << 16);

/// Maximum outstanding Lost Souls a single Pain Elemental may have
/// spawned at once (compatibility-mode population cap).
pub const MAX_SOULS: u32 = 20;

// --- Revenant tracer missile ---

/// Per-tic homing turn limit for `Tracer`, as a BAM angle.
pub const TRACEANGLE: u32 = 0xC00_0000;

// --- Mancubus triple-spread ---

/// Angle offset between the three fireballs of a `FatAttack` volley.
pub const FATSPREAD: u32 = crate::angle::ANG90 / 8;

// --- Movement ---

/// Vertical approach speed for float-capable archetypes.
pub const FLOATSPEED: Fixed = Fixed(4 << 16);

/// Coin flip (out of 256, so 128 for an even split) deciding whether a
/// stalled actor's last-resort direction scan runs forward (East through
/// SouthEast) or reversed, mirroring `P_Random(pr_newchasedir) & 1`.
pub const NEW_CHASE_DIR_RANDOM_CHANCE: u8 = 128;

/// Number of move attempts granted after `NewChaseDir` succeeds, before
/// the actor re-evaluates its direction.
pub const DEFAULT_MOVECOUNT_RANGE: std::ops::Range<u8> = 0..16;
