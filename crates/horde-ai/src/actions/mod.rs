//! The per-archetype behavior-action library: every concrete action a
//! `StateId` transition can invoke, grouped by the family of archetype it
//! belongs to. `dispatch.rs` is the table that maps an `ActionId` to one
//! of these.

pub mod boss;
pub mod common;
pub mod fatso;
pub mod pain_elemental;
pub mod revenant;
pub mod trooper;
pub mod vile;

use horde_core::angle::Angle;
use horde_core::prng::CallSite;

use crate::world::AiWorld;

/// `(P_Random() % dice + 1) * multiplier`, the original's near-universal
/// damage-roll idiom.
pub(crate) fn random_damage(world: &mut AiWorld, site: CallSite, dice: i32, multiplier: i32) -> i32 {
    (world.prng.next_byte(site) as i32 % dice + 1) * multiplier
}

/// `(P_Random() - P_Random()) << shift`, the original's order-independent
/// angle-jitter idiom, as a BAM `Angle`.
pub(crate) fn random_spread_angle(world: &mut AiWorld, site: CallSite, shift: u32) -> Angle {
    Angle(((world.prng.spread(site)) << shift) as u32)
}
