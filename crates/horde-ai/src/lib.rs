//! Monster AI behavior systems.
//!
//! Owns the `hecs::World`, the map/PRNG aggregate (`AiWorld`), and every
//! system that drives monster behavior: sound propagation, sight/range
//! predicates, chase movement, target acquisition, the per-archetype
//! action library, and the final-boss brain subsystem.

pub mod actions;
pub mod brain;
pub mod chase;
pub mod dispatch;
pub mod lookout;
pub mod movement;
pub mod predicates;
pub mod services;
pub mod sound;
pub mod testing;
pub mod world;

pub use horde_core as core;

#[cfg(test)]
mod tests;
