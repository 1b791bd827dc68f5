//! The external-service boundary.
//!
//! Collision, rendering, networking, the map loader, and the frame-by-
//! frame state stepper are all out of this crate's scope. Everything
//! that genuinely needs one of those — real movement clipping, line of
//! sight through arbitrary geometry, spawning a projectile, advancing an
//! actor's animation — crosses this trait instead of being implemented
//! here. The embedding application provides a concrete impl; this crate
//! ships [`crate::testing::StubServices`] only for its own tests.

use horde_core::angle::Angle;
use horde_core::fixed::Fixed;
use horde_core::map::SectorId;
use horde_core::state::StateId;

use crate::world::{ActorId, AiWorld};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Moved,
    Blocked,
    /// Blocked by a line with a special (e.g. a door) — the caller
    /// should still try to activate it before giving up on the move.
    BlockedBySpecial,
}

#[derive(Debug, Clone, Copy)]
pub struct AttackResult {
    pub hit: bool,
    pub distance: Fixed,
}

/// Real map/physics/rendering operations the AI core calls through but
/// does not implement.
pub trait WorldServices {
    /// True if `from` has an unobstructed line of sight to `to`.
    fn check_sight(&mut self, world: &AiWorld, from: ActorId, to: ActorId) -> bool;

    /// Attempt to move `actor` by `(dx, dy)`, resolving collision with
    /// solid geometry and other actors.
    fn try_move(&mut self, world: &mut AiWorld, actor: ActorId, dx: Fixed, dy: Fixed) -> MoveResult;

    /// Run a closure over every actor in the blockmap cells the given
    /// box touches, stopping early if the closure returns `false`. Takes
    /// a closure rather than relying on global scratch variables.
    fn block_things_iterator(
        &mut self,
        world: &AiWorld,
        x: Fixed,
        y: Fixed,
        radius: Fixed,
        visit: &mut dyn FnMut(ActorId) -> bool,
    );

    /// Fire a traced attack at melee/near range.
    fn aim_line_attack(&mut self, world: &mut AiWorld, attacker: ActorId, angle: Angle, range: Fixed) -> Option<AttackResult>;

    /// Fire a hitscan attack along a fixed angle/damage, used by the
    /// per-archetype ranged actions once `aim_line_attack` has a target.
    fn line_attack(&mut self, world: &mut AiWorld, attacker: ActorId, angle: Angle, range: Fixed, damage: i32);

    /// Damage everything within `radius` of `source`'s position.
    fn radius_attack(&mut self, world: &mut AiWorld, source: ActorId, damage: i32, radius: Fixed);

    fn damage_mobj(&mut self, world: &mut AiWorld, target: ActorId, inflictor: Option<ActorId>, source: Option<ActorId>, damage: i32);

    fn spawn_mobj(&mut self, world: &mut AiWorld, kind: horde_core::archetype::MonsterKind, x: Fixed, y: Fixed, z: Fixed) -> ActorId;

    fn spawn_missile(&mut self, world: &mut AiWorld, source: ActorId, target: ActorId, kind: horde_core::archetype::ProjectileKind) -> ActorId;

    fn spawn_puff(&mut self, world: &mut AiWorld, x: Fixed, y: Fixed, z: Fixed);

    /// Spawn the Arch-vile's flame marker: a freestanding entity with no
    /// archetype of its own, repositioned every tick by `actions::vile::fire`
    /// rather than moving under its own momentum like a missile.
    fn spawn_fire_marker(&mut self, world: &mut AiWorld, x: Fixed, y: Fixed, z: Fixed) -> ActorId;

    fn remove_mobj(&mut self, world: &mut AiWorld, actor: ActorId);

    fn teleport_move(&mut self, world: &mut AiWorld, actor: ActorId, x: Fixed, y: Fixed) -> bool;

    fn set_thing_position(&mut self, world: &mut AiWorld, actor: ActorId);

    fn unset_thing_position(&mut self, world: &mut AiWorld, actor: ActorId);

    /// Activate a line special (door, lift, ...), if the line has one
    /// that responds to being bumped by `actor`.
    fn use_special_line(&mut self, world: &mut AiWorld, actor: ActorId, sector: SectorId) -> bool;

    /// Which side(s) of `actor` have an open path, for dodge-style
    /// movement choices.
    fn check_sides(&mut self, world: &AiWorld, actor: ActorId) -> (bool, bool);

    fn set_actor_state(&mut self, world: &mut AiWorld, actor: ActorId, state: StateId);

    fn spawn_sound(&mut self, world: &AiWorld, actor: ActorId, sound: horde_core::sound::SoundId);

    /// Level-exit triggers used by `boss_death`.
    fn ev_do_door(&mut self, world: &mut AiWorld, tag: u16, blaze: bool);
    fn ev_do_floor(&mut self, world: &mut AiWorld, tag: u16, turbo: bool);
    fn g_exit_level(&mut self, world: &mut AiWorld);
}
