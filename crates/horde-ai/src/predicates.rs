//! Sight and range predicates used by the chase action to decide between
//! melee, missile, and closing-the-distance.

use horde_core::archetype::{self, MonsterKind};
use horde_core::constants::MELEERANGE;
use horde_core::fixed::Fixed;
use horde_core::flags::ActorFlags;
use horde_core::prng::CallSite;

use crate::services::WorldServices;
use crate::world::{ActorId, Actor, AiWorld};

/// Octagonal approximation the original uses in its range checks:
/// max(|dx|, |dy|) + min(|dx|, |dy|) / 2.
pub(crate) fn approx_distance(dx: Fixed, dy: Fixed) -> Fixed {
    let dx = dx.abs();
    let dy = dy.abs();
    if dx > dy {
        dx + dy / Fixed::from_int(2)
    } else {
        dy + dx / Fixed::from_int(2)
    }
}

fn distance(a: &Actor, b: &Actor) -> Fixed {
    approx_distance(a.x - b.x, a.y - b.y)
}

/// Is `actor`'s target within melee range and does `actor` have a melee
/// attack at all?
pub fn check_melee_range(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) -> bool {
    let Some((target, within, has_melee)) = (|| {
        let a = world.ecs.get::<&Actor>(actor).ok()?;
        let target_id = a.target?;
        let t = world.ecs.get::<&Actor>(target_id).ok()?;
        let within = distance(&a, &t) < MELEERANGE - Fixed::from_int(20) + archetype::descriptor(t.kind).radius;
        let has_melee = archetype::descriptor(a.kind).melee_state.is_some();
        Some((target_id, within, has_melee))
    })() else {
        return false;
    };
    within && has_melee && services.check_sight(world, actor, target)
}

/// Should `actor` hold off on attacking because it has no sight of its
/// target, or fire a missile at it? Ports `P_CheckMissileRange` verbatim,
/// including the just-hit retaliation override, the reaction-time stall,
/// and the per-archetype distance clamp table.
pub fn check_missile_range(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) -> bool {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return false };
    if !services.check_sight(world, actor, target) {
        return false;
    }

    let just_hit = world.ecs.get::<&Actor>(actor).unwrap().flags.contains(ActorFlags::JUST_HIT);
    if just_hit {
        let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
        a.flags.remove(ActorFlags::JUST_HIT);
        return true;
    }

    if world.ecs.get::<&Actor>(actor).unwrap().reaction_time > 0 {
        return false;
    }

    let (kind, ax, ay) = {
        let a = world.ecs.get::<&Actor>(actor).unwrap();
        (a.kind, a.x, a.y)
    };
    let (tx, ty) = {
        let t = world.ecs.get::<&Actor>(target).unwrap();
        (t.x, t.y)
    };

    let descriptor = archetype::descriptor(kind);
    let mut dist = approx_distance(tx - ax, ty - ay) - MELEERANGE;
    if descriptor.melee_state.is_none() {
        dist -= Fixed::from_int(128);
    }
    let mut dist = dist.to_int();

    if kind == MonsterKind::ArchVile && dist > 14 * 64 {
        return false;
    }

    if kind == MonsterKind::Revenant {
        if dist < 196 {
            return false;
        }
        dist /= 2;
    }

    if matches!(kind, MonsterKind::Cyberdemon | MonsterKind::SpiderMastermind | MonsterKind::LostSoul) {
        dist /= 2;
    }

    if dist > 200 {
        dist = 200;
    }
    if kind == MonsterKind::Cyberdemon && dist > 160 {
        dist = 160;
    }

    !world.prng.chance(CallSite::MissileRange, dist.clamp(0, 255) as u8)
}

pub fn actor_is_shootable(actor: &Actor) -> bool {
    actor.flags.contains(ActorFlags::SHOOTABLE) && actor.health > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::map::SectorId;

    #[test]
    fn melee_distance_uses_octagonal_approximation() {
        let mut world = AiWorld::new(1);
        let a = Actor::spawn(MonsterKind::Demon, Fixed::ZERO, Fixed::ZERO, Fixed::ZERO, SectorId(0), 150);
        let b = Actor::spawn(MonsterKind::ZombieMan, Fixed::from_int(10), Fixed::from_int(10), Fixed::ZERO, SectorId(0), 20);
        let a_id = world.spawn_actor(a);
        let b_id = world.spawn_actor(b);
        {
            let mut a = world.ecs.get::<&mut Actor>(a_id).unwrap();
            a.target = Some(b_id);
        }
        let a = world.ecs.get::<&Actor>(a_id).unwrap();
        let b = world.ecs.get::<&Actor>(b_id).unwrap();
        let d = distance(&a, &b);
        assert_eq!(d, Fixed::from_int(15));
    }
}
