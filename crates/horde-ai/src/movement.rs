//! Chase movement: `try_walk` (the public entry point chase calls) and
//! `do_move` (the actual step, including special-line activation on a
//! blocked path and the float-capable vertical nudge).

use horde_core::constants::FLOATSPEED;
use horde_core::direction::Direction;
use horde_core::flags::ActorFlags;
use horde_core::prng::CallSite;

use crate::services::{MoveResult, WorldServices};
use crate::world::{ActorId, Actor, AiWorld};

/// Attempt to move one step in `actor`'s current `move_dir`. On success,
/// reseeds `move_count` with a fresh random run length; on failure,
/// leaves it untouched so `chase::new_chase_dir` gets called again next
/// tick.
pub fn try_walk(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) -> bool {
    let dir = world.ecs.get::<&Actor>(actor).map(|a| a.move_dir).unwrap_or(Direction::None);
    if dir == Direction::None {
        return false;
    }
    if !do_move(world, services, actor, dir) {
        return false;
    }
    let run_length = world.prng.next_byte(CallSite::TryWalk) & 15;
    let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
    a.move_count = run_length;
    true
}

/// Step `actor` by its direction's unit vector, handling a blocked move
/// by trying to bump a special line before giving up, and nudging a
/// float-capable actor toward its target's altitude.
pub fn do_move(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId, dir: Direction) -> bool {
    let (dx, dy, sector, float_capable, target) = {
        let a = world.ecs.get::<&Actor>(actor).unwrap();
        let descriptor = horde_core::archetype::descriptor(a.kind);
        let (ux, uy) = dir.step();
        (ux * descriptor.speed, uy * descriptor.speed, a.sector, descriptor.float_capable, a.target)
    };

    match services.try_move(world, actor, dx, dy) {
        MoveResult::Moved => {
            let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
            a.move_dir = dir;
            drop(a);
            if float_capable {
                float_toward_target(world, actor, target);
            }
            true
        }
        MoveResult::BlockedBySpecial => {
            services.use_special_line(world, actor, sector);
            false
        }
        MoveResult::Blocked => false,
    }
}

fn float_toward_target(world: &mut AiWorld, actor: ActorId, target: Option<ActorId>) {
    let Some(target) = target else { return };
    let Ok(a) = world.ecs.get::<&Actor>(actor) else { return };
    if !a.flags.contains(ActorFlags::FLOAT) {
        return;
    }
    drop(a);
    let Ok(t) = world.ecs.get::<&Actor>(target) else { return };
    let target_z = t.z;
    drop(t);
    let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
    if a.z < target_z {
        a.z += FLOATSPEED;
    } else if a.z > target_z {
        a.z -= FLOATSPEED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::archetype::MonsterKind;
    use horde_core::fixed::Fixed;
    use horde_core::map::SectorId;

    #[test]
    fn blocked_move_leaves_actor_in_place() {
        let mut world = AiWorld::new(1);
        let mut services = crate::testing::StubServices::new().with_moves_blocked();
        let actor = Actor::spawn(MonsterKind::Imp, Fixed::ZERO, Fixed::ZERO, Fixed::ZERO, SectorId(0), 60);
        let id = world.spawn_actor(actor);
        let moved = do_move(&mut world, &mut services, id, Direction::East);
        assert!(!moved);
        assert_eq!(world.ecs.get::<&Actor>(id).unwrap().x, Fixed::ZERO);
    }

    #[test]
    fn successful_move_updates_move_dir_and_reseeds_move_count() {
        let mut world = AiWorld::new(1);
        let mut services = crate::testing::StubServices::new();
        let mut actor = Actor::spawn(MonsterKind::Imp, Fixed::ZERO, Fixed::ZERO, Fixed::ZERO, SectorId(0), 60);
        actor.move_dir = Direction::East;
        let id = world.spawn_actor(actor);
        assert!(try_walk(&mut world, &mut services, id));
        assert_eq!(world.ecs.get::<&Actor>(id).unwrap().move_dir, Direction::East);
    }
}
