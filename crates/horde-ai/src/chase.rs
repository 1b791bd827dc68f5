//! Chase-direction selection: picks the compass direction that most
//! directly closes on the current target, falling back through
//! diagonal, then cardinal, then "stand still" as options are blocked.

use horde_core::angle::Angle;
use horde_core::constants::NEW_CHASE_DIR_RANDOM_CHANCE;
use horde_core::direction::Direction;
use horde_core::fixed::Fixed;
use horde_core::prng::CallSite;

use crate::movement::try_walk;
use crate::services::WorldServices;
use crate::world::{ActorId, Actor, AiWorld};

/// Re-pick `actor`'s `move_dir` given its target's position, trying the
/// best-matching direction first and degrading gracefully if every
/// preferred option is blocked.
pub fn new_chase_dir(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let Some((target, old_dir, x, y)) = (|| {
        let a = world.ecs.get::<&Actor>(actor).ok()?;
        let target_id = a.target?;
        Some((target_id, a.move_dir, a.x, a.y))
    })() else {
        let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
        a.move_dir = Direction::None;
        return;
    };

    let turnaround = old_dir.opposite();

    let (tx, ty) = {
        let t = world.ecs.get::<&Actor>(target).unwrap();
        (t.x, t.y)
    };

    let dx = tx - x;
    let dy = ty - y;
    let dead_zone = Fixed::from_int(10);

    // A delta within the ±10-unit dead zone commits to no axis at all,
    // matching the original's `d[1] = DI_NODIR` fallthrough rather than
    // treating any nonzero delta as decisive.
    let mut horiz = if dx > dead_zone {
        Some(Direction::East)
    } else if dx < -dead_zone {
        Some(Direction::West)
    } else {
        None
    };
    let mut vert = if dy < -dead_zone {
        Some(Direction::South)
    } else if dy > dead_zone {
        Some(Direction::North)
    } else {
        None
    };

    if let (Some(_), Some(_)) = (horiz, vert) {
        let diag = Direction::diagonal(dx.0 > 0, dy.0 > 0);
        if diag != turnaround && try_direction(world, services, actor, diag) {
            return;
        }
    }

    // The original always draws here, even when one or both axes are
    // already `NODIR` — replaying its `pr_newchasedir` stream exactly
    // depends on this draw happening unconditionally.
    if world.prng.next_byte(CallSite::NewChase) > 200 || dy.abs() > dx.abs() {
        std::mem::swap(&mut horiz, &mut vert);
    }

    if horiz == Some(turnaround) {
        horiz = None;
    }
    if vert == Some(turnaround) {
        vert = None;
    }

    if let Some(dir) = horiz {
        if try_direction(world, services, actor, dir) {
            return;
        }
    }
    if let Some(dir) = vert {
        if try_direction(world, services, actor, dir) {
            return;
        }
    }

    // Nothing preferred worked: try the old direction again, then a
    // random direction, then give up and face away from the opposite.
    if old_dir != Direction::None && try_direction(world, services, actor, old_dir) {
        return;
    }

    if world.prng.chance(CallSite::NewChaseDir, NEW_CHASE_DIR_RANDOM_CHANCE) {
        for candidate in Direction::all() {
            if candidate != turnaround && try_direction(world, services, actor, candidate) {
                return;
            }
        }
    } else {
        for candidate in Direction::all().into_iter().rev() {
            if candidate != turnaround && try_direction(world, services, actor, candidate) {
                return;
            }
        }
    }

    if turnaround != Direction::None && try_direction(world, services, actor, turnaround) {
        return;
    }

    let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
    a.move_dir = Direction::None;
}

fn try_direction(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId, dir: Direction) -> bool {
    {
        let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
        a.move_dir = dir;
    }
    try_walk(world, services, actor)
}

/// The chase facing-alignment step: turn `actor` toward `target_angle`,
/// masking the delta into the low 3 bits of the top octant before
/// subtracting — preserved verbatim from the original, quirks and all.
pub fn align_facing(current: Angle, target_angle: Angle) -> Angle {
    let delta = target_angle.masked_octant() - current.masked_octant();
    current + Angle(delta.0)
}

pub fn angle_to(from_x: Fixed, from_y: Fixed, to_x: Fixed, to_y: Fixed) -> Angle {
    let dy = (to_y - from_y).to_f64();
    let dx = (to_x - from_x).to_f64();
    let radians = dy.atan2(dx).rem_euclid(std::f64::consts::TAU);
    let turn = radians / std::f64::consts::TAU;
    Angle((turn * u32::MAX as f64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::archetype::MonsterKind;
    use horde_core::map::SectorId;

    #[test]
    fn picks_direction_toward_target_when_unblocked() {
        let mut world = AiWorld::new(7);
        let mut services = crate::testing::StubServices::new();
        let chaser = Actor::spawn(MonsterKind::Imp, Fixed::ZERO, Fixed::ZERO, Fixed::ZERO, SectorId(0), 60);
        let prey = Actor::spawn(MonsterKind::ZombieMan, Fixed::from_int(100), Fixed::ZERO, Fixed::ZERO, SectorId(0), 20);
        let chaser_id = world.spawn_actor(chaser);
        let prey_id = world.spawn_actor(prey);
        {
            let mut a = world.ecs.get::<&mut Actor>(chaser_id).unwrap();
            a.target = Some(prey_id);
        }
        new_chase_dir(&mut world, &mut services, chaser_id);
        let a = world.ecs.get::<&Actor>(chaser_id).unwrap();
        assert_eq!(a.move_dir, Direction::East);
    }

    #[test]
    fn no_target_clears_move_dir() {
        let mut world = AiWorld::new(7);
        let mut services = crate::testing::StubServices::new();
        let chaser = Actor::spawn(MonsterKind::Imp, Fixed::ZERO, Fixed::ZERO, Fixed::ZERO, SectorId(0), 60);
        let chaser_id = world.spawn_actor(chaser);
        new_chase_dir(&mut world, &mut services, chaser_id);
        let a = world.ecs.get::<&Actor>(chaser_id).unwrap();
        assert_eq!(a.move_dir, Direction::None);
    }
}
