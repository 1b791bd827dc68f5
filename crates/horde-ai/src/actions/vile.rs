//! The Arch-vile's resurrection scan and flame-column attack chain.

use horde_core::flags::ActorFlags;
use horde_core::sound::SoundId;
use horde_core::state::StateId;

use crate::actions::common::{chase, face_target};
use crate::services::WorldServices;
use crate::world::{ActorId, Actor, AiWorld};

pub fn vile_start(world: &AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    services.spawn_sound(world, actor, SoundId::VileAttack);
}

/// Scan the blockmap cells around the Arch-vile's intended step for a
/// raisable corpse; if one is found, face it and start the heal state
/// instead of moving. Falls back to the normal chase loop otherwise.
pub fn vile_chase(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let (move_dir, x, y, speed) = {
        let a = world.ecs.get::<&Actor>(actor).unwrap();
        let descriptor = horde_core::archetype::descriptor(a.kind);
        (a.move_dir, a.x, a.y, descriptor.speed)
    };

    if move_dir != horde_core::direction::Direction::None {
        let (ux, uy) = move_dir.step();
        let try_x = x + ux * speed;
        let try_y = y + uy * speed;

        let mut raised: Option<ActorId> = None;
        services.block_things_iterator(world, try_x, try_y, horde_core::fixed::Fixed::from_int(64), &mut |candidate| {
            if candidate == actor {
                return true;
            }
            let Ok(c) = world.ecs.get::<&Actor>(candidate) else { return true };
            if !c.flags.contains(ActorFlags::CORPSE) {
                return true;
            }
            let raise_state = horde_core::archetype::descriptor(c.kind).raise_state;
            if raise_state.is_none() {
                return true;
            }
            drop(c);
            raised = Some(candidate);
            false
        });

        if let Some(corpse) = raised {
            let prior_target = world.ecs.get::<&Actor>(actor).unwrap().target;
            {
                let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
                a.target = Some(corpse);
            }
            face_target(world, actor);
            {
                let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
                a.target = prior_target;
            }

            services.set_actor_state(world, actor, StateId::VileHeal);
            services.spawn_sound(world, corpse, SoundId::Slop);

            let kind = world.ecs.get::<&Actor>(corpse).unwrap().kind;
            let descriptor = horde_core::archetype::descriptor(kind);
            services.set_actor_state(world, corpse, descriptor.raise_state.unwrap());
            let mut c = world.ecs.get::<&mut Actor>(corpse).unwrap();
            c.flags = horde_core::flags::ActorFlags::default();
            c.health = descriptor.spawn_health;
            c.target = None;
            return;
        }
    }

    chase(world, services, actor);
}

/// Reposition the flame marker at 24 units in front of the resurrected
/// target it rides on, breaking off if the vile has lost sight of it.
pub fn fire(world: &mut AiWorld, services: &mut dyn WorldServices, fire_marker: ActorId) {
    let Some(dest) = world.ecs.get::<&Actor>(fire_marker).unwrap().tracer else { return };
    let vile = world.ecs.get::<&Actor>(fire_marker).unwrap().target;
    if let Some(vile) = vile {
        if !services.check_sight(world, vile, dest) {
            return;
        }
    }

    let (dx, dy, dz, dangle) = {
        let d = world.ecs.get::<&Actor>(dest).unwrap();
        (d.x, d.y, d.z, d.angle)
    };
    let offset = horde_core::fixed::Fixed::from_int(24);
    services.unset_thing_position(world, fire_marker);
    let mut f = world.ecs.get::<&mut Actor>(fire_marker).unwrap();
    f.x = dx + dangle.cos() * offset;
    f.y = dy + dangle.sin() * offset;
    f.z = dz;
    drop(f);
    services.set_thing_position(world, fire_marker);
}

/// Spawn the flame marker at the target's position.
///
/// Preserved verbatim: the marker's y-coordinate is seeded from the
/// target's **x** coordinate, not y, exactly as the original's
/// `P_SpawnMobj(actor->target->x, actor->target->x, ...)` does.
pub fn vile_target(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return };
    face_target(world, actor);

    let (tx, tz) = {
        let t = world.ecs.get::<&Actor>(target).unwrap();
        (t.x, t.z)
    };
    let fog = services.spawn_fire_marker(world, tx, tx, tz);

    {
        let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
        a.tracer = Some(fog);
    }
    {
        let mut f = world.ecs.get::<&mut Actor>(fog).unwrap();
        f.target = Some(actor);
        f.tracer = Some(target);
    }
    fire(world, services, fog);
}

pub fn vile_attack(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return };
    face_target(world, actor);
    if !services.check_sight(world, actor, target) {
        return;
    }

    services.spawn_sound(world, actor, SoundId::BarrelExplode);
    services.damage_mobj(world, target, Some(actor), Some(actor), 20);

    let mass = horde_core::archetype::descriptor(world.ecs.get::<&Actor>(target).unwrap().kind).mass;
    {
        let mut t = world.ecs.get::<&mut Actor>(target).unwrap();
        t.momz = horde_core::fixed::Fixed::from_int(1000) / horde_core::fixed::Fixed::from_int(mass.max(1));
    }

    let Some(fire_marker) = world.ecs.get::<&Actor>(actor).unwrap().tracer else { return };
    let angle = world.ecs.get::<&Actor>(actor).unwrap().angle;
    let offset = horde_core::fixed::Fixed::from_int(24);
    let (tx, ty) = {
        let t = world.ecs.get::<&Actor>(target).unwrap();
        (t.x, t.y)
    };
    {
        let mut f = world.ecs.get::<&mut Actor>(fire_marker).unwrap();
        f.x = tx - angle.cos() * offset;
        f.y = ty - angle.sin() * offset;
    }
    services.radius_attack(world, fire_marker, 70, horde_core::fixed::Fixed::from_int(70));
}
