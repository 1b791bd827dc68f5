//! The Revenant's melee punch and homing tracer missile.

use horde_core::angle::Angle;
use horde_core::archetype::ProjectileKind;
use horde_core::constants::TRACEANGLE;
use horde_core::fixed::Fixed;
use horde_core::prng::CallSite;
use horde_core::sound::SoundId;

use crate::actions::{common::face_target, random_damage};
use crate::predicates::check_melee_range;
use crate::services::WorldServices;
use crate::world::{ActorId, Actor, AiWorld};

pub fn skel_whoosh(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    if world.ecs.get::<&Actor>(actor).unwrap().target.is_none() {
        return;
    }
    face_target(world, actor);
    services.spawn_sound(world, actor, SoundId::SkeletonSwing);
}

pub fn skel_fist(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return };
    face_target(world, actor);
    if check_melee_range(world, services, actor) {
        let damage = random_damage(world, CallSite::SkelFist, 10, 6);
        services.spawn_sound(world, actor, SoundId::SkeletonPunch);
        services.damage_mobj(world, target, Some(actor), Some(actor), damage);
    }
}

/// Launch a tracer missile 16 units above the Revenant's own height and
/// lock its `tracer` field onto the target for `tracer` to home in on.
pub fn skel_missile(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return };
    face_target(world, actor);
    {
        let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
        a.z += Fixed::from_int(16);
    }
    let missile = services.spawn_missile(world, actor, target, ProjectileKind::Tracer);
    {
        let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
        a.z -= Fixed::from_int(16);
    }
    let mut m = world.ecs.get::<&mut Actor>(missile).unwrap();
    let (momx, momy) = (m.momx, m.momy);
    m.x += momx;
    m.y += momy;
    m.tracer = Some(target);
}

/// Per-tic homing guidance for an in-flight tracer missile. A no-op on
/// any tic where `(tick - level_start_tick) % 4 != 0`, preserving the
/// original's internal-demo desync fix verbatim.
pub fn tracer(world: &mut AiWorld, services: &mut dyn WorldServices, missile: ActorId) {
    if world.tick.wrapping_sub(world.level_start_tick) % 4 != 0 {
        return;
    }

    let Some(dest) = world.ecs.get::<&Actor>(missile).unwrap().tracer else { return };
    if world.ecs.get::<&Actor>(dest).map(|d| d.health <= 0).unwrap_or(true) {
        return;
    }

    let (mx, my, mz, momx, momy) = {
        let m = world.ecs.get::<&Actor>(missile).unwrap();
        (m.x, m.y, m.z, m.momx, m.momy)
    };
    services.spawn_puff(world, mx, my, mz);

    let speed = Fixed::from_f64((momx.to_f64().powi(2) + momy.to_f64().powi(2)).sqrt());
    let (dx, dy, dz) = {
        let d = world.ecs.get::<&Actor>(dest).unwrap();
        (d.x, d.y, d.z)
    };

    let exact = crate::chase::angle_to(mx, my, dx, dy);
    let mut angle = world.ecs.get::<&Actor>(missile).unwrap().angle;
    if exact != angle {
        let delta = exact - angle;
        if delta.0 < 0x80000000 {
            angle = angle + Angle(TRACEANGLE);
            if (exact - angle).0 < 0x80000000 {
                angle = exact;
            }
        } else {
            angle = angle - Angle(TRACEANGLE);
            if (exact - angle).0 >= 0x80000000 {
                angle = exact;
            }
        }
    }

    let mut m = world.ecs.get::<&mut Actor>(missile).unwrap();
    m.angle = angle;
    m.momx = angle.cos() * speed;
    m.momy = angle.sin() * speed;

    let dest_z = dz + Fixed::from_int(40);
    let dist_f = ((dx - mx).to_f64().powi(2) + (dy - my).to_f64().powi(2)).sqrt().max(1.0);
    let speed_f = speed.to_f64().max(1.0);
    let slope = Fixed::from_f64((dest_z - mz).to_f64() / (dist_f / speed_f));
    if slope.0 < m.momz.0 {
        m.momz -= Fixed::from_int(1) / Fixed::from_int(8);
    } else {
        m.momz += Fixed::from_int(1) / Fixed::from_int(8);
    }
}
