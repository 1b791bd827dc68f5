//! The Mancubus triple-spread fireball volley.

use horde_core::angle::Angle;
use horde_core::archetype::{MonsterKind, ProjectileKind};
use horde_core::constants::FATSPREAD;
use horde_core::sound::{SoundFamily, SoundId};

use crate::actions::common::face_target;
use crate::chase::angle_to;
use crate::services::WorldServices;
use crate::world::{ActorId, Actor, AiWorld};

pub fn fat_raise(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    face_target(world, actor);
    services.spawn_sound(world, actor, SoundId::Family(SoundFamily::TrooperSight, 0));
}

/// Spawn a fireball, then override its freshly-aimed angle by `spread`
/// BAM units and recompute its momentum from the new angle — matching
/// how each `A_FatAttack*` mutates the missile `P_SpawnMissile` just
/// handed it rather than aiming the spawn call itself.
fn spread_shot(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId, target: ActorId, spread: i32) -> ActorId {
    let missile = services.spawn_missile(world, actor, target, ProjectileKind::FatShot);
    let (ax, ay) = {
        let a = world.ecs.get::<&Actor>(actor).unwrap();
        (a.x, a.y)
    };
    let (tx, ty) = {
        let t = world.ecs.get::<&Actor>(target).unwrap();
        (t.x, t.y)
    };
    let angle = angle_to(ax, ay, tx, ty) + Angle(spread as u32);
    let speed = horde_core::archetype::descriptor(MonsterKind::Mancubus).speed;
    let mut m = world.ecs.get::<&mut Actor>(missile).unwrap();
    m.angle = angle;
    m.momx = angle.cos() * speed;
    m.momy = angle.sin() * speed;
    missile
}

pub fn fat_attack1(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return };
    face_target(world, actor);
    {
        let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
        a.angle = a.angle + Angle(FATSPREAD);
    }
    services.spawn_missile(world, actor, target, ProjectileKind::FatShot);
    spread_shot(world, services, actor, target, FATSPREAD as i32);
}

pub fn fat_attack2(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return };
    face_target(world, actor);
    {
        let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
        a.angle = a.angle - Angle(FATSPREAD);
    }
    services.spawn_missile(world, actor, target, ProjectileKind::FatShot);
    spread_shot(world, services, actor, target, -(2 * FATSPREAD as i32));
}

pub fn fat_attack3(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return };
    face_target(world, actor);
    spread_shot(world, services, actor, target, -(FATSPREAD as i32 / 2));
    spread_shot(world, services, actor, target, FATSPREAD as i32 / 2);
}
