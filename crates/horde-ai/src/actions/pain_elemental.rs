//! The Pain Elemental's skull-spitting attack and death throes, and the
//! Lost Soul's charge-attack launch.

use horde_core::angle::{Angle, ANG180, ANG270, ANG90};
use horde_core::archetype::{self, MonsterKind};
use horde_core::constants::{MAX_SOULS, SKULLSPEED};
use horde_core::fixed::Fixed;
use horde_core::flags::ActorFlags;

use crate::actions::common::{face_target, fall};
use crate::services::WorldServices;
use crate::world::{ActorId, Actor, AiWorld};

pub fn pain_attack(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    if world.ecs.get::<&Actor>(actor).unwrap().target.is_none() {
        return;
    }
    face_target(world, actor);
    let angle = world.ecs.get::<&Actor>(actor).unwrap().angle;
    pain_shoot_skull(world, services, actor, angle);
}

pub fn pain_die(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    fall(world, actor);
    let angle = world.ecs.get::<&Actor>(actor).unwrap().angle;
    pain_shoot_skull(world, services, actor, angle + Angle(ANG90));
    pain_shoot_skull(world, services, actor, angle + Angle(ANG180));
    pain_shoot_skull(world, services, actor, angle + Angle(ANG270));
}

/// Launch an already-spawned Lost Soul at its spawner's current target:
/// sets the charge-attack flag, plays the attack cue, and sends it off
/// at `SKULLSPEED` along its own current facing (set by the preceding
/// `face_target`), with a vertical momentum that closes on the target's
/// `z + height/2` over the straight-line approach time implied by
/// `SKULLSPEED`.
pub fn skull_attack(world: &mut AiWorld, services: &mut dyn WorldServices, skull: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(skull).unwrap().target else { return };
    {
        let mut s = world.ecs.get::<&mut Actor>(skull).unwrap();
        s.flags.insert(ActorFlags::SKULL_FLYING);
    }
    if let Some(sound) = archetype::descriptor(MonsterKind::LostSoul).attack_sound {
        services.spawn_sound(world, skull, sound);
    }
    face_target(world, skull);

    let (sx, sy, sz) = {
        let s = world.ecs.get::<&Actor>(skull).unwrap();
        (s.x, s.y, s.z)
    };
    let (tx, ty, tz, theight) = {
        let t = world.ecs.get::<&Actor>(target).unwrap();
        (t.x, t.y, t.z, archetype::descriptor(t.kind).height)
    };

    let angle = world.ecs.get::<&Actor>(skull).unwrap().angle;
    let dist = ((tx - sx).to_f64().powi(2) + (ty - sy).to_f64().powi(2)).sqrt().max(1.0);
    let ticks = (dist / SKULLSPEED.to_f64()).max(1.0);

    let mut s = world.ecs.get::<&mut Actor>(skull).unwrap();
    s.momx = angle.cos() * SKULLSPEED;
    s.momy = angle.sin() * SKULLSPEED;
    s.momz = Fixed::from_f64((tz.to_f64() + theight.to_f64() / 2.0 - sz.to_f64()) / ticks);
}

/// Spawn a fresh Lost Soul at a short offset in front of `spawner` and
/// launch it at `spawner`'s target, respecting the outstanding-skull
/// population cap and halving it again under `world.easy`.
pub fn pain_shoot_skull(world: &mut AiWorld, services: &mut dyn WorldServices, spawner: ActorId, angle: Angle) {
    let cap = if world.easy { MAX_SOULS / 2 } else { MAX_SOULS };
    if cap > 0 && world.skull_count >= cap {
        return;
    }

    let (sx, sy, sz, target) = {
        let s = world.ecs.get::<&Actor>(spawner).unwrap();
        (s.x, s.y, s.z, s.target)
    };
    let radius = archetype::descriptor(MonsterKind::PainElemental).radius + archetype::descriptor(MonsterKind::LostSoul).radius;
    let x = sx + angle.cos() * radius;
    let y = sy + angle.sin() * radius;
    let z = sz + Fixed::from_int(8);

    let skull = services.spawn_mobj(world, MonsterKind::LostSoul, x, y, z);
    {
        let mut k = world.ecs.get::<&mut Actor>(skull).unwrap();
        k.target = target;
    }
    world.skull_count += 1;
    skull_attack(world, services, skull);
}
