//! Ranged attacks for the hitscan/missile archetypes: troopers, sergeants,
//! the chaingun/arachnotron autofire loop, the imp/demon/baron melee-or-
//! missile attacks, and the cyberdemon's rocket.

use horde_core::archetype::ProjectileKind;
use horde_core::constants::MISSILERANGE;
use horde_core::prng::CallSite;
use horde_core::sound::SoundId;
use horde_core::state::StateId;

use crate::actions::{common::face_target, random_damage, random_spread_angle};
use crate::predicates::check_melee_range;
use crate::services::WorldServices;
use crate::world::{ActorId, Actor, AiWorld};

pub fn pos_attack(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    if world.ecs.get::<&Actor>(actor).unwrap().target.is_none() {
        return;
    }
    face_target(world, actor);
    let bangle = world.ecs.get::<&Actor>(actor).unwrap().angle;
    services.aim_line_attack(world, actor, bangle, MISSILERANGE);
    services.spawn_sound(world, actor, SoundId::Pistol);
    let angle = bangle + random_spread_angle(world, CallSite::PosAttack, 20);
    let damage = random_damage(world, CallSite::PosAttack, 5, 3);
    services.line_attack(world, actor, angle, MISSILERANGE, damage);
}

pub fn spos_attack(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    if world.ecs.get::<&Actor>(actor).unwrap().target.is_none() {
        return;
    }
    services.spawn_sound(world, actor, SoundId::Shotgun);
    face_target(world, actor);
    let bangle = world.ecs.get::<&Actor>(actor).unwrap().angle;
    services.aim_line_attack(world, actor, bangle, MISSILERANGE);
    for _ in 0..3 {
        let angle = bangle + random_spread_angle(world, CallSite::SPosAttack, 20);
        let damage = random_damage(world, CallSite::SPosAttack, 5, 3);
        services.line_attack(world, actor, angle, MISSILERANGE, damage);
    }
}

pub fn cpos_attack(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    if world.ecs.get::<&Actor>(actor).unwrap().target.is_none() {
        return;
    }
    services.spawn_sound(world, actor, SoundId::Shotgun);
    face_target(world, actor);
    let bangle = world.ecs.get::<&Actor>(actor).unwrap().angle;
    services.aim_line_attack(world, actor, bangle, MISSILERANGE);
    let angle = bangle + random_spread_angle(world, CallSite::CPosAttack, 20);
    let damage = random_damage(world, CallSite::CPosAttack, 5, 3);
    services.line_attack(world, actor, angle, MISSILERANGE, damage);
}

/// Shared "keep firing unless the target is gone" refire check used by
/// both the chaingun guy and the Arachnotron, differing only in their
/// stop-firing percentile.
fn refire(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId, site: CallSite, stop_chance: u8) {
    face_target(world, actor);
    if world.prng.chance(site, stop_chance) {
        return;
    }
    let target = world.ecs.get::<&Actor>(actor).unwrap().target;
    let lost = match target {
        None => true,
        Some(t) => {
            let dead = world.ecs.get::<&Actor>(t).map(|t| t.health <= 0).unwrap_or(true);
            dead || !services.check_sight(world, actor, t)
        }
    };
    if lost {
        services.set_actor_state(world, actor, StateId::See);
    }
}

pub fn cpos_refire(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    refire(world, services, actor, CallSite::CPosRefire, 40);
}

pub fn spid_refire(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    refire(world, services, actor, CallSite::SpidRefire, 10);
}

pub fn bspi_attack(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return };
    face_target(world, actor);
    services.spawn_missile(world, actor, target, ProjectileKind::ArachPlasma);
}

pub fn troop_attack(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return };
    face_target(world, actor);
    if check_melee_range(world, services, actor) {
        services.spawn_sound(world, actor, SoundId::Claw);
        let damage = random_damage(world, CallSite::TroopAttack, 8, 3);
        services.damage_mobj(world, target, Some(actor), Some(actor), damage);
        return;
    }
    services.spawn_missile(world, actor, target, ProjectileKind::TrooperShot);
}

pub fn sarg_attack(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return };
    face_target(world, actor);
    if check_melee_range(world, services, actor) {
        let damage = random_damage(world, CallSite::SargAttack, 10, 4);
        services.damage_mobj(world, target, Some(actor), Some(actor), damage);
    }
}

pub fn head_attack(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return };
    face_target(world, actor);
    if check_melee_range(world, services, actor) {
        let damage = random_damage(world, CallSite::HeadAttack, 6, 10);
        services.damage_mobj(world, target, Some(actor), Some(actor), damage);
        return;
    }
    services.spawn_missile(world, actor, target, ProjectileKind::HeadShot);
}

pub fn cyber_attack(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return };
    face_target(world, actor);
    services.spawn_missile(world, actor, target, ProjectileKind::Rocket);
}

pub fn bruis_attack(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return };
    if check_melee_range(world, services, actor) {
        services.spawn_sound(world, actor, SoundId::Claw);
        let damage = random_damage(world, CallSite::BruisAttack, 8, 10);
        services.damage_mobj(world, target, Some(actor), Some(actor), damage);
        return;
    }
    services.spawn_missile(world, actor, target, ProjectileKind::BruiserShot);
}
