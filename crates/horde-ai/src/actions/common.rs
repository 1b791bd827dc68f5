//! Actions shared by every archetype: waking up, chasing, facing a
//! target, death/pain cues, and the three footstep-sound variants that
//! differ only in which `SoundId` they play before falling through to
//! `chase`.

use horde_core::angle::Angle;
use horde_core::archetype::{self, MonsterKind};
use horde_core::flags::ActorFlags;
use horde_core::prng::CallSite;
use horde_core::sound::SoundId;
use horde_core::state::StateId;

use crate::chase::{angle_to, new_chase_dir};
use crate::lookout::look_for_players;
use crate::movement::try_walk;
use crate::predicates::{check_melee_range, check_missile_range};
use crate::services::WorldServices;
use crate::world::{ActorId, Actor, AiWorld};

/// Pick a concrete cue out of a randomized `SoundId::Family`, leaving a
/// plain `SoundId` untouched.
fn resolve_sound(world: &mut AiWorld, site: CallSite, sound: SoundId) -> SoundId {
    match sound {
        SoundId::Family(family, _) => {
            let idx = world.prng.next_byte(site) % family.len();
            SoundId::Family(family, idx)
        }
        other => other,
    }
}

/// Dormant state: pick up the sound-propagation target left on the
/// actor's sector if any, otherwise scan for a visible player. Plays the
/// see-sound and enters the see-state on success.
pub fn look(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    {
        let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
        a.threshold = 0;
    }

    let (sector, ambush) = {
        let a = world.ecs.get::<&Actor>(actor).unwrap();
        (a.sector, a.flags.contains(ActorFlags::AMBUSH))
    };
    let sound_target = world.sector(sector).sound_target;

    let mut found = false;
    if let Some(target_bits) = sound_target {
        if let Some(target) = world.players.iter().copied().find(|p| p.to_bits().get() == target_bits) {
            let shootable = world.ecs.get::<&Actor>(target).map(|t| crate::predicates::actor_is_shootable(&t)).unwrap_or(false);
            if shootable && (!ambush || services.check_sight(world, actor, target)) {
                let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
                a.target = Some(target);
                found = true;
            }
        }
    }

    if !found {
        found = look_for_players(world, services, actor, false);
    }
    if !found {
        return;
    }

    let kind = world.ecs.get::<&Actor>(actor).unwrap().kind;
    if let Some(sound) = archetype::descriptor(kind).see_sound {
        let sound = resolve_sound(world, CallSite::See, sound);
        services.spawn_sound(world, actor, sound);
    }
    services.set_actor_state(world, actor, StateId::See);
}

/// The main chase loop: turn toward the current movement direction,
/// re-evaluate targets, pick melee/missile/move, and maybe bark the
/// active sound.
pub fn chase(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    {
        let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
        if a.reaction_time > 0 {
            a.reaction_time -= 1;
        }
        if a.threshold > 0 {
            let dead_or_gone = a.target.is_none();
            if dead_or_gone {
                a.threshold = 0;
            } else {
                a.threshold -= 1;
            }
        }
    }
    // A target may have died since the threshold check above without
    // clearing `target` itself; re-check health separately.
    {
        let (target, angle, move_dir) = {
            let a = world.ecs.get::<&Actor>(actor).unwrap();
            (a.target, a.angle, a.move_dir)
        };
        if let Some(t) = target {
            let dead = world.ecs.get::<&Actor>(t).map(|t| t.health <= 0).unwrap_or(true);
            if dead {
                let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
                a.threshold = 0;
            }
        }
        if let Some(dir_index) = move_dir.index() {
            let target_angle = Angle((dir_index as u32) << 29);
            let aligned = crate::chase::align_facing(angle, target_angle);
            let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
            a.angle = aligned;
        }
    }

    let (kind, target, just_attacked) = {
        let a = world.ecs.get::<&Actor>(actor).unwrap();
        (a.kind, a.target, a.flags.contains(ActorFlags::JUST_ATTACKED))
    };

    let target_alive = target.map(|t| world.ecs.get::<&Actor>(t).map(|t| crate::predicates::actor_is_shootable(&t)).unwrap_or(false)).unwrap_or(false);
    if !target_alive {
        if look_for_players(world, services, actor, true) {
            return;
        }
        services.set_actor_state(world, actor, StateId::Spawn);
        return;
    }

    if just_attacked {
        let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
        a.flags.remove(ActorFlags::JUST_ATTACKED);
        drop(a);
        // The original skips this re-evaluation on nightmare skill or the
        // `-fast` flag, since both expect an immediate follow-up attack
        // rather than a fresh direction pick. This world model only
        // tracks the `fast` flag, not a full skill ladder.
        if !world.fast {
            new_chase_dir(world, services, actor);
        }
        return;
    }

    let descriptor = archetype::descriptor(kind);
    if descriptor.melee_state.is_some() && check_melee_range(world, services, actor) {
        if let Some(sound) = descriptor.attack_sound {
            services.spawn_sound(world, actor, sound);
        }
        services.set_actor_state(world, actor, descriptor.melee_state.unwrap());
        return;
    }

    if descriptor.missile_state.is_some() {
        let move_count = world.ecs.get::<&Actor>(actor).unwrap().move_count;
        let holds_fire_while_moving = !world.fast && move_count > 0;
        if !holds_fire_while_moving && check_missile_range(world, services, actor) {
            services.set_actor_state(world, actor, descriptor.missile_state.unwrap());
            let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
            a.flags.insert(ActorFlags::JUST_ATTACKED);
            return;
        }
    }

    let threshold = world.ecs.get::<&Actor>(actor).unwrap().threshold;
    if threshold == 0 {
        if let Some(t) = target {
            if !services.check_sight(world, actor, t) && look_for_players(world, services, actor, true) {
                return;
            }
        }
    }

    let move_count = {
        let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
        a.move_count = a.move_count.wrapping_sub(1);
        a.move_count
    };
    if move_count == u8::MAX || !try_walk(world, services, actor) {
        new_chase_dir(world, services, actor);
    }

    // The original assigns this roll to `pr_see`, not `pr_newchase`.
    if let Some(sound) = descriptor.active_sound {
        if world.prng.chance(CallSite::See, 3) {
            services.spawn_sound(world, actor, sound);
        }
    }
}

/// A footstep-cue chase variant for an archetype whose heavy tread plays
/// a sound on every chase tick (Cyberdemon/Spider Mastermind/Arachnotron),
/// folded into a small table rather than three near-identical functions.
pub fn chase_with_footstep(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let kind = world.ecs.get::<&Actor>(actor).unwrap().kind;
    let footstep = match kind {
        MonsterKind::Cyberdemon => Some(SoundId::Family(horde_core::sound::SoundFamily::TrooperSight, 0)),
        MonsterKind::SpiderMastermind | MonsterKind::Arachnotron => Some(SoundId::Family(horde_core::sound::SoundFamily::TrooperSight, 1)),
        _ => None,
    };
    if let Some(sound) = footstep {
        services.spawn_sound(world, actor, sound);
    }
    chase(world, services, actor);
}

pub fn face_target(world: &mut AiWorld, actor: ActorId) {
    let Some(target) = world.ecs.get::<&Actor>(actor).unwrap().target else { return };
    let (x, y) = {
        let a = world.ecs.get::<&mut Actor>(actor).unwrap();
        (a.x, a.y)
    };
    let (tx, ty, shadow) = {
        let t = world.ecs.get::<&Actor>(target).unwrap();
        (t.x, t.y, t.flags.contains(ActorFlags::SHADOW))
    };
    let mut angle = angle_to(x, y, tx, ty);
    if shadow {
        angle = angle + crate::actions::random_spread_angle(world, CallSite::FaceTarget, 21);
    }
    let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
    a.flags.remove(ActorFlags::AMBUSH);
    a.angle = angle;
}

pub fn scream(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let kind = world.ecs.get::<&Actor>(actor).unwrap().kind;
    let Some(sound) = archetype::descriptor(kind).death_sound else { return };
    let sound = resolve_sound(world, CallSite::Scream, sound);
    services.spawn_sound(world, actor, sound);
}

pub fn xscream(world: &AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    // Gib death: always the same splat cue, not the archetype's death_sound.
    services.spawn_sound(world, actor, SoundId::Slop);
}

pub fn pain(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let kind = world.ecs.get::<&Actor>(actor).unwrap().kind;
    if let Some(sound) = archetype::descriptor(kind).pain_sound {
        services.spawn_sound(world, actor, sound);
    }
}

pub fn fall(world: &mut AiWorld, actor: ActorId) {
    let kind = world.ecs.get::<&Actor>(actor).unwrap().kind;
    if kind == MonsterKind::LostSoul {
        world.skull_count = world.skull_count.saturating_sub(1);
    }
    let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
    a.flags.remove(ActorFlags::SOLID);
}

pub fn explode(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    services.radius_attack(world, actor, 128, horde_core::fixed::Fixed::from_int(128));
}
