//! The generic "last of its kind" level-trigger aggregator, and the
//! Commander Keen door-unlock special tied to the same pattern.

use horde_core::archetype::MonsterKind;
use horde_core::map::GameMode;

use crate::services::WorldServices;
use crate::world::{ActorId, Actor, AiWorld};

/// True if any other living actor of `kind` remains in the world, besides
/// `dead`.
fn any_other_alive_of_kind(world: &AiWorld, dead: ActorId, kind: MonsterKind) -> bool {
    world
        .ecs
        .query::<&Actor>()
        .iter()
        .any(|(id, a)| id != dead && a.kind == kind && a.health > 0)
}

/// Commander Keen is not a boss trigger in the `boss_death` sense; its
/// death opens a hardcoded door tag instead of consulting the episode
/// table.
pub fn keen_die(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    if any_other_alive_of_kind(world, actor, MonsterKind::CommanderKeen) {
        return;
    }
    services.ev_do_door(world, 666, false);
}

/// The episode/map/archetype trigger table, verbatim from the original.
/// Falls through to `g_exit_level` for the classic episode-end maps when
/// nothing in the table matches.
pub fn boss_death(world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    let kind = world.ecs.get::<&Actor>(actor).unwrap().kind;
    if !matches!(
        kind,
        MonsterKind::BaronOfHell | MonsterKind::Cyberdemon | MonsterKind::SpiderMastermind | MonsterKind::Mancubus
    ) {
        return;
    }
    if any_other_alive_of_kind(world, actor, kind) {
        return;
    }

    let level = world.level;
    match (level.mode, level.episode, level.map, kind) {
        (GameMode::Retail | GameMode::Registered, 1, 8, MonsterKind::BaronOfHell) => {
            services.ev_do_floor(world, 666, false);
            return;
        }
        (_, 2, 8, MonsterKind::Cyberdemon) => {
            services.ev_do_floor(world, 666, false);
            return;
        }
        (_, 3, 8, MonsterKind::BaronOfHell) => {
            services.ev_do_door(world, 666, true);
            return;
        }
        (GameMode::Retail, 4, 6, MonsterKind::Cyberdemon) => {
            services.ev_do_floor(world, 666, false);
            return;
        }
        (GameMode::Retail, 4, 8, MonsterKind::SpiderMastermind) => {
            services.ev_do_floor(world, 666, false);
            return;
        }
        (GameMode::Commercial, _, 7, MonsterKind::Mancubus) => {
            services.ev_do_floor(world, 666, false);
            return;
        }
        (GameMode::Commercial, _, 7, MonsterKind::BaronOfHell) => {
            services.ev_do_floor(world, 667, true);
            return;
        }
        _ => {}
    }

    if level.mode != GameMode::Commercial {
        services.g_exit_level(world);
    }
}
