//! Cross-module scenario tests: full sound-flood traversal into a
//! chase-and-attack loop, and determinism of two identically-seeded
//! worlds driven through the same action sequence.

use horde_core::archetype::MonsterKind;
use horde_core::fixed::Fixed;
use horde_core::map::{Line, LineId, Sector, SectorId};

use crate::actions::common::{chase, look};
use crate::sound::noise_alert;
use crate::testing::StubServices;
use crate::world::{Actor, ActorId, AiWorld};

/// Two sectors joined by an open two-sided line, a sleeping monster in
/// the far sector, and a player in the near one.
fn two_room_world() -> (AiWorld, ActorId, ActorId) {
    let mut world = AiWorld::new(42);
    world.sectors.push(Sector::new(Fixed::ZERO, Fixed::from_int(128)));
    world.sectors.push(Sector::new(Fixed::ZERO, Fixed::from_int(128)));
    world.lines.push(Line {
        front_sector: SectorId(0),
        back_sector: Some(SectorId(1)),
        blocks_sound: false,
        special_tag: None,
    });
    world.sectors[0].lines.push(LineId(0));
    world.sectors[1].lines.push(LineId(0));

    let player = Actor::spawn(MonsterKind::ZombieMan, Fixed::ZERO, Fixed::ZERO, Fixed::ZERO, SectorId(0), 100);
    let player_id = world.spawn_actor(player);
    world.players.push(player_id);

    let monster = Actor::spawn(MonsterKind::Imp, Fixed::from_int(200), Fixed::ZERO, Fixed::ZERO, SectorId(1), 60);
    let mut monster = monster;
    monster.flags.insert(horde_core::flags::ActorFlags::AMBUSH);
    let monster_id = world.spawn_actor(monster);

    (world, player_id, monster_id)
}

#[test]
fn sound_flood_wakes_a_monster_through_look() {
    let (mut world, player, monster) = two_room_world();
    let mut services = StubServices::new();

    noise_alert(&mut world, player, SectorId(0));
    assert!(world.sector(SectorId(1)).sound_target.is_some());

    // The monster is flagged AMBUSH, so `look` only commits to the
    // sound-given target if it also has direct sight — the stub always
    // grants sight, so this should succeed.
    look(&mut world, &mut services, monster);
    assert_eq!(world.ecs.get::<&Actor>(monster).unwrap().target, Some(player));
}

#[test]
fn chase_closes_distance_and_eventually_reaches_melee_range() {
    let mut world = AiWorld::new(7);
    let mut services = StubServices::new();

    let chaser = Actor::spawn(MonsterKind::Demon, Fixed::ZERO, Fixed::ZERO, Fixed::ZERO, SectorId(0), 150);
    let prey = Actor::spawn(MonsterKind::ZombieMan, Fixed::from_int(200), Fixed::ZERO, Fixed::ZERO, SectorId(0), 20);
    let chaser_id = world.spawn_actor(chaser);
    let prey_id = world.spawn_actor(prey);
    {
        let mut a = world.ecs.get::<&mut Actor>(chaser_id).unwrap();
        a.target = Some(prey_id);
    }

    let start_x = world.ecs.get::<&Actor>(chaser_id).unwrap().x;
    for _ in 0..64 {
        chase(&mut world, &mut services, chaser_id);
        let x = world.ecs.get::<&Actor>(chaser_id).unwrap().x;
        if x > start_x {
            return;
        }
    }
    panic!("chaser never made progress toward its target");
}

#[test]
fn identically_seeded_worlds_replay_an_action_sequence_identically() {
    fn run(seed: u64) -> (Fixed, Fixed, i32) {
        let mut world = AiWorld::new(seed);
        let mut services = StubServices::new();
        let actor = Actor::spawn(MonsterKind::ShotgunGuy, Fixed::ZERO, Fixed::ZERO, Fixed::ZERO, SectorId(0), 30);
        let target = Actor::spawn(MonsterKind::ZombieMan, Fixed::from_int(40), Fixed::ZERO, Fixed::ZERO, SectorId(0), 50);
        let actor_id = world.spawn_actor(actor);
        let target_id = world.spawn_actor(target);
        {
            let mut a = world.ecs.get::<&mut Actor>(actor_id).unwrap();
            a.target = Some(target_id);
        }
        for _ in 0..8 {
            crate::actions::trooper::spos_attack(&mut world, &mut services, actor_id);
        }
        let a = world.ecs.get::<&Actor>(actor_id).unwrap();
        let t = world.ecs.get::<&Actor>(target_id).unwrap();
        (a.angle.cos(), a.angle.sin(), t.health)
    }

    assert_eq!(run(99), run(99));
}
