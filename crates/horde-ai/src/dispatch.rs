//! Maps an opaque per-state action identifier onto its concrete
//! implementation in `actions::*`/`brain`. The embedding application
//! looks up which `ActionId` a state names and calls [`dispatch`] with
//! the acting entity; this crate never walks a state table itself.

use crate::actions::{boss, common, fatso, pain_elemental, revenant, trooper, vile};
use crate::brain;
use crate::services::WorldServices;
use crate::world::{ActorId, AiWorld};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    Look,
    Chase,
    ChaseWithFootstep,
    FaceTarget,
    Scream,
    XScream,
    Pain,
    Fall,
    Explode,

    PosAttack,
    SPosAttack,
    CPosAttack,
    CPosRefire,
    SpidRefire,
    BspiAttack,
    TroopAttack,
    SargAttack,
    HeadAttack,
    CyberAttack,
    BruisAttack,

    FatRaise,
    FatAttack1,
    FatAttack2,
    FatAttack3,

    SkelWhoosh,
    SkelFist,
    SkelMissile,
    Tracer,

    PainAttack,
    PainDie,
    SkullAttack,

    VileStart,
    VileChase,
    Fire,
    VileTarget,
    VileAttack,

    BrainSpit,
    SpawnFly,
    BrainAwake,
    BrainPain,
    BrainDie,

    KeenDie,
    BossDeath,
}

/// Invoke the action named by `action` on `actor`. `actor` is whatever
/// entity the state machine is currently stepping — usually the monster
/// itself, but for `Tracer`/`Fire`/`SpawnFly` it is the in-flight
/// projectile, and for `BrainSpit`/`BrainAwake`/`BrainPain`/`BrainDie` it
/// is the brain target entity.
pub fn dispatch(action: ActionId, world: &mut AiWorld, services: &mut dyn WorldServices, actor: ActorId) {
    match action {
        ActionId::Look => common::look(world, services, actor),
        ActionId::Chase => common::chase(world, services, actor),
        ActionId::ChaseWithFootstep => common::chase_with_footstep(world, services, actor),
        ActionId::FaceTarget => common::face_target(world, actor),
        ActionId::Scream => common::scream(world, services, actor),
        ActionId::XScream => common::xscream(world, services, actor),
        ActionId::Pain => common::pain(world, services, actor),
        ActionId::Fall => common::fall(world, actor),
        ActionId::Explode => common::explode(world, services, actor),

        ActionId::PosAttack => trooper::pos_attack(world, services, actor),
        ActionId::SPosAttack => trooper::spos_attack(world, services, actor),
        ActionId::CPosAttack => trooper::cpos_attack(world, services, actor),
        ActionId::CPosRefire => trooper::cpos_refire(world, services, actor),
        ActionId::SpidRefire => trooper::spid_refire(world, services, actor),
        ActionId::BspiAttack => trooper::bspi_attack(world, services, actor),
        ActionId::TroopAttack => trooper::troop_attack(world, services, actor),
        ActionId::SargAttack => trooper::sarg_attack(world, services, actor),
        ActionId::HeadAttack => trooper::head_attack(world, services, actor),
        ActionId::CyberAttack => trooper::cyber_attack(world, services, actor),
        ActionId::BruisAttack => trooper::bruis_attack(world, services, actor),

        ActionId::FatRaise => fatso::fat_raise(world, services, actor),
        ActionId::FatAttack1 => fatso::fat_attack1(world, services, actor),
        ActionId::FatAttack2 => fatso::fat_attack2(world, services, actor),
        ActionId::FatAttack3 => fatso::fat_attack3(world, services, actor),

        ActionId::SkelWhoosh => revenant::skel_whoosh(world, services, actor),
        ActionId::SkelFist => revenant::skel_fist(world, services, actor),
        ActionId::SkelMissile => revenant::skel_missile(world, services, actor),
        ActionId::Tracer => revenant::tracer(world, services, actor),

        ActionId::PainAttack => pain_elemental::pain_attack(world, services, actor),
        ActionId::PainDie => pain_elemental::pain_die(world, services, actor),
        ActionId::SkullAttack => pain_elemental::skull_attack(world, services, actor),

        ActionId::VileStart => vile::vile_start(world, services, actor),
        ActionId::VileChase => vile::vile_chase(world, services, actor),
        ActionId::Fire => vile::fire(world, services, actor),
        ActionId::VileTarget => vile::vile_target(world, services, actor),
        ActionId::VileAttack => vile::vile_attack(world, services, actor),

        ActionId::BrainSpit => {
            brain::brain_spit(world, services, actor);
        }
        ActionId::SpawnFly => brain::spawn_fly(world, services, actor),
        ActionId::BrainAwake => brain::brain_awake(world, services, actor),
        ActionId::BrainPain => brain::brain_pain(world, services, actor),
        ActionId::BrainDie => brain::brain_die(world, services, actor),

        ActionId::KeenDie => boss::keen_die(world, services, actor),
        ActionId::BossDeath => boss::boss_death(world, services, actor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::archetype::MonsterKind;
    use horde_core::fixed::Fixed;
    use horde_core::map::{Sector, SectorId};
    use crate::world::Actor;

    #[test]
    fn dispatch_routes_look_to_the_look_action() {
        let mut world = AiWorld::new(11);
        world.sectors.push(Sector::new(Fixed::ZERO, Fixed::from_int(128)));
        let mut services = crate::testing::StubServices::new();
        let mut monster = Actor::spawn(MonsterKind::Imp, Fixed::ZERO, Fixed::ZERO, Fixed::ZERO, SectorId(0), 60);
        monster.flags.insert(horde_core::flags::ActorFlags::AMBUSH);
        let player = Actor::spawn(MonsterKind::ZombieMan, Fixed::from_int(10), Fixed::ZERO, Fixed::ZERO, SectorId(0), 100);
        let monster_id = world.spawn_actor(monster);
        let player_id = world.spawn_actor(player);
        world.players.push(player_id);

        dispatch(ActionId::Look, &mut world, &mut services, monster_id);
        assert_eq!(world.ecs.get::<&Actor>(monster_id).unwrap().target, Some(player_id));
    }
}
