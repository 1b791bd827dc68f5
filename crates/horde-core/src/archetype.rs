//! Monster archetypes and their tuning tables.
//!
//! Per-archetype constants are consolidated into one
//! [`ArchetypeDescriptor`] behind [`descriptor`], rather than scattered
//! across `match` arms in every system — the same shape as a behavior
//! profile table.

use crate::fixed::Fixed;
use crate::sound::SoundId;
use crate::state::StateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonsterKind {
    ZombieMan,
    ShotgunGuy,
    ChaingunGuy,
    WolfensteinSS,
    Imp,
    Demon,
    Spectre,
    LostSoul,
    Cacodemon,
    HellKnight,
    BaronOfHell,
    Arachnotron,
    PainElemental,
    Revenant,
    Mancubus,
    ArchVile,
    Cyberdemon,
    SpiderMastermind,
    CommanderKeen,
}

/// Projectile/missile identity passed to `WorldServices::spawn_missile`.
/// Kept distinct from `MonsterKind`: a fireball is not a monster archetype,
/// it just happens to ride the same `Actor` component bundle in this
/// crate's own world since the AI core does not model projectile physics
/// itself (that is the embedding application's job, same as the original
/// engine's `mobjinfo_t` table covers both in one array but the AI-facing
/// actions only ever *choose* a missile type, never simulate its flight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectileKind {
    TrooperShot,
    HeadShot,
    BruiserShot,
    FatShot,
    ArachPlasma,
    Rocket,
    Tracer,
    Fire,
    SpawnCube,
}

/// Per-archetype tuning consulted by every system in this crate's
/// companion behavior crate. `None` on a state field means the archetype
/// has no capability for that transition (e.g. `Demon::missile_state` is
/// `None` — it has no ranged attack).
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeDescriptor {
    pub radius: Fixed,
    pub height: Fixed,
    pub speed: Fixed,
    pub mass: i32,
    pub spawn_health: i32,
    pub melee_state: Option<StateId>,
    pub missile_state: Option<StateId>,
    pub raise_state: Option<StateId>,
    pub float_capable: bool,
    /// Out of 256; chance of entering the pain state on a damaging hit.
    /// 256 itself means "always" (a `u8` roll can never reach it).
    pub pain_chance: u16,
    pub see_sound: Option<SoundId>,
    pub attack_sound: Option<SoundId>,
    pub pain_sound: Option<SoundId>,
    pub death_sound: Option<SoundId>,
    pub active_sound: Option<SoundId>,
}

pub fn descriptor(kind: MonsterKind) -> ArchetypeDescriptor {
    use MonsterKind::*;
    use SoundId::*;
    use StateId::*;

    match kind {
        ZombieMan => ArchetypeDescriptor {
            radius: Fixed::from_int(20),
            height: Fixed::from_int(56),
            speed: Fixed::from_int(8),
            mass: 100,
            spawn_health: 20,
            melee_state: None,
            missile_state: Some(Missile),
            raise_state: Some(Raise),
            float_capable: false,
            pain_chance: 200,
            see_sound: Some(Family(crate::sound::SoundFamily::TrooperSight, 0)),
            attack_sound: Some(Pistol),
            pain_sound: None,
            death_sound: Some(Family(crate::sound::SoundFamily::TrooperDeath, 0)),
            active_sound: None,
        },
        ShotgunGuy => ArchetypeDescriptor {
            radius: Fixed::from_int(20),
            height: Fixed::from_int(56),
            speed: Fixed::from_int(8),
            mass: 100,
            spawn_health: 30,
            melee_state: None,
            missile_state: Some(Missile),
            raise_state: Some(Raise),
            float_capable: false,
            pain_chance: 170,
            see_sound: Some(Family(crate::sound::SoundFamily::TrooperSight, 1)),
            attack_sound: Some(Shotgun),
            pain_sound: None,
            death_sound: Some(Family(crate::sound::SoundFamily::TrooperDeath, 1)),
            active_sound: None,
        },
        ChaingunGuy => ArchetypeDescriptor {
            radius: Fixed::from_int(20),
            height: Fixed::from_int(56),
            speed: Fixed::from_int(8),
            mass: 100,
            spawn_health: 70,
            melee_state: None,
            missile_state: Some(Missile),
            raise_state: Some(Raise),
            float_capable: false,
            pain_chance: 170,
            see_sound: Some(Family(crate::sound::SoundFamily::TrooperSight, 2)),
            attack_sound: Some(Pistol),
            pain_sound: None,
            death_sound: Some(Family(crate::sound::SoundFamily::TrooperDeath, 0)),
            active_sound: None,
        },
        WolfensteinSS => ArchetypeDescriptor {
            radius: Fixed::from_int(20),
            height: Fixed::from_int(56),
            speed: Fixed::from_int(8),
            mass: 100,
            spawn_health: 50,
            melee_state: None,
            missile_state: Some(Missile),
            raise_state: None,
            float_capable: false,
            pain_chance: 170,
            see_sound: Some(Family(crate::sound::SoundFamily::TrooperSight, 0)),
            attack_sound: Some(Pistol),
            pain_sound: None,
            death_sound: Some(Family(crate::sound::SoundFamily::TrooperDeath, 0)),
            active_sound: None,
        },
        Imp => ArchetypeDescriptor {
            radius: Fixed::from_int(20),
            height: Fixed::from_int(56),
            speed: Fixed::from_int(8),
            mass: 100,
            spawn_health: 60,
            melee_state: Some(Melee),
            missile_state: Some(Missile),
            raise_state: Some(Raise),
            float_capable: false,
            pain_chance: 200,
            see_sound: None,
            attack_sound: None,
            pain_sound: None,
            death_sound: None,
            active_sound: None,
        },
        Demon => ArchetypeDescriptor {
            radius: Fixed::from_int(30),
            height: Fixed::from_int(56),
            speed: Fixed::from_int(10),
            mass: 400,
            spawn_health: 150,
            melee_state: Some(Melee),
            missile_state: None,
            raise_state: Some(Raise),
            float_capable: false,
            pain_chance: 180,
            see_sound: None,
            attack_sound: Some(Claw),
            pain_sound: None,
            death_sound: None,
            active_sound: None,
        },
        Spectre => ArchetypeDescriptor {
            radius: Fixed::from_int(30),
            height: Fixed::from_int(56),
            speed: Fixed::from_int(10),
            mass: 400,
            spawn_health: 150,
            melee_state: Some(Melee),
            missile_state: None,
            raise_state: Some(Raise),
            float_capable: false,
            pain_chance: 180,
            see_sound: None,
            attack_sound: Some(Claw),
            pain_sound: None,
            death_sound: None,
            active_sound: None,
        },
        LostSoul => ArchetypeDescriptor {
            radius: Fixed::from_int(16),
            height: Fixed::from_int(56),
            speed: Fixed::ZERO,
            mass: 50,
            spawn_health: 100,
            melee_state: Some(Melee),
            missile_state: None,
            raise_state: None,
            float_capable: true,
            pain_chance: 256,
            see_sound: None,
            attack_sound: None,
            pain_sound: None,
            death_sound: Some(Family(crate::sound::SoundFamily::PainPop, 0)),
            active_sound: None,
        },
        Cacodemon => ArchetypeDescriptor {
            radius: Fixed::from_int(31),
            height: Fixed::from_int(56),
            speed: Fixed::from_int(8),
            mass: 400,
            spawn_health: 400,
            melee_state: Some(Melee),
            missile_state: Some(Missile),
            raise_state: Some(Raise),
            float_capable: true,
            pain_chance: 128,
            see_sound: None,
            attack_sound: None,
            pain_sound: None,
            death_sound: None,
            active_sound: None,
        },
        HellKnight => ArchetypeDescriptor {
            radius: Fixed::from_int(24),
            height: Fixed::from_int(64),
            speed: Fixed::from_int(8),
            mass: 500,
            spawn_health: 500,
            melee_state: Some(Melee),
            missile_state: Some(Missile),
            raise_state: Some(Raise),
            float_capable: false,
            pain_chance: 50,
            see_sound: None,
            attack_sound: None,
            pain_sound: None,
            death_sound: None,
            active_sound: None,
        },
        BaronOfHell => ArchetypeDescriptor {
            radius: Fixed::from_int(24),
            height: Fixed::from_int(64),
            speed: Fixed::from_int(8),
            mass: 1000,
            spawn_health: 1000,
            melee_state: Some(Melee),
            missile_state: Some(Missile),
            raise_state: Some(Raise),
            float_capable: false,
            pain_chance: 50,
            see_sound: None,
            attack_sound: None,
            pain_sound: None,
            death_sound: None,
            active_sound: None,
        },
        Arachnotron => ArchetypeDescriptor {
            radius: Fixed::from_int(64),
            height: Fixed::from_int(64),
            speed: Fixed::from_int(12),
            mass: 600,
            spawn_health: 500,
            melee_state: None,
            missile_state: Some(Missile),
            raise_state: Some(Raise),
            float_capable: false,
            pain_chance: 128,
            see_sound: None,
            attack_sound: None,
            pain_sound: None,
            death_sound: None,
            active_sound: None,
        },
        PainElemental => ArchetypeDescriptor {
            radius: Fixed::from_int(31),
            height: Fixed::from_int(56),
            speed: Fixed::from_int(8),
            mass: 400,
            spawn_health: 400,
            melee_state: None,
            missile_state: Some(Missile),
            raise_state: Some(Raise),
            float_capable: true,
            pain_chance: 128,
            see_sound: None,
            attack_sound: None,
            pain_sound: None,
            death_sound: None,
            active_sound: None,
        },
        Revenant => ArchetypeDescriptor {
            radius: Fixed::from_int(20),
            height: Fixed::from_int(64),
            speed: Fixed::from_int(10),
            mass: 500,
            spawn_health: 300,
            melee_state: Some(Melee),
            missile_state: Some(Missile),
            raise_state: Some(Raise),
            float_capable: false,
            pain_chance: 100,
            see_sound: None,
            attack_sound: Some(SkeletonSwing),
            pain_sound: None,
            death_sound: None,
            active_sound: None,
        },
        Mancubus => ArchetypeDescriptor {
            radius: Fixed::from_int(48),
            height: Fixed::from_int(64),
            speed: Fixed::from_int(5),
            mass: 1000,
            spawn_health: 600,
            melee_state: None,
            missile_state: Some(Missile),
            raise_state: Some(Raise),
            float_capable: false,
            pain_chance: 80,
            see_sound: None,
            attack_sound: None,
            pain_sound: None,
            death_sound: None,
            active_sound: None,
        },
        ArchVile => ArchetypeDescriptor {
            radius: Fixed::from_int(20),
            height: Fixed::from_int(56),
            speed: Fixed::from_int(15),
            mass: 500,
            spawn_health: 700,
            melee_state: Some(Melee),
            missile_state: Some(Missile),
            raise_state: None,
            float_capable: false,
            pain_chance: 10,
            see_sound: None,
            attack_sound: Some(VileAttack),
            pain_sound: None,
            death_sound: None,
            active_sound: None,
        },
        Cyberdemon => ArchetypeDescriptor {
            radius: Fixed::from_int(40),
            height: Fixed::from_int(110),
            speed: Fixed::from_int(16),
            mass: 1000,
            spawn_health: 4000,
            melee_state: None,
            missile_state: Some(Missile),
            raise_state: None,
            float_capable: false,
            pain_chance: 20,
            see_sound: None,
            attack_sound: None,
            pain_sound: None,
            death_sound: None,
            active_sound: None,
        },
        SpiderMastermind => ArchetypeDescriptor {
            radius: Fixed::from_int(128),
            height: Fixed::from_int(100),
            speed: Fixed::from_int(12),
            mass: 1000,
            spawn_health: 3000,
            melee_state: None,
            missile_state: Some(Missile),
            raise_state: None,
            float_capable: false,
            pain_chance: 40,
            see_sound: None,
            attack_sound: None,
            pain_sound: None,
            death_sound: None,
            active_sound: None,
        },
        CommanderKeen => ArchetypeDescriptor {
            radius: Fixed::from_int(16),
            height: Fixed::from_int(72),
            speed: Fixed::ZERO,
            mass: 10_000_000,
            spawn_health: 100,
            melee_state: None,
            missile_state: None,
            raise_state: None,
            float_capable: false,
            pain_chance: 256,
            see_sound: None,
            attack_sound: None,
            pain_sound: None,
            death_sound: None,
            active_sound: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every archetype the enum names must resolve to a descriptor — a
    /// debug-time guard against `MissingArchetype` ever being reachable.
    #[test]
    fn every_archetype_has_a_descriptor() {
        let all = [
            MonsterKind::ZombieMan,
            MonsterKind::ShotgunGuy,
            MonsterKind::ChaingunGuy,
            MonsterKind::WolfensteinSS,
            MonsterKind::Imp,
            MonsterKind::Demon,
            MonsterKind::Spectre,
            MonsterKind::LostSoul,
            MonsterKind::Cacodemon,
            MonsterKind::HellKnight,
            MonsterKind::BaronOfHell,
            MonsterKind::Arachnotron,
            MonsterKind::PainElemental,
            MonsterKind::Revenant,
            MonsterKind::Mancubus,
            MonsterKind::ArchVile,
            MonsterKind::Cyberdemon,
            MonsterKind::SpiderMastermind,
            MonsterKind::CommanderKeen,
        ];
        for kind in all {
            let d = descriptor(kind);
            assert!(d.spawn_health > 0);
        }
    }
}
