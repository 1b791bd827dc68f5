//! Sound cue identifiers.
//!
//! Several cues come in small randomized families (e.g. three possible
//! "I see you" grunts for the trooper archetypes); `SoundFamily` lets
//! callers pick a random member without the AI core owning an audio
//! engine.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    Pistol,
    Shotgun,
    Claw,
    SkeletonSwing,
    SkeletonPunch,
    Slop,
    VileAttack,
    BarrelExplode,
    ImpAttack,
    Teleport,
    BrainSpit,
    CubeBounce,
    BrainSight,
    BrainPain,
    BrainDeath,
    FlameStart,
    Flame,
    Family(SoundFamily, u8),
}

/// A randomized cue family; the `u8` on `SoundId::Family` is the variant
/// index, chosen by the caller via [`SoundFamily::len`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundFamily {
    /// Trooper/sergeant "I see you" sight grunt (3 variants).
    TrooperSight,
    /// Trooper/sergeant death scream (2 variants).
    TrooperDeath,
    /// Lost Soul / Pain Elemental pop death (2 variants).
    PainPop,
}

impl SoundFamily {
    pub fn len(self) -> u8 {
        match self {
            SoundFamily::TrooperSight => 3,
            SoundFamily::TrooperDeath => 2,
            SoundFamily::PainPop => 2,
        }
    }

    pub fn is_empty(self) -> bool {
        false
    }
}
