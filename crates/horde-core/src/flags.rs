//! Per-actor behavior flags.

bitflags::bitflags! {
    /// Boolean actor properties consulted by predicates and actions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ActorFlags: u32 {
        /// Can be damaged by attacks (false once gibbed to nothing).
        const SHOOTABLE   = 1 << 0;
        /// Blocks movement of other actors.
        const SOLID       = 1 << 1;
        /// A corpse — eligible for Arch-vile resurrection scans.
        const CORPSE      = 1 << 2;
        /// Only wakes to direct sight, never to sound alone.
        const AMBUSH      = 1 << 3;
        /// Took damage this act; informs pain-state transitions.
        const JUST_HIT     = 1 << 4;
        /// Just performed an attack; affects refire decisions.
        const JUST_ATTACKED = 1 << 5;
        /// Currently in a float-capable archetype's hover state.
        const FLOAT       = 1 << 6;
        /// Archetype is capable of vertical hover movement at all.
        const FLOAT_CAPABLE = 1 << 7;
        /// Lost Soul charge-attack flight (ignores gravity/clipping).
        const SKULL_FLYING = 1 << 8;
        /// Partially invisible; lowers hit chance for ranged attacks.
        const SHADOW      = 1 << 9;
        /// Archetype is "fast" (doom2 -fast equivalent): shorter move
        /// counts and tighter missile-range clamps.
        const FAST        = 1 << 10;
        /// Counts toward the level's total-kills tally.
        const COUNT_KILL  = 1 << 11;
    }
}

impl Default for ActorFlags {
    fn default() -> Self {
        ActorFlags::SHOOTABLE | ActorFlags::SOLID | ActorFlags::COUNT_KILL
    }
}
