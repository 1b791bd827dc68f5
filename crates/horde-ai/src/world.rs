//! The AI world: the `hecs::World` plus the map and PRNG it acts over.

use horde_core::angle::Angle;
use horde_core::archetype::MonsterKind;
use horde_core::fixed::Fixed;
use horde_core::flags::ActorFlags;
use horde_core::map::{Line, LineId, Sector, SectorId};
use horde_core::prng::Prng;
use horde_core::state::StateId;

use crate::brain::BrainState;

/// Identifies an actor. A thin alias over the ECS entity handle so the
/// rest of this crate never has to name `hecs::Entity` directly.
pub type ActorId = hecs::Entity;

/// The monster component bundle. Plain data; behavior lives in systems,
/// not on this struct.
#[derive(Debug, Clone)]
pub struct Actor {
    pub kind: MonsterKind,
    pub x: Fixed,
    pub y: Fixed,
    pub z: Fixed,
    pub angle: Angle,
    pub momx: Fixed,
    pub momy: Fixed,
    pub momz: Fixed,
    pub health: i32,
    pub flags: ActorFlags,
    pub sector: SectorId,
    pub move_dir: horde_core::direction::Direction,
    /// Number of further `try_walk` attempts allowed before `new_chase_dir`
    /// re-evaluates, counting down from a random roll.
    pub move_count: u8,
    /// Ticks remaining before this actor may re-evaluate its target
    /// (mirrors `reactiontime`: a freshly-woken actor waits before acting).
    pub reaction_time: i32,
    /// Ticks the actor will keep fighting its current target even after
    /// being hurt by someone else (mirrors `threshold`).
    pub threshold: i32,
    pub target: Option<ActorId>,
    /// Secondary tracked entity: the Revenant's homing missile target, or
    /// the corpse an Arch-vile is mid-resurrection on.
    pub tracer: Option<ActorId>,
    /// Round-robin cursor into `AiWorld::players` for `look_for_players`.
    pub last_look: usize,
    /// Last target this actor had before losing it, consulted by
    /// `look_for_players` when no candidate is currently visible. Mirrors
    /// `lastenemy`: set on the host's side of `WorldServices::damage_mobj`
    /// when an infight or player hit retargets the actor away from it
    /// (this crate does not itself implement damage resolution), and
    /// consumed/cleared here once promoted back to `target`.
    pub last_enemy: Option<ActorId>,
    pub state: StateId,
}

impl Actor {
    pub fn spawn(kind: MonsterKind, x: Fixed, y: Fixed, z: Fixed, sector: SectorId, health: i32) -> Self {
        Actor {
            kind,
            x,
            y,
            z,
            angle: Angle::ZERO,
            momx: Fixed::ZERO,
            momy: Fixed::ZERO,
            momz: Fixed::ZERO,
            health,
            flags: ActorFlags::default(),
            sector,
            move_dir: horde_core::direction::Direction::None,
            move_count: 0,
            reaction_time: 0,
            threshold: 0,
            target: None,
            tracer: None,
            last_look: 0,
            last_enemy: None,
            state: StateId::Spawn,
        }
    }
}

/// The complete simulation state the AI systems act over: the ECS world,
/// the map, the shared PRNG, and the brain-target registry. One instance
/// per simulation; no interior mutability.
pub struct AiWorld {
    pub ecs: hecs::World,
    pub sectors: Vec<Sector>,
    pub lines: Vec<Line>,
    /// Incremented once per sound flood / sight check sweep so sectors
    /// can tell "have I already been visited this sweep" apart from
    /// "visited in a previous sweep" without clearing a visited set.
    pub validcount: i32,
    pub prng: Prng,
    pub brain: BrainState,
    /// Candidate targets for `look_for_players`, in spawn order.
    pub players: Vec<ActorId>,
    /// Outstanding Lost Souls spawned by Pain Elementals this level.
    /// Incremented by `pain_shoot_skull`, decremented by `fall` when a
    /// Lost Soul's death state runs.
    pub skull_count: u32,
    /// Halves Lost Soul population pressure and widens some pain-state
    /// windows (easy-skill equivalent).
    pub easy: bool,
    /// Shortens move counts and tightens missile-range clamps for
    /// archetypes flagged `FAST`.
    pub fast: bool,
    /// Widens `look_for_players`'s scan cap to the whole roster and
    /// enables last-enemy promotion on exhaustion (mirrors killough's
    /// `monsters_remember` compatibility option).
    pub monsters_remember: bool,
    /// Which episode/map this simulation instance is running, consulted
    /// only by `boss_death`'s trigger table.
    pub level: horde_core::map::LevelId,
    /// Current game tic, advanced once per simulation step by the
    /// embedding application via `advance_tick`. Consulted by `Tracer`'s
    /// every-fourth-tic gate.
    pub tick: u32,
    /// The tic `tick` was at when the current level started, so that
    /// tic-gated actions stay in sync across a level's lifetime rather
    /// than the session's.
    pub level_start_tick: u32,
}

impl AiWorld {
    pub fn new(seed: u64) -> Self {
        AiWorld {
            ecs: hecs::World::new(),
            sectors: Vec::new(),
            lines: Vec::new(),
            validcount: 0,
            prng: Prng::new(seed),
            brain: BrainState::default(),
            players: Vec::new(),
            skull_count: 0,
            easy: false,
            fast: false,
            monsters_remember: false,
            level: horde_core::map::LevelId { mode: horde_core::map::GameMode::Commercial, episode: 1, map: 1 },
            tick: 0,
            level_start_tick: 0,
        }
    }

    /// Advance the game tic by one. Called once per simulation step by
    /// the embedding application, before dispatching that tic's actions.
    pub fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn spawn_actor(&mut self, actor: Actor) -> ActorId {
        self.ecs.spawn((actor,))
    }

    pub fn next_validcount(&mut self) -> i32 {
        self.validcount += 1;
        self.validcount
    }

    pub fn sector(&self, id: SectorId) -> &Sector {
        &self.sectors[id.0 as usize]
    }

    pub fn sector_mut(&mut self, id: SectorId) -> &mut Sector {
        &mut self.sectors[id.0 as usize]
    }

    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.0 as usize]
    }
}
