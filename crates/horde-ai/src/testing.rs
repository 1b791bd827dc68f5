//! A reference [`WorldServices`] implementation used by this crate's own
//! test suite. Not meant for production embedding: sight is always true,
//! movement always succeeds unless told otherwise, and attacks always
//! hit. It exists so the action library has something concrete to drive
//! against without dragging in real collision/rendering code.

use horde_core::angle::Angle;
use horde_core::archetype::{self, MonsterKind};
use horde_core::fixed::Fixed;
use horde_core::map::SectorId;
use horde_core::state::StateId;

use crate::services::{AttackResult, MoveResult, WorldServices};
use crate::world::{Actor, ActorId, AiWorld};

#[derive(Debug, Default)]
pub struct StubServices {
    moves_blocked: bool,
    sight_blocked: bool,
    /// Level-trigger calls recorded for test assertions.
    pub triggers: Vec<TriggerCall>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerCall {
    Door { tag: u16, blaze: bool },
    Floor { tag: u16, turbo: bool },
    ExitLevel,
}

impl StubServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_moves_blocked(mut self) -> Self {
        self.moves_blocked = true;
        self
    }

    pub fn with_sight_blocked(mut self) -> Self {
        self.sight_blocked = true;
        self
    }
}

impl WorldServices for StubServices {
    fn check_sight(&mut self, _world: &AiWorld, _from: ActorId, _to: ActorId) -> bool {
        !self.sight_blocked
    }

    fn try_move(&mut self, world: &mut AiWorld, actor: ActorId, dx: Fixed, dy: Fixed) -> MoveResult {
        if self.moves_blocked {
            return MoveResult::Blocked;
        }
        let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
        a.x += dx;
        a.y += dy;
        MoveResult::Moved
    }

    fn block_things_iterator(
        &mut self,
        _world: &AiWorld,
        _x: Fixed,
        _y: Fixed,
        _radius: Fixed,
        _visit: &mut dyn FnMut(ActorId) -> bool,
    ) {
        // No collision geometry in the stub: nothing occupies any cell.
    }

    fn aim_line_attack(&mut self, world: &mut AiWorld, attacker: ActorId, _angle: Angle, _range: Fixed) -> Option<AttackResult> {
        let a = world.ecs.get::<&Actor>(attacker).ok()?;
        let target = a.target?;
        let t = world.ecs.get::<&Actor>(target).ok()?;
        let dx = (t.x - a.x).abs();
        let dy = (t.y - a.y).abs();
        Some(AttackResult { hit: true, distance: dx + dy })
    }

    fn line_attack(&mut self, world: &mut AiWorld, attacker: ActorId, _angle: Angle, _range: Fixed, damage: i32) {
        let target = world.ecs.get::<&Actor>(attacker).ok().and_then(|a| a.target);
        if let Some(target) = target {
            self.damage_mobj(world, target, Some(attacker), Some(attacker), damage);
        }
    }

    fn radius_attack(&mut self, world: &mut AiWorld, source: ActorId, damage: i32, _radius: Fixed) {
        let target = world.ecs.get::<&Actor>(source).ok().and_then(|a| a.target);
        if let Some(target) = target {
            self.damage_mobj(world, target, Some(source), Some(source), damage);
        }
    }

    fn damage_mobj(&mut self, world: &mut AiWorld, target: ActorId, _inflictor: Option<ActorId>, _source: Option<ActorId>, damage: i32) {
        if let Ok(mut t) = world.ecs.get::<&mut Actor>(target) {
            t.health -= damage;
        }
    }

    fn spawn_mobj(&mut self, world: &mut AiWorld, kind: MonsterKind, x: Fixed, y: Fixed, z: Fixed) -> ActorId {
        let health = archetype::descriptor(kind).spawn_health;
        world.spawn_actor(Actor::spawn(kind, x, y, z, SectorId(0), health))
    }

    fn spawn_missile(&mut self, world: &mut AiWorld, source: ActorId, target: ActorId, _kind: archetype::ProjectileKind) -> ActorId {
        // The stub has no projectile sprite/damage table to key off `_kind`
        // with; it only needs a live entity to carry position/momentum/
        // tracer so the calling action has something to mutate.
        let (x, y, z) = world
            .ecs
            .get::<&Actor>(source)
            .map(|a| (a.x, a.y, a.z))
            .unwrap_or((Fixed::ZERO, Fixed::ZERO, Fixed::ZERO));
        let id = self.spawn_mobj(world, MonsterKind::ZombieMan, x, y, z);
        let mut m = world.ecs.get::<&mut Actor>(id).unwrap();
        m.target = Some(target);
        id
    }

    fn spawn_puff(&mut self, _world: &mut AiWorld, _x: Fixed, _y: Fixed, _z: Fixed) {}

    fn spawn_fire_marker(&mut self, world: &mut AiWorld, x: Fixed, y: Fixed, z: Fixed) -> ActorId {
        self.spawn_mobj(world, MonsterKind::ZombieMan, x, y, z)
    }

    fn remove_mobj(&mut self, world: &mut AiWorld, actor: ActorId) {
        let _ = world.ecs.despawn(actor);
    }

    fn teleport_move(&mut self, world: &mut AiWorld, actor: ActorId, x: Fixed, y: Fixed) -> bool {
        let mut a = world.ecs.get::<&mut Actor>(actor).unwrap();
        a.x = x;
        a.y = y;
        true
    }

    fn set_thing_position(&mut self, _world: &mut AiWorld, _actor: ActorId) {}
    fn unset_thing_position(&mut self, _world: &mut AiWorld, _actor: ActorId) {}

    fn use_special_line(&mut self, _world: &mut AiWorld, _actor: ActorId, _sector: SectorId) -> bool {
        false
    }

    fn check_sides(&mut self, _world: &AiWorld, _actor: ActorId) -> (bool, bool) {
        (true, true)
    }

    fn set_actor_state(&mut self, world: &mut AiWorld, actor: ActorId, state: StateId) {
        if let Ok(mut a) = world.ecs.get::<&mut Actor>(actor) {
            a.state = state;
        }
    }

    fn spawn_sound(&mut self, _world: &AiWorld, _actor: ActorId, _sound: horde_core::sound::SoundId) {}

    fn ev_do_door(&mut self, _world: &mut AiWorld, tag: u16, blaze: bool) {
        self.triggers.push(TriggerCall::Door { tag, blaze });
    }

    fn ev_do_floor(&mut self, _world: &mut AiWorld, tag: u16, turbo: bool) {
        self.triggers.push(TriggerCall::Floor { tag, turbo });
    }

    fn g_exit_level(&mut self, _world: &mut AiWorld) {
        self.triggers.push(TriggerCall::ExitLevel);
    }
}
