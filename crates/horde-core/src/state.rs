//! Opaque animation-state handles.
//!
//! The AI core only ever *selects* a transition; advancing through the
//! frames of a state (and eventually calling back into an action) is the
//! embedding application's job. `StateId` is deliberately small: it names
//! the handful of transitions the AI itself decides to take.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    Spawn,
    See,
    Melee,
    Missile,
    Pain,
    Raise,
    VileHeal,
    BrainExplode,
    /// No state — the archetype has no capability for this transition
    /// (e.g. a archetype with no melee attack has `melee_state: None`,
    /// but code that needs to name "no state" explicitly, such as a
    /// death chain bottoming out, uses this variant).
    Null,
}
