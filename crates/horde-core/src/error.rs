//! Error type for the handful of genuinely exceptional conditions.
//!
//! Predicate failures (no sight line, no open path, population cap
//! reached) are not errors — they are `bool`/`Option` outcomes the
//! caller branches on, the same way the action library this crate feeds
//! never returns a `Result` for a failed check. `AiError` exists only for
//! API misuse at the boundary: a stale id, or an archetype the caller
//! added to the enum without adding a table entry for it.

use std::fmt;

use crate::archetype::MonsterKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// An id was passed that no longer (or never did) name a live actor.
    UnknownActor(u64),
    /// `archetype::descriptor` has no entry for this archetype. Guarded
    /// against at construction time; reachable only if that guard is
    /// bypassed.
    MissingArchetype(MonsterKind),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::UnknownActor(id) => write!(f, "unknown actor id {id}"),
            AiError::MissingArchetype(kind) => write!(f, "no archetype descriptor for {kind:?}"),
        }
    }
}

impl std::error::Error for AiError {}
