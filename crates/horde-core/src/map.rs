//! Map vocabulary: sectors and lines, plus the scratch fields the sound
//! flood and line-opening checks need. Loading a map from a level file is
//! out of scope; this module only holds the data those systems read.

use crate::fixed::Fixed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectorId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(pub u32);

/// A convex floor/ceiling region of the map.
#[derive(Debug, Clone)]
pub struct Sector {
    pub floor_height: Fixed,
    pub ceiling_height: Fixed,
    /// The lines bounding this sector, for sound-flood traversal.
    pub lines: Vec<LineId>,
    /// Scratch field: last `validcount` that visited this sector during
    /// a sound flood, preventing re-traversal in the same flood.
    pub validcount: i32,
    /// Scratch field set by the sound flood: who to alert actors toward.
    pub sound_target: Option<u64>,
    /// Scratch field set by the sound flood: `soundblocks + 1` from
    /// whichever branch reached this sector first, where `soundblocks`
    /// counts sound-blocked line crossings (0 or 1) on that branch.
    pub sound_traversed: u8,
}

impl Sector {
    pub fn new(floor_height: Fixed, ceiling_height: Fixed) -> Self {
        Sector {
            floor_height,
            ceiling_height,
            lines: Vec::new(),
            validcount: 0,
            sound_target: None,
            sound_traversed: 0,
        }
    }
}

/// A one- or two-sided boundary between sectors (or the map edge).
#[derive(Debug, Clone)]
pub struct Line {
    pub front_sector: SectorId,
    /// `None` for a one-sided (solid) wall.
    pub back_sector: Option<SectorId>,
    /// Blocks sound propagation outright (a closed door, for instance)
    /// regardless of the height-opening check.
    pub blocks_sound: bool,
    /// Non-zero tag lines can be activated by `use_special_line`.
    pub special_tag: Option<u16>,
}

impl Line {
    pub fn is_two_sided(&self) -> bool {
        self.back_sector.is_some()
    }
}

/// The vertical gap between two sectors across a line: how far an actor
/// (or sound) can pass before the line blocks it outright.
#[derive(Debug, Clone, Copy)]
pub struct LineOpening {
    pub top: Fixed,
    pub bottom: Fixed,
}

impl LineOpening {
    pub fn range(&self) -> Fixed {
        self.top - self.bottom
    }

    pub fn is_blocked(&self) -> bool {
        self.range().0 <= 0
    }
}

/// Which IWAD family the current level belongs to, consulted only by
/// `boss_death`'s trigger table (the commercial episode collapses
/// episode/map into one continuous map numbering, the others don't).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Shareware,
    Registered,
    Retail,
    Commercial,
}

/// The episode/map identity `boss_death` keys its trigger table on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelId {
    pub mode: GameMode,
    pub episode: u32,
    pub map: u32,
}

/// Compute the opening between the two sectors a line divides. A
/// one-sided line has no opening at all. This is a pure height check;
/// `line.blocks_sound` plays no part in it (sound-blocking is a separate
/// gate the sound flood applies on top, see `recursive_sound`).
pub fn line_opening(_line: &Line, front: &Sector, back: Option<&Sector>) -> LineOpening {
    match back {
        None => LineOpening { top: Fixed::ZERO, bottom: Fixed::ZERO },
        Some(back) => {
            let top = front.ceiling_height.min_with(back.ceiling_height);
            let bottom = front.floor_height.max_with(back.floor_height);
            LineOpening { top, bottom }
        }
    }
}

impl Fixed {
    fn min_with(self, other: Fixed) -> Fixed {
        Fixed(self.0.min(other.0))
    }
    fn max_with(self, other: Fixed) -> Fixed {
        Fixed(self.0.max(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_sided_line_has_no_opening() {
        let front = Sector::new(Fixed::ZERO, Fixed::from_int(128));
        let line = Line { front_sector: SectorId(0), back_sector: None, blocks_sound: false, special_tag: None };
        let opening = line_opening(&line, &front, None);
        assert!(opening.is_blocked());
    }

    #[test]
    fn sound_blocking_line_still_has_a_height_opening() {
        // `blocks_sound` gates the sound flood, not the height check: a
        // sound-blocked line between two open rooms still has a passable
        // opening for movement/sight purposes.
        let front = Sector::new(Fixed::ZERO, Fixed::from_int(128));
        let back = Sector::new(Fixed::ZERO, Fixed::from_int(128));
        let line = Line { front_sector: SectorId(0), back_sector: Some(SectorId(1)), blocks_sound: true, special_tag: None };
        let opening = line_opening(&line, &front, Some(&back));
        assert!(!opening.is_blocked());
    }

    #[test]
    fn open_two_sided_line_has_positive_range() {
        let front = Sector::new(Fixed::ZERO, Fixed::from_int(128));
        let back = Sector::new(Fixed::ZERO, Fixed::from_int(128));
        let line = Line { front_sector: SectorId(0), back_sector: Some(SectorId(1)), blocks_sound: false, special_tag: None };
        let opening = line_opening(&line, &front, Some(&back));
        assert!(!opening.is_blocked());
        assert_eq!(opening.range(), Fixed::from_int(128));
    }
}
