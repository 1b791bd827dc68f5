//! The 8-way compass movement model used by chase AI.

use crate::fixed::{Fixed, FRACUNIT};

/// One of the 8 compass directions, or "no preferred direction".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
    None,
}

use Direction::*;

const ALL: [Direction; 8] = [East, NorthEast, North, NorthWest, West, SouthWest, South, SouthEast];

/// Per-direction unit step, 16.16 fixed point. `47000` approximates
/// `FRACUNIT / sqrt(2)` the way the original integer table does.
const XSPEED: [i32; 8] = [FRACUNIT, 47_000, 0, -47_000, -FRACUNIT, -47_000, 0, 47_000];
const YSPEED: [i32; 8] = [0, 47_000, FRACUNIT, 47_000, 0, -47_000, -FRACUNIT, -47_000];

impl Direction {
    pub fn index(self) -> Option<usize> {
        ALL.iter().position(|d| *d == self)
    }

    pub fn opposite(self) -> Direction {
        match self {
            East => West,
            NorthEast => SouthWest,
            North => South,
            NorthWest => SouthEast,
            West => East,
            SouthWest => NorthEast,
            South => North,
            SouthEast => NorthWest,
            None => None,
        }
    }

    /// Step vector for one tic of movement in this direction.
    pub fn step(self) -> (Fixed, Fixed) {
        match self.index() {
            Some(i) => (Fixed(XSPEED[i]), Fixed(YSPEED[i])),
            Option::None => (Fixed::ZERO, Fixed::ZERO),
        }
    }

    /// The diagonal direction that best matches a horizontal/vertical
    /// sign pair, mirroring the original's `diags[]` lookup.
    pub fn diagonal(dx_positive: bool, dy_positive: bool) -> Direction {
        match (dx_positive, dy_positive) {
            (true, true) => NorthEast,
            (false, true) => NorthWest,
            (true, false) => SouthEast,
            (false, false) => SouthWest,
        }
    }

    pub fn all() -> [Direction; 8] {
        ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for d in Direction::all() {
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn opposite_of_none_is_none() {
        assert_eq!(Direction::None.opposite(), Direction::None);
    }

    #[test]
    fn cardinal_step_is_unit_length() {
        let (x, _) = East.step();
        assert_eq!(x, Fixed::ONE);
    }
}
