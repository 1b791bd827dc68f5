//! Binary angle measurement (BAM) and the fine sine/cosine tables.
//!
//! A full turn is the wraparound of a `u32`; subtraction between two
//! angles is therefore always well-defined without a branch for sign.

use std::ops::{Add, Sub};
use std::sync::OnceLock;

use crate::fixed::Fixed;

pub const ANG45: u32 = 0x2000_0000;
pub const ANG90: u32 = 0x4000_0000;
pub const ANG180: u32 = 0x8000_0000;
pub const ANG270: u32 = 0xC000_0000;

/// Size of the fine sine/cosine table; one full turn maps onto this range.
const FINEANGLES: usize = 8192;
const ANGLETOFINESHIFT: u32 = 19;

/// An angle as a fraction of a full turn, stored as the upper 32 bits of
/// a BAM value — wraps naturally on add/sub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Angle(pub u32);

impl Angle {
    pub const ZERO: Angle = Angle(0);

    pub fn from_fine_index(idx: usize) -> Angle {
        Angle(((idx % FINEANGLES) as u32) << ANGLETOFINESHIFT)
    }

    fn fine_index(self) -> usize {
        (self.0 >> ANGLETOFINESHIFT) as usize
    }

    pub fn sin(self) -> Fixed {
        fine_sine()[self.fine_index()]
    }

    pub fn cos(self) -> Fixed {
        // cosine is sine shifted a quarter turn, same table convention
        // the original engine uses (`finecosine = &finesine[FINEANGLES/4]`).
        fine_sine()[(self.fine_index() + FINEANGLES / 4) % FINEANGLES]
    }

    /// Signed delta to `other`, in the range `(-ANG180, ANG180]` when
    /// reinterpreted as `i32`.
    pub fn delta_to(self, other: Angle) -> i32 {
        other.0.wrapping_sub(self.0) as i32
    }

    /// Mask the angle down to the low 3 bits of its top octant — used by
    /// the chase facing-alignment step.
    pub fn masked_octant(self) -> Angle {
        Angle(self.0 & 0xE000_0000)
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0.wrapping_sub(rhs.0))
    }
}

fn fine_sine() -> &'static [Fixed; FINEANGLES] {
    static TABLE: OnceLock<[Fixed; FINEANGLES]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [Fixed::ZERO; FINEANGLES];
        for (i, slot) in table.iter_mut().enumerate() {
            let radians = (i as f64) / (FINEANGLES as f64) * std::f64::consts::TAU;
            *slot = Fixed::from_f64(radians.sin());
        }
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_angle_sine_is_zero() {
        assert_eq!(Angle::ZERO.sin(), Fixed::ZERO);
    }

    #[test]
    fn quarter_turn_cosine_is_zero() {
        let right_angle = Angle(ANG90);
        assert!(right_angle.cos().0.abs() < 64);
    }

    #[test]
    fn half_turn_sine_is_near_zero() {
        let straight = Angle(ANG180);
        assert!(straight.sin().0.abs() < 64);
    }

    #[test]
    fn delta_to_is_antisymmetric() {
        let a = Angle(1_000_000);
        let b = Angle(5_000_000);
        assert_eq!(a.delta_to(b), -(b.delta_to(a)));
    }
}
