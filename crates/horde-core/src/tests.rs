//! Cross-module property tests. Module-local unit tests live next to
//! the code they cover; this file is for properties that span more than
//! one module.

use crate::direction::Direction;
use crate::fixed::Fixed;

#[test]
fn opposite_directions_step_in_opposite_vectors() {
    for d in Direction::all() {
        let (dx, dy) = d.step();
        let (ox, oy) = d.opposite().step();
        assert_eq!(dx, Fixed(-ox.0));
        assert_eq!(dy, Fixed(-oy.0));
    }
}

#[test]
fn fixed_mul_div_round_trips_within_rounding() {
    let a = Fixed::from_int(7);
    let b = Fixed::from_int(3);
    let product = a * b;
    let back = product / b;
    assert_eq!(back, a);
}
