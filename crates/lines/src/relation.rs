//! Pairwise predicates: parallel and perpendicular.
//!
//! Both are exact. `is_parallel` tests the 2×2 cross determinant against
//! `0.0`; `is_perpendicular` tests the slope product against `-1.0`. Inputs
//! that are only approximately parallel/perpendicular report `false`.

use super::measure::raw_slope;
use super::types::Line;

/// `d = dy1·dx2 − dy2·dx1 == 0`.
///
/// Two vertical lines are parallel. A zero-length line has a zero direction
/// and is therefore parallel to everything.
pub fn is_parallel(l1: &Line, l2: &Line) -> bool {
    let d1 = l1.direction();
    let d2 = l2.direction();
    let (a1, b1) = (d1.y, d1.x);
    let (a2, b2) = (d2.y, d2.x);
    let det = a1 * b2 - a2 * b1;
    det == 0.0
}

/// Perpendicular by slope product, with vertical lines handled first:
///
/// | l1 vertical | l2 vertical | result          |
/// |-------------|-------------|-----------------|
/// | yes         | yes         | `false`         |
/// | yes         | no          | `m2 == 0`       |
/// | no          | yes         | `m1 == 0`       |
/// | no          | no          | `m1 · m2 == -1` |
pub fn is_perpendicular(l1: &Line, l2: &Line) -> bool {
    match (l1.is_vertical(), l2.is_vertical()) {
        (true, true) => false,
        (true, false) => raw_slope(l2) == 0.0,
        (false, true) => raw_slope(l1) == 0.0,
        (false, false) => raw_slope(l1) * raw_slope(l2) == -1.0,
    }
}
