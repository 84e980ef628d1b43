//! Single-line measurements: Euclidean distance and slope/y-intercept.

use super::types::{Line, Point2D, SlopeIntercept};

/// Euclidean distance `sqrt((bx-ax)² + (by-ay)²)`.
///
/// Symmetric bit-for-bit: swapping `a` and `b` only negates the differences,
/// which squaring erases exactly.
#[inline]
pub fn distance(a: Point2D, b: Point2D) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Slope and y-intercept of the line through `a` and `b`.
///
/// - Vertical (`dx == 0`): `SlopeIntercept::vertical()`, i.e. `(0.0, UNBOUNDED)`.
/// - Horizontal (`dy == 0`): `(0.0, a.y)`.
/// - Otherwise `m = dy/dx`, `b = a.y - m·a.x`, and the reported intercept is
///   `m·a.x + b`, evaluated in that order.
///
/// The last value is algebraically `a.y`; it is computed rather than copied so
/// results match the two-step formula exactly.
pub fn slope_intercept(a: Point2D, b: Point2D) -> SlopeIntercept {
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    if dx == 0.0 {
        return SlopeIntercept::vertical();
    }
    if dy == 0.0 {
        return SlopeIntercept::new(0.0, a.y);
    }

    let m = dy / dx;
    let offset = a.y - m * a.x;
    let y = m * a.x + offset;
    SlopeIntercept::new(m, y)
}

/// Line form of [`slope_intercept`], using `(start, end)`.
#[inline]
pub fn slope_intercept_of(line: &Line) -> SlopeIntercept {
    slope_intercept(line.start, line.end)
}

/// Slope of a non-vertical line; `±inf`/NaN for vertical ones. Kept separate
/// from [`slope_intercept`] because the perpendicular test needs the raw
/// quotient, not the sentinel pair.
#[inline]
pub(crate) fn raw_slope(line: &Line) -> f64 {
    let d = line.direction();
    d.y / d.x
}
