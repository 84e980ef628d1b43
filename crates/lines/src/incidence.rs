//! Incident point of two infinite lines (Cramer's rule).
//!
//! Each line is written implicitly as `a·x + b·y = c` with
//! `a = end.y − start.y`, `b = start.x − end.x`, `c = a·start.x + b·start.y`.
//! The pair is solvable iff `d = a1·b2 − a2·b1 != 0`.

use super::types::{Line, Point2D};

/// Result of intersecting two infinite lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Incidence {
    /// Unique crossing point (not necessarily on either segment).
    Point(Point2D),
    /// `d == 0`: parallel or coincident, no unique point.
    Parallel,
}

impl Incidence {
    #[inline]
    pub fn point(self) -> Option<Point2D> {
        match self {
            Incidence::Point(p) => Some(p),
            Incidence::Parallel => None,
        }
    }

    /// Collapse to the sentinel convention used by [`incident_point`].
    #[inline]
    pub fn point_or_sentinel(self) -> Point2D {
        self.point().unwrap_or_else(Point2D::unbounded)
    }
}

#[inline]
fn implicit(line: &Line) -> (f64, f64, f64) {
    let a = line.end.y - line.start.y;
    let b = line.start.x - line.end.x;
    let c = a * line.start.x + b * line.start.y;
    (a, b, c)
}

/// Intersect the infinite lines through `l1` and `l2`.
pub fn intersect(l1: &Line, l2: &Line) -> Incidence {
    let (a1, b1, c1) = implicit(l1);
    let (a2, b2, c2) = implicit(l2);

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return Incidence::Parallel;
    }

    let x = (b2 * c1 - b1 * c2) / det;
    let y = (a1 * c2 - a2 * c1) / det;
    Incidence::Point(Point2D { x, y })
}

/// Incident point of `l1` and `l2`, or `Point2D::unbounded()` when they are
/// parallel or coincident.
#[inline]
pub fn incident_point(l1: &Line, l2: &Line) -> Point2D {
    intersect(l1, l2).point_or_sentinel()
}
