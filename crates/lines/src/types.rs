//! Value types: points, lines, and the slope/intercept result pair.
//!
//! - `Point2D`: two `f64` coordinates; any `Into<f64>` scalar is accepted.
//! - `Line`: ordered (start, end) pair, owned by value.
//! - `SlopeIntercept`: named result of the slope formula.
//!
//! Equality is exact field-wise `==` on `f64` (derived `PartialEq`). There is
//! deliberately no `Eq`/`Hash`: NaN coordinates are representable.

use std::fmt;

use nalgebra::Vector2;

/// Finite stand-in for "unbounded": the y-intercept of a vertical line and the
/// coordinates of the incident point of two parallel lines.
pub const UNBOUNDED: f64 = f64::MAX;

/// Point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Widen any lossless-to-`f64` scalar (`i32`, `u32`, `f32`, `f64`, ...).
    #[inline]
    pub fn new(x: impl Into<f64>, y: impl Into<f64>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// The sentinel point returned for parallel lines.
    #[inline]
    pub const fn unbounded() -> Self {
        Self {
            x: UNBOUNDED,
            y: UNBOUNDED,
        }
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.x == UNBOUNDED && self.y == UNBOUNDED
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl<T: Into<f64>> From<(T, T)> for Point2D {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2<f64>> for Point2D {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point2D> for Vector2<f64> {
    #[inline]
    fn from(p: Point2D) -> Self {
        p.to_vector()
    }
}

/// `(x, y)` with Rust's shortest round-trip float formatting, so the sentinel
/// prints as `1.7976931348623157e308`.
impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

/// Line through `start` and `end`. Only the direction `end - start` and the
/// anchor `start` enter the formulas; the segment extent is irrelevant.
///
/// `start == end` is allowed. Slope and incidence results for such a line are
/// NaN or the sentinel, never an error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Line {
    pub start: Point2D,
    pub end: Point2D,
}

impl Line {
    #[inline]
    pub fn new(start: impl Into<Point2D>, end: impl Into<Point2D>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Build from integer endpoint coordinates, widened to `f64`.
    #[inline]
    pub fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            start: Point2D::new(x1, y1),
            end: Point2D::new(x2, y2),
        }
    }

    /// `end - start` as `(dx, dy)`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(self.end.x - self.start.x, self.end.y - self.start.y)
    }

    /// Parallel to the y-axis (`dx == 0`). A zero-length line counts as vertical.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.end.x - self.start.x == 0.0
    }

    /// Euclidean length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        crate::measure::distance(self.start, self.end)
    }

    #[inline]
    pub fn slope_intercept(&self) -> SlopeIntercept {
        crate::measure::slope_intercept(self.start, self.end)
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// `y = slope · x + y_intercept`. For vertical lines `slope == 0.0` and
/// `y_intercept == UNBOUNDED`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlopeIntercept {
    pub slope: f64,
    pub y_intercept: f64,
}

impl SlopeIntercept {
    #[inline]
    pub const fn new(slope: f64, y_intercept: f64) -> Self {
        Self { slope, y_intercept }
    }

    /// Vertical-line result.
    #[inline]
    pub const fn vertical() -> Self {
        Self {
            slope: 0.0,
            y_intercept: UNBOUNDED,
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.y_intercept == UNBOUNDED
    }

    /// `None` for the sentinel.
    #[inline]
    pub fn finite_y_intercept(&self) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some(self.y_intercept)
        }
    }
}

impl fmt::Display for SlopeIntercept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slope={:?} y_intercept={:?}", self.slope, self.y_intercept)
    }
}
