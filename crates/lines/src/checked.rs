//! Checked boundary for inputs that may be absent.
//!
//! The total API (`crate::distance`, `crate::is_parallel`, ...) takes owned
//! values and cannot see a missing argument. Host code that decodes nullable
//! data (JSON, FFI, forms) goes through these wrappers instead; each one
//! rejects a missing point, line, or line endpoint with
//! [`LinesError::InvalidArgument`] and otherwise delegates unchanged.
//!
//! Check order: both lines first, then their endpoints in argument order
//! (`l1.start`, `l1.end`, `l2.start`, `l2.end`).

use crate::error::{Arg, LineSlot, LinesError};
use crate::types::{Line, Point2D, SlopeIntercept};

pub type Result<T> = std::result::Result<T, LinesError>;

/// Line whose endpoints may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LooseLine {
    pub start: Option<Point2D>,
    pub end: Option<Point2D>,
}

impl LooseLine {
    #[inline]
    pub fn new(start: Option<Point2D>, end: Option<Point2D>) -> Self {
        Self { start, end }
    }

    /// Promote to a [`Line`] if both endpoints are present.
    pub fn strict(&self) -> Result<Line> {
        self.strict_in(LineSlot::Only)
    }

    fn strict_in(&self, slot: LineSlot) -> Result<Line> {
        let start = self.start.ok_or(LinesError::missing(Arg::Start(slot)))?;
        let end = self.end.ok_or(LinesError::missing(Arg::End(slot)))?;
        Ok(Line { start, end })
    }
}

impl From<Line> for LooseLine {
    #[inline]
    fn from(line: Line) -> Self {
        Self {
            start: Some(line.start),
            end: Some(line.end),
        }
    }
}

#[inline]
fn require<T>(value: Option<T>, arg: Arg) -> Result<T> {
    value.ok_or(LinesError::missing(arg))
}

fn strict_pair(l1: Option<&LooseLine>, l2: Option<&LooseLine>) -> Result<(Line, Line)> {
    let l1 = require(l1, Arg::Line1)?;
    let l2 = require(l2, Arg::Line2)?;
    Ok((l1.strict_in(LineSlot::First)?, l2.strict_in(LineSlot::Second)?))
}

pub fn distance(a: Option<Point2D>, b: Option<Point2D>) -> Result<f64> {
    let a = require(a, Arg::PointA)?;
    let b = require(b, Arg::PointB)?;
    Ok(crate::measure::distance(a, b))
}

pub fn slope_intercept(a: Option<Point2D>, b: Option<Point2D>) -> Result<SlopeIntercept> {
    let a = require(a, Arg::PointA)?;
    let b = require(b, Arg::PointB)?;
    Ok(crate::measure::slope_intercept(a, b))
}

pub fn slope_intercept_of(line: Option<&LooseLine>) -> Result<SlopeIntercept> {
    let line = require(line, Arg::Line)?.strict()?;
    Ok(crate::measure::slope_intercept_of(&line))
}

pub fn is_parallel(l1: Option<&LooseLine>, l2: Option<&LooseLine>) -> Result<bool> {
    let (l1, l2) = strict_pair(l1, l2)?;
    Ok(crate::relation::is_parallel(&l1, &l2))
}

pub fn is_perpendicular(l1: Option<&LooseLine>, l2: Option<&LooseLine>) -> Result<bool> {
    let (l1, l2) = strict_pair(l1, l2)?;
    Ok(crate::relation::is_perpendicular(&l1, &l2))
}

pub fn incident_point(l1: Option<&LooseLine>, l2: Option<&LooseLine>) -> Result<Point2D> {
    let (l1, l2) = strict_pair(l1, l2)?;
    Ok(crate::incidence::incident_point(&l1, &l2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loose(x1: i32, y1: i32, x2: i32, y2: i32) -> LooseLine {
        Line::from_coords(x1, y1, x2, y2).into()
    }

    #[test]
    fn distance_rejects_missing_points() {
        assert_eq!(
            distance(None, None),
            Err(LinesError::InvalidArgument {
                missing: Arg::PointA
            })
        );
        assert_eq!(
            distance(Some(Point2D::new(1, 4)), None),
            Err(LinesError::InvalidArgument {
                missing: Arg::PointB
            })
        );
        let d = distance(Some(Point2D::new(1, 4)), Some(Point2D::new(-2, 3))).unwrap();
        assert_eq!(d, 3.1622776601683795);
    }

    #[test]
    fn slope_intercept_rejects_missing_inputs() {
        assert!(slope_intercept(None, None).is_err());
        assert!(slope_intercept(None, Some(Point2D::new(0, 0))).is_err());
        assert_eq!(
            slope_intercept_of(None),
            Err(LinesError::InvalidArgument { missing: Arg::Line })
        );
        let half = LooseLine::new(Some(Point2D::new(1, 3)), None);
        assert_eq!(
            slope_intercept_of(Some(&half)),
            Err(LinesError::InvalidArgument {
                missing: Arg::End(LineSlot::Only)
            })
        );
    }

    #[test]
    fn pair_ops_reject_missing_lines_before_endpoints() {
        let empty = LooseLine::default();
        for op in [is_parallel, is_perpendicular] {
            assert_eq!(
                op(None, None),
                Err(LinesError::InvalidArgument {
                    missing: Arg::Line1
                })
            );
            // l2 absent is reported even though l1's endpoints are missing too
            assert_eq!(
                op(Some(&empty), None),
                Err(LinesError::InvalidArgument {
                    missing: Arg::Line2
                })
            );
            assert_eq!(
                op(Some(&empty), Some(&empty)),
                Err(LinesError::InvalidArgument {
                    missing: Arg::Start(LineSlot::First)
                })
            );
        }
        assert!(incident_point(None, None).is_err());
        assert!(incident_point(Some(&empty), Some(&empty)).is_err());
        let l1 = loose(1, 1, 4, 4);
        let l2_no_end = LooseLine::new(Some(Point2D::new(1, 8)), None);
        assert_eq!(
            incident_point(Some(&l1), Some(&l2_no_end)),
            Err(LinesError::InvalidArgument {
                missing: Arg::End(LineSlot::Second)
            })
        );
    }

    #[test]
    fn present_inputs_delegate_to_total_api() {
        let l1 = loose(1, 1, 4, 4);
        let l2 = loose(1, 8, 2, 4);
        assert_eq!(
            incident_point(Some(&l1), Some(&l2)),
            Ok(Point2D::new(2.4, 2.4))
        );
        assert_eq!(is_parallel(Some(&l1), Some(&l2)), Ok(false));
        assert_eq!(is_perpendicular(Some(&l1), Some(&l2)), Ok(false));
        assert_eq!(
            slope_intercept_of(Some(&loose(-2, 3, 1, 3))),
            Ok(SlopeIntercept::new(0.0, 3.0))
        );
    }

    #[test]
    fn error_message_names_the_missing_argument() {
        let err = is_parallel(Some(&LooseLine::default()), Some(&loose(0, 0, 1, 1))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: start of line l1 is missing"
        );
    }
}
