use std::fmt;

/// Which argument of a checked call was missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arg {
    /// First point (`a`).
    PointA,
    /// Second point (`b`).
    PointB,
    /// The single line of `slope_intercept_of`.
    Line,
    /// First line (`l1`).
    Line1,
    /// Second line (`l2`).
    Line2,
    /// `start` of the given line.
    Start(LineSlot),
    /// `end` of the given line.
    End(LineSlot),
}

/// Position of a line within a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineSlot {
    /// The single line of `slope_intercept_of`.
    Only,
    /// First line (`l1`).
    First,
    /// Second line (`l2`).
    Second,
}

/// Errors surfaced by the checked boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinesError {
    /// A required point or line (or a line's endpoint) was absent.
    InvalidArgument { missing: Arg },
}

impl LinesError {
    #[inline]
    pub(crate) fn missing(arg: Arg) -> Self {
        Self::InvalidArgument { missing: arg }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::PointA => write!(f, "point a"),
            Arg::PointB => write!(f, "point b"),
            Arg::Line => write!(f, "line"),
            Arg::Line1 => write!(f, "line l1"),
            Arg::Line2 => write!(f, "line l2"),
            Arg::Start(slot) => write!(f, "start of {slot}"),
            Arg::End(slot) => write!(f, "end of {slot}"),
        }
    }
}

impl fmt::Display for LineSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSlot::Only => write!(f, "line"),
            LineSlot::First => write!(f, "line l1"),
            LineSlot::Second => write!(f, "line l2"),
        }
    }
}

impl fmt::Display for LinesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinesError::InvalidArgument { missing } => {
                write!(f, "invalid argument: {missing} is missing")
            }
        }
    }
}

impl std::error::Error for LinesError {}
