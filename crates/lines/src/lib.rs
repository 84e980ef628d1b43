//! Planar relationships between two-point lines.
//!
//! Distance, slope/y-intercept, parallel and perpendicular tests, and the
//! incident point of two infinite lines. Every operation is a closed-form
//! formula over a handful of `f64`s; nothing here allocates, logs or keeps
//! state between calls.
//!
//! Conventions
//! - Exact floating-point comparisons throughout. Near-parallel lines whose
//!   determinant is tiny but non-zero are *not* parallel, and slope products
//!   that round to something other than `-1.0` are *not* perpendicular.
//! - Degenerate results are signalled with the finite sentinel [`UNBOUNDED`]
//!   (`f64::MAX`): the y-intercept of a vertical line and both coordinates of
//!   the "intersection" of parallel lines. [`Incidence`] and
//!   [`SlopeIntercept::finite_y_intercept`] expose the same cases as sum types.
//! - Inputs are not validated. NaN, infinities and zero-length lines flow
//!   through the formulas unchanged.
//!
//! The [`checked`] module is the boundary for host code whose inputs may be
//! missing; it is the only place a [`LinesError`] is produced.

pub mod checked;
mod error;
mod incidence;
mod measure;
mod relation;
mod types;


pub use error::{Arg, LineSlot, LinesError};
pub use incidence::{incident_point, intersect, Incidence};
pub use measure::{distance, slope_intercept, slope_intercept_of};
pub use relation::{is_parallel, is_perpendicular};
pub use types::{Line, Point2D, SlopeIntercept, UNBOUNDED};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::checked::LooseLine;
    pub use crate::{
        distance, incident_point, intersect, is_parallel, is_perpendicular, slope_intercept,
        slope_intercept_of, Incidence, Line, LinesError, Point2D, SlopeIntercept, UNBOUNDED,
    };
}
