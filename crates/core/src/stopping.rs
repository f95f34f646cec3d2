//! Stopping rules: predicates over a [`Record`] that decide when a run halts.
//!
//! Every rule carries [`Limits`]: a tolerance and an iteration cap.
//! [`PointDistance`] and [`ValueChange`] compare consecutive points, so they
//! never fire on a one-point record, cap included. [`GradientNorm`] tests the
//! cap first. A method that must end a run whose trajectory never grew past
//! its start point reads the cap from [`StoppingRule::limits`] itself.

mod gradient_norm;
mod limits;
mod point_distance;
mod value_change;

pub use gradient_norm::GradientNorm;
pub use limits::{Limits, LimitsError};
pub use point_distance::PointDistance;
pub use value_change::ValueChange;

use crate::{DimensionMismatch, Record};

/// Decides whether an optimization run should stop.
pub trait StoppingRule {
    /// Returns the rule's tolerance and iteration cap.
    fn limits(&self) -> Limits;

    /// Returns true if the run described by `record` should stop.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if the recorded points do not match the
    /// objective's dimension or each other.
    fn check(&self, record: &Record) -> Result<bool, DimensionMismatch>;
}
