use crate::{DimensionMismatch, Record};

use super::{Limits, LimitsError, StoppingRule};

/// Stops when the objective value barely changes between consecutive points.
///
/// Never fires before a second point exists. From then on it fires at the
/// cap, or below it iff
/// `|(f(current) - f(previous)) / f(current)| < tolerance`. The denominator is
/// not guarded: when `f(current)` is zero the ratio is infinite or NaN, the
/// comparison is false, and the run continues.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChange {
    limits: Limits,
}

impl ValueChange {
    /// Creates the rule.
    ///
    /// # Errors
    ///
    /// Returns [`LimitsError`] if `tolerance` is invalid.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, LimitsError> {
        Ok(Self {
            limits: Limits::new(tolerance, max_iters)?,
        })
    }
}

impl StoppingRule for ValueChange {
    fn limits(&self) -> Limits {
        self.limits
    }

    fn check(&self, record: &Record) -> Result<bool, DimensionMismatch> {
        let Some(previous) = record.previous_point() else {
            return Ok(false);
        };
        if self.limits.is_exhausted(record.iterations()) {
            return Ok(true);
        }

        let objective = record.objective();
        let current_value = objective.value(record.current_point())?;
        let previous_value = objective.value(previous)?;
        let change = ((current_value - previous_value) / current_value).abs();

        if !change.is_finite() {
            tracing::warn!(
                current_value,
                previous_value,
                "relative value change is not finite"
            );
        }

        Ok(change < self.limits.tolerance())
    }
}
