use crate::{DimensionMismatch, Record};

use super::{Limits, LimitsError, StoppingRule};

/// Stops when the gradient at the current point is small.
///
/// Below the cap, the rule fires iff at least two points exist and
/// `||∇f(current)|| < tolerance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientNorm {
    limits: Limits,
}

impl GradientNorm {
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

impl StoppingRule for GradientNorm {
    fn limits(&self) -> Limits {
        self.limits
    }

    fn check(&self, record: &Record) -> Result<bool, DimensionMismatch> {
        if self.limits.is_exhausted(record.iterations()) {
            return Ok(true);
        }
        if record.point_count() < 2 {
            return Ok(false);
        }

        let gradient = record.objective().gradient(record.current_point())?;
        Ok(gradient.norm() < self.limits.tolerance())
    }
}
