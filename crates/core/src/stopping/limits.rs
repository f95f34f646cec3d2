use thiserror::Error;

/// The tolerance and iteration cap shared by every stopping rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating stopping-rule limits.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LimitsError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,
}

impl Limits {
    /// Creates validated limits.
    ///
    /// # Errors
    ///
    /// Returns [`LimitsError::Tolerance`] if `tolerance` is negative or
    /// non-finite.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, LimitsError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(LimitsError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Returns the tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns true once `iterations` has reached the cap.
    #[must_use]
    pub fn is_exhausted(&self, iterations: usize) -> bool {
        iterations >= self.max_iters
    }
}
