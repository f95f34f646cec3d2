use thiserror::Error;

/// Configuration for [`SteepestDescent`](super::SteepestDescent).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    line_search: LineSearch,
}

/// Limits for the ternary line search run on every iteration.
///
/// The search shrinks its bracket until the width is at most `tolerance` or
/// `max_iters` shrinks have been made, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearch {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a steepest descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("line search tolerance must be finite and non-negative")]
    Tolerance,
}

impl Config {
    /// Creates a config with the given line search limits.
    #[must_use]
    pub fn new(line_search: LineSearch) -> Self {
        Self { line_search }
    }

    /// Returns the line search limits.
    #[must_use]
    pub fn line_search(&self) -> &LineSearch {
        &self.line_search
    }
}

impl Default for LineSearch {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-15, 100).unwrap()
    }
}

impl LineSearch {
    /// Creates validated line search limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] if `tolerance` is negative or
    /// non-finite.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Returns the bracket width at which the search stops.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of bracket shrinks.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
