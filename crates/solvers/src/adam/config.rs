use thiserror::Error;

/// Hyperparameters for [`Adam`](super::Adam).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    alpha: f64,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
}

/// Errors that can occur when validating an Adam config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alpha must be finite and positive")]
    Alpha,

    #[error("beta1 must be in [0, 1)")]
    Beta1,

    #[error("beta2 must be in [0, 1)")]
    Beta2,

    #[error("epsilon must be finite and non-negative")]
    Epsilon,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.001, 0.9, 0.999, 1e-8).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated hyperparameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha` is not finite and positive, a decay rate
    /// lies outside `[0, 1)`, or `epsilon` is negative or non-finite.
    pub fn new(alpha: f64, beta1: f64, beta2: f64, epsilon: f64) -> Result<Self, ConfigError> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(ConfigError::Alpha);
        }
        if !(0.0..1.0).contains(&beta1) {
            return Err(ConfigError::Beta1);
        }
        if !(0.0..1.0).contains(&beta2) {
            return Err(ConfigError::Beta2);
        }
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self {
            alpha,
            beta1,
            beta2,
            epsilon,
        })
    }

    /// Returns the step size.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the first-moment decay rate.
    #[must_use]
    pub fn beta1(&self) -> f64 {
        self.beta1
    }

    /// Returns the second-moment decay rate.
    #[must_use]
    pub fn beta2(&self) -> f64 {
        self.beta2
    }

    /// Returns the denominator offset.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}
