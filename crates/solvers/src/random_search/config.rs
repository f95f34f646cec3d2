use rand::distr::Bernoulli;
use thiserror::Error;

/// Configuration for [`RandomSearch`](super::RandomSearch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    shrink: f64,
    neighborhood: Bernoulli,
    p: f64,
    delta: f64,
    seed: u64,
}

/// Errors that can occur when validating a random search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("shrink must be in (0, 1]")]
    Shrink,

    #[error("p must be a probability in [0, 1]")]
    Probability,

    #[error("delta must be finite and positive")]
    Delta,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.9, 0.5, 0.1, 228).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `shrink` multiplies the neighborhood radius after each accepted
    /// neighborhood candidate, `p` is the chance of sampling from the
    /// neighborhood rather than the whole region, `delta` is the starting
    /// radius, and `seed` seeds the method's generator.
    ///
    /// # Errors
    ///
    /// Returns an error if `shrink` is outside `(0, 1]`, `p` is not a
    /// probability, or `delta` is not finite and positive.
    pub fn new(shrink: f64, p: f64, delta: f64, seed: u64) -> Result<Self, ConfigError> {
        if !(shrink > 0.0 && shrink <= 1.0) {
            return Err(ConfigError::Shrink);
        }
        let neighborhood = Bernoulli::new(p).map_err(|_| ConfigError::Probability)?;
        if !delta.is_finite() || delta <= 0.0 {
            return Err(ConfigError::Delta);
        }

        Ok(Self {
            shrink,
            neighborhood,
            p,
            delta,
            seed,
        })
    }

    /// Returns the radius shrink factor.
    #[must_use]
    pub fn shrink(&self) -> f64 {
        self.shrink
    }

    /// Returns the probability of sampling from the neighborhood.
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Returns the starting neighborhood radius.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Returns the generator seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the neighborhood-or-region coin.
    pub(super) fn neighborhood(&self) -> &Bernoulli {
        &self.neighborhood
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();

        assert_eq!(config.seed(), 228);
        assert!((config.p() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(Config::new(0.0, 0.5, 0.1, 1), Err(ConfigError::Shrink));
        assert_eq!(Config::new(1.5, 0.5, 0.1, 1), Err(ConfigError::Shrink));
        assert_eq!(Config::new(f64::NAN, 0.5, 0.1, 1), Err(ConfigError::Shrink));
        assert_eq!(Config::new(0.9, 1.1, 0.1, 1), Err(ConfigError::Probability));
        assert_eq!(Config::new(0.9, -0.1, 0.1, 1), Err(ConfigError::Probability));
        assert_eq!(Config::new(0.9, 0.5, 0.0, 1), Err(ConfigError::Delta));
        assert_eq!(Config::new(0.9, 0.5, f64::INFINITY, 1), Err(ConfigError::Delta));
    }

    #[test]
    fn accepts_edge_values() {
        assert!(Config::new(1.0, 0.0, 1e-9, 0).is_ok());
        assert!(Config::new(0.5, 1.0, 3.0, u64::MAX).is_ok());
    }
}
