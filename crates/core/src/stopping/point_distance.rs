use crate::{DimensionMismatch, Record};

use super::{Limits, LimitsError, StoppingRule};

/// Stops when consecutive points are close together.
///
/// Never fires before a second point exists. From then on it fires at the
/// cap, or below it iff `||current - previous|| < tolerance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointDistance {
    limits: Limits,
}

impl PointDistance {
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

impl StoppingRule for PointDistance {
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

        let step = record.current_point().checked_sub(previous)?;
        Ok(step.norm() < self.limits.tolerance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Vector, functions::Sphere};

    fn record_with(points: &[[f64; 2]]) -> Record {
        let mut record = Record::new(Vector::from(points[0]), &Sphere::new(2));
        for &point in &points[1..] {
            record.advance();
            record.push(Vector::from(point));
        }
        record
    }

    #[test]
    fn compares_last_two_points() {
        let rule = PointDistance::new(0.1, 100).unwrap();

        assert!(rule.check(&record_with(&[[5.0, 5.0], [1.0, 1.0], [1.05, 1.0]])).unwrap());
        assert!(!rule.check(&record_with(&[[1.0, 1.0], [1.0, 1.2]])).unwrap());
    }

    #[test]
    fn repeated_point_stops() {
        let rule = PointDistance::new(1e-8, 100).unwrap();

        assert!(rule.check(&record_with(&[[2.0, 1.9], [2.0, 1.9]])).unwrap());
    }

    #[test]
    fn lone_start_point_ignores_cap() {
        let rule = PointDistance::new(1e-8, 3).unwrap();
        let mut record = record_with(&[[2.0, 1.9]]);
        record.set_iterations(3);

        assert!(!rule.check(&record).unwrap());

        record.push(Vector::from([0.0, 0.0]));
        assert!(rule.check(&record).unwrap());
    }
}
