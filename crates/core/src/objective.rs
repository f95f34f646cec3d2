use crate::{DimensionMismatch, Vector};

/// A scalar objective with an analytic gradient.
///
/// Implementations have a fixed name and dimension. Both [`value`] and
/// [`gradient`] must fail with [`DimensionMismatch`] when the input length
/// differs from [`dimension`]; [`check_dimension`] does that check.
///
/// [`duplicate`] returns an independent owned copy. Methods use it to keep a
/// snapshot of the objective for the duration of a run, decoupled from the
/// caller's instance.
///
/// [`value`]: Objective::value
/// [`gradient`]: Objective::gradient
/// [`dimension`]: Objective::dimension
/// [`check_dimension`]: Objective::check_dimension
/// [`duplicate`]: Objective::duplicate
pub trait Objective {
    /// Returns a human-readable name, usually the formula.
    fn name(&self) -> &str;

    /// Returns the number of variables the objective takes.
    fn dimension(&self) -> usize;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if `x.len() != self.dimension()`.
    fn value(&self, x: &Vector) -> Result<f64, DimensionMismatch>;

    /// Evaluates the gradient at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if `x.len() != self.dimension()`.
    fn gradient(&self, x: &Vector) -> Result<Vector, DimensionMismatch>;

    /// Returns an independent boxed copy of this objective.
    fn duplicate(&self) -> Box<dyn Objective>;

    /// Checks that `x` has the objective's dimension.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if the lengths differ.
    fn check_dimension(&self, x: &Vector) -> Result<(), DimensionMismatch> {
        DimensionMismatch::check(self.dimension(), x.len())
    }
}

impl Clone for Box<dyn Objective> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl std::fmt::Debug for dyn Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Objective")
            .field("name", &self.name())
            .field("dimension", &self.dimension())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// f(x) = offset + sum(x_i).
    #[derive(Clone)]
    struct Shifted {
        offset: f64,
    }

    impl Objective for Shifted {
        fn name(&self) -> &str {
            "offset + sum(x)"
        }

        fn dimension(&self) -> usize {
            2
        }

        fn value(&self, x: &Vector) -> Result<f64, DimensionMismatch> {
            self.check_dimension(x)?;
            Ok(self.offset + x.iter().sum::<f64>())
        }

        fn gradient(&self, x: &Vector) -> Result<Vector, DimensionMismatch> {
            self.check_dimension(x)?;
            Ok(Vector::from([1.0, 1.0]))
        }

        fn duplicate(&self) -> Box<dyn Objective> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn duplicate_is_independent_of_original() {
        let mut original = Shifted { offset: 1.0 };
        let copy = original.duplicate();

        original.offset = 100.0;

        let x = Vector::from([1.0, 2.0]);
        assert_relative_eq!(copy.value(&x).unwrap(), 4.0);
        assert_relative_eq!(original.value(&x).unwrap(), 103.0);
    }

    #[test]
    fn boxed_objective_clones_through_duplicate() {
        let boxed: Box<dyn Objective> = Box::new(Shifted { offset: 0.5 });
        let cloned = boxed.clone();

        assert_eq!(cloned.name(), boxed.name());
        assert_eq!(cloned.dimension(), 2);
        assert_relative_eq!(cloned.value(&Vector::from([0.0, 0.0])).unwrap(), 0.5);
    }

    #[test]
    fn check_dimension_rejects_wrong_length() {
        let f = Shifted { offset: 0.0 };
        let err = f.value(&Vector::from([1.0])).unwrap_err();

        assert_eq!(
            err,
            DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
        assert!(f.gradient(&Vector::from([1.0, 2.0, 3.0])).is_err());
    }
}
