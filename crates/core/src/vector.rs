use std::{
    fmt,
    ops::{Deref, DerefMut, Mul, MulAssign},
};

use crate::DimensionMismatch;

/// A fixed-length real vector.
///
/// All vectors taking part in one optimization run share the objective's
/// dimension. Elementwise arithmetic checks that both operands have the same
/// length and returns [`DimensionMismatch`] otherwise; scaling never fails.
///
/// `Vector` dereferences to `[f64]`, so slice methods (`len`, `iter`,
/// indexing) are available directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vector(Vec<f64>);

impl Vector {
    /// Creates a vector from its components.
    #[must_use]
    pub fn new(components: Vec<f64>) -> Self {
        Self(components)
    }

    /// Creates a vector of `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the vector and returns its components.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Returns `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if the lengths differ.
    pub fn checked_add(&self, other: &Vector) -> Result<Vector, DimensionMismatch> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Returns `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if the lengths differ.
    pub fn checked_sub(&self, other: &Vector) -> Result<Vector, DimensionMismatch> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Returns `self * scalar`.
    #[must_use]
    pub fn scaled(&self, scalar: f64) -> Vector {
        self.0.iter().map(|x| x * scalar).collect()
    }

    /// Returns the Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.0.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    fn zip_with(
        &self,
        other: &Vector,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Vector, DimensionMismatch> {
        DimensionMismatch::check(self.len(), other.len())?;
        Ok(self
            .0
            .iter()
            .zip(&other.0)
            .map(|(&a, &b)| op(a, b))
            .collect())
    }
}

impl Deref for Vector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl DerefMut for Vector {
    fn deref_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self(components.to_vec())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scaled(scalar)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, scalar: f64) -> Vector {
        self *= scalar;
        self
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: &Vector) -> Vector {
        vector.scaled(self)
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, scalar: f64) {
        for x in &mut self.0 {
            *x *= scalar;
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn assert_vectors_eq(actual: &Vector, expected: &Vector) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_relative_eq!(a, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn add_then_subtract_restores_vector() {
        let u = Vector::from([1.5, -2.0, 3.25]);
        let v = Vector::from([0.1, 7.0, -4.0]);

        let sum = u.checked_add(&v).unwrap();
        let back = sum.checked_sub(&v).unwrap();

        assert_vectors_eq(&back, &u);
    }

    #[test]
    fn scaling_by_inverse_restores_vector() {
        let u = Vector::from([3.0, -0.5, 12.0]);
        let s = 2.5;

        let back = (&u * s) * (1.0 / s);

        assert_vectors_eq(&back, &u);
    }

    #[test]
    fn scalar_on_either_side() {
        let u = Vector::from([1.0, 2.0]);
        assert_eq!(2.0 * &u, &u * 2.0);
        assert_eq!(u.scaled(2.0), Vector::from([2.0, 4.0]));
    }

    #[test]
    fn norm_is_euclidean() {
        assert_relative_eq!(Vector::from([3.0, 4.0]).norm(), 5.0);
        assert_relative_eq!(Vector::zeros(4).norm(), 0.0);
        assert!(Vector::from([-1.0, -2.0]).norm() >= 0.0);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let u = Vector::from([1.0, 2.0]);
        let v = Vector::from([1.0, 2.0, 3.0]);

        let err = u.checked_add(&v).unwrap_err();
        assert_eq!(
            err,
            DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
        assert!(u.checked_sub(&v).is_err());
    }

    #[test]
    fn displays_as_bracketed_list() {
        let u = Vector::from([1.0, -2.5, 0.0]);
        assert_eq!(u.to_string(), "[1, -2.5, 0]");
        assert_eq!(Vector::default().to_string(), "[]");
    }
}
