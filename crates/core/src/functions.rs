//! Analytic test objectives.
//!
//! These are stand-ins for caller-supplied objectives: small closed-form
//! functions with hand-derived gradients, handy for examples and tests.

use crate::{DimensionMismatch, Objective, Vector};

/// `f(x, y) = x² sin(y)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareSine;

impl Objective for SquareSine {
    fn name(&self) -> &str {
        "x^2*sin(y)"
    }

    fn dimension(&self) -> usize {
        2
    }

    fn value(&self, x: &Vector) -> Result<f64, DimensionMismatch> {
        self.check_dimension(x)?;
        Ok(x[0].powi(2) * x[1].sin())
    }

    fn gradient(&self, x: &Vector) -> Result<Vector, DimensionMismatch> {
        self.check_dimension(x)?;
        Ok(Vector::from([
            2.0 * x[0] * x[1].sin(),
            x[0].powi(2) * x[1].cos(),
        ]))
    }

    fn duplicate(&self) -> Box<dyn Objective> {
        Box::new(*self)
    }
}

/// `f(x, y, z) = sin(x) cos(y) sin(z)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SineProduct;

impl Objective for SineProduct {
    fn name(&self) -> &str {
        "sin(x)cos(y)sin(z)"
    }

    fn dimension(&self) -> usize {
        3
    }

    fn value(&self, x: &Vector) -> Result<f64, DimensionMismatch> {
        self.check_dimension(x)?;
        Ok(x[0].sin() * x[1].cos() * x[2].sin())
    }

    fn gradient(&self, x: &Vector) -> Result<Vector, DimensionMismatch> {
        self.check_dimension(x)?;
        let (sx, cx) = x[0].sin_cos();
        let (sy, cy) = x[1].sin_cos();
        let (sz, cz) = x[2].sin_cos();
        Ok(Vector::from([cx * cy * sz, -sx * sy * sz, sx * cy * cz]))
    }

    fn duplicate(&self) -> Box<dyn Objective> {
        Box::new(*self)
    }
}

/// `f(x, y) = (0.1x - y)⁴ + y²`.
///
/// The minimum is `0` at the origin, at the end of a long, flat valley along
/// `y = 0.1x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkewedQuartic;

impl Objective for SkewedQuartic {
    fn name(&self) -> &str {
        "(0.1x - y)^4 + y^2"
    }

    fn dimension(&self) -> usize {
        2
    }

    fn value(&self, x: &Vector) -> Result<f64, DimensionMismatch> {
        self.check_dimension(x)?;
        Ok((0.1 * x[0] - x[1]).powi(4) + x[1].powi(2))
    }

    fn gradient(&self, x: &Vector) -> Result<Vector, DimensionMismatch> {
        self.check_dimension(x)?;
        let cube = (0.1 * x[0] - x[1]).powi(3);
        Ok(Vector::from([0.4 * cube, -4.0 * cube + 2.0 * x[1]]))
    }

    fn duplicate(&self) -> Box<dyn Objective> {
        Box::new(*self)
    }
}

/// `f(x, y) = (1 - x)² + 100(y - x²)²`, minimum `0` at `(1, 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rosenbrock;

impl Objective for Rosenbrock {
    fn name(&self) -> &str {
        "(1 - x)^2 + 100(y - x^2)^2"
    }

    fn dimension(&self) -> usize {
        2
    }

    fn value(&self, x: &Vector) -> Result<f64, DimensionMismatch> {
        self.check_dimension(x)?;
        Ok((1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0].powi(2)).powi(2))
    }

    fn gradient(&self, x: &Vector) -> Result<Vector, DimensionMismatch> {
        self.check_dimension(x)?;
        let valley = x[1] - x[0].powi(2);
        Ok(Vector::from([
            -2.0 * (1.0 - x[0]) - 400.0 * x[0] * valley,
            200.0 * valley,
        ]))
    }

    fn duplicate(&self) -> Box<dyn Objective> {
        Box::new(*self)
    }
}

/// `f(x, y) = (x² + y - 11)² + (x + y² - 7)²`, four minima of value `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Himmelblau;

impl Objective for Himmelblau {
    fn name(&self) -> &str {
        "(x^2 + y - 11)^2 + (x + y^2 - 7)^2"
    }

    fn dimension(&self) -> usize {
        2
    }

    fn value(&self, x: &Vector) -> Result<f64, DimensionMismatch> {
        self.check_dimension(x)?;
        let a = x[0].powi(2) + x[1] - 11.0;
        let b = x[0] + x[1].powi(2) - 7.0;
        Ok(a * a + b * b)
    }

    fn gradient(&self, x: &Vector) -> Result<Vector, DimensionMismatch> {
        self.check_dimension(x)?;
        let a = x[0].powi(2) + x[1] - 11.0;
        let b = x[0] + x[1].powi(2) - 7.0;
        Ok(Vector::from([
            4.0 * x[0] * a + 2.0 * b,
            2.0 * a + 4.0 * x[1] * b,
        ]))
    }

    fn duplicate(&self) -> Box<dyn Objective> {
        Box::new(*self)
    }
}

/// `f(x) = Σ xᵢ²` in a dimension chosen at construction.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    dimension: usize,
}

impl Sphere {
    /// Creates the sphere function in `dimension` variables.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Objective for Sphere {
    fn name(&self) -> &str {
        "sum(x_i^2)"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn value(&self, x: &Vector) -> Result<f64, DimensionMismatch> {
        self.check_dimension(x)?;
        Ok(x.iter().map(|xi| xi * xi).sum())
    }

    fn gradient(&self, x: &Vector) -> Result<Vector, DimensionMismatch> {
        self.check_dimension(x)?;
        Ok(x.scaled(2.0))
    }

    fn duplicate(&self) -> Box<dyn Objective> {
        Box::new(*self)
    }
}
