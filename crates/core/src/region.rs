//! Axis-aligned search regions.
//!
//! A [`Region`] is a hyper-rectangle given by one closed `[lower, upper]`
//! interval per dimension. A [`Neighborhood`] is the special case of a cube of
//! radius `delta` around a center point.

mod neighborhood;

pub use neighborhood::Neighborhood;

use rand::{
    Rng,
    distr::{Distribution, Uniform},
};
use thiserror::Error;

use crate::{DimensionMismatch, Vector};

/// Errors that can occur when sampling a point from a [`Region`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RegionError {
    /// The region has no dimensions.
    #[error("cannot sample from an empty region")]
    Empty,

    /// The bounds along one axis do not form a samplable interval.
    #[error("axis {axis} has degenerate bounds [{lower}, {upper}]")]
    Degenerate {
        /// Index of the offending axis.
        axis: usize,

        /// Lower bound on that axis.
        lower: f64,

        /// Upper bound on that axis.
        upper: f64,
    },
}

/// Per-axis sampling distributions, built on demand.
#[derive(Debug, Clone)]
enum Sampling {
    /// No distributions exist for the current bounds.
    Stale,

    /// One uniform distribution per axis, matching the current bounds.
    Ready(Vec<Uniform<f64>>),
}

/// An axis-aligned hyper-rectangle.
///
/// Bounds are only replaced through [`Region::set_bounds`], which also marks
/// the cached sampling distributions stale.
#[derive(Debug, Clone)]
pub struct Region {
    bounds: Vec<[f64; 2]>,
    sampling: Sampling,
}

impl Region {
    /// Creates a region from `[lower, upper]` bounds, one pair per dimension.
    ///
    /// Bounds are stored as given. Regions with `lower >= upper` on some axis
    /// are representable, but sampling from them fails.
    #[must_use]
    pub fn new(bounds: Vec<[f64; 2]>) -> Self {
        Self {
            bounds,
            sampling: Sampling::Stale,
        }
    }

    /// Returns the canonical empty region (no dimensions).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the bounds, one `[lower, upper]` pair per dimension.
    #[must_use]
    pub fn bounds(&self) -> &[[f64; 2]] {
        &self.bounds
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.bounds.len()
    }

    /// Returns true for the canonical empty region.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Replaces all bounds (and therefore the dimension).
    ///
    /// Any cached sampling distributions are discarded and rebuilt on the next
    /// call to [`Region::sample`].
    pub fn set_bounds(&mut self, bounds: Vec<[f64; 2]>) {
        self.bounds = bounds;
        self.sampling = Sampling::Stale;
    }

    /// Returns true if every coordinate of `point` lies in its closed interval.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if `point` has the wrong length.
    pub fn contains(&self, point: &Vector) -> Result<bool, DimensionMismatch> {
        DimensionMismatch::check(self.dimension(), point.len())?;
        Ok(self
            .bounds
            .iter()
            .zip(point.iter())
            .all(|(&[lower, upper], &x)| lower <= x && x <= upper))
    }

    /// Projects `point` coordinate-wise onto the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if `point` has the wrong length.
    pub fn clamp(&self, point: &Vector) -> Result<Vector, DimensionMismatch> {
        DimensionMismatch::check(self.dimension(), point.len())?;
        Ok(self
            .bounds
            .iter()
            .zip(point.iter())
            .map(|(&[lower, upper], &x)| x.max(lower).min(upper))
            .collect())
    }

    /// Draws a point uniformly from the region.
    ///
    /// The per-axis distributions are built on the first call after
    /// construction or [`Region::set_bounds`] and reused afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Empty`] for a region without dimensions and
    /// [`RegionError::Degenerate`] if some axis has `lower >= upper` or a
    /// non-finite bound.
    pub fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vector, RegionError> {
        if self.is_empty() {
            return Err(RegionError::Empty);
        }

        match self.sampling {
            Sampling::Ready(ref distributions) => Ok(draw(distributions, rng)),
            Sampling::Stale => {
                let distributions = build_distributions(&self.bounds)?;
                let point = draw(&distributions, rng);
                self.sampling = Sampling::Ready(distributions);
                Ok(point)
            }
        }
    }

    /// Returns the overlap of two regions.
    ///
    /// Each axis of the result is `[max(lower), min(upper)]`. If any axis
    /// overlap is empty or a single point, the whole result is
    /// [`Region::empty`].
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if the regions differ in dimension.
    pub fn intersect(&self, other: &Region) -> Result<Region, DimensionMismatch> {
        DimensionMismatch::check(self.dimension(), other.dimension())?;

        let mut bounds = Vec::with_capacity(self.dimension());
        for (&[a_lower, a_upper], &[b_lower, b_upper]) in self.bounds.iter().zip(&other.bounds) {
            let lower = a_lower.max(b_lower);
            let upper = a_upper.min(b_upper);
            if lower >= upper {
                return Ok(Region::empty());
            }
            bounds.push([lower, upper]);
        }

        Ok(Region::new(bounds))
    }
}

fn build_distributions(bounds: &[[f64; 2]]) -> Result<Vec<Uniform<f64>>, RegionError> {
    bounds
        .iter()
        .enumerate()
        .map(|(axis, &[lower, upper])| {
            Uniform::new(lower, upper).map_err(|_| RegionError::Degenerate {
                axis,
                lower,
                upper,
            })
        })
        .collect()
}

fn draw<R: Rng + ?Sized>(distributions: &[Uniform<f64>], rng: &mut R) -> Vector {
    distributions.iter().map(|dist| dist.sample(rng)).collect()
}

impl Default for Region {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.bounds == other.bounds
    }
}
