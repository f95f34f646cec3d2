use std::ops::Deref;

use rand::Rng;

use crate::Vector;

use super::{Region, RegionError};

/// A cube of radius `delta` centered on a point.
///
/// The bounds are always derived from `(delta, center)`: each axis is
/// `[center_i - delta, center_i + delta]`. The only way to move or resize a
/// neighborhood is [`Neighborhood::recenter`], which regenerates every bound.
///
/// A neighborhood derefs to its [`Region`], so membership tests and
/// intersections work the same way as for any region.
#[derive(Debug, Clone)]
pub struct Neighborhood {
    delta: f64,
    center: Vector,
    region: Region,
}

impl Neighborhood {
    /// Creates the neighborhood of radius `delta` around `center`.
    #[must_use]
    pub fn new(delta: f64, center: Vector) -> Self {
        let region = Region::new(cube_bounds(delta, &center));
        Self {
            delta,
            center,
            region,
        }
    }

    /// Moves and resizes the neighborhood, recomputing all bounds.
    pub fn recenter(&mut self, delta: f64, center: Vector) {
        self.region.set_bounds(cube_bounds(delta, &center));
        self.delta = delta;
        self.center = center;
    }

    /// Returns the radius.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> &Vector {
        &self.center
    }

    /// Returns the neighborhood as a plain region.
    #[must_use]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Draws a point uniformly from the neighborhood.
    ///
    /// # Errors
    ///
    /// See [`Region::sample`].
    pub fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vector, RegionError> {
        self.region.sample(rng)
    }
}

impl Deref for Neighborhood {
    type Target = Region;

    fn deref(&self) -> &Region {
        &self.region
    }
}

fn cube_bounds(delta: f64, center: &Vector) -> Vec<[f64; 2]> {
    center.iter().map(|&c| [c - delta, c + delta]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn bounds_are_centered_cube() {
        let hood = Neighborhood::new(0.5, Vector::from([1.0, -2.0]));

        assert_eq!(hood.dimension(), 2);
        assert_eq!(hood.bounds(), &[[0.5, 1.5], [-2.5, -1.5]]);
        assert!(hood.contains(&Vector::from([1.5, -2.5])).unwrap());
        assert!(!hood.contains(&Vector::from([1.6, -2.0])).unwrap());
    }

    #[test]
    fn recenter_regenerates_bounds() {
        let mut hood = Neighborhood::new(1.0, Vector::from([0.0, 0.0]));
        let mut rng = StdRng::seed_from_u64(11);
        hood.sample(&mut rng).unwrap();

        hood.recenter(0.1, Vector::from([3.0, 4.0]));

        assert_relative_eq!(hood.delta(), 0.1);
        assert_eq!(hood.center(), &Vector::from([3.0, 4.0]));
        for _ in 0..100 {
            let point = hood.sample(&mut rng).unwrap();
            assert!((2.9..=3.1).contains(&point[0]));
            assert!((3.9..=4.1).contains(&point[1]));
        }
    }

    #[test]
    fn intersects_like_a_region() {
        let area = Region::new(vec![[-5.0, 5.0], [-5.0, 5.0]]);
        let hood = Neighborhood::new(0.5, Vector::from([4.8, 0.0]));

        let overlap = area.intersect(hood.region()).unwrap();

        assert_relative_eq!(overlap.bounds()[0][0], 4.3, epsilon = 1e-12);
        assert_relative_eq!(overlap.bounds()[0][1], 5.0);
        assert_relative_eq!(overlap.bounds()[1][0], -0.5);
        assert_relative_eq!(overlap.bounds()[1][1], 0.5);
    }
}
