use crate::Vector;

/// The ordered, append-only list of points visited during a run.
///
/// A trajectory is never empty: it starts with the start point. The current
/// point is the last element and the previous point the second-to-last.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<Vector>,
}

impl Trajectory {
    /// Creates a trajectory holding only `start`.
    #[must_use]
    pub fn new(start: Vector) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Appends a point.
    pub fn push(&mut self, point: Vector) {
        self.points.push(point);
    }

    /// Returns the most recent point.
    #[must_use]
    pub fn current(&self) -> &Vector {
        &self.points[self.points.len() - 1]
    }

    /// Returns the point before the current one, if there is one.
    #[must_use]
    pub fn previous(&self) -> Option<&Vector> {
        self.points.len().checked_sub(2).map(|i| &self.points[i])
    }

    /// Returns the number of recorded points (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a trajectory holds at least its start point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns all points in visiting order.
    #[must_use]
    pub fn points(&self) -> &[Vector] {
        &self.points
    }

    /// Consumes the trajectory and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Vector> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_point_and_no_previous() {
        let trajectory = Trajectory::new(Vector::from([1.0, 2.0]));

        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.current(), &Vector::from([1.0, 2.0]));
        assert!(trajectory.previous().is_none());
    }

    #[test]
    fn push_moves_current_and_previous() {
        let mut trajectory = Trajectory::new(Vector::from([0.0]));
        trajectory.push(Vector::from([1.0]));
        trajectory.push(Vector::from([2.0]));

        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.current(), &Vector::from([2.0]));
        assert_eq!(trajectory.previous(), Some(&Vector::from([1.0])));
        assert_eq!(
            trajectory.into_points(),
            vec![Vector::from([0.0]), Vector::from([1.0]), Vector::from([2.0])]
        );
    }
}
