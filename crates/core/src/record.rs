use crate::{Objective, Trajectory, Vector};

/// The state a stopping rule looks at: trajectory, objective, iteration count.
///
/// A record owns the run's canonical trajectory. Methods append through
/// [`Record::push`], so the points a stopping rule sees are always exactly
/// the points the method has committed. The objective is a
/// [`duplicate`](Objective::duplicate) taken when the record is created.
#[derive(Debug)]
pub struct Record {
    trajectory: Trajectory,
    objective: Box<dyn Objective>,
    iterations: usize,
}

impl Record {
    /// Starts a record at `start` with a snapshot of `objective`.
    #[must_use]
    pub fn new(start: Vector, objective: &dyn Objective) -> Self {
        Self {
            trajectory: Trajectory::new(start),
            objective: objective.duplicate(),
            iterations: 0,
        }
    }

    /// Appends a committed point.
    pub fn push(&mut self, point: Vector) {
        self.trajectory.push(point);
    }

    /// Counts one more completed iteration and returns the new count.
    pub fn advance(&mut self) -> usize {
        self.iterations += 1;
        self.iterations
    }

    /// Overwrites the iteration count.
    pub fn set_iterations(&mut self, iterations: usize) {
        self.iterations = iterations;
    }

    /// Returns the most recent point.
    #[must_use]
    pub fn current_point(&self) -> &Vector {
        self.trajectory.current()
    }

    /// Returns the point before the current one; `None` until a step is taken.
    #[must_use]
    pub fn previous_point(&self) -> Option<&Vector> {
        self.trajectory.previous()
    }

    /// Returns the number of recorded points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.trajectory.len()
    }

    /// Returns the number of completed iterations.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the objective snapshot.
    #[must_use]
    pub fn objective(&self) -> &dyn Objective {
        self.objective.as_ref()
    }

    /// Returns the trajectory so far.
    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Consumes the record and returns its trajectory.
    #[must_use]
    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::functions::Sphere;

    #[test]
    fn new_record_has_start_only() {
        let record = Record::new(Vector::from([1.0, 1.0]), &Sphere::new(2));

        assert_eq!(record.point_count(), 1);
        assert_eq!(record.iterations(), 0);
        assert_eq!(record.current_point(), &Vector::from([1.0, 1.0]));
        assert!(record.previous_point().is_none());
    }

    #[test]
    fn push_and_advance_stay_in_sync() {
        let mut record = Record::new(Vector::from([3.0]), &Sphere::new(1));

        assert_eq!(record.advance(), 1);
        record.push(Vector::from([2.0]));
        assert_eq!(record.advance(), 2);
        record.push(Vector::from([1.0]));

        assert_eq!(record.iterations(), 2);
        assert_eq!(record.point_count(), 3);
        assert_eq!(record.previous_point(), Some(&Vector::from([2.0])));
        assert_eq!(record.trajectory().points().len(), 3);

        record.set_iterations(10);
        assert_eq!(record.iterations(), 10);
    }

    #[test]
    fn objective_snapshot_evaluates() {
        let record = Record::new(Vector::from([3.0, 4.0]), &Sphere::new(2));

        let value = record.objective().value(record.current_point()).unwrap();

        assert_relative_eq!(value, 25.0);
        assert_eq!(record.objective().dimension(), 2);
    }
}
