use boxopt_core::{DimensionMismatch, Objective, Record, Region, StoppingRule, Vector};

use crate::{Error, Solution, Status};

/// A minimization method over a box region.
///
/// Hyperparameters are fixed when the method is constructed. Each call to
/// [`Method::optimise`] starts a fresh trajectory at `start`; the trajectory
/// and iteration count of the most recent run stay available afterwards.
pub trait Method {
    /// Returns the method's display name.
    fn name(&self) -> &'static str;

    /// Minimizes `objective` over `region` from `start` until `rule` fires.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `start`, `region`, and
    /// `objective` disagree in dimension, and [`Error::Region`] if the method
    /// needs to sample from a region that cannot be sampled.
    fn optimise(
        &mut self,
        objective: &dyn Objective,
        region: &Region,
        start: Vector,
        rule: &dyn StoppingRule,
    ) -> Result<Solution, Error>;

    /// Returns the last point of the most recent run, or `None` before any run.
    fn best_point(&self) -> Option<&Vector> {
        self.trajectory().last()
    }

    /// Returns the iteration count of the most recent run.
    fn iterations(&self) -> usize;

    /// Returns every point visited in the most recent run.
    fn trajectory(&self) -> &[Vector];
}

/// The trajectory and iteration count a method keeps from its last run.
#[derive(Debug, Clone, Default)]
pub(crate) struct History {
    pub(crate) trajectory: Vec<Vector>,
    pub(crate) iterations: usize,
}

impl History {
    /// Stores the finished run and builds its solution.
    pub(crate) fn finish(&mut self, record: Record, status: Status) -> Result<Solution, Error> {
        let solution = Solution::from_record(status, &record)?;
        tracing::debug!(
            ?status,
            iters = solution.iters,
            objective = solution.objective,
            "run finished"
        );

        self.iterations = record.iterations();
        self.trajectory = record.into_trajectory().into_points();
        Ok(solution)
    }
}

/// Checks that the start point matches both the objective and the region.
pub(crate) fn check_inputs(
    objective: &dyn Objective,
    region: &Region,
    start: &Vector,
) -> Result<(), DimensionMismatch> {
    DimensionMismatch::check(objective.dimension(), start.len())?;
    DimensionMismatch::check(region.dimension(), start.len())
}

/// Returns the status a run ends with, or `None` while it should continue.
///
/// The cap is tested here before the rule's own check, so a run ends at
/// `max_iters` even when its trajectory never grew past the start point.
pub(crate) fn stop_status(
    rule: &dyn StoppingRule,
    record: &Record,
) -> Result<Option<Status>, DimensionMismatch> {
    if rule.limits().is_exhausted(record.iterations()) {
        return Ok(Some(Status::MaxIters));
    }
    Ok(rule.check(record)?.then_some(Status::Converged))
}
