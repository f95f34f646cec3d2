use boxopt_core::{DimensionMismatch, Record, Vector};

/// Indicates why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The stopping rule fired before the iteration cap.
    Converged,

    /// The iteration cap was reached.
    MaxIters,

    /// A step would have left the region, so the run ended on the boundary.
    HitBoundary,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final status.
    pub status: Status,

    /// The last point of the trajectory.
    pub point: Vector,

    /// Objective value at `point`.
    pub objective: f64,

    /// Iteration count when the run finished.
    pub iters: usize,
}

impl Solution {
    /// Builds a solution from the record's current point.
    pub(crate) fn from_record(status: Status, record: &Record) -> Result<Self, DimensionMismatch> {
        let point = record.current_point().clone();
        let objective = record.objective().value(&point)?;
        Ok(Self {
            status,
            point,
            objective,
            iters: record.iterations(),
        })
    }
}
