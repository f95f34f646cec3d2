use boxopt_core::Vector;

/// Where a candidate was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Uniformly from the whole region.
    Region,

    /// Uniformly from the region intersected with the current neighborhood.
    Neighborhood,
}

/// Events emitted by [`RandomSearch`](super::RandomSearch).
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A candidate was drawn and evaluated, before the acceptance decision.
    Candidate {
        /// Iteration number, starting at 1.
        iter: usize,

        /// Where the candidate came from.
        source: Source,

        /// The candidate point.
        candidate: &'a Vector,

        /// Objective value at the candidate.
        value: f64,

        /// Objective value at the current point.
        current: f64,
    },

    /// The neighborhood did not overlap the region, so nothing was drawn.
    ///
    /// The iteration still counts toward the stopping rule.
    Skipped {
        /// Iteration number, starting at 1.
        iter: usize,
    },
}

impl Event<'_> {
    /// Returns the iteration number.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Candidate { iter, .. } | Self::Skipped { iter } => *iter,
        }
    }
}
