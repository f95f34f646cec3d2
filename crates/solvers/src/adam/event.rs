use boxopt_core::Vector;

/// Events emitted by [`Adam`](super::Adam), one per iteration.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The full step stayed inside the region and was taken.
    Stepped {
        /// Iteration number, starting at 1.
        iter: usize,

        /// The new current point.
        point: &'a Vector,

        /// The gradient at the previous point.
        gradient: &'a Vector,
    },

    /// The full step would have left the region; the run ends on the boundary.
    ///
    /// This is always the last event of a run.
    HitBoundary {
        /// Iteration number, starting at 1.
        iter: usize,

        /// The boundary point that ends the run.
        point: &'a Vector,

        /// The shortened step scale that was used instead of `alpha`.
        scale: f64,
    },
}

impl Event<'_> {
    /// Returns the iteration number.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Stepped { iter, .. } | Self::HitBoundary { iter, .. } => *iter,
        }
    }

    /// Returns the point committed in this iteration.
    #[must_use]
    pub fn point(&self) -> &Vector {
        match self {
            Self::Stepped { point, .. } | Self::HitBoundary { point, .. } => *point,
        }
    }
}
