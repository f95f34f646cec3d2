use boxopt_core::Vector;

/// Events emitted by [`SteepestDescent`](super::SteepestDescent).
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A step was committed.
    Stepped {
        /// Iteration number, starting at 1.
        iter: usize,

        /// The new current point.
        point: &'a Vector,

        /// The gradient at the previous point.
        gradient: &'a Vector,

        /// The step length chosen by the line search.
        step: f64,

        /// The longest step that stays inside the region.
        max_step: f64,
    },
}
