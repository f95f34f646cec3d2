/// Actions an observer can take during a steepest descent run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run after the current iteration.
    StopEarly,
}
