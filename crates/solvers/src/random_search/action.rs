/// Actions an observer can take during a random search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run immediately. The candidate, if any, is not accepted.
    StopEarly,

    /// Reject the candidate even if it improves on the current point.
    Reject,
}
