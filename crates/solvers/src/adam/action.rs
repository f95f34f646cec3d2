/// Actions an observer can take during an Adam run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run after the current iteration.
    ///
    /// Ignored on [`Event::HitBoundary`](super::Event::HitBoundary), which ends
    /// the run anyway.
    StopEarly,
}
