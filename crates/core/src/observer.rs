/// Watches an optimization run one iteration at a time.
///
/// A method reports each iteration to its observer as an event `E` that
/// borrows the run's current point, before deciding how to continue. The
/// observer may answer with an action `A` from that method's own vocabulary,
/// such as stopping the run early or rejecting an improving candidate.
/// Returning `None` leaves the iteration to the method.
///
/// Any `FnMut(&E) -> Option<A>` closure can observe a run. The unit type `()`
/// never acts; methods pass it when they are driven without an observer.
pub trait Observer<E, A> {
    /// Looks at one event and optionally steers the run.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Vector;

    fn drive<O: Observer<usize, &'static str>>(mut observer: O, events: usize) -> Vec<&'static str> {
        (0..events).filter_map(|e| observer.observe(&e)).collect()
    }

    #[test]
    fn closures_observe_and_capture_state() {
        let mut seen = 0;
        let actions = drive(
            |event: &usize| {
                seen += 1;
                (*event == 2).then_some("stop")
            },
            4,
        );

        assert_eq!(actions, vec!["stop"]);
        assert_eq!(seen, 4);
    }

    /// An event that borrows the point it reports, as method events do.
    struct Moved<'a> {
        point: &'a Vector,
    }

    fn walk<O>(mut observer: O, points: &[Vector]) -> usize
    where
        O: for<'a> Observer<Moved<'a>, ()>,
    {
        points
            .iter()
            .take_while(|point| observer.observe(&Moved { point: *point }).is_none())
            .count()
    }

    #[test]
    fn observers_see_borrowed_points_and_can_halt() {
        let points = vec![
            Vector::from([3.0]),
            Vector::from([1.0]),
            Vector::from([0.5]),
            Vector::from([0.1]),
        ];
        let mut norms = Vec::new();

        let walked = walk(
            |event: &Moved<'_>| {
                norms.push(event.point.norm());
                (event.point.norm() < 0.75).then_some(())
            },
            &points,
        );

        assert_eq!(walked, 2);
        assert_eq!(norms, vec![3.0, 1.0, 0.5]);
        assert_eq!(walk((), &points), 4);
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), 10).is_empty());
    }
}
