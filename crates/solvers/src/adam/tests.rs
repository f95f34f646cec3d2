use approx::assert_relative_eq;

use boxopt_core::{
    GradientNorm, PointDistance, Region, Vector,
    functions::{Rosenbrock, SkewedQuartic, Sphere},
};

use crate::{Error, Method, Status};

use super::{Action, Adam, Config, Event};

fn square(half_width: f64) -> Region {
    Region::new(vec![[-half_width, half_width], [-half_width, half_width]])
}

#[test]
fn minimizes_sphere() {
    let mut adam = Adam::new(Config::new(0.1, 0.9, 0.999, 1e-8).unwrap());
    let rule = PointDistance::new(1e-10, 5_000).unwrap();

    let solution = adam
        .optimise(&Sphere::new(2), &square(5.0), Vector::from([3.0, -2.0]), &rule)
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters < 5_000);
    assert!(solution.point.norm() < 1e-6);
    assert!(solution.objective < 1e-12);
    assert_eq!(adam.iterations(), solution.iters);
    assert_eq!(adam.best_point(), Some(&solution.point));
}

#[test]
fn minimizes_rosenbrock() {
    let mut adam = Adam::new(Config::new(0.01, 0.9, 0.999, 1e-8).unwrap());
    let region = Region::new(vec![[-2.0, 2.0], [-1.0, 3.0]]);
    let rule = PointDistance::new(1e-10, 20_000).unwrap();

    let solution = adam
        .optimise(&Rosenbrock, &region, Vector::from([-1.2, 1.0]), &rule)
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.point[0], 1.0, epsilon = 1e-4);
    assert_relative_eq!(solution.point[1], 1.0, epsilon = 1e-4);
}

#[test]
fn stops_on_boundary_when_step_leaves_region() {
    // At (4.9, 4.9) the first Adam direction is close to (-1, 1), so a full
    // step of 1 lands at (5.9, 3.9), outside the box.
    let mut adam = Adam::new(Config::new(1.0, 0.8, 0.99, 1e-8).unwrap());
    let rule = PointDistance::new(1e-8, 1_000).unwrap();
    let region = square(5.0);

    let solution = adam
        .optimise(&SkewedQuartic, &region, Vector::from([4.9, 4.9]), &rule)
        .expect("should stop on boundary");

    assert_eq!(solution.status, Status::HitBoundary);
    assert_eq!(solution.iters, 1);
    assert_eq!(adam.trajectory().len(), 2);
    assert_relative_eq!(solution.point[0], 5.0, epsilon = 1e-9);
    assert_relative_eq!(solution.point[1], 4.8, epsilon = 1e-9);
    assert!(region.contains(&solution.point).unwrap());
}

#[test]
fn boundary_event_reports_scale() {
    let mut adam = Adam::new(Config::new(1.0, 0.8, 0.99, 1e-8).unwrap());
    let rule = PointDistance::new(1e-8, 1_000).unwrap();
    let mut scales = Vec::new();

    let observer = |event: &Event<'_>| {
        if let Event::HitBoundary { scale, .. } = event {
            scales.push(*scale);
        }
        Some(Action::StopEarly)
    };

    let solution = adam
        .optimise_observed(
            &SkewedQuartic,
            &square(5.0),
            Vector::from([4.9, 4.9]),
            &rule,
            observer,
        )
        .unwrap();

    assert_eq!(solution.status, Status::HitBoundary);
    assert_eq!(scales.len(), 1);
    assert_relative_eq!(scales[0], 0.1, epsilon = 1e-9);
}

#[test]
fn observer_can_stop_early() {
    let mut adam = Adam::new(Config::new(0.1, 0.9, 0.999, 1e-8).unwrap());
    let rule = PointDistance::new(1e-10, 5_000).unwrap();
    let mut seen = Vec::new();

    let observer = |event: &Event<'_>| {
        seen.push(event.iter());
        (event.iter() == 3).then_some(Action::StopEarly)
    };

    let solution = adam
        .optimise_observed(
            &Sphere::new(2),
            &square(5.0),
            Vector::from([3.0, -2.0]),
            &rule,
            observer,
        )
        .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(seen, vec![1, 2, 3]);
    assert_eq!(adam.trajectory().len(), 4);
}

#[test]
fn reports_max_iters() {
    let mut adam = Adam::new(Config::new(0.1, 0.9, 0.999, 1e-8).unwrap());
    let rule = GradientNorm::new(0.0, 5).unwrap();

    let solution = adam
        .optimise(&Sphere::new(2), &square(5.0), Vector::from([3.0, -2.0]), &rule)
        .unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
    assert_eq!(adam.trajectory().len(), 6);
}

#[test]
fn zero_cap_keeps_start_point() {
    let mut adam = Adam::default();
    let rule = PointDistance::new(1e-8, 0).unwrap();
    let start = Vector::from([1.0, 2.0]);

    let solution = adam
        .optimise(&Sphere::new(2), &square(5.0), start.clone(), &rule)
        .unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.point, start);
    assert_relative_eq!(solution.objective, 5.0);
    assert_eq!(adam.trajectory(), &[start]);
}

#[test]
fn each_run_starts_a_fresh_trajectory() {
    let mut adam = Adam::new(Config::new(0.1, 0.9, 0.999, 1e-8).unwrap());
    let rule = GradientNorm::new(0.0, 10).unwrap();
    let sphere = Sphere::new(2);

    adam.optimise(&sphere, &square(5.0), Vector::from([3.0, -2.0]), &rule)
        .unwrap();
    adam.optimise(&sphere, &square(5.0), Vector::from([-1.0, 1.0]), &rule)
        .unwrap();

    assert_eq!(adam.trajectory().len(), 11);
    assert_eq!(adam.trajectory()[0], Vector::from([-1.0, 1.0]));
}

#[test]
fn rejects_mismatched_start() {
    let mut adam = Adam::default();
    let rule = PointDistance::new(1e-8, 10).unwrap();

    let result = adam.optimise(&Sphere::new(2), &square(5.0), Vector::from([1.0]), &rule);

    assert!(matches!(result, Err(Error::DimensionMismatch(_))));
    assert!(adam.best_point().is_none());
}

#[test]
fn name_and_config() {
    let adam = Adam::default();

    assert_eq!(adam.name(), "Adam");
    assert_relative_eq!(adam.config().alpha(), 0.001);
    assert_eq!(Config::new(0.0, 0.9, 0.999, 1e-8), Err(super::ConfigError::Alpha));
    assert_eq!(Config::new(0.1, 1.0, 0.999, 1e-8), Err(super::ConfigError::Beta1));
    assert_eq!(Config::new(0.1, 0.9, -0.1, 1e-8), Err(super::ConfigError::Beta2));
    assert_eq!(Config::new(0.1, 0.9, 0.999, f64::NAN), Err(super::ConfigError::Epsilon));
}
