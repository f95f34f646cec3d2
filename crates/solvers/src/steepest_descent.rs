//! Steepest descent with a box-constrained line search.
//!
//! # Algorithm
//!
//! Each iteration computes the gradient `g` at the current point `x` and the
//! longest step `a_max` for which `x - a * g` stays inside the region. A
//! ternary search over `[0, a_max]` then picks the step `a*` minimizing
//! `f(x - a * g)`, and `x - a* * g` becomes the new point. The step is
//! committed even if it does not improve the objective, so the stopping rule
//! alone decides when the run ends.
//!
//! A zero gradient imposes no step limit. The step is then zero and the point
//! repeats, which a point-distance rule picks up on the next check.
//!
//! # Observer Events
//!
//! The method emits one [`Event::Stepped`] per iteration. Observers can
//! return [`Action::StopEarly`] to end the run.

mod action;
mod config;
mod event;
mod line_search;


pub use action::Action;
pub use config::{Config, ConfigError, LineSearch};
pub use event::Event;

use boxopt_core::{DimensionMismatch, Objective, Observer, Record, Region, StoppingRule, Vector};

use crate::{
    Error, Method, Solution, Status,
    method::{History, check_inputs, stop_status},
    step_limit,
};

/// The steepest descent method.
#[derive(Debug, Clone, Default)]
pub struct SteepestDescent {
    config: Config,
    history: History,
}

impl SteepestDescent {
    /// Creates the method with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            history: History::default(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Minimizes `objective`, reporting each iteration to `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `start`, `region`, and
    /// `objective` disagree in dimension.
    pub fn optimise_observed<Obs>(
        &mut self,
        objective: &dyn Objective,
        region: &Region,
        start: Vector,
        rule: &dyn StoppingRule,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        check_inputs(objective, region, &start)?;
        let _span = tracing::debug_span!("steepest_descent", dimension = start.len()).entered();

        let mut record = Record::new(start, objective);

        let status = loop {
            if let Some(status) = stop_status(rule, &record)? {
                break status;
            }

            let iter = record.advance();
            let point = record.current_point().clone();
            let gradient = objective.gradient(&point)?;
            let max_step = step_limit::max_step(region, &point, &gradient)?.unwrap_or(0.0);

            let step = line_search::minimize(
                |a| -> Result<f64, DimensionMismatch> {
                    let probe = point.checked_sub(&gradient.scaled(a))?;
                    objective.value(&probe)
                },
                max_step,
                self.config.line_search(),
            )?;

            let next = region.clamp(&point.checked_sub(&gradient.scaled(step))?)?;
            tracing::trace!(iter, step, max_step, point = %next, "stepped");
            record.push(next);

            let event = Event::Stepped {
                iter,
                point: record.current_point(),
                gradient: &gradient,
                step,
                max_step,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                break Status::StoppedByObserver;
            }
        };

        self.history.finish(record, status)
    }
}

impl Method for SteepestDescent {
    fn name(&self) -> &'static str {
        "SteepestDescent"
    }

    fn optimise(
        &mut self,
        objective: &dyn Objective,
        region: &Region,
        start: Vector,
        rule: &dyn StoppingRule,
    ) -> Result<Solution, Error> {
        self.optimise_observed(objective, region, start, rule, ())
    }

    fn iterations(&self) -> usize {
        self.history.iterations
    }

    fn trajectory(&self) -> &[Vector] {
        &self.history.trajectory
    }
}
