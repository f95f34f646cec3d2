//! Adam: gradient descent with adaptive per-coordinate step sizes.
//!
//! # Algorithm
//!
//! Each iteration folds the gradient at the current point into exponentially
//! decayed first and second moments (decay rates `beta1` and `beta2`),
//! corrects both for their zero initialization, and proposes
//! `x - alpha * m̂ / (sqrt(v̂) + epsilon)`.
//!
//! # Boundary handling
//!
//! If the proposal leaves the region, the method instead moves along the same
//! direction by the largest scale that keeps every coordinate inside, commits
//! that boundary point, and ends the run with [`Status::HitBoundary`]. The
//! stopping rule is not consulted again.
//!
//! # Observer Events
//!
//! The method emits one [`Event`] per iteration: [`Event::Stepped`] for a full
//! step, or [`Event::HitBoundary`] for the final boundary step. Observers can
//! return [`Action::StopEarly`] to end the run.

mod action;
mod config;
mod event;
mod moments;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;

use boxopt_core::{Objective, Observer, Record, Region, StoppingRule, Vector};

use crate::{
    Error, Method, Solution, Status,
    method::{History, check_inputs, stop_status},
    step_limit,
};

use moments::Moments;

/// The Adam method.
#[derive(Debug, Clone, Default)]
pub struct Adam {
    config: Config,
    history: History,
}

impl Adam {
    /// Creates the method with the given hyperparameters.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            history: History::default(),
        }
    }

    /// Returns the hyperparameters.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Minimizes `objective`, reporting each iteration to `observer`.
    ///
    /// See the [module docs](self) for the events emitted.
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
        let _span = tracing::debug_span!("adam", dimension = start.len()).entered();

        let mut moments = Moments::new(start.len());
        let mut record = Record::new(start, objective);

        let status = loop {
            if let Some(status) = stop_status(rule, &record)? {
                break status;
            }

            let iter = record.advance();
            let point = record.current_point().clone();
            let gradient = objective.gradient(&point)?;
            let direction = moments.update(&gradient, &self.config)?;
            let proposal = point.checked_sub(&direction.scaled(self.config.alpha()))?;

            if region.contains(&proposal)? {
                tracing::trace!(iter, point = %proposal, "stepped");
                record.push(proposal);

                let event = Event::Stepped {
                    iter,
                    point: record.current_point(),
                    gradient: &gradient,
                };
                if let Some(Action::StopEarly) = observer.observe(&event) {
                    break Status::StoppedByObserver;
                }
            } else {
                let scale = step_limit::max_step(region, &point, &direction)?.unwrap_or(0.0);
                let boundary = region.clamp(&point.checked_sub(&direction.scaled(scale))?)?;
                tracing::debug!(iter, scale, point = %boundary, "step left the region");
                record.push(boundary);

                let event = Event::HitBoundary {
                    iter,
                    point: record.current_point(),
                    scale,
                };
                observer.observe(&event);
                break Status::HitBoundary;
            }
        };

        self.history.finish(record, status)
    }
}

impl Method for Adam {
    fn name(&self) -> &'static str {
        "Adam"
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
