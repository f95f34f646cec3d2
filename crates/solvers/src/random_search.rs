//! Random search mixing global and local uniform sampling.
//!
//! # Algorithm
//!
//! Each iteration flips a coin that lands on "neighborhood" with probability
//! `p`. On "neighborhood" the candidate is drawn uniformly from the region
//! intersected with a cube of radius `delta` around the neighborhood center;
//! otherwise it is drawn uniformly from the whole region.
//!
//! A candidate is accepted iff its objective value is strictly lower than the
//! current point's. Accepted candidates are appended to the trajectory, and
//! rejected ones leave no trace. Accepting a neighborhood candidate also
//! shrinks `delta` by the configured factor and recenters the neighborhood on
//! the candidate. Accepting a region candidate leaves the neighborhood where
//! it was.
//!
//! The generator is seeded once, when the method is constructed, and carries
//! its state from one run to the next. `delta` and the neighborhood restart
//! from the configured radius and the start point on every run.
//!
//! # Observer Events
//!
//! - [`Event::Candidate`]: emitted for each evaluated candidate, before the
//!   acceptance decision
//! - [`Event::Skipped`]: emitted when the neighborhood misses the region
//!
//! Observers can return [`Action::StopEarly`] to end the run, or
//! [`Action::Reject`] to veto an improving candidate.

mod action;
mod config;
mod event;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::{Event, Source};

use boxopt_core::{Neighborhood, Objective, Observer, Record, Region, StoppingRule, Vector};
use rand::{SeedableRng, distr::Distribution, rngs::StdRng};

use crate::{
    Error, Method, Solution, Status,
    method::{History, check_inputs, stop_status},
};

/// The random search method.
#[derive(Debug, Clone)]
pub struct RandomSearch {
    config: Config,
    rng: StdRng,
    history: History,
}

impl Default for RandomSearch {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl RandomSearch {
    /// Creates the method and seeds its generator from `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(config.seed()),
            history: History::default(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Minimizes `objective`, reporting each candidate to `observer`.
    ///
    /// See the [module docs](self) for the events emitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `start`, `region`, and
    /// `objective` disagree in dimension, and [`Error::Region`] if the region
    /// cannot be sampled.
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
        let _span = tracing::debug_span!("random_search", dimension = start.len()).entered();

        let mut area = region.clone();
        let mut delta = self.config.delta();
        let mut neighborhood = Neighborhood::new(delta, start.clone());
        let mut current = objective.value(&start)?;
        let mut record = Record::new(start, objective);

        let status = loop {
            if let Some(status) = stop_status(rule, &record)? {
                break status;
            }

            let iter = record.advance();
            let (source, candidate) = if self.config.neighborhood().sample(&mut self.rng) {
                let mut overlap = area.intersect(neighborhood.region())?;
                if overlap.is_empty() {
                    tracing::trace!(iter, delta, "neighborhood misses the region");
                    if let Some(Action::StopEarly) = observer.observe(&Event::Skipped { iter }) {
                        break Status::StoppedByObserver;
                    }
                    continue;
                }
                (Source::Neighborhood, overlap.sample(&mut self.rng)?)
            } else {
                (Source::Region, area.sample(&mut self.rng)?)
            };

            let value = objective.value(&candidate)?;
            let event = Event::Candidate {
                iter,
                source,
                candidate: &candidate,
                value,
                current,
            };
            let action = observer.observe(&event);
            if action == Some(Action::StopEarly) {
                break Status::StoppedByObserver;
            }

            if value < current && action != Some(Action::Reject) {
                tracing::trace!(iter, ?source, value, point = %candidate, "accepted");
                if source == Source::Neighborhood {
                    delta *= self.config.shrink();
                    neighborhood.recenter(delta, candidate.clone());
                }
                current = value;
                record.push(candidate);
            }
        };

        self.history.finish(record, status)
    }
}

impl Method for RandomSearch {
    fn name(&self) -> &'static str {
        "RandomSearch"
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
