//! Methods for minimizing an [`Objective`] over a box [`Region`].
//!
//! Every method implements [`Method`]: given an objective, a region, a start
//! point, and a [`StoppingRule`], it runs until the rule fires (or the method
//! decides to stop) and returns a [`Solution`]. After a run the method keeps
//! the visited trajectory, so [`Method::best_point`] and
//! [`Method::iterations`] describe the last run.
//!
//! # Methods
//!
//! - [`adam`]: adaptive-moment gradient descent that stops at the boundary
//!   when a step would leave the region
//! - [`steepest_descent`]: gradient descent with a ternary line search over
//!   the longest step that stays inside the region
//! - [`random_search`]: seeded random search mixing global samples with
//!   samples from a shrinking neighborhood
//!
//! Each method also has an `optimise_observed` entry point that reports
//! method-specific events to an [`Observer`].
//!
//! [`Objective`]: boxopt_core::Objective
//! [`Region`]: boxopt_core::Region
//! [`StoppingRule`]: boxopt_core::StoppingRule
//! [`Observer`]: boxopt_core::Observer

mod error;
mod method;
mod solution;
mod step_limit;

pub mod adam;
pub mod random_search;
pub mod steepest_descent;

pub use adam::Adam;
pub use error::Error;
pub use method::Method;
pub use random_search::RandomSearch;
pub use solution::{Solution, Status};
pub use steepest_descent::SteepestDescent;
