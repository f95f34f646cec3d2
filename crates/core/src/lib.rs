//! Core types for box-constrained numerical optimization.
//!
//! This crate defines the shared building blocks the methods in
//! `boxopt-solvers` operate on:
//!
//! - [`Vector`]: a dense real vector with dimension-checked arithmetic
//! - [`Region`] and [`Neighborhood`]: axis-aligned boxes with membership,
//!   intersection, and uniform sampling
//! - [`Objective`]: a scalar function with an analytic gradient
//! - [`Record`]: the trajectory, objective snapshot, and iteration count a
//!   [`StoppingRule`] inspects
//! - [`Observer`]: receives method events and optionally returns actions
//!
//! The [`functions`] module holds a handful of analytic test objectives.

mod error;
mod objective;
mod observer;
mod record;
mod region;
mod stopping;
mod trajectory;
mod vector;

pub mod functions;

pub use error::DimensionMismatch;
pub use objective::Objective;
pub use observer::Observer;
pub use record::Record;
pub use region::{Neighborhood, Region, RegionError};
pub use stopping::{
    GradientNorm, Limits, LimitsError, PointDistance, StoppingRule, ValueChange,
};
pub use trajectory::Trajectory;
pub use vector::Vector;
