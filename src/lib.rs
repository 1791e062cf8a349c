//! Great-circle navigation on a spherical Earth.
//!
//! Distances, courses, intermediate and destination points, and cross-track
//! offsets from closed-form spherical trigonometry. Inputs are decimal
//! degrees, distances are nautical miles unless a [`DistanceUnit`] says otherwise.

pub mod angle;
pub mod earth;
pub mod error;
pub mod formula;
pub mod lla;
pub mod prelude;
pub mod track;
pub mod units;

pub use crate::prelude::*;
