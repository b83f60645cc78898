//! Heuristic estimators.
//!
//! The stats API never reports energy spent on training directly. These
//! estimators reconstruct it from the surrounding counters. They are total:
//! nonsensical input yields a number, possibly negative, never an error.

pub mod booster;
pub mod energy;
pub mod job_points;

pub use booster::{split_boosters, BoosterContext, BoosterSplit};
pub use energy::EnergyBreakdown;
pub use job_points::{job_point_energy, EnergyJob, JobPointEnergy};
