//! Energy gained by spending job points.
//!
//! Six workplaces let points be traded for energy at fixed rates. Every
//! other job still appears in the diff but converts to nothing.

use serde::{Deserialize, Serialize};

use crate::model::snapshot::Job;

/// A workplace whose job points convert into energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnergyJob {
    GameShop,
    CandleShop,
    Farm,
    FurnitureStore,
    Pub,
    Restaurant,
}

impl EnergyJob {
    pub const ALL: [EnergyJob; 6] = [
        EnergyJob::GameShop,
        EnergyJob::CandleShop,
        EnergyJob::Farm,
        EnergyJob::FurnitureStore,
        EnergyJob::Pub,
        EnergyJob::Restaurant,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EnergyJob::GameShop => "Game Shop",
            EnergyJob::CandleShop => "Candle Shop",
            EnergyJob::Farm => "Farm",
            EnergyJob::FurnitureStore => "Furniture Store",
            EnergyJob::Pub => "Pub",
            EnergyJob::Restaurant => "Restaurant",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|job| job.name() == name)
    }

    /// Energy granted per job point spent.
    pub fn energy_per_point(&self) -> i64 {
        match self {
            EnergyJob::GameShop | EnergyJob::CandleShop => 5,
            EnergyJob::Farm => 7,
            EnergyJob::FurnitureStore | EnergyJob::Pub | EnergyJob::Restaurant => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPointEnergy {
    pub energy: i64,
    pub points_spent: i64,
}

/// Convert spent points (negative job deltas) at the six energy workplaces
/// into energy.
pub fn job_point_energy(job_deltas: &[Job]) -> JobPointEnergy {
    job_deltas
        .iter()
        .filter(|j| j.points < 0)
        .filter_map(|j| EnergyJob::from_name(&j.name).map(|job| (job, -j.points)))
        .fold(JobPointEnergy::default(), |acc, (job, spent)| JobPointEnergy {
            energy: acc.energy + spent * job.energy_per_point(),
            points_spent: acc.points_spent + spent,
        })
}
