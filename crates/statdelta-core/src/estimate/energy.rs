//! Energy-trained estimate.
//!
//! Closed-form accounting over one interval: energy on hand at the start,
//! plus every energy-granting event, minus every energy-consuming event and
//! the energy carried into the next interval, is what went into training.

use serde::{Deserialize, Serialize};

use super::booster::{split_boosters, BoosterContext, BoosterSplit};
use super::job_points::{job_point_energy, JobPointEnergy};
use crate::diff::model::UserDiff;

pub const XANAX_ENERGY: i64 = 250;
pub const LSD_ENERGY: i64 = 50;
pub const ATTACK_ENERGY: i64 = 25;
pub const DUMP_SEARCH_ENERGY: i64 = 5;
pub const ENERGY_DRINK_ENERGY: i64 = 30;
pub const FLAT_BOOSTER_ENERGY: i64 = 150;
/// Happiness credited per proportional booster when describing events.
pub const PROPORTIONAL_BOOSTER_EVENT_HAPPY: i64 = 2500;

/// Signed contribution of every term of the energy identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    pub carried_in: i64,
    pub refills: i64,
    pub xanax: i64,
    pub lsd: i64,
    pub carried_out: i64,
    pub attacks: i64,
    pub dump_searches: i64,
    pub energy_drinks: i64,
    pub flat_boosters: i64,
    pub job_points: i64,
}

impl EnergyBreakdown {
    pub fn total(&self) -> i64 {
        self.carried_in
            + self.refills
            + self.xanax
            + self.lsd
            + self.carried_out
            + self.attacks
            + self.dump_searches
            + self.energy_drinks
            + self.flat_boosters
            + self.job_points
    }
}

impl UserDiff {
    /// True iff any of the four battle stats moved.
    pub fn is_train(&self) -> bool {
        self.battle_stats.values().iter().any(|v| !v.is_empty())
    }

    /// Booster-split inputs for this interval.
    pub fn booster_context(&self) -> BoosterContext {
        let ps = &self.personal_stats;
        BoosterContext {
            start_happy: self.bars.happy.previous,
            end_happy: self.bars.happy.current,
            ecstasy_taken: ps.ecstasy_taken,
            boosters_used: ps.boosters_used,
            overdoses: ps.overdosed,
            current_energy: self.bars.energy.current,
            training: self.is_train(),
        }
    }

    pub fn booster_split(&self) -> BoosterSplit {
        split_boosters(&self.booster_context())
    }

    pub fn job_point_energy(&self) -> JobPointEnergy {
        job_point_energy(&self.jobs)
    }

    /// Every term of the energy identity, computed whether or not the
    /// interval was a training interval.
    pub fn energy_breakdown(&self) -> EnergyBreakdown {
        let ps = &self.personal_stats;
        EnergyBreakdown {
            carried_in: self.bars.energy.previous,
            refills: ps.refills * self.max_energy,
            xanax: XANAX_ENERGY * ps.xanax_taken,
            lsd: LSD_ENERGY * ps.lsd_taken,
            carried_out: -self.bars.energy.current,
            attacks: -ATTACK_ENERGY * ps.total_attacks(),
            dump_searches: -DUMP_SEARCH_ENERGY * ps.dump_searches,
            energy_drinks: ENERGY_DRINK_ENERGY * ps.energy_drink_used,
            flat_boosters: FLAT_BOOSTER_ENERGY * self.booster_split().flat,
            job_points: self.job_point_energy().energy,
        }
    }

    /// Estimated energy spent training, or 0 when no stat moved.
    pub fn energy_trained(&self) -> i64 {
        if !self.is_train() {
            return 0;
        }
        self.energy_breakdown().total()
    }
}
