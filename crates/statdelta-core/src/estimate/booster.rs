//! Split of undifferentiated booster usage into flat and proportional
//! happiness boosters.
//!
//! The branch order below is part of the policy: reordering it changes the
//! result at the thresholds.

use serde::{Deserialize, Serialize};

/// Energy at or above which the player is power training and happiness is
/// irrelevant.
pub const POWER_TRAINING_ENERGY: i64 = 400;
/// Happiness drop (after normalization) treated as an external reset.
pub const HAPPY_RESET_DELTA: i64 = -5000;
/// A reset only counts if happiness ends above this floor.
pub const HAPPY_RESET_MIN_END_HAPPY: i64 = 10;
/// Happiness granted by one flat booster.
pub const FLAT_BOOSTER_HAPPY: i64 = 400;
/// Happiness a proportional booster grants beyond a flat one.
pub const PROPORTIONAL_BOOSTER_HAPPY: i64 = 2000;

/// Inputs of the booster split for one interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoosterContext {
    pub start_happy: i64,
    pub end_happy: i64,
    /// Anti-depressant doses taken in the interval
    pub ecstasy_taken: i64,
    pub boosters_used: i64,
    pub overdoses: i64,
    /// Energy at the end of the interval
    pub current_energy: i64,
    pub training: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoosterSplit {
    pub flat: i64,
    pub proportional: i64,
}

impl BoosterSplit {
    fn all_flat(boosters: i64) -> Self {
        Self {
            flat: boosters,
            proportional: 0,
        }
    }

    fn all_proportional(boosters: i64) -> Self {
        Self {
            flat: 0,
            proportional: boosters,
        }
    }

    pub fn total(&self) -> i64 {
        self.flat + self.proportional
    }
}

/// Estimate how many of the boosters used were flat versus proportional.
///
/// `flat + proportional == boosters_used` holds on every branch.
pub fn split_boosters(ctx: &BoosterContext) -> BoosterSplit {
    let boosters = ctx.boosters_used;
    if boosters == 0 {
        return BoosterSplit::default();
    }
    if ctx.current_energy >= POWER_TRAINING_ENERGY {
        return BoosterSplit::all_proportional(boosters);
    }

    // The anti-depressant doubles the end reading, so halve it before
    // comparing against the start.
    let end_happy = if ctx.ecstasy_taken > 0 {
        ctx.end_happy / 2
    } else {
        ctx.end_happy
    };
    let happy_delta = end_happy - ctx.start_happy;

    if happy_delta <= HAPPY_RESET_DELTA
        && ctx.end_happy > HAPPY_RESET_MIN_END_HAPPY
        && ctx.overdoses == 0
    {
        return if ctx.training {
            BoosterSplit::all_flat(boosters)
        } else {
            BoosterSplit::all_proportional(boosters)
        };
    }

    // 400f + 2400p = h and f + p = b  =>  p = (h - 400b) / 2000
    let proportional = (happy_delta - FLAT_BOOSTER_HAPPY * boosters) / PROPORTIONAL_BOOSTER_HAPPY;
    BoosterSplit {
        flat: boosters - proportional,
        proportional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(start_happy: i64, end_happy: i64, ecstasy_taken: i64, boosters_used: i64) -> BoosterContext {
        BoosterContext {
            start_happy,
            end_happy,
            ecstasy_taken,
            boosters_used,
            ..BoosterContext::default()
        }
    }

    #[test]
    fn test_no_boosters() {
        assert_eq!(split_boosters(&ctx(100, 50_000, 1, 0)), BoosterSplit::default());
    }

    #[test]
    fn test_observed_intervals() {
        let cases = [
            ((4779, 5209, 0, 1), (1, 0)),
            ((4983, 7874, 0, 7), (7, 0)),
            ((5364, 6134, 0, 2), (2, 0)),
            ((6134, 7486, 0, 3), (3, 0)),
            ((7486, 7914, 0, 1), (1, 0)),
            ((9500, 33776, 1, 3), (0, 3)),
            ((5000, 7920, 0, 2), (1, 1)),
        ];
        for ((start, end, ecstasy, boosters), (flat, proportional)) in cases {
            let split = split_boosters(&ctx(start, end, ecstasy, boosters));
            assert_eq!(
                split,
                BoosterSplit { flat, proportional },
                "start={} end={} ecstasy={} boosters={}",
                start,
                end,
                ecstasy,
                boosters
            );
        }
    }

    #[test]
    fn test_power_training_threshold_is_inclusive() {
        let mut c = ctx(4779, 5209, 0, 4);
        c.current_energy = 400;
        assert_eq!(split_boosters(&c), BoosterSplit { flat: 0, proportional: 4 });
        c.current_energy = 399;
        assert_eq!(split_boosters(&c).flat, 4);
    }

    #[test]
    fn test_happy_reset_follows_training_flag() {
        let mut c = ctx(12_000, 6_000, 0, 5);
        c.training = true;
        assert_eq!(split_boosters(&c), BoosterSplit { flat: 5, proportional: 0 });
        c.training = false;
        assert_eq!(split_boosters(&c), BoosterSplit { flat: 0, proportional: 5 });
    }

    #[test]
    fn test_happy_reset_boundaries() {
        // exactly -5000 counts as a reset
        let mut c = ctx(11_000, 6_000, 0, 2);
        c.training = true;
        assert_eq!(split_boosters(&c).flat, 2);

        // an overdose disqualifies the reset and falls through to the formula
        c.overdoses = 1;
        let split = split_boosters(&c);
        assert_eq!(split.proportional, (-5000 - 800) / 2000);
        assert_eq!(split.total(), 2);

        // ending at the floor disqualifies the reset
        let mut floor = ctx(5_010, 10, 0, 1);
        floor.training = true;
        assert_eq!(split_boosters(&floor).proportional, -2);
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        // (59 - 12400) / 2000 = -6.17 -> -6
        let split = split_boosters(&ctx(4905, 4964, 0, 31));
        assert_eq!(split, BoosterSplit { flat: 37, proportional: -6 });
    }
}
