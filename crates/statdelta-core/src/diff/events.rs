//! Human-readable event lines for a [`UserDiff`].
//!
//! Lines are informational only; nothing downstream parses them.

use bigdecimal::BigDecimal;

use crate::decimal::{decimal_sum, render_fixed};
use crate::diff::model::UserDiff;
use crate::estimate::energy::{FLAT_BOOSTER_ENERGY, PROPORTIONAL_BOOSTER_EVENT_HAPPY};
use crate::model::snapshot::{BattleStats, PersonalStats};

impl BattleStats {
    /// Exact sum of the four stat values.
    pub fn total_gains(&self) -> BigDecimal {
        decimal_sum(self.values())
    }
}

fn count_line(count: i64, one: &str, many: &str, verb: &str) -> Option<String> {
    match count {
        c if c <= 0 => None,
        1 => Some(format!("{verb} 1 {one}")),
        c => Some(format!("{verb} {c} {many}")),
    }
}

impl PersonalStats {
    /// One line per lifetime-counter category that increased.
    pub fn events(&self) -> Vec<String> {
        [
            count_line(self.total_attacks(), "attack", "attacks", "made"),
            count_line(self.dump_searches, "dump search", "dump searches", "made"),
            count_line(self.xanax_taken, "xanax", "xanax", "took"),
            count_line(self.lsd_taken, "LSD", "LSD", "took"),
            match self.overdosed {
                c if c <= 0 => None,
                1 => Some("overdosed once".to_string()),
                c => Some(format!("overdosed {c} times")),
            },
            count_line(self.refills, "energy refill", "energy refills", "used"),
            count_line(self.books_read, "book", "books", "read"),
            count_line(self.energy_drink_used, "energy drink", "energy drinks", "drank"),
            count_line(self.boosters_used, "booster", "boosters", "used"),
            count_line(self.consumables_used, "consumable", "consumables", "used"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl UserDiff {
    /// Describe what happened during the interval.
    pub fn events(&self) -> Vec<String> {
        let mut events = self.personal_stats.events();

        let jp = self.job_point_energy();
        if jp.energy > 0 {
            events.push(format!(
                "gained {}e by spending {} job points",
                jp.energy, jp.points_spent
            ));
        }

        let split = self.booster_split();
        if split.flat > 0 {
            events.push(format!(
                "gained {}e* by using {} FHCs",
                FLAT_BOOSTER_ENERGY * split.flat,
                split.flat
            ));
        }
        if split.proportional > 0 {
            events.push(format!(
                "gained {} happy by watching {} eDVDs",
                PROPORTIONAL_BOOSTER_EVENT_HAPPY * split.proportional,
                split.proportional
            ));
        }

        let gains = self.battle_stats.total_gains();
        let trained = self.energy_trained();
        if gains > BigDecimal::from(0) || trained > 0 {
            events.push(format!(
                "trained {}e gaining {} stats",
                trained,
                render_fixed(&gains)
            ));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::GaugeDiff;
    use crate::model::snapshot::Job;

    #[test]
    fn test_quiet_diff_has_no_events() {
        assert!(UserDiff::default().events().is_empty());
    }

    #[test]
    fn test_counter_lines() {
        let ps = PersonalStats {
            attacks_won: 2,
            you_run_away: 1,
            xanax_taken: 1,
            overdosed: 1,
            dump_searches: -4,
            ..PersonalStats::default()
        };
        assert_eq!(
            ps.events(),
            vec!["made 3 attacks", "took 1 xanax", "overdosed once"]
        );
    }

    #[test]
    fn test_job_point_line() {
        let diff = UserDiff {
            jobs: vec![Job::new("Farm", -10), Job::new("law", -5)],
            ..UserDiff::default()
        };
        assert_eq!(diff.events(), vec!["gained 70e by spending 10 job points"]);
    }

    #[test]
    fn test_trained_line_with_gains() {
        let diff = UserDiff {
            battle_stats: BattleStats {
                strength: "1.5000".to_string(),
                speed: "2.2500".to_string(),
                ..BattleStats::default()
            },
            bars: crate::diff::model::BarsDiff {
                energy: GaugeDiff {
                    previous: 50,
                    current: 0,
                    diff: -50,
                    tick_time: 0,
                },
                ..Default::default()
            },
            ..UserDiff::default()
        };
        assert_eq!(diff.events(), vec!["trained 50e gaining 3.7500 stats"]);
    }

    #[test]
    fn test_total_gains_is_exact() {
        let stats = BattleStats {
            strength: "391103118.8087".to_string(),
            speed: "-383085829.4637".to_string(),
            ..BattleStats::default()
        };
        assert_eq!(render_fixed(&stats.total_gains()), "8017289.3450");
    }
}
