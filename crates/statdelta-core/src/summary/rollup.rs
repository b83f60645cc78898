//! Fold diffs into per-user totals.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::{Entry, HashMap};

use crate::diff::model::UserDiff;
use crate::model::snapshot::Snapshot;
use crate::{log_op_end, log_op_start};

/// Aggregate totals for one user over a history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "userId")]
    pub user_id: u64,
    /// Latest non-empty name seen in the history
    pub name: String,
    /// Estimated energy trained
    pub energy: i64,
    pub flat_boosters: i64,
    pub proportional_boosters: i64,
    pub xanax: i64,
    pub lsd: i64,
    pub energy_drinks: i64,
    pub attacks: i64,
    pub energy_refills: i64,
    pub dumps: i64,
    /// Energy gained by spending job points
    pub jp_energy: i64,
    pub overdoses: i64,
}

impl UserSummary {
    pub fn new(user_id: u64) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    /// Add one interval to the running totals.
    pub fn fold(&mut self, diff: &UserDiff) {
        let ps = &diff.personal_stats;
        self.energy_refills += ps.refills;
        self.xanax += ps.xanax_taken;
        self.lsd += ps.lsd_taken;
        self.attacks += ps.total_attacks();
        self.dumps += ps.dump_searches;
        self.energy_drinks += ps.energy_drink_used;
        self.overdoses += ps.overdosed;

        let split = diff.booster_split();
        self.flat_boosters += split.flat;
        self.proportional_boosters += split.proportional;

        self.jp_energy += diff.job_point_energy().energy;
        self.energy += diff.energy_trained();
    }
}

/// One user's snapshots in time order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserHistory {
    pub user_id: u64,
    pub snapshots: Vec<Snapshot>,
}

/// Partition a snapshot stream by user id.
///
/// Users appear in order of first occurrence; each user's snapshots keep
/// their relative order.
pub fn group_by_user(snapshots: impl IntoIterator<Item = Snapshot>) -> Vec<UserHistory> {
    let mut histories: Vec<UserHistory> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();
    for snapshot in snapshots {
        match index.entry(snapshot.user_id) {
            Entry::Occupied(slot) => histories[*slot.get()].snapshots.push(snapshot),
            Entry::Vacant(slot) => {
                slot.insert(histories.len());
                histories.push(UserHistory {
                    user_id: snapshot.user_id,
                    snapshots: vec![snapshot],
                });
            }
        }
    }
    histories
}

/// Diff every adjacent pair of a history.
pub fn pairwise_diffs(snapshots: &[Snapshot]) -> Vec<UserDiff> {
    snapshots
        .windows(2)
        .map(|pair| pair[0].diff(&pair[1]))
        .collect()
}

/// Fold one user's history into a summary.
///
/// Fewer than two snapshots form no interval and yield zero totals.
pub fn summarize_user(user_id: u64, snapshots: &[Snapshot]) -> UserSummary {
    let mut summary = UserSummary::new(user_id);
    for diff in pairwise_diffs(snapshots) {
        summary.fold(&diff);
    }
    if let Some(named) = snapshots.iter().rev().find(|s| !s.name.is_empty()) {
        summary.name = named.name.clone();
    }
    tracing::debug!(
        user_id,
        snapshot_count = snapshots.len(),
        energy = summary.energy,
        "user summarized"
    );
    summary
}

/// Fold every history and sort by energy trained, highest first.
///
/// Ties keep the order of `histories`.
pub fn summarize_users(histories: &[UserHistory]) -> Vec<UserSummary> {
    log_op_start!("summarize_users", user_count = histories.len());
    let start = std::time::Instant::now();

    let mut summaries: Vec<UserSummary> = histories
        .par_iter()
        .map(|h| summarize_user(h.user_id, &h.snapshots))
        .collect();
    summaries.sort_by(|a, b| b.energy.cmp(&a.energy));

    log_op_end!(
        "summarize_users",
        duration_ms = start.elapsed().as_millis() as u64,
        user_count = summaries.len()
    );
    summaries
}
