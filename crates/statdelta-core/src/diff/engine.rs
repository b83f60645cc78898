//! Snapshot diff computation engine.
//!
//! The core entry point is [`compute_diff`], which diffs every field group of
//! two snapshots of the same user independently and assembles a [`UserDiff`].
//!
//! Every delta is `later - earlier`. Nothing is validated: a lifetime counter
//! that went backwards yields a negative delta and is passed through.

use std::collections::{BTreeMap, BTreeSet};

use crate::decimal::decimal_diff;
use crate::diff::model::{BarsDiff, GaugeDiff, UserDiff};
use crate::model::snapshot::{
    Bars, BattleStats, Gauge, Item, ItemKind, Job, PersonalStats, Refills, Snapshot,
};

/// Diff the four battle stats with exact decimal arithmetic.
pub fn diff_battle_stats(earlier: &BattleStats, later: &BattleStats) -> BattleStats {
    BattleStats {
        strength: decimal_diff(&earlier.strength, &later.strength),
        speed: decimal_diff(&earlier.speed, &later.speed),
        dexterity: decimal_diff(&earlier.dexterity, &later.dexterity),
        defense: decimal_diff(&earlier.defense, &later.defense),
    }
}

fn diff_gauge(earlier: &Gauge, later: &Gauge) -> GaugeDiff {
    GaugeDiff {
        previous: earlier.current,
        current: later.current,
        diff: later.current - earlier.current,
        tick_time: later.tick_time - earlier.tick_time,
    }
}

/// Diff both gauges. Capacity is not diffed.
pub fn diff_bars(earlier: &Bars, later: &Bars) -> BarsDiff {
    BarsDiff {
        energy: diff_gauge(&earlier.energy, &later.energy),
        happy: diff_gauge(&earlier.happy, &later.happy),
    }
}

/// Element-wise `later - earlier` over every lifetime counter.
pub fn diff_personal_stats(earlier: &PersonalStats, later: &PersonalStats) -> PersonalStats {
    PersonalStats {
        attacks_won: later.attacks_won - earlier.attacks_won,
        dump_searches: later.dump_searches - earlier.dump_searches,
        user_activity: later.user_activity - earlier.user_activity,
        logins: later.logins - earlier.logins,
        attacks_lost: later.attacks_lost - earlier.attacks_lost,
        xanax_taken: later.xanax_taken - earlier.xanax_taken,
        attacks_draw: later.attacks_draw - earlier.attacks_draw,
        lsd_taken: later.lsd_taken - earlier.lsd_taken,
        ecstasy_taken: later.ecstasy_taken - earlier.ecstasy_taken,
        overdosed: later.overdosed - earlier.overdosed,
        you_run_away: later.you_run_away - earlier.you_run_away,
        attacks_assisted: later.attacks_assisted - earlier.attacks_assisted,
        cannabis_taken: later.cannabis_taken - earlier.cannabis_taken,
        consumables_used: later.consumables_used - earlier.consumables_used,
        candy_used: later.candy_used - earlier.candy_used,
        alcohol_used: later.alcohol_used - earlier.alcohol_used,
        energy_drink_used: later.energy_drink_used - earlier.energy_drink_used,
        books_read: later.books_read - earlier.books_read,
        nerve_refills: later.nerve_refills - earlier.nerve_refills,
        boosters_used: later.boosters_used - earlier.boosters_used,
        refills: later.refills - earlier.refills,
    }
}

/// Per-job `later - earlier` over the union of job names.
///
/// Names whose balance did not move are omitted. A negative entry means
/// points were spent. The result is sorted by name.
pub fn diff_jobs(earlier: &[Job], later: &[Job]) -> Vec<Job> {
    let earlier_points: BTreeMap<&str, i64> =
        earlier.iter().map(|j| (j.name.as_str(), j.points)).collect();
    let later_points: BTreeMap<&str, i64> =
        later.iter().map(|j| (j.name.as_str(), j.points)).collect();
    let all_names: BTreeSet<&str> = earlier_points
        .keys()
        .chain(later_points.keys())
        .copied()
        .collect();

    all_names
        .into_iter()
        .filter_map(|name| {
            let before = earlier_points.get(name).copied().unwrap_or(0);
            let after = later_points.get(name).copied().unwrap_or(0);
            let delta = after - before;
            (delta != 0).then(|| Job::new(name, delta))
        })
        .collect()
}

/// Refill deltas: whether the daily refill was spent during the interval,
/// and the change in special refills (negative when spent).
pub fn diff_refills(earlier: &Refills, later: &Refills) -> Refills {
    Refills {
        energy_refill_used: !earlier.energy_refill_used && later.energy_refill_used,
        special_refills_available: later.special_refills_available
            - earlier.special_refills_available,
    }
}

/// Per tracked item kind `later - earlier` over the union of kinds, sorted
/// by item id.
pub fn diff_items(earlier: &[Item], later: &[Item]) -> Vec<Item> {
    let mut quantities: BTreeMap<i64, i64> = BTreeMap::new();
    for item in later.iter().filter(|i| i.kind().is_some()) {
        *quantities.entry(item.id).or_insert(0) += item.quantity;
    }
    for item in earlier.iter().filter(|i| i.kind().is_some()) {
        *quantities.entry(item.id).or_insert(0) -= item.quantity;
    }
    quantities
        .into_iter()
        .map(|(id, quantity)| Item { id, quantity })
        .collect()
}

/// Compute the [`UserDiff`] between two successive snapshots of one user.
///
/// `user_id` and `max_energy` come from the earlier snapshot: refills are
/// converted to energy at the capacity the user had when they were used.
pub fn compute_diff(earlier: &Snapshot, later: &Snapshot) -> UserDiff {
    UserDiff {
        user_id: earlier.user_id,
        battle_stats: diff_battle_stats(&earlier.battle_stats, &later.battle_stats),
        bars: diff_bars(&earlier.bars, &later.bars),
        jobs: diff_jobs(&earlier.jobs, &later.jobs),
        personal_stats: diff_personal_stats(&earlier.personal_stats, &later.personal_stats),
        refills: diff_refills(&earlier.refills, &later.refills),
        items: diff_items(&earlier.items, &later.items),
        max_energy: earlier.bars.energy.maximum,
    }
}

impl Snapshot {
    /// Diff this snapshot against a later one of the same user.
    pub fn diff(&self, later: &Snapshot) -> UserDiff {
        compute_diff(self, later)
    }
}

impl UserDiff {
    /// Net change in held quantity of one tracked item kind.
    pub fn item_delta(&self, kind: ItemKind) -> i64 {
        self.items
            .iter()
            .filter(|i| i.id == kind.id())
            .map(|i| i.quantity)
            .sum()
    }
}
