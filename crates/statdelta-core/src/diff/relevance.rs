//! Relevance classification for a [`UserDiff`].
//!
//! A diff is relevant when at least one tag fires. Tags are used to filter
//! quiet intervals out of reports before anything is rendered.

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

use crate::diff::model::UserDiff;
use crate::model::snapshot::PersonalStats;

/// Why a diff is worth surfacing.
///
/// Variant order matches the lexical order of the tag strings, so sorting
/// tags sorts their labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelevanceTag {
    Attack,
    Book,
    Booster,
    Consumable,
    Dump,
    /// Fires on cannabis as well as energy drinks.
    EnergyDrink,
    Jp,
    Lsd,
    Od,
    Prf,
    Psprf,
    Train,
    Xanax,
}

impl RelevanceTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelevanceTag::Attack => "attack",
            RelevanceTag::Book => "book",
            RelevanceTag::Booster => "booster",
            RelevanceTag::Consumable => "consumable",
            RelevanceTag::Dump => "dump",
            RelevanceTag::EnergyDrink => "energydrink",
            RelevanceTag::Jp => "jp",
            RelevanceTag::Lsd => "lsd",
            RelevanceTag::Od => "od",
            RelevanceTag::Prf => "prf",
            RelevanceTag::Psprf => "psprf",
            RelevanceTag::Train => "train",
            RelevanceTag::Xanax => "xanax",
        }
    }
}

impl fmt::Display for RelevanceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RelevanceTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Deduplicated tags, available both in sorted order and as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relevance {
    tags: Vec<RelevanceTag>,
    set: BTreeSet<RelevanceTag>,
}

impl Relevance {
    fn from_tags(tags: impl IntoIterator<Item = RelevanceTag>) -> Self {
        let set: BTreeSet<RelevanceTag> = tags.into_iter().collect();
        Self {
            tags: set.iter().copied().collect(),
            set,
        }
    }

    pub fn tags(&self) -> &[RelevanceTag] {
        &self.tags
    }

    pub fn set(&self) -> &BTreeSet<RelevanceTag> {
        &self.set
    }

    pub fn contains(&self, tag: RelevanceTag) -> bool {
        self.set.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tag labels in sorted order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.tags.iter().map(RelevanceTag::as_str).collect()
    }
}

impl PersonalStats {
    /// True if any attack outcome counter increased.
    pub fn is_attack(&self) -> bool {
        self.attacks_won > 0
            || self.attacks_lost > 0
            || self.attacks_draw > 0
            || self.attacks_assisted > 0
            || self.you_run_away > 0
    }

    /// Tags contributed by lifetime counters. Only increases count.
    pub fn relevance_tags(&self) -> Vec<RelevanceTag> {
        let checks = [
            (self.is_attack(), RelevanceTag::Attack),
            (self.dump_searches > 0, RelevanceTag::Dump),
            (self.lsd_taken > 0, RelevanceTag::Lsd),
            (self.xanax_taken > 0, RelevanceTag::Xanax),
            (self.overdosed > 0, RelevanceTag::Od),
            (self.refills > 0, RelevanceTag::Psprf),
            (self.books_read > 0, RelevanceTag::Book),
            (
                self.cannabis_taken > 0 || self.energy_drink_used > 0,
                RelevanceTag::EnergyDrink,
            ),
            (self.boosters_used > 0, RelevanceTag::Booster),
            (self.consumables_used > 0, RelevanceTag::Consumable),
        ];
        checks
            .into_iter()
            .filter_map(|(fired, tag)| fired.then_some(tag))
            .collect()
    }
}

impl UserDiff {
    /// Classify this diff into zero or more relevance tags.
    pub fn is_relevant(&self) -> Relevance {
        let mut tags = Vec::new();
        if self.is_train() {
            tags.push(RelevanceTag::Train);
        }
        if self.refills.energy_refill_used || self.refills.special_refills_available < 0 {
            tags.push(RelevanceTag::Prf);
        }
        if self.jobs.iter().any(|j| j.points < 0) {
            tags.push(RelevanceTag::Jp);
        }
        tags.extend(self.personal_stats.relevance_tags());
        Relevance::from_tags(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::snapshot::{Job, Refills};

    #[test]
    fn test_quiet_diff_has_no_tags() {
        let relevance = UserDiff::default().is_relevant();
        assert!(relevance.is_empty());
        assert!(relevance.set().is_empty());
    }

    #[test]
    fn test_tags_sorted_and_deduplicated() {
        let diff = UserDiff {
            personal_stats: PersonalStats {
                xanax_taken: 1,
                attacks_won: 2,
                cannabis_taken: 1,
                energy_drink_used: 1,
                ..PersonalStats::default()
            },
            ..UserDiff::default()
        };
        assert_eq!(
            diff.is_relevant().labels(),
            vec!["attack", "energydrink", "xanax"]
        );
    }

    #[test]
    fn test_cannabis_alone_fires_energydrink() {
        let ps = PersonalStats {
            cannabis_taken: 1,
            ..PersonalStats::default()
        };
        assert_eq!(ps.relevance_tags(), vec![RelevanceTag::EnergyDrink]);
    }

    #[test]
    fn test_negative_counter_does_not_fire() {
        let ps = PersonalStats {
            xanax_taken: -1,
            attacks_lost: -3,
            ..PersonalStats::default()
        };
        assert!(ps.relevance_tags().is_empty());
    }

    #[test]
    fn test_prf_on_special_refill_spent() {
        let diff = UserDiff {
            refills: Refills {
                energy_refill_used: false,
                special_refills_available: -1,
            },
            ..UserDiff::default()
        };
        assert!(diff.is_relevant().contains(RelevanceTag::Prf));
    }

    #[test]
    fn test_jp_only_on_spent_points() {
        let mut diff = UserDiff {
            jobs: vec![Job::new("law", 24)],
            ..UserDiff::default()
        };
        assert!(!diff.is_relevant().contains(RelevanceTag::Jp));
        diff.jobs.push(Job::new("Pub", -3));
        assert!(diff.is_relevant().contains(RelevanceTag::Jp));
    }

    #[test]
    fn test_label_order_matches_variant_order() {
        let labels: Vec<&str> = [
            RelevanceTag::Attack,
            RelevanceTag::Book,
            RelevanceTag::Booster,
            RelevanceTag::Consumable,
            RelevanceTag::Dump,
            RelevanceTag::EnergyDrink,
            RelevanceTag::Jp,
            RelevanceTag::Lsd,
            RelevanceTag::Od,
            RelevanceTag::Prf,
            RelevanceTag::Psprf,
            RelevanceTag::Train,
            RelevanceTag::Xanax,
        ]
        .iter()
        .map(RelevanceTag::as_str)
        .collect();
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        assert_eq!(labels, sorted);
    }
}
