//! End-to-end diff of two real observations of one character.
//!
//! BEFORE/AFTER are normalized-shape snapshots of user 2040809 taken one
//! interval apart.

mod common;

use common::before_and_after;
use serde_json::json;
use statdelta_core::diff::{RelevanceTag, UserDiff};
use statdelta_core::estimate::BoosterSplit;

#[test]
fn test_diff_matches_expected_document() {
    let (before, after) = before_and_after();
    let diff = before.diff(&after);

    let expected: UserDiff = serde_json::from_value(json!({
        "userId": 2040809,
        "maxEnergy": 150,
        "bars": {
            "energy": { "previous": 95, "current": 85, "diff": -10 },
            "happy": { "previous": 4905, "current": 4964, "diff": 59 }
        },
        "battlestats": {
            "speed": "33602195.8422",
            "strength": "1042501.2602"
        },
        "jobs": [ { "Name": "law", "Points": 24 } ],
        "personalstats": {
            "attackswon": 69,
            "boostersused": 31,
            "candyused": 1,
            "consumablesused": 2,
            "dumpsearches": 7,
            "energydrinkused": 1,
            "nerverefills": 7,
            "overdosed": 1,
            "refills": 7,
            "useractivity": 41676,
            "xantaken": 19
        },
        "refills": { "energy_refill_used": true }
    }))
    .unwrap();

    assert_eq!(diff, expected);
}

#[test]
fn test_unchanged_stats_are_empty() {
    let (before, after) = before_and_after();
    let diff = before.diff(&after);
    assert_eq!(diff.battle_stats.defense, "");
    assert_eq!(diff.battle_stats.dexterity, "");

    let encoded = serde_json::to_value(&diff).unwrap();
    assert!(encoded["battlestats"].get("defense").is_none());
    assert!(encoded["personalstats"].get("alcoholused").is_none());
}

#[test]
fn test_relevance_tags() {
    let (before, after) = before_and_after();
    let relevance = before.diff(&after).is_relevant();

    assert_eq!(
        relevance.labels(),
        vec![
            "attack",
            "booster",
            "consumable",
            "dump",
            "energydrink",
            "od",
            "prf",
            "psprf",
            "train",
            "xanax",
        ]
    );
    // law points went up, so nothing was spent
    assert!(!relevance.contains(RelevanceTag::Jp));
}

#[test]
fn test_booster_split_truncates_toward_zero() {
    let (before, after) = before_and_after();
    let diff = before.diff(&after);
    // (59 - 400 * 31) / 2000 = -6.17..., truncated to -6
    assert_eq!(
        diff.booster_split(),
        BoosterSplit {
            flat: 37,
            proportional: -6
        }
    );
}

#[test]
fn test_energy_trained() {
    let (before, after) = before_and_after();
    let diff = before.diff(&after);

    let breakdown = diff.energy_breakdown();
    assert_eq!(breakdown.carried_in, 95);
    assert_eq!(breakdown.refills, 7 * 150);
    assert_eq!(breakdown.xanax, 19 * 250);
    assert_eq!(breakdown.carried_out, -85);
    assert_eq!(breakdown.attacks, -69 * 25);
    assert_eq!(breakdown.dump_searches, -7 * 5);
    assert_eq!(breakdown.energy_drinks, 30);
    assert_eq!(breakdown.flat_boosters, 37 * 150);
    assert_eq!(breakdown.job_points, 0);

    assert!(diff.is_train());
    assert_eq!(diff.energy_trained(), 9630);
}

#[test]
fn test_events() {
    let (before, after) = before_and_after();
    let events = before.diff(&after).events();

    assert_eq!(
        events,
        vec![
            "made 69 attacks",
            "made 7 dump searches",
            "took 19 xanax",
            "overdosed once",
            "used 7 energy refills",
            "drank 1 energy drink",
            "used 31 boosters",
            "used 2 consumables",
            "gained 5550e* by using 37 FHCs",
            "trained 9630e gaining 34644697.1024 stats",
        ]
    );
}

#[test]
fn test_reverse_diff_negates() {
    let (before, after) = before_and_after();
    let forward = before.diff(&after);
    let backward = after.diff(&before);

    assert_eq!(backward.battle_stats.speed, "-33602195.8422");
    assert_eq!(backward.bars.energy.diff, 10);
    assert_eq!(backward.jobs[0].points, -24);
    assert_eq!(
        backward.personal_stats.xanax_taken,
        -forward.personal_stats.xanax_taken
    );
    // reversed interval spent "points", so it now carries jp
    assert!(backward.is_relevant().contains(RelevanceTag::Jp));
}
