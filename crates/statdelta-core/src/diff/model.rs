//! Snapshot diff output types.
//!
//! Every numeric field holds a signed delta and every decimal field a signed
//! decimal delta. Zero deltas are omitted on serialization so that a quiet
//! interval encodes to an almost empty object.

use serde::{Deserialize, Serialize};

use crate::model::snapshot::{BattleStats, Item, Job, PersonalStats, Refills};
use crate::model::is_zero;

/// The element-wise delta between two snapshots of the same user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDiff {
    /// Identity copied from the earlier snapshot
    #[serde(rename = "userId", default)]
    pub user_id: u64,
    #[serde(rename = "battlestats", default)]
    pub battle_stats: BattleStats,
    #[serde(default)]
    pub bars: BarsDiff,
    /// Per-job `later - earlier`, zero entries omitted, sorted by name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<Job>,
    #[serde(rename = "personalstats", default)]
    pub personal_stats: PersonalStats,
    #[serde(default)]
    pub refills: Refills,
    /// Per tracked item kind `later - earlier`, sorted by item id
    #[serde(rename = "inventory", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    /// Energy capacity of the earlier snapshot
    #[serde(rename = "maxEnergy", default, skip_serializing_if = "is_zero")]
    pub max_energy: i64,
}

/// Readings and delta for one gauge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeDiff {
    /// Current reading of the earlier snapshot
    #[serde(skip_serializing_if = "is_zero")]
    pub previous: i64,
    /// Current reading of the later snapshot
    #[serde(skip_serializing_if = "is_zero")]
    pub current: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub diff: i64,
    #[serde(rename = "ticktime", skip_serializing_if = "is_zero")]
    pub tick_time: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarsDiff {
    pub energy: GaugeDiff,
    pub happy: GaugeDiff,
}
