//! Wire decoding for snapshots.
//!
//! Snapshots reach the engine in one of two JSON shapes:
//!
//! - **Raw**: the stats API response, with battle stats and bars at the top
//!   level and job points nested per job / per company.
//! - **Normalized**: the serialized [`Snapshot`] itself.
//!
//! The stats API may also answer with an `{"error": ...}` body. Decoding
//! sniffs a small set of marker keys and picks exactly one [`WireShape`]
//! before any typed deserialization happens; anything else is rejected.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::decimal_text;
use super::snapshot::{Bars, BattleStats, Gauge, Item, Job, PersonalStats, Refills, Snapshot};
use crate::errors::{Result, SnapshotError};

/// Marker key that identifies the raw acquisition shape.
const RAW_MARKER: &str = "strength";
/// Marker key that identifies the normalized shape.
const NORMALIZED_MARKER: &str = "bars";
/// Marker key that identifies an upstream error body.
const ERROR_MARKER: &str = "error";

/// The closed set of shapes a snapshot document can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireShape {
    Raw,
    Normalized,
    UpstreamError,
}

impl WireShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            WireShape::Raw => "raw",
            WireShape::Normalized => "normalized",
            WireShape::UpstreamError => "upstream_error",
        }
    }
}

/// Identify the shape of a top-level JSON object.
///
/// Markers are checked in precedence order: raw, normalized, error.
pub fn sniff_shape(object: &Map<String, Value>) -> Option<WireShape> {
    if object.contains_key(RAW_MARKER) {
        Some(WireShape::Raw)
    } else if object.contains_key(NORMALIZED_MARKER) {
        Some(WireShape::Normalized)
    } else if object.contains_key(ERROR_MARKER) {
        Some(WireShape::UpstreamError)
    } else {
        None
    }
}

/// Decode snapshot bytes of either shape into a [`Snapshot`].
///
/// # Errors
///
/// - `InvalidJson`: bytes are not valid JSON
/// - `NotAnObject`: the JSON root is not an object
/// - `UnrecognizedShape`: no marker key is present
/// - `UpstreamError`: the document is an error body
/// - `InvalidJobPoints` / `Serialization`: the recognized shape is malformed
pub fn decode_snapshot(bytes: &[u8]) -> Result<Snapshot> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| SnapshotError::InvalidJson {
        message: e.to_string(),
    })?;
    decode_snapshot_value(value)
}

/// Decode an already-parsed JSON document into a [`Snapshot`].
///
/// # Errors
///
/// Same as [`decode_snapshot`], minus `InvalidJson`.
pub fn decode_snapshot_value(value: Value) -> Result<Snapshot> {
    let Value::Object(mut object) = value else {
        return Err(SnapshotError::NotAnObject);
    };
    let shape = sniff_shape(&object).ok_or_else(|| SnapshotError::UnrecognizedShape {
        keys: object.keys().cloned().collect(),
    })?;

    tracing::debug!(wire_shape = shape.as_str(), "decoding snapshot");

    match shape {
        WireShape::Raw => {
            let battle_stats = take_battle_stats(&mut object)?;
            let raw: RawSnapshot = serde_json::from_value(Value::Object(object))?;
            raw.into_snapshot(battle_stats)
        }
        WireShape::Normalized => Ok(serde_json::from_value(Value::Object(object))?),
        WireShape::UpstreamError => Err(SnapshotError::UpstreamError {
            body: Value::Object(object).to_string(),
        }),
    }
}

/// Remove the four top-level stats of a raw document and keep their text.
fn take_battle_stats(object: &mut Map<String, Value>) -> Result<BattleStats> {
    let mut take = |key: &str| -> Result<String> {
        let Some(value) = object.remove(key) else {
            return Ok(String::new());
        };
        decimal_text::from_json(value).ok_or_else(|| SnapshotError::Serialization {
            message: format!("{key} must be a decimal string or number"),
        })
    };
    Ok(BattleStats {
        strength: take("strength")?,
        speed: take("speed")?,
        dexterity: take("dexterity")?,
        defense: take("defense")?,
    })
}

/// The stats API response shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSnapshot {
    pub energy: Gauge,
    pub happy: Gauge,
    pub name: String,
    pub player_id: u64,
    #[serde(rename = "jobpoints")]
    pub job_points: RawJobPoints,
    #[serde(rename = "personalstats")]
    pub personal_stats: PersonalStats,
    pub refills: Refills,
    pub inventory: Vec<Item>,
}

/// Job points as reported by the stats API: a flat `jobs` map keyed by job
/// name plus a `companies` map keyed by company id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawJobPoints {
    pub jobs: BTreeMap<String, Value>,
    pub companies: BTreeMap<String, CompanyPoints>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompanyPoints {
    pub name: String,
    #[serde(rename = "jobpoints")]
    pub job_points: i64,
}

impl RawJobPoints {
    /// Flatten both maps into one job list sorted by name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidJobPoints` if a `jobs` entry is not an integer.
    pub fn to_jobs(&self) -> Result<Vec<Job>> {
        let mut jobs = Vec::with_capacity(self.jobs.len() + self.companies.len());
        for (name, points) in &self.jobs {
            let points = points
                .as_i64()
                .ok_or_else(|| SnapshotError::InvalidJobPoints {
                    job: name.clone(),
                    message: format!("expected an integer, got {}", points),
                })?;
            jobs.push(Job::new(name.clone(), points));
        }
        for company in self.companies.values() {
            jobs.push(Job::new(company.name.clone(), company.job_points));
        }
        jobs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(jobs)
    }
}

impl RawSnapshot {
    /// Convert into the canonical [`Snapshot`], keeping only tracked item kinds.
    ///
    /// Battle stats travel beside the struct so their text is never routed
    /// through a float.
    ///
    /// # Errors
    ///
    /// Propagates job-point flattening failures.
    pub fn into_snapshot(self, battle_stats: BattleStats) -> Result<Snapshot> {
        let jobs = self.job_points.to_jobs()?;
        let items = self
            .inventory
            .into_iter()
            .filter(|item| item.kind().is_some())
            .collect();
        Ok(Snapshot {
            user_id: self.player_id,
            name: self.name,
            battle_stats,
            bars: Bars {
                energy: self.energy,
                happy: self.happy,
            },
            jobs,
            personal_stats: self.personal_stats,
            refills: self.refills,
            items,
        })
    }
}
