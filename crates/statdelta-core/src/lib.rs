//! statdelta core - character snapshot diff engine
//!
//! This crate turns successive observations of a game character into
//! per-interval deltas and per-user totals, including:
//! - Exact decimal arithmetic for battle stats
//! - Snapshot model with raw/normalized wire decoding
//! - Primitive diffs aggregated into a [`UserDiff`]
//! - Relevance tags and human-readable event lines
//! - Booster-split, job-point and energy-trained estimators
//! - Parallel per-user summary rollup and a plain-text report
//!
//! Data flows in one direction: bytes are decoded into [`Snapshot`]s, pairs
//! of snapshots are diffed, diffs are classified and estimated, and histories
//! are folded into [`UserSummary`] records.

pub mod decimal;
pub mod diff;
pub mod errors;
pub mod estimate;
pub mod logging_facility;
pub mod model;
pub mod summary;

pub use statdelta_core_types::schema;

// Used by the exported logging macros.
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use diff::{compute_diff, Relevance, RelevanceTag, UserDiff};
pub use errors::{ExError, ExErrorKind, Result, SnapshotError};
pub use estimate::{split_boosters, BoosterContext, BoosterSplit, EnergyBreakdown};
pub use model::{decode_snapshot, Snapshot, WireShape};
pub use summary::{group_by_user, render_report, summarize_user, summarize_users, UserSummary};
