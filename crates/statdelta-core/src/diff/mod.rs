//! Snapshot diff engine.
//!
//! Diffs two snapshots of the same user into a [`UserDiff`], then classifies
//! and describes it.
//!
//! ## Entry point
//!
//! ```
//! use statdelta_core::model::Snapshot;
//!
//! let earlier = Snapshot::default();
//! let later = Snapshot::default();
//! let diff = earlier.diff(&later);
//! assert!(diff.is_relevant().is_empty());
//! assert!(diff.events().is_empty());
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical diffs; job and item
//!   lists are sorted.
//! - **Anti-symmetry**: swapping the inputs negates every numeric and decimal
//!   delta.
//! - **Pass-through**: negative deltas on lifetime counters are kept as is.

pub mod engine;
pub mod events;
pub mod model;
pub mod relevance;

pub use engine::{
    compute_diff, diff_bars, diff_battle_stats, diff_items, diff_jobs, diff_personal_stats,
    diff_refills,
};
pub use model::{BarsDiff, GaugeDiff, UserDiff};
pub use relevance::{Relevance, RelevanceTag};
