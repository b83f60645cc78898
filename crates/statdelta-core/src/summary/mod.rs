//! Per-user rollup of snapshot histories.
//!
//! A history is a user's snapshots in time order. Every adjacent pair forms
//! one [`UserDiff`](crate::diff::UserDiff), and every diff is folded into a
//! [`UserSummary`]. Users are independent, so many histories are folded in
//! parallel.

pub mod report;
pub mod rollup;

pub use report::render_report;
pub use rollup::{
    group_by_user, pairwise_diffs, summarize_user, summarize_users, UserHistory, UserSummary,
};
