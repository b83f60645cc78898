//! Report command

use anyhow::Context;
use clap::Args;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

use statdelta_core::errors::{ExError, ExErrorKind};
use statdelta_core::model::decode_snapshot_value;
use statdelta_core::summary::{group_by_user, pairwise_diffs, UserHistory};
use statdelta_core::{
    log_op_end, log_op_error, log_op_start, render_report, summarize_users, Relevance, Snapshot,
    UserDiff,
};

use super::{classify, read_input};

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// JSON array of snapshots in time order, any users, any shape
    pub history: PathBuf,

    /// Also list every relevant interval with its tags and events
    #[arg(long)]
    pub relevant_only: bool,

    /// Print JSON instead of the text table
    #[arg(long)]
    pub json: bool,
}

fn load_history(path: &Path) -> anyhow::Result<Vec<Snapshot>> {
    let bytes =
        read_input("report", path).with_context(|| format!("reading {}", path.display()))?;
    let document: Value = serde_json::from_slice(&bytes)
        .map_err(|e| {
            ExError::new(ExErrorKind::InvalidInput)
                .with_op("report")
                .with_message(format!("history is not valid JSON: {}", e))
        })
        .with_context(|| format!("parsing {}", path.display()))?;
    let Value::Array(entries) = document else {
        let err = ExError::new(ExErrorKind::InvalidInput)
            .with_op("report")
            .with_message("history must hold a JSON array of snapshots");
        return Err(anyhow::Error::new(err).context(format!("parsing {}", path.display())));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            decode_snapshot_value(entry)
                .map_err(|e| ExError::from(e).with_op("report"))
                .with_context(|| format!("snapshot #{} in {}", index, path.display()))
        })
        .collect()
}

/// One interval worth listing, with its classification.
struct Interval {
    diff: UserDiff,
    relevance: Relevance,
}

impl Interval {
    fn to_json(&self) -> Value {
        json!({
            "userId": self.diff.user_id,
            "tags": self.relevance.tags(),
            "energyTrained": self.diff.energy_trained(),
            "events": self.diff.events(),
            "diff": &self.diff,
        })
    }
}

fn relevant_intervals(histories: &[UserHistory]) -> Vec<Interval> {
    histories
        .iter()
        .flat_map(|h| pairwise_diffs(&h.snapshots))
        .filter_map(|diff| {
            let relevance = diff.is_relevant();
            (!relevance.is_empty()).then_some(Interval { diff, relevance })
        })
        .collect()
}

pub fn execute(args: ReportArgs) -> anyhow::Result<()> {
    log_op_start!("report", relevant_only = args.relevant_only);
    let start = std::time::Instant::now();

    run(args).map_err(|e| {
        log_op_error!(
            "report",
            classify("report", &e),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!("report", duration_ms = start.elapsed().as_millis() as u64);
    Ok(())
}

fn run(args: ReportArgs) -> anyhow::Result<()> {
    let snapshots = load_history(&args.history)?;
    tracing::debug!(snapshot_count = snapshots.len(), "history loaded");

    let histories = group_by_user(snapshots);
    let summaries = summarize_users(&histories);
    let intervals = if args.relevant_only {
        relevant_intervals(&histories)
    } else {
        Vec::new()
    };

    if args.json {
        let mut out = json!({ "summaries": summaries });
        if args.relevant_only {
            out["relevant"] = intervals.iter().map(Interval::to_json).collect();
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print!("{}", render_report(&summaries));
    if args.relevant_only {
        println!();
        for interval in &intervals {
            println!(
                "{} [{}] {}e",
                interval.diff.user_id,
                interval.relevance.labels().join(", "),
                interval.diff.energy_trained()
            );
            for event in interval.diff.events() {
                println!("  - {}", event);
            }
        }
    }
    Ok(())
}
