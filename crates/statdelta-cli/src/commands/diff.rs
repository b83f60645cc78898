//! Diff command

use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};

use statdelta_core::errors::ExError;
use statdelta_core::model::decode_snapshot;
use statdelta_core::{log_op_end, log_op_error, log_op_start, Snapshot, UserDiff};

use super::{classify, read_input};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Earlier snapshot (raw or normalized JSON)
    pub earlier: PathBuf,

    /// Later snapshot of the same user
    pub later: PathBuf,

    /// Print the diff document as JSON instead of tags and events
    #[arg(long)]
    pub json: bool,
}

/// Read and decode one snapshot. Errors carry `user_id` once it is known.
fn load(path: &Path, user_id: Option<u64>) -> anyhow::Result<Snapshot> {
    let tag = |err: ExError| match user_id {
        Some(id) => err.with_user_id(id),
        None => err,
    };
    let bytes = read_input("diff", path)
        .map_err(tag)
        .with_context(|| format!("reading {}", path.display()))?;
    decode_snapshot(&bytes)
        .map_err(|e| tag(ExError::from(e).with_op("diff")))
        .with_context(|| format!("decoding {}", path.display()))
}

pub fn execute(args: DiffArgs) -> anyhow::Result<()> {
    log_op_start!("diff");
    let start = std::time::Instant::now();

    run(args).map_err(|e| {
        log_op_error!(
            "diff",
            classify("diff", &e),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!("diff", duration_ms = start.elapsed().as_millis() as u64);
    Ok(())
}

fn run(args: DiffArgs) -> anyhow::Result<()> {
    let earlier = load(&args.earlier, None)?;
    let later = load(&args.later, Some(earlier.user_id))?;
    if earlier.user_id != later.user_id {
        tracing::warn!(
            earlier = earlier.user_id,
            later = later.user_id,
            "snapshots belong to different users"
        );
    }

    let diff = earlier.diff(&later);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
    } else {
        print_text(&diff);
    }
    Ok(())
}

fn print_text(diff: &UserDiff) {
    let relevance = diff.is_relevant();
    println!("user: {}", diff.user_id);
    if relevance.is_empty() {
        println!("tags: -");
    } else {
        println!("tags: {}", relevance.labels().join(", "));
    }
    println!("energy trained: {}", diff.energy_trained());
    for event in diff.events() {
        println!("  - {}", event);
    }
}
