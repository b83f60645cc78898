//! statdelta CLI
//!
//! Command-line interface for diffing character snapshots and rolling up
//! snapshot histories

use clap::{Parser, Subcommand, ValueEnum};
use statdelta_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "statdelta")]
#[command(about = "statdelta - Character snapshot diffs and training estimates", long_about = None)]
struct Cli {
    /// Log output format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Diff two snapshots of the same user
    Diff(commands::diff::DiffArgs),
    /// Roll a snapshot history up into per-user totals
    Report(commands::report::ReportArgs),
}

fn main() {
    let cli = Cli::parse();
    init(cli.log_format.into());

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Report(args) => commands::report::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
