//! tcsort - sort spreadsheet test cases into components by signal keyword
//!
//! Reads a test-case table and a Signal/Component reference table, and
//! writes the grouped report as xlsx, csv and html.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tcsort::{commands, errors, logging};
use tcsort_common::{OutputFormat, SortConfig, UnmatchedPolicy};
use tracing::{error, info};

// Version is embedded at build time
const VERSION: &str = env!("TCSORT_VERSION");

#[derive(Parser)]
#[command(name = "tcsort")]
#[command(about = "Sort spreadsheet test cases into components by signal keyword", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Config file (default: ./tcsort.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a test-case table and write the reports
    Convert {
        /// Test-case table (xlsx or csv)
        input: PathBuf,

        /// Signal/Component reference table
        #[arg(long)]
        keywords: Option<PathBuf>,

        /// Directory for the generated reports
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Report file name without extension
        #[arg(long)]
        stem: Option<String>,

        /// Report formats to write
        #[arg(long = "format", value_enum, value_delimiter = ',')]
        formats: Vec<OutputFormat>,

        /// Rows with steps but no known signal
        #[arg(long, value_enum)]
        unmatched: Option<UnmatchedPolicy>,

        /// Print a JSON summary instead of the listing
        #[arg(long)]
        json: bool,
    },

    /// List the signal → component table
    Keywords {
        /// Signal/Component reference table
        #[arg(long)]
        keywords: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = &result {
        let message = errors::user_message(e);
        error!("{}", message);
        eprintln!("{}", message);
    }
    ExitCode::from(errors::exit_status(&result) as u8)
}

fn run(cli: Cli) -> Result<()> {
    let mut config = SortConfig::discover(cli.config.as_deref())?;

    match &cli.command {
        Commands::Convert {
            keywords,
            out_dir,
            stem,
            formats,
            unmatched,
            ..
        } => {
            if let Some(path) = keywords {
                config.keywords.path = path.clone();
            }
            if let Some(dir) = out_dir {
                config.output.dir = dir.clone();
            }
            if let Some(stem) = stem {
                config.output.stem = stem.clone();
            }
            if !formats.is_empty() {
                config.output.formats = formats.clone();
            }
            if let Some(policy) = unmatched {
                config.classify.unmatched = *policy;
            }
        }
        Commands::Keywords {
            keywords: Some(path),
            ..
        } => config.keywords.path = path.clone(),
        _ => {}
    }

    let level = if cli.quiet { "warn" } else { config.log.level.as_str() };
    logging::init(level, config.log.file.as_deref())?;
    info!("Action: tcsort v{} started", VERSION);

    match cli.command {
        Commands::Convert { input, json, .. } => commands::convert(&config, &input, json),
        Commands::Keywords { json, .. } => commands::keywords(&config, json),
        Commands::Config => commands::show_config(&config),
    }
}
