//! carbonledger command line
//!
//! Calculates a Scope 1/2/3 inventory from a TOML session file and prints or
//! exports the results.
//!
//! # Usage
//!
//! ```bash
//! carbonledger calculate session.toml --config carbonledger.toml
//! carbonledger export session.toml --out-dir reports/ --format all
//! carbonledger factors --category electricity
//! ```

mod output;

use carbonledger_core::config::Config;
use carbonledger_core::errors::CarbonError;
use carbonledger_core::factors::FactorCategory;
use carbonledger_core::session::Session;
use carbonledger_report::csv_export::export_csv;
use carbonledger_report::html::export_html;
use carbonledger_report::json::{export_json, to_json};
use carbonledger_report::{ReportContext, ReportError};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Greenhouse-gas inventory calculator
#[derive(Parser, Debug)]
#[command(name = "carbonledger", version)]
#[command(about = "Calculate Scope 1, 2 and 3 emissions from activity data")]
struct Args {
    /// Configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate and print the inventory for a session file
    Calculate {
        session: PathBuf,

        /// Print the JSON report instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Write report files for a session
    Export {
        session: PathBuf,

        /// Directory the reports are written to
        #[arg(short, long)]
        out_dir: PathBuf,

        #[arg(short, long, value_enum, default_value_t = ExportFormat::All)]
        format: ExportFormat,
    },
    /// List emission factors
    Factors {
        /// Only list one category, e.g. "fuel" or "hotel"
        #[arg(long, value_parser = parse_category)]
        category: Option<FactorCategory>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ExportFormat {
    Csv,
    Json,
    Html,
    All,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Carbon(#[from] CarbonError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn parse_category(s: &str) -> Result<FactorCategory, String> {
    FactorCategory::ALL
        .into_iter()
        .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| {
            let names: Vec<_> = FactorCategory::ALL.iter().map(|c| c.name()).collect();
            format!("unknown category '{s}', expected one of: {}", names.join(", "))
        })
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    match path {
        Some(path) => Ok(Config::from_path(path)?),
        None => Ok(Config::default()),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;
    let registry = config.build_registry();
    debug!(factors = registry.len(), "Built factor registry");

    match args.command {
        Command::Calculate { session, json } => {
            let session = Session::from_path(&session)?;
            let inventory = session.calculate(&registry, &config.engine)?;
            let ctx = ReportContext::new(
                &inventory,
                session.organization(),
                &config,
                chrono::Local::now().naive_local(),
            );
            if json {
                println!("{}", to_json(&ctx)?);
            } else {
                print!("{}", output::render_results(&ctx));
            }
        }
        Command::Export {
            session,
            out_dir,
            format,
        } => {
            let session = Session::from_path(&session)?;
            let inventory = session.calculate(&registry, &config.engine)?;
            let ctx = ReportContext::new(
                &inventory,
                session.organization(),
                &config,
                chrono::Local::now().naive_local(),
            );

            let mut written = Vec::new();
            if matches!(format, ExportFormat::Csv | ExportFormat::All) {
                written.extend(export_csv(&out_dir, &inventory)?);
            }
            if matches!(format, ExportFormat::Json | ExportFormat::All) {
                written.push(export_json(&out_dir, &ctx)?);
            }
            if matches!(format, ExportFormat::Html | ExportFormat::All) {
                written.push(export_html(&out_dir, &ctx)?);
            }
            for path in written {
                println!("Wrote {}", path.display());
            }
        }
        Command::Factors { category } => {
            print!("{}", output::render_factors(&registry, category));
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
