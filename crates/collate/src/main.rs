//! collate - run a named analysis over plain-text ledger files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use collate::driver;
use collate_core::{Analysis, Echo, Group, Sort, Sum};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;

/// Run a named analysis over plain-text ledger files.
///
/// Input lines look like `1.00 Expense X` (an expense) or
/// `+10.00 Income` (income); anything else is skipped.
#[derive(Parser, Debug)]
#[command(name = "collate")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The analysis to run
    #[command(subcommand)]
    analysis: AnalysisCmd,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum AnalysisCmd {
    /// Print every parsed record
    Echo {
        /// Input files, read in order
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
    /// Sum amounts per label, printing `label,amount` lines
    Sum {
        /// Input files, read in order
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
    /// Propagate amounts through the group tree and print the report
    Sort {
        /// Group tree specification (JSON)
        #[arg(short, long, value_name = "GROUPS")]
        groups: PathBuf,

        /// Input files, read in order
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .init();
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut stdout = io::stdout().lock();

    let (mut analysis, files): (Box<dyn Analysis>, &[PathBuf]) = match &args.analysis {
        AnalysisCmd::Echo { files } => (Box::new(Echo), files.as_slice()),
        AnalysisCmd::Sum { files } => (Box::<Sum>::default(), files.as_slice()),
        AnalysisCmd::Sort { groups, files } => (Box::new(load_sort(groups)?), files.as_slice()),
    };

    driver::run(analysis.as_mut(), files, &mut stdout)
}

/// Read and deserialize the group tree, then build the sort analysis.
fn load_sort(path: &Path) -> Result<Sort> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read group file {}", path.display()))?;
    let tree: Group = serde_json::from_str(&text)
        .with_context(|| format!("invalid group tree in {}", path.display()))?;
    Sort::new(tree).context("failed to build dataflow graph")
}
