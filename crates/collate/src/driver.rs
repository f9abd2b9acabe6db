//! Drives one analysis over the input files.
//!
//! The driver owns the accumulator protocol ordering: the caller
//! constructs the analysis (the init phase), the driver feeds it every
//! parsed record with files in command-line order and lines in file
//! order, then finalizes it exactly once.

use anyhow::{Context, Result};
use collate_core::Analysis;
use collate_parser::parse_record;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::debug;

/// Feed every record parsed from `input` to `analysis`.
///
/// Lines that are not records are skipped.
pub fn feed(
    analysis: &mut dyn Analysis,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read input line")?;
        match parse_record(&line) {
            Some(item) => analysis.update(&item, out)?,
            None => debug!(line = %line, "skipped non-record line"),
        }
    }
    Ok(())
}

/// Run `analysis` over `paths` in order, then finalize it.
pub fn run(analysis: &mut dyn Analysis, paths: &[PathBuf], out: &mut dyn Write) -> Result<()> {
    for path in paths {
        debug!(path = %path.display(), "reading input file");
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        feed(analysis, &mut BufReader::new(file), out)?;
    }
    analysis.finalize(out)?;
    Ok(())
}
