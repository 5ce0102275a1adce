//! `pdu`: print per-directory disk usage under a path.
//!
//! ```bash
//! pdu <path> [-H|--human] [-i|--ignore PATTERN...] [-d|--debug]
//! ```
//!
//! Each directory whose own files add up to more than zero bytes gets one
//! line; the last line is the grand total for the whole tree.

use std::io::{self, Write};
use std::process::exit;

use anyhow::Result;
use clap::Parser;
use pdu_tools::{cli::PduCli, output::print_error, usage::DiskUsage};

/// Entry point for `pdu`.
///
/// Errors are printed as `[ERROR] <message>` and the process exits with a
/// non-zero status.
fn main() {
    if let Err(err) = inner_main() {
        print_error(&err);

        exit(1);
    }
}

/// Parse arguments, walk the tree and stream the result lines to stdout.
///
/// # Errors
///
/// Returns errors for invalid ignore patterns, a missing root path, or
/// failures writing to stdout.
fn inner_main() -> Result<()> {
    let args = PduCli::parse();
    let usage = DiskUsage::new(&args.scan_options(), args.display_options())?;

    let mut stdout = io::stdout().lock();
    usage.run(args.path(), &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
