//! `plist`: count the files and directories under a path.
//!
//! ```bash
//! plist <path> [-i|--ignore PATTERN...] [-d|--debug]
//! ```

use std::process::exit;

use anyhow::Result;
use clap::Parser;
use pdu_tools::{cli::PlistCli, counter::EntryCounter, output::print_error};

fn main() {
    if let Err(err) = inner_main() {
        print_error(&err);

        exit(1);
    }
}

/// Parse arguments, count entries and print the total.
fn inner_main() -> Result<()> {
    let args = PlistCli::parse();
    let counter = EntryCounter::new(&args.scan_options())?;

    let summary = counter.run(args.path())?;
    println!("{}", summary.total());

    Ok(())
}
