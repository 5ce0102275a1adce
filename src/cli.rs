//! Command-line interface definitions for `pdu` and `plist`.
//!
//! Both tools take a required path plus shared scanning arguments, parsed with
//! [clap](https://docs.rs/clap/). Helper methods turn the parsed arguments
//! into the option structs consumed by the library.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{DisplayOptions, ScanOptions};

/// Arguments shared by both tools for controlling the walk.
#[derive(Debug, Parser)]
struct ScanningArgs {
    /// Glob patterns of paths to leave out
    ///
    /// Matched against the full path, so `*` also spans `/`
    /// (e.g. `*/.git*`). Takes one or more patterns and may be repeated.
    #[arg(short = 'i', long, num_args = 1.., action = clap::ArgAction::Append)]
    ignore: Vec<String>,

    /// Print per-path match details prefixed with [DEBUG]
    #[arg(short = 'd', long)]
    debug: bool,
}

impl ScanningArgs {
    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            debug: self.debug,
            ignore: self.ignore.clone(),
        }
    }
}

/// Command-line interface of `pdu`.
#[derive(Debug, Parser)]
#[command(name = "pdu")]
#[command(about = "Show the size of the files directly inside each directory, plus a grand total")]
#[command(version)]
pub struct PduCli {
    /// Directory to measure
    path: PathBuf,

    /// Print sizes with binary unit suffixes (K, M, G, T, P)
    #[arg(short = 'H', long)]
    human: bool,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl PduCli {
    /// Root directory to walk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scanning options, with a fresh copy of the ignore patterns.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use clap::Parser;
    /// # use pdu_tools::cli::PduCli;
    /// let args = PduCli::parse_from(["pdu", ".", "--ignore", "*/.git*", "--debug"]);
    /// let options = args.scan_options();
    /// assert!(options.debug);
    /// assert_eq!(options.ignore, vec!["*/.git*".to_string()]);
    /// ```
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        self.scanning.scan_options()
    }

    /// Rendering options for the size column.
    #[must_use]
    pub const fn display_options(&self) -> DisplayOptions {
        DisplayOptions::new(self.human)
    }
}

/// Command-line interface of `plist`.
#[derive(Debug, Parser)]
#[command(name = "plist")]
#[command(about = "Count the files and directories under a path")]
#[command(version)]
pub struct PlistCli {
    /// Directory to count
    path: PathBuf,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl PlistCli {
    /// Root directory to walk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scanning options, with a fresh copy of the ignore patterns.
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        self.scanning.scan_options()
    }
}
