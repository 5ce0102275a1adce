//! Per-directory disk usage aggregation (`pdu`).
//!
//! This module walks a tree and streams one line per directory that directly
//! owns a non-zero amount of non-ignored file data, followed by a grand total
//! line for the whole walk.

use std::{fs, io::Write, path::Path};

use anyhow::{Result, bail};

use crate::{
    config::{DisplayOptions, ScanOptions},
    filtering::IgnoreSet,
    output::{DisplayLine, Logger},
    utils::{get_norm_path, size_to_str},
    walker::{WalkEntry, Walker},
};

/// Totals gathered by one [`DiskUsage::run`] invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UsageSummary {
    /// Sum of the sizes of every non-ignored file visited, in bytes
    pub total: u64,

    /// Number of directory lines emitted (the total line is not counted)
    pub directories: usize,

    /// Number of files that contributed to the total
    pub files: usize,
}

/// Disk usage aggregator.
///
/// Owns the ignore set and rendering options for one invocation. Each
/// directory's own files are summed into a per-directory figure; the figure
/// does not include subdirectories, which get lines of their own.
#[derive(Debug)]
pub struct DiskUsage {
    /// Compiled ignore patterns, default included
    ignore: IgnoreSet,

    /// How sizes are rendered
    display: DisplayOptions,

    logger: Logger,
}

impl DiskUsage {
    /// Create an aggregator from scanning and display options.
    ///
    /// # Errors
    ///
    /// Returns an error if an ignore pattern is not a valid glob.
    pub fn new(scan_options: &ScanOptions, display: DisplayOptions) -> Result<Self> {
        Ok(Self {
            ignore: IgnoreSet::from_options(scan_options)?,
            display,
            logger: Logger::new(scan_options.debug),
        })
    }

    /// Walk `root` and write one line per qualifying directory, then the total.
    ///
    /// A directory gets a line when it is not the root and its own
    /// non-ignored files add up to more than zero bytes. Ignored directories
    /// are skipped along with everything beneath them. Files that cannot be
    /// stat'ed are skipped.
    ///
    /// # Arguments
    ///
    /// * `root` - Directory to measure
    /// * `out` - Sink receiving the result lines as they are produced
    ///
    /// # Errors
    ///
    /// Returns an error, before writing anything, if `root` does not exist.
    /// Write failures on `out` are also returned.
    pub fn run<W: Write>(&self, root: &Path, out: &mut W) -> Result<UsageSummary> {
        if !root.exists() {
            bail!("{} does not exist", root.display());
        }

        let mut summary = UsageSummary::default();

        for mut entry in Walker::new(root, &self.ignore, &self.logger) {
            entry.sort_files_hidden_last();
            let dir_size = self.directory_size(&entry, &mut summary);

            if !entry.is_root() && dir_size > 0 {
                writeln!(out, "{}", self.line(dir_size, &entry.path, root))?;
                summary.directories += 1;
            }
        }

        writeln!(out, "{}", self.line(summary.total, root, root))?;

        Ok(summary)
    }

    /// Sum the non-ignored files directly inside `entry`, updating `summary`.
    fn directory_size(&self, entry: &WalkEntry, summary: &mut UsageSummary) -> u64 {
        let mut dir_size = 0u64;

        for name in &entry.files {
            let path = entry.child_path(name);
            if self.ignore.must_ignore(&path, &self.logger) {
                self.logger
                    .debug(format_args!("ignore sub {}", path.display()));
                continue;
            }

            match fs::metadata(&path) {
                Ok(metadata) => {
                    dir_size = dir_size.saturating_add(metadata.len());
                    summary.total = summary.total.saturating_add(metadata.len());
                    summary.files += 1;
                }
                Err(err) => {
                    self.logger
                        .debug(format_args!("cannot stat {}: {err}", path.display()));
                }
            }
        }

        dir_size
    }

    /// Format a result line for `path`, anchored at `root`.
    #[must_use]
    pub fn line(&self, size: u64, path: &Path, root: &Path) -> DisplayLine {
        DisplayLine {
            size: size_to_str(size, self.display.human, self.display.digits),
            path: get_norm_path(path, root),
        }
    }
}
