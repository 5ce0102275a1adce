//! Entry counting (`plist`).
//!
//! Counts every non-ignored file and subdirectory under a root with the same
//! walk and ignore rules as the disk usage aggregator, without sizing anything.

use std::path::Path;

use anyhow::{Result, bail};

use crate::{config::ScanOptions, filtering::IgnoreSet, output::Logger, walker::Walker};

/// Tallies gathered by one [`EntryCounter::run`] invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountSummary {
    /// Non-ignored files
    pub files: u64,

    /// Non-ignored subdirectories, counted at their parent's level
    pub directories: u64,
}

impl CountSummary {
    /// Files and directories together; this is what `plist` prints.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.files + self.directories
    }
}

/// Counts files and directories under a root.
#[derive(Debug)]
pub struct EntryCounter {
    ignore: IgnoreSet,
    logger: Logger,
}

impl EntryCounter {
    /// Create a counter from scanning options.
    ///
    /// # Errors
    ///
    /// Returns an error if an ignore pattern is not a valid glob.
    pub fn new(scan_options: &ScanOptions) -> Result<Self> {
        Ok(Self {
            ignore: IgnoreSet::from_options(scan_options)?,
            logger: Logger::new(scan_options.debug),
        })
    }

    /// Count the entries under `root`.
    ///
    /// For every visited directory, each immediate file and subdirectory whose
    /// full path is not ignored adds one. A subdirectory is counted by its
    /// parent even when it is not descended into (symlinked directories).
    ///
    /// # Errors
    ///
    /// Returns an error if `root` does not exist.
    pub fn run(&self, root: &Path) -> Result<CountSummary> {
        if !root.exists() {
            bail!("{} does not exist", root.display());
        }

        let mut summary = CountSummary::default();

        for entry in Walker::new(root, &self.ignore, &self.logger) {
            for name in &entry.files {
                if self.counts(&entry.child_path(name)) {
                    self.logger
                        .debug(format_args!("file: {}", name.to_string_lossy()));
                    summary.files += 1;
                }
            }

            for name in &entry.dirs {
                if self.counts(&entry.child_path(name)) {
                    self.logger
                        .debug(format_args!("dir: {}", name.to_string_lossy()));
                    summary.directories += 1;
                }
            }
        }

        Ok(summary)
    }

    fn counts(&self, path: &Path) -> bool {
        if self.ignore.must_ignore(path, &self.logger) {
            self.logger
                .debug(format_args!("ignore sub {}", path.display()));
            return false;
        }
        true
    }
}
