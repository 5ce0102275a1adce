//! Top-down directory walking.
//!
//! The [`Walker`] visits a tree in pre-order with an explicit stack of pending
//! directories and yields one [`WalkEntry`] per visited directory. Only the
//! immediate children of the current directory are held in memory. Ignored
//! directories are pruned: they are not yielded and not descended into.

use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{filtering::IgnoreSet, output::Logger};

/// One visited directory with its immediate children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkEntry {
    /// Path of the directory, built by joining names onto the walk root
    pub path: PathBuf,

    /// Distance from the walk root (the root itself is 0)
    pub depth: usize,

    /// Names of non-directory children, sorted by name
    pub files: Vec<OsString>,

    /// Names of subdirectory children, including symlinks to directories
    pub dirs: Vec<OsString>,
}

impl WalkEntry {
    /// Whether this entry is the walk root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Full path of an immediate child.
    #[must_use]
    pub fn child_path(&self, name: &OsStr) -> PathBuf {
        self.path.join(name)
    }

    /// Move dot-prefixed files after the others, keeping relative order.
    pub fn sort_files_hidden_last(&mut self) {
        self.files.sort_by_key(|name| is_hidden(name));
    }
}

/// Whether a file name starts with a dot.
#[must_use]
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}

/// Pre-order directory walker with ignore pruning.
///
/// Symlinks are never followed for descent. A symlink whose target is a
/// directory is reported among [`WalkEntry::dirs`] but not walked. Directories
/// that cannot be read are yielded with whatever children could be listed.
#[derive(Debug)]
pub struct Walker<'a> {
    /// Directories still to visit, with their depth; the top is visited next
    stack: Vec<(PathBuf, usize)>,

    ignore: &'a IgnoreSet,

    logger: &'a Logger,
}

impl<'a> Walker<'a> {
    /// Start a walk at `root`.
    ///
    /// A root that is not a directory yields nothing.
    #[must_use]
    pub fn new(root: &Path, ignore: &'a IgnoreSet, logger: &'a Logger) -> Self {
        let stack = if root.is_dir() {
            vec![(root.to_path_buf(), 0)]
        } else {
            Vec::new()
        };

        Self {
            stack,
            ignore,
            logger,
        }
    }

    /// List the immediate children of `path`.
    ///
    /// Returns the entry and the subdirectories to descend into, in name order.
    fn read_dir(&self, path: PathBuf, depth: usize) -> (WalkEntry, Vec<PathBuf>) {
        let mut files = Vec::new();
        let mut dirs = Vec::new();
        let mut descend = Vec::new();

        let children = WalkDir::new(&path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for child in children {
            let child = match child {
                Ok(child) => child,
                Err(err) => {
                    self.logger
                        .debug(format_args!("cannot read {}: {err}", path.display()));
                    continue;
                }
            };

            let name = child.file_name().to_os_string();
            let file_type = child.file_type();

            if file_type.is_dir() {
                dirs.push(name);
                descend.push(child.into_path());
            } else if file_type.is_symlink() && child.path().is_dir() {
                dirs.push(name);
            } else {
                files.push(name);
            }
        }

        let entry = WalkEntry {
            path,
            depth,
            files,
            dirs,
        };

        (entry, descend)
    }
}

impl Iterator for Walker<'_> {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((dir, depth)) = self.stack.pop() {
            if self.ignore.must_ignore(&dir, self.logger) {
                self.logger
                    .debug(format_args!("ignore root {}", dir.display()));
                continue;
            }

            let (entry, descend) = self.read_dir(dir, depth);
            // reversed so the first subdirectory is visited first
            self.stack
                .extend(descend.into_iter().rev().map(|d| (d, depth + 1)));

            return Some(entry);
        }

        None
    }
}
