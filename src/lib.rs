//! # pdu-tools
//!
//! Naive disk usage and entry counting over a directory tree.
//!
//! Two command-line tools share the same walk, ignore and formatting
//! primitives:
//!
//! - `pdu` prints, for each directory, the size of the files it directly
//!   contains, followed by a grand total for the whole tree
//! - `plist` prints the number of files and directories found
//!
//! Paths can be left out with shell-glob patterns matched against the full
//! path (`*/.git*` prunes every `.git` directory). `*/.DS_Store` is always
//! ignored.
//!
//! ## Usage
//!
//! ```bash
//! # Raw byte counts
//! pdu ~/src/project
//!
//! # Human-readable sizes, skipping VCS metadata
//! pdu ~/src/project -H --ignore '*/.git*'
//!
//! # Count entries
//! plist ~/src/project -i '*/.git*' '*/target'
//! ```

pub mod cli;
pub mod config;
pub mod counter;
pub mod filtering;
pub mod output;
pub mod usage;
pub mod utils;
pub mod walker;

pub use config::{DisplayOptions, ScanOptions};
pub use counter::{CountSummary, EntryCounter};
pub use filtering::{DEFAULT_IGNORE_PATTERN, IgnoreSet, must_ignore};
pub use usage::{DiskUsage, UsageSummary};
pub use utils::{get_norm_path, size_to_str};
pub use walker::{WalkEntry, Walker};
