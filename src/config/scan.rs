//! Scanning configuration for directory traversal.
//!
//! This module defines the options that control how directories are walked
//! and which entries are left out.

/// Configuration for directory walking behavior.
///
/// One value is built per invocation and owned by the caller; the ignore
/// patterns are never shared between invocations.
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// Whether to print `[DEBUG]` diagnostics while walking
    pub debug: bool,

    /// Caller-supplied glob patterns; the built-in default is appended later
    pub ignore: Vec<String>,
}
