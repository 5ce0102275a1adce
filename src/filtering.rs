//! Glob-based ignore filtering.
//!
//! This module decides whether a visited path is left out of the walk. Patterns
//! use shell-glob semantics and are matched against the full path string, so
//! `*` also spans path separators and `*/.git*` matches at any depth.

use std::path::Path;

use anyhow::{Context, Result};
use glob::Pattern;

use crate::config::ScanOptions;
use crate::output::Logger;

/// Pattern always appended to the caller's set, for OS-generated metadata.
pub const DEFAULT_IGNORE_PATTERN: &str = "*/.DS_Store";

/// Check a path against a list of compiled glob patterns.
///
/// Returns `false` for an empty pattern list. Otherwise every pattern is
/// evaluated and the per-pattern match vector is reported through `logger`.
///
/// # Arguments
///
/// * `path` - Full path of the candidate, as built during the walk
/// * `patterns` - Compiled glob patterns
/// * `logger` - Receives the `<path> -> [..]` match vector when debugging
///
/// # Returns
///
/// `true` if at least one pattern matches.
#[must_use]
pub fn must_ignore(path: &Path, patterns: &[Pattern], logger: &Logger) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let candidate = path.to_string_lossy();
    let matches: Vec<bool> = patterns.iter().map(|p| p.matches(&candidate)).collect();
    logger.debug(format_args!("{candidate} -> {matches:?}"));

    matches.contains(&true)
}

/// Ordered, immutable set of ignore patterns for one invocation.
///
/// Built fresh from the caller's patterns plus [`DEFAULT_IGNORE_PATTERN`].
#[derive(Clone, Debug)]
pub struct IgnoreSet {
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// Compile the given patterns, then append the built-in default.
    ///
    /// Patterns follow `fnmatch` rules: a run of `*` is a single `*` that
    /// spans path separators, and a `[` with no closing `]` is a literal.
    /// Duplicate patterns are kept once, at their first position.
    ///
    /// # Errors
    ///
    /// Returns an error if a translated pattern still fails to compile.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self {
            patterns: Vec::new(),
        };

        for pattern in patterns {
            set.push(pattern.as_ref())?;
        }
        set.push(DEFAULT_IGNORE_PATTERN)?;

        Ok(set)
    }

    /// Build the set from the caller's scanning options.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured pattern fails to compile.
    pub fn from_options(options: &ScanOptions) -> Result<Self> {
        Self::new(&options.ignore)
    }

    fn push(&mut self, raw: &str) -> Result<()> {
        let translated = translate(raw);
        if self.patterns.iter().any(|p| p.as_str() == translated) {
            return Ok(());
        }

        let pattern = Pattern::new(&translated)
            .with_context(|| format!("invalid ignore pattern '{raw}'"))?;
        self.patterns.push(pattern);
        Ok(())
    }

    /// Whether `path` matches any pattern in the set.
    #[must_use]
    pub fn must_ignore(&self, path: &Path, logger: &Logger) -> bool {
        must_ignore(path, &self.patterns, logger)
    }

    #[cfg(test)]
    fn raw_patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(Pattern::as_str).collect()
    }
}

/// Rewrite an `fnmatch` pattern into the `glob` crate's syntax.
///
/// `glob` reserves `**` for whole path components, so runs of `*` are
/// collapsed. Unterminated `[` classes become the escaped literal `[[]`.
/// Character classes are copied untouched.
fn translate(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '[' => {
                if let Some(end) = class_end(&chars, i) {
                    out.extend(&chars[i..=end]);
                    i = end;
                } else {
                    out.push_str("[[]");
                }
            }
            c => out.push(c),
        }
        i += 1;
    }

    out
}

/// Index of the `]` closing the class opened at `start`, if any.
///
/// A leading `!` and then a leading `]` belong to the class itself.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }

    chars.get(j..)?.iter().position(|&c| c == ']').map(|k| j + k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(patterns: &[&str]) -> Vec<Pattern> {
        patterns.iter().map(|p| Pattern::new(p).unwrap()).collect()
    }

    fn ignored(path: &str, patterns: &[&str]) -> bool {
        must_ignore(Path::new(path), &compile(patterns), &Logger::default())
    }

    #[test]
    fn test_empty_patterns_never_ignore() {
        assert!(!must_ignore(
            Path::new("/tmp/t/.DS_Store"),
            &[],
            &Logger::default()
        ));
    }

    #[test]
    fn test_star_spans_separators() {
        assert!(ignored("/tmp/t/.git", &["*/.git*"]));
        assert!(ignored("/tmp/t/.git/objects/ab/cdef", &["*/.git*"]));
        assert!(ignored("t/sub/.gitignore", &["*/.git*"]));
        assert!(ignored("t/deep/nested/file.log", &["*.log"]));
        assert!(!ignored("t/src/main.rs", &["*/.git*"]));
    }

    #[test]
    fn test_full_path_is_matched() {
        // a bare name only matches a path that is exactly that name
        assert!(!ignored("t/target", &["target"]));
        assert!(ignored("t/target", &["*/target"]));
        assert!(ignored("target", &["target"]));
    }

    #[test]
    fn test_question_mark_and_classes() {
        assert!(ignored("t/a1.txt", &["*/a?.txt"]));
        assert!(!ignored("t/a12.txt", &["*/a?.txt"]));
        assert!(ignored("t/b.tmp", &["*/[abc].tmp"]));
        assert!(!ignored("t/d.tmp", &["*/[abc].tmp"]));
        assert!(ignored("t/d.tmp", &["*/[!abc].tmp"]));
    }

    #[test]
    fn test_any_pattern_matches() {
        assert!(ignored("t/cache/x", &["*.log", "*/cache*"]));
        assert!(!ignored("t/data/x", &["*.log", "*/cache*"]));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!ignored("t/README.MD", &["*.md"]));
    }

    fn set_ignores(patterns: &[&str], path: &str) -> bool {
        IgnoreSet::new(patterns)
            .unwrap()
            .must_ignore(Path::new(path), &Logger::default())
    }

    #[test]
    fn test_ignore_set_appends_default() {
        let set = IgnoreSet::new(["*.log"]).unwrap();

        assert_eq!(set.raw_patterns(), vec!["*.log", DEFAULT_IGNORE_PATTERN]);
        assert!(set.must_ignore(Path::new("t/sub/.DS_Store"), &Logger::default()));
    }

    #[test]
    fn test_ignore_set_single_pattern_plus_default() {
        let set = IgnoreSet::new(["*/.git*"]).unwrap();

        assert_eq!(set.raw_patterns().len(), 2);
    }

    #[test]
    fn test_star_runs_act_as_single_star() {
        assert!(set_ignores(&["*.git**"], "/tmp/t/.git/objects/ab"));
        assert!(set_ignores(&["*/node_modules**"], "t/web/node_modules/left-pad/index.js"));
        assert!(set_ignores(&["**.pyc"], "t/pkg/__pycache__/mod.cpython-312.pyc"));
        assert!(!set_ignores(&["**.pyc"], "t/pkg/mod.py"));
    }

    #[test]
    fn test_double_star_slash_needs_a_separator() {
        assert!(!set_ignores(&["**/x"], "x"));
        assert!(set_ignores(&["**/x"], "t/x"));
    }

    #[test]
    fn test_unclosed_bracket_is_literal() {
        assert!(set_ignores(&["*/[unclosed"], "t/[unclosed"));
        assert!(!set_ignores(&["*/[unclosed"], "t/u"));
        assert!(set_ignores(&["*["], "t/a["));
        assert!(set_ignores(&["*/[]"], "t/[]"));
        assert!(set_ignores(&["*/[!]"], "t/[!]"));
    }

    #[test]
    fn test_closed_classes_are_kept() {
        assert!(set_ignores(&["*/[]]"], "t/]"));
        assert!(set_ignores(&["*/[!]]"], "t/a"));
        assert!(!set_ignores(&["*/[!]]"], "t/]"));
        assert!(set_ignores(&["*/[**]"], "t/*"));
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate("*.git**"), "*.git*");
        assert_eq!(translate("***/x"), "*/x");
        assert_eq!(translate("a[bc]d"), "a[bc]d");
        assert_eq!(translate("a[bc"), "a[[]bc");
        assert_eq!(translate("[!]"), "[[]!]");
        assert_eq!(translate("plain"), "plain");
    }

    #[test]
    fn test_ignore_set_without_caller_patterns() {
        let set = IgnoreSet::new(Vec::<String>::new()).unwrap();

        assert_eq!(set.raw_patterns().len(), 1);
        assert!(set.must_ignore(Path::new("t/.DS_Store"), &Logger::default()));
        assert!(!set.must_ignore(Path::new("t/a.txt"), &Logger::default()));
    }

    #[test]
    fn test_ignore_set_drops_duplicates() {
        let set = IgnoreSet::new(["*.log", "*.log", "**.log", DEFAULT_IGNORE_PATTERN]).unwrap();

        assert_eq!(set.raw_patterns(), vec!["*.log", DEFAULT_IGNORE_PATTERN]);
    }

    #[test]
    fn test_ignore_set_from_options_is_fresh() {
        let options = ScanOptions {
            debug: false,
            ignore: vec!["*/.git*".to_string()],
        };

        let first = IgnoreSet::from_options(&options).unwrap();
        let second = IgnoreSet::from_options(&options).unwrap();

        assert_eq!(first.raw_patterns().len(), 2);
        assert_eq!(second.raw_patterns().len(), 2);
        assert_eq!(options.ignore.len(), 1);
    }
}
