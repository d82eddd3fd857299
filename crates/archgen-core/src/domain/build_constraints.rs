//! Approximate build-constraint filter.
//!
//! Not a constraint-expression evaluator: a file is kept when any requested
//! tag occurs as a substring of its constraint line. `!integration` therefore
//! matches `integration`.

/// Lines inspected for a constraint, counted from the top of the file.
pub const SCAN_LINES: usize = 11;

const CONSTRAINT_PREFIXES: [&str; 2] = ["//go:build", "// +build"];

/// First constraint line within the scanned header, trimmed.
pub fn constraint_line(source: &str) -> Option<&str> {
    source
        .lines()
        .take(SCAN_LINES)
        .map(str::trim)
        .find(|line| CONSTRAINT_PREFIXES.iter().any(|p| line.starts_with(p)))
}

/// Whether a file with this source should be analyzed for `tags`.
///
/// With no tags every file is included, as is every file without a
/// constraint line.
pub fn includes<S: AsRef<str>>(tags: &[S], source: &str) -> bool {
    if tags.is_empty() {
        return true;
    }
    match constraint_line(source) {
        Some(line) => tags.iter().any(|tag| line.contains(tag.as_ref())),
        None => true,
    }
}

/// Split a comma-separated tag list, dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
