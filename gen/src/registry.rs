//! Option registry extraction from descriptor-table source text.
//!
//! The registry is a table of literal 5-tuples: five consecutive
//! double-quoted strings in the order (long flag, short flag, argument
//! placeholder, description, category). The whitespace between fields may
//! span a line break, so rows wrapped across two physical lines still
//! match. Rows are returned in source order and duplicate long flags are
//! kept as-is.

use std::sync::LazyLock;

use optdoc_core::OptionDescriptor;
use regex::Regex;
use tracing::debug;

static ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{"([^"]+)",\s*"([^"]*)",\s*"([^"]*)",\s*"([^"]*)",\s*"([^"]*)"\}"#)
        .expect("static regex must compile")
});

/// Result of scanning an option-registry source.
#[derive(Debug, Default)]
pub struct RegistryScan {
    /// Descriptor rows in source order.
    pub entries: Vec<OptionDescriptor>,
    /// Row-like lines that were not covered by any match.
    pub warnings: Vec<String>,
}

/// Scans registry text for 5-tuple descriptor rows.
///
/// # Examples
///
/// ```
/// use optdoc_gen::registry::scan_registry;
///
/// let src = r#"
///     {"--refresh-rate", "-r", "<ms>", "Polling interval", "General"},
///     {"--no-color", "", "", "Disable colored output", "Display"},
/// "#;
/// let scan = scan_registry(src);
/// assert_eq!(scan.entries.len(), 2);
/// assert_eq!(scan.entries[0].long_flag, "--refresh-rate");
/// assert_eq!(scan.entries[1].category, "Display");
/// ```
pub fn scan_registry(text: &str) -> RegistryScan {
    let mut scan = RegistryScan::default();
    let mut covered: Vec<(usize, usize)> = Vec::new();

    for caps in ROW.captures_iter(text) {
        let m = caps.get(0).expect("capture group 0 always exists");
        covered.push((m.start(), m.end()));
        scan.entries.push(OptionDescriptor::new(
            &caps[1], &caps[2], &caps[3], &caps[4], &caps[5],
        ));
    }

    // Row-like lines outside every match are candidates for strict-mode
    // reporting (e.g. a tuple with a missing field).
    let mut offset = 0usize;
    for line in text.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed.starts_with("{\"") {
            let brace_at = offset + (line.len() - line.trim_start().len());
            let inside = covered
                .iter()
                .any(|&(start, end)| brace_at >= start && brace_at < end);
            if !inside {
                scan.warnings
                    .push(format!("unrecognized registry row: {trimmed}"));
            }
        }
        offset += line.len();
    }

    debug!(
        rows = scan.entries.len(),
        warnings = scan.warnings.len(),
        "scanned option registry"
    );
    scan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row_fields_in_order() {
        let scan = scan_registry(r#"{"--ignore", "-I", "<dir>", "Directory to ignore", "Basics"}"#);
        assert_eq!(scan.entries.len(), 1);
        let row = &scan.entries[0];
        assert_eq!(row.long_flag, "--ignore");
        assert_eq!(row.short_flag, "-I");
        assert_eq!(row.arg_placeholder, "<dir>");
        assert_eq!(row.description, "Directory to ignore");
        assert_eq!(row.category, "Basics");
    }

    #[test]
    fn test_row_wrapped_across_two_lines() {
        let src = "{\"--rescan-new\", \"-w\", \"<min>\", \"Rescan every N minutes\",\n     \"Basics\"},";
        let scan = scan_registry(src);
        assert_eq!(scan.entries.len(), 1);
        assert_eq!(scan.entries[0].category, "Basics");
    }

    #[test]
    fn test_source_order_preserved() {
        let src = r#"
            {"--cli", "-c", "", "Use console output", "Process"},
            {"--silent", "-s", "", "Disable console output", "Process"},
        "#;
        let scan = scan_registry(src);
        let flags: Vec<&str> = scan.entries.iter().map(|e| e.long_flag.as_str()).collect();
        assert_eq!(flags, vec!["--cli", "--silent"]);
    }

    #[test]
    fn test_duplicate_long_flags_kept() {
        let src = r#"
            {"--theme", "", "<file>", "Theme file", "Display"},
            {"--theme", "", "<file>", "Theme file (alias row)", "Display"},
        "#;
        let scan = scan_registry(src);
        assert_eq!(scan.entries.len(), 2);
    }

    #[test]
    fn test_short_row_warned_not_parsed() {
        let scan = scan_registry(r#"{"--broken", "-b", "Missing fields"}"#);
        assert!(scan.entries.is_empty());
        assert_eq!(scan.warnings.len(), 1);
    }

    #[test]
    fn test_empty_long_flag_does_not_match() {
        // The first field requires at least one character.
        let scan = scan_registry(r#"{"", "-x", "", "desc", "Cat"}"#);
        assert!(scan.entries.is_empty());
    }
}
