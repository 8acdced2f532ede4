//! Default table extraction from field-declaration source text.
//!
//! Recognizes three line-oriented lexical patterns, in precedence order:
//! equals-initialized declarations, brace-initialized declarations, and
//! bare declarations with no initializer. The scans are independent and
//! merged with a do-not-overwrite step, so the first capture of an
//! identifier always wins. Declarations that fit none of the patterns
//! (multi-line expressions, macros, method prototypes) are skipped
//! without error; suspicious skips are collected as warnings for strict
//! mode.

use std::sync::LazyLock;

use optdoc_core::DefaultTable;
use regex::Regex;
use tracing::debug;

static EQ_DECL: LazyLock<Regex> = LazyLock::new(|| {
    // Value captures exclude newlines: a declaration must fit one logical
    // line, multi-line expressions fail to match and the field stays absent.
    Regex::new(r"(?m)^\s*[\w:<>\s,{}]+\s+(\w+)[ \t]*=[ \t]*([^;\n]+);")
        .expect("static regex must compile")
});
static BRACE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*[\w:<>\s,{}]+\s+(\w+)\{([^}\n]+)\};").expect("static regex must compile")
});
static BARE_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[\w:<>\s,{}]+\s+(\w+);").expect("static regex must compile"));

/// Result of scanning a defaults-declaration source.
#[derive(Debug, Default)]
pub struct DefaultScan {
    /// Field identifier to raw default literal.
    pub table: DefaultTable,
    /// Declaration-like lines that matched no pattern.
    pub warnings: Vec<String>,
}

/// Scans field-declaration text and builds the `field_id → raw_default`
/// table.
///
/// # Examples
///
/// ```
/// use optdoc_gen::defaults::scan_defaults;
///
/// let src = "\
/// struct Options {
///     int refresh_ms = 1000;
///     std::chrono::milliseconds poll{250};
///     std::string log_file;
/// };
/// ";
/// let scan = scan_defaults(src);
/// assert_eq!(scan.table.get("refresh_ms"), Some("1000"));
/// assert_eq!(scan.table.get("poll"), Some("250"));
/// assert_eq!(scan.table.get("log_file"), Some(""));
/// ```
pub fn scan_defaults(text: &str) -> DefaultScan {
    let mut scan = DefaultScan::default();

    // Precedence order: an identifier captured by an earlier scan is never
    // overwritten by a later one.
    for caps in EQ_DECL.captures_iter(text) {
        scan.table
            .insert_if_absent(&caps[1], caps[2].trim());
    }
    for caps in BRACE_DECL.captures_iter(text) {
        scan.table
            .insert_if_absent(&caps[1], caps[2].trim());
    }
    for caps in BARE_DECL.captures_iter(text) {
        scan.table.insert_if_absent(&caps[1], "");
    }

    for line in text.lines() {
        if looks_like_unmatched_declaration(line) {
            scan.warnings
                .push(format!("unrecognized declaration: {}", line.trim()));
        }
    }

    debug!(
        fields = scan.table.len(),
        warnings = scan.warnings.len(),
        "scanned defaults source"
    );
    scan
}

/// Heuristic for strict-mode reporting: the line ends like a declaration
/// but matched none of the three patterns. Preprocessor lines, comments,
/// closing braces, and function prototypes are excluded.
fn looks_like_unmatched_declaration(line: &str) -> bool {
    let trimmed = line.trim();
    if !trimmed.ends_with(';')
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with('}')
        || trimmed.contains('(')
    {
        return false;
    }
    !(EQ_DECL.is_match(line) || BRACE_DECL.is_match(line) || BARE_DECL.is_match(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_initializer() {
        let scan = scan_defaults("    int interval = 30;\n");
        assert_eq!(scan.table.get("interval"), Some("30"));
    }

    #[test]
    fn test_brace_initializer() {
        let scan = scan_defaults("    std::chrono::milliseconds refresh_ms{250};\n");
        assert_eq!(scan.table.get("refresh_ms"), Some("250"));
    }

    #[test]
    fn test_bare_declaration_captures_empty() {
        let scan = scan_defaults("    std::string log_file;\n");
        assert_eq!(scan.table.get("log_file"), Some(""));
    }

    #[test]
    fn test_explicit_initializer_not_clobbered_by_bare_scan() {
        // The bare pattern also matches nothing here because the `=` form
        // consumes the line first, but even a duplicate declaration later
        // in the file must not overwrite the captured initializer.
        let src = "    bool hash_check = true;\n    bool hash_check;\n";
        let scan = scan_defaults(src);
        assert_eq!(scan.table.get("hash_check"), Some("true"));
    }

    #[test]
    fn test_templated_type_with_equals() {
        let scan = scan_defaults("    std::vector<std::string> names = {};\n");
        assert_eq!(scan.table.get("names"), Some("{}"));
    }

    #[test]
    fn test_expression_default_kept_verbatim() {
        let scan = scan_defaults("    size_t limit = 4 * 1024;\n");
        assert_eq!(scan.table.get("limit"), Some("4 * 1024"));
    }

    #[test]
    fn test_multiline_expression_is_absent_not_error() {
        let src = "    int x =\n        compute();\n";
        let scan = scan_defaults(src);
        assert_eq!(scan.table.get("x"), None);
    }

    #[test]
    fn test_function_prototype_not_warned() {
        let scan = scan_defaults("Options parse_options(int argc, char* argv[]);\n");
        assert!(scan.warnings.is_empty());
    }

    #[test]
    fn test_first_match_wins_for_duplicates() {
        let src = "    int interval = 30;\n    int interval = 60;\n";
        let scan = scan_defaults(src);
        assert_eq!(scan.table.get("interval"), Some("30"));
    }
}
