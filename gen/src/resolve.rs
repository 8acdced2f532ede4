//! Long-flag to field-identifier resolution.
//!
//! Internal field names frequently do not match the public flag spelling:
//! multi-word flags collapse onto one field, and boolean "disable" flags
//! are stored as the enable-state of a differently named field. An
//! explicit [`OverrideMap`] handles those cases; everything else falls
//! back to a deterministic transform (strip `--`, `-` → `_`).
//!
//! Negation-prefixed flags (`--no-…`, `--dont-…`) invert semantics: their
//! displayed default is derived from the *base* feature's default rather
//! than their own field.

use std::collections::HashMap;

use optdoc_core::DefaultTable;

use crate::error::{GenError, Result};
use crate::normalize;

/// Immutable lookup table mapping long flags to field identifiers.
///
/// A value of `None` is the no-field sentinel: the flag has no backing
/// configuration field and no meaningful default (pure action flags).
///
/// # Examples
///
/// ```
/// use optdoc_gen::resolve::OverrideMap;
///
/// let map = OverrideMap::builtin();
/// assert_eq!(map.lookup("--refresh-rate"), Some(Some("refresh_ms")));
/// assert_eq!(map.lookup("--made-up-flag"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OverrideMap {
    map: HashMap<String, Option<String>>,
}

impl OverrideMap {
    /// Creates an empty map; every flag resolves through the fallback
    /// transform.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in override table for the monitored project's sources.
    /// Covers every flag whose internal field name differs from its public
    /// spelling.
    pub fn builtin() -> Self {
        let mut map = Self::empty();
        for (flag, field) in [
            ("--refresh-rate", "refresh_ms"),
            ("--recursive", "recursive_scan"),
            ("--ignore", "ignore_dirs"),
            ("--include-dir", "include_dirs"),
            ("--attach", "attach_name"),
            ("--background", "run_background"),
            ("--respawn-limit", "respawn_max"),
            ("--max-runtime", "runtime_limit"),
            ("--print-skipped", "cli_print_skipped"),
            ("--keep-first", "keep_first_valid"),
            ("--cpu-poll", "cpu_poll_sec"),
            ("--mem-poll", "mem_poll_sec"),
            ("--thread-poll", "thread_poll_sec"),
            ("--cpu-percent", "cpu_percent_limit"),
            ("--cpu-cores", "cpu_core_mask"),
            ("--dump-large", "dump_threshold"),
            ("--help", "show_help"),
            ("--hide-date-time", "show_datetime_line"),
            ("--hide-header", "show_header"),
            ("--row-order", "sort_mode"),
            ("--color", "custom_color"),
            ("--theme", "theme_file"),
            ("--single-thread", "concurrency"),
            ("--threads", "concurrency"),
            ("--syslog", "use_syslog"),
            ("--verbose", "log_level"),
            ("--version", "print_version"),
            ("--vmem", "show_vmem"),
            ("--discard-dirty", "force_pull"),
            ("--list-daemons", "list_services"),
        ] {
            map.insert(flag, Some(field));
        }
        map
    }

    /// Parses an override map from JSON: an object of
    /// `"--flag": "field_id"` pairs, where a `null` value is the no-field
    /// sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Json`] for malformed JSON and
    /// [`GenError::FlagMap`] when the document is not a flat object of
    /// strings and nulls.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let obj = value
            .as_object()
            .ok_or_else(|| GenError::FlagMap("top level must be an object".to_string()))?;

        let mut map = Self::empty();
        for (flag, field) in obj {
            match field {
                serde_json::Value::String(s) => map.insert(flag, Some(s)),
                serde_json::Value::Null => map.insert(flag, None),
                other => {
                    return Err(GenError::FlagMap(format!(
                        "value for '{flag}' must be a string or null, got {other}"
                    )));
                }
            }
        }
        Ok(map)
    }

    /// Adds or replaces an entry. `None` marks the no-field sentinel.
    pub fn insert(&mut self, long_flag: &str, field_id: Option<&str>) {
        self.map
            .insert(long_flag.to_string(), field_id.map(String::from));
    }

    /// Looks up a flag. The outer `Option` distinguishes "no override"
    /// from the inner no-field sentinel.
    pub fn lookup(&self, long_flag: &str) -> Option<Option<&str>> {
        self.map.get(long_flag).map(|f| f.as_deref())
    }
}

/// Resolves a long flag to its field identifier.
///
/// An override hit wins outright (including the `None` sentinel);
/// otherwise the identifier is the flag without its leading `--` and with
/// every `-` replaced by `_`.
pub fn resolve_field(long_flag: &str, overrides: &OverrideMap) -> Option<String> {
    if let Some(field) = overrides.lookup(long_flag) {
        return field.map(String::from);
    }
    Some(fallback_field(long_flag))
}

fn fallback_field(long_flag: &str) -> String {
    long_flag
        .strip_prefix("--")
        .unwrap_or(long_flag)
        .replace('-', "_")
}

/// Computes the display default for a resolved flag.
///
/// Negation-prefixed flags look up the base feature's default: a base of
/// literal `true` yields `false (feature enabled)` (the positive feature
/// is on by default and this flag must be passed to disable it); any
/// other outcome yields plain `false`. Everything else normalizes the
/// field's own raw default.
pub fn display_default(
    long_flag: &str,
    field_id: Option<&str>,
    overridden: bool,
    table: &DefaultTable,
) -> String {
    let Some(field) = field_id else {
        // No-field sentinel: no default is meaningful.
        return String::new();
    };

    for (flag_prefix, field_prefix) in [("--no-", "no_"), ("--dont-", "dont_")] {
        if long_flag.starts_with(flag_prefix) {
            let base = negation_base(long_flag, flag_prefix, field, field_prefix, overridden);
            return match table.get(&base) {
                Some(raw) if raw.eq_ignore_ascii_case("true") => {
                    "false (feature enabled)".to_string()
                }
                _ => "false".to_string(),
            };
        }
    }

    let raw = table.get(field).unwrap_or("");
    normalize::display_value(raw)
}

/// Base-field identifier for a negation-prefixed flag. Prefers stripping
/// the `no_`/`dont_` prefix from the resolved identifier; an overridden
/// identifier without that prefix already names the base field directly;
/// otherwise the base is derived from the flag spelling.
fn negation_base(
    long_flag: &str,
    flag_prefix: &str,
    field: &str,
    field_prefix: &str,
    overridden: bool,
) -> String {
    if let Some(stripped) = field.strip_prefix(field_prefix) {
        return stripped.to_string();
    }
    if overridden {
        return field.to_string();
    }
    long_flag[flag_prefix.len()..].replace('-', "_")
}
