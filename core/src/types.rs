//! Record types for the option-metadata reconciliation pipeline.
//!
//! The pipeline consumes two independently maintained source artifacts: a
//! typed field/default declaration table and a flat option-descriptor
//! registry. [`DefaultTable`] and [`OptionDescriptor`] model those two
//! inputs; [`ResolvedOption`] is the reconciled record the document
//! emitters render from.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::ConfigValue;

/// Mapping from internal field identifier to its raw default literal.
///
/// One entry per declared field in the defaults source. A raw default of
/// `""` signals "declared, no explicit initializer". The table is built
/// once per run and is immutable afterwards; during construction the first
/// capture of an identifier wins and later captures never overwrite it.
///
/// # Examples
///
/// ```
/// use optdoc_core::DefaultTable;
///
/// let mut table = DefaultTable::new();
/// assert!(table.insert_if_absent("refresh_ms", "1000"));
/// assert!(!table.insert_if_absent("refresh_ms", "250"));
/// assert_eq!(table.get("refresh_ms"), Some("1000"));
/// assert_eq!(table.get("unknown"), None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefaultTable {
    entries: HashMap<String, String>,
}

impl DefaultTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `raw_default` for `field_id` unless the identifier is already
    /// present. Returns `true` when the entry was inserted.
    pub fn insert_if_absent(&mut self, field_id: &str, raw_default: &str) -> bool {
        if self.entries.contains_key(field_id) {
            return false;
        }
        self.entries
            .insert(field_id.to_string(), raw_default.to_string());
        true
    }

    /// Looks up the raw default literal for a field identifier.
    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.entries.get(field_id).map(String::as_str)
    }

    /// Returns the number of captured fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no fields were captured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One row of the option-descriptor registry.
///
/// Rows are kept in source order. The long flag is the natural key, but
/// duplicate long flags are deliberately not deduplicated; downstream
/// consumers may rely on seeing every row.
///
/// # Examples
///
/// ```
/// use optdoc_core::OptionDescriptor;
///
/// let row = OptionDescriptor::new("--ignore", "-I", "<dir>", "Directory to ignore", "Basics");
/// assert_eq!(row.long_flag, "--ignore");
/// assert_eq!(row.category, "Basics");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    /// Long spelling (e.g. `--refresh-rate`), the natural key.
    pub long_flag: String,
    /// Short spelling (e.g. `-r`), may be empty.
    pub short_flag: String,
    /// Argument placeholder (e.g. `<ms>`), empty for pure switches.
    pub arg_placeholder: String,
    /// Human-readable description from the registry.
    pub description: String,
    /// Grouping label used to section the documentation.
    pub category: String,
}

impl OptionDescriptor {
    /// Creates a descriptor from the five registry fields.
    pub fn new(
        long_flag: &str,
        short_flag: &str,
        arg_placeholder: &str,
        description: &str,
        category: &str,
    ) -> Self {
        Self {
            long_flag: long_flag.to_string(),
            short_flag: short_flag.to_string(),
            arg_placeholder: arg_placeholder.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }
}

/// Fully reconciled option record, one per registry row.
///
/// Computed fresh each run from the default table, the registry, and the
/// override map; never persisted between runs. The grouped set of these
/// records is the sole input to all three emitted artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedOption {
    /// Long flag spelling, carried over from the descriptor.
    pub long_flag: String,
    /// Internal field identifier, or `None` when the override map declares
    /// the flag has no backing field (pure action flags).
    pub field_id: Option<String>,
    /// Human-readable default shown in the Markdown reference.
    pub display_default: String,
    /// Canonical typed value written to the example configs.
    pub typed_default: ConfigValue,
    /// Description carried over from the descriptor.
    pub description: String,
    /// Category carried over from the descriptor.
    pub category: String,
}

impl ResolvedOption {
    /// Returns the key used for this option in the example configs: the
    /// long flag without its leading dashes (`--refresh-rate` →
    /// `refresh-rate`).
    pub fn config_key(&self) -> &str {
        self.long_flag
            .strip_prefix("--")
            .unwrap_or(&self.long_flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_first_insert_wins() {
        let mut table = DefaultTable::new();
        assert!(table.insert_if_absent("interval", "30"));
        assert!(!table.insert_if_absent("interval", ""));
        assert_eq!(table.get("interval"), Some("30"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_default_table_empty_raw_default() {
        let mut table = DefaultTable::new();
        table.insert_if_absent("log_file", "");
        assert_eq!(table.get("log_file"), Some(""));
        assert!(!table.is_empty());
    }

    #[test]
    fn test_config_key_strips_leading_dashes() {
        let opt = ResolvedOption {
            long_flag: "--no-color".to_string(),
            field_id: Some("custom_color".to_string()),
            display_default: "false (feature enabled)".to_string(),
            typed_default: ConfigValue::Bool(false),
            description: "Disable colored output".to_string(),
            category: "Display".to_string(),
        };
        assert_eq!(opt.config_key(), "no-color");
    }
}
