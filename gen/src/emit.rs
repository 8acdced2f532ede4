//! Document emission: Markdown reference, JSON and YAML example configs.
//!
//! All three artifacts are views of one grouped record set. The JSON and
//! YAML configs are two serializations of the *same* nested structure and
//! therefore cannot diverge in keys or values; the Markdown table is
//! rendered from the same grouping with its own sort order.

use std::collections::BTreeMap;

use optdoc_core::{ConfigValue, ResolvedOption};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::error::Result;

/// Options grouped by category, categories in sorted order. Within a
/// category, records keep registry source order.
pub type GroupedOptions = BTreeMap<String, Vec<ResolvedOption>>;

/// Nested example-config structure: `category → config key → typed value`.
pub type ExampleConfig = BTreeMap<String, BTreeMap<String, ConfigValue>>;

/// Groups resolved records by category.
pub fn group_by_category(records: Vec<ResolvedOption>) -> GroupedOptions {
    let mut grouped = GroupedOptions::new();
    for record in records {
        grouped
            .entry(record.category.clone())
            .or_default()
            .push(record);
    }
    grouped
}

/// Builds the shared example-config structure from the grouping.
///
/// Duplicate long flags within a category collapse onto one key here
/// (last row wins), even though the Markdown table keeps both rows.
pub fn example_config(grouped: &GroupedOptions) -> ExampleConfig {
    let mut config = ExampleConfig::new();
    for (category, records) in grouped {
        let section = config.entry(category.clone()).or_default();
        for record in records {
            section.insert(record.config_key().to_string(), record.typed_default.clone());
        }
    }
    config
}

/// Renders the Markdown reference document.
///
/// One `##` section per category (sorted), each with a three-column table.
/// Rows sort lexicographically by long flag; duplicate flags fall back to
/// default and description order.
pub fn render_markdown(grouped: &GroupedOptions, title: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {title}\n"));

    for (category, records) in grouped {
        out.push_str(&format!("\n## {category}\n\n"));
        out.push_str("| Option | Default | Description |\n");
        out.push_str("|--------|---------|-------------|\n");

        let mut rows: Vec<&ResolvedOption> = records.iter().collect();
        rows.sort_by(|a, b| {
            (&a.long_flag, &a.display_default, &a.description)
                .cmp(&(&b.long_flag, &b.display_default, &b.description))
        });
        for row in rows {
            out.push_str(&format!(
                "| `{}` | {} | {} |\n",
                row.long_flag, row.display_default, row.description
            ));
        }
    }

    debug!(categories = grouped.len(), "rendered markdown reference");
    out
}

/// Renders the JSON example config, pretty-printed with 4-space
/// indentation.
pub fn render_json(config: &ExampleConfig) -> Result<String> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut serializer)?;
    let mut text = String::from_utf8(buf).expect("serde_json emits valid UTF-8");
    text.push('\n');
    Ok(text)
}

/// Renders the YAML example config from the same structure as the JSON
/// document.
///
/// Prefers the standard encoder; if it reports an error the output
/// degrades to a minimal renderer with no quoting or escaping, which is
/// acceptable only because example-config values are simple scalars.
pub fn render_yaml(config: &ExampleConfig) -> String {
    match serde_yaml::to_string(config) {
        Ok(text) => text,
        Err(err) => {
            debug!(%err, "yaml encoder failed, using fallback renderer");
            let mut out = String::new();
            fallback_yaml(config, 0, &mut out);
            out
        }
    }
}

fn fallback_yaml(config: &ExampleConfig, indent: usize, out: &mut String) {
    for (category, section) in config {
        out.push_str(&format!("{:indent$}{category}:\n", ""));
        for (key, value) in section {
            out.push_str(&format!("{:width$}{key}: {value}\n", "", width = indent + 2));
        }
    }
}
