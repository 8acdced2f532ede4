//! End-to-end pipeline: scan both sources, reconcile, render, write.
//!
//! The run is single-threaded and single-pass: read the two source files,
//! compute the full resolved record set in memory, render all three
//! documents, then write them sequentially (Markdown, JSON, YAML). No
//! file is written until every render succeeded, so a failing run never
//! overwrites good artifacts with a partial set. Re-running on unchanged
//! inputs is idempotent.

use std::fs;
use std::path::{Path, PathBuf};

use optdoc_core::ResolvedOption;
use tracing::{debug, info};

use crate::defaults::scan_defaults;
use crate::emit::{example_config, group_by_category, render_json, render_markdown, render_yaml};
use crate::error::{GenError, Result};
use crate::normalize;
use crate::registry::scan_registry;
use crate::resolve::{OverrideMap, display_default, resolve_field};

/// Default title for the Markdown reference document.
pub const DEFAULT_TITLE: &str = "Command Line Options";

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Field-declaration source file.
    pub defaults_path: PathBuf,
    /// Option-registry source file.
    pub registry_path: PathBuf,
    /// Markdown reference output path.
    pub markdown_out: PathBuf,
    /// JSON example-config output path.
    pub json_out: PathBuf,
    /// YAML example-config output path.
    pub yaml_out: PathBuf,
    /// Long-flag to field-identifier override table.
    pub overrides: OverrideMap,
    /// Markdown top-level title.
    pub title: String,
    /// Promote unrecognized source lines to a fatal error.
    pub strict: bool,
}

impl GenConfig {
    /// Creates a config with the built-in override map, the default title,
    /// and strict mode off.
    pub fn new(
        defaults_path: impl Into<PathBuf>,
        registry_path: impl Into<PathBuf>,
        markdown_out: impl Into<PathBuf>,
        json_out: impl Into<PathBuf>,
        yaml_out: impl Into<PathBuf>,
    ) -> Self {
        Self {
            defaults_path: defaults_path.into(),
            registry_path: registry_path.into(),
            markdown_out: markdown_out.into(),
            json_out: json_out.into(),
            yaml_out: yaml_out.into(),
            overrides: OverrideMap::builtin(),
            title: DEFAULT_TITLE.to_string(),
            strict: false,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct GenReport {
    /// Number of resolved option records (one per registry row).
    pub options: usize,
    /// Number of categories in the grouped output.
    pub categories: usize,
    /// Unrecognized source lines collected from both extractors. Informational
    /// unless strict mode promoted them to an error.
    pub warnings: Vec<String>,
}

/// Runs the full pipeline described by `config`.
///
/// # Errors
///
/// [`GenError::MissingSource`] when an input file does not exist (fatal
/// before any output is written), [`GenError::Strict`] when strict mode
/// found unrecognized lines, and [`GenError::Io`]/[`GenError::Json`] for
/// read, render, or write failures. On any error no output file has been
/// modified.
pub fn run(config: &GenConfig) -> Result<GenReport> {
    let defaults_text = read_source(&config.defaults_path)?;
    let registry_text = read_source(&config.registry_path)?;

    let default_scan = scan_defaults(&defaults_text);
    let registry_scan = scan_registry(&registry_text);

    let mut warnings = default_scan.warnings;
    warnings.extend(registry_scan.warnings);
    if config.strict && !warnings.is_empty() {
        return Err(GenError::Strict(warnings));
    }

    let mut records = Vec::with_capacity(registry_scan.entries.len());
    for entry in &registry_scan.entries {
        let overridden = config.overrides.lookup(&entry.long_flag).is_some();
        let field_id = resolve_field(&entry.long_flag, &config.overrides);
        let display = display_default(
            &entry.long_flag,
            field_id.as_deref(),
            overridden,
            &default_scan.table,
        );
        let typed = normalize::typed_value(&display);
        records.push(ResolvedOption {
            long_flag: entry.long_flag.clone(),
            field_id,
            display_default: display,
            typed_default: typed,
            description: entry.description.clone(),
            category: entry.category.clone(),
        });
    }
    debug!(records = records.len(), "resolved option records");

    let grouped = group_by_category(records);
    let config_tree = example_config(&grouped);

    // Render everything before writing anything.
    let markdown = render_markdown(&grouped, &config.title);
    let json = render_json(&config_tree)?;
    let yaml = render_yaml(&config_tree);

    fs::write(&config.markdown_out, &markdown)?;
    fs::write(&config.json_out, &json)?;
    fs::write(&config.yaml_out, &yaml)?;

    let report = GenReport {
        options: registry_scan.entries.len(),
        categories: grouped.len(),
        warnings,
    };
    info!(
        options = report.options,
        categories = report.categories,
        "documentation artifacts written"
    );
    Ok(report)
}

fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(GenError::MissingSource(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}
