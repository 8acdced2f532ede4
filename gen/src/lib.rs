//! Option-metadata reconciliation and documentation generation.
//!
//! This crate keeps user-facing documentation and example configuration
//! files synchronized with the authoritative source-level declaration of
//! a program's command-line options. It scans two independently
//! maintained source artifacts — a typed field/default declaration table
//! and a flat option-descriptor registry — reconciles their naming
//! mismatches through an override map plus a deterministic fallback
//! transform, normalizes default-value literals, and emits three parallel
//! artifacts: a Markdown reference, a JSON example config, and a YAML
//! example config.
//!
//! # Main entry points
//!
//! - [`pipeline::run`] — the full scan → reconcile → render → write run.
//! - [`defaults::scan_defaults`] / [`registry::scan_registry`] — the two
//!   extractors, usable standalone on pre-read text.
//! - [`resolve::OverrideMap`] — the explicit flag-to-field table.
//!
//! # Example
//!
//! ```no_run
//! use optdoc_gen::pipeline::{GenConfig, run};
//!
//! let config = GenConfig::new(
//!     "include/options.hpp",
//!     "src/help_text.cpp",
//!     "docs/cli_options.md",
//!     "demos/example-config.json",
//!     "demos/example-config.yaml",
//! );
//! let report = run(&config)?;
//! println!("{} options in {} categories", report.options, report.categories);
//! # Ok::<(), optdoc_gen::GenError>(())
//! ```

pub mod defaults;
pub mod emit;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod registry;
pub mod resolve;

pub use error::{GenError, Result};
