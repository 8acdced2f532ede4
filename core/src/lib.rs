//! Core data model for CLI option documentation records.
//!
//! This crate defines the types flowing through the option-metadata
//! reconciliation pipeline: raw registry rows ([`OptionDescriptor`]), the
//! defaults lookup table ([`DefaultTable`]), fully reconciled records
//! ([`ResolvedOption`]), and the typed configuration value
//! ([`ConfigValue`]) written to machine-readable example configs.
//!
//! All types serialize with [`serde`] so the same record set can back
//! Markdown, JSON, and YAML renderings without divergence.
//!
//! # Example
//!
//! ```
//! use optdoc_core::{ConfigValue, OptionDescriptor, ResolvedOption};
//!
//! let row = OptionDescriptor::new("--refresh-rate", "-r", "<ms>", "Polling interval", "General");
//! let resolved = ResolvedOption {
//!     long_flag: row.long_flag.clone(),
//!     field_id: Some("refresh_ms".to_string()),
//!     display_default: "1000".to_string(),
//!     typed_default: ConfigValue::Int(1000),
//!     description: row.description.clone(),
//!     category: row.category.clone(),
//! };
//! assert_eq!(resolved.config_key(), "refresh-rate");
//! ```

mod types;
mod value;

pub use types::{DefaultTable, OptionDescriptor, ResolvedOption};
pub use value::ConfigValue;
