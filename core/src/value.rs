//! Typed default values for example configuration files.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical typed value for a flag's default.
///
/// The pipeline coerces every display default into one of these variants
/// before writing the JSON and YAML example configs. Serialization is
/// untagged, so a `ConfigValue::Int(1000)` renders as the bare scalar
/// `1000` in both formats.
///
/// # Examples
///
/// ```
/// use optdoc_core::ConfigValue;
///
/// let v = ConfigValue::Int(42);
/// assert_eq!(serde_json::to_string(&v).unwrap(), "42");
///
/// let v = ConfigValue::Bool(false);
/// assert_eq!(serde_json::to_string(&v).unwrap(), "false");
///
/// let v = ConfigValue::Str("Warn".into());
/// assert_eq!(serde_json::to_string(&v).unwrap(), "\"Warn\"");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Boolean default (flag enabled/disabled states).
    Bool(bool),
    /// Integer default.
    Int(i64),
    /// Floating-point default.
    Float(f64),
    /// Anything that is not a boolean or a number, kept verbatim.
    Str(String),
}

impl ConfigValue {
    /// Returns the boolean payload, if this is a [`ConfigValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is a [`ConfigValue::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a [`ConfigValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_serialization() {
        assert_eq!(
            serde_json::to_string(&ConfigValue::Bool(true)).unwrap(),
            "true"
        );
        assert_eq!(serde_json::to_string(&ConfigValue::Int(-3)).unwrap(), "-3");
        assert_eq!(
            serde_json::to_string(&ConfigValue::Float(3.5)).unwrap(),
            "3.5"
        );
        assert_eq!(
            serde_json::to_string(&ConfigValue::Str("x".into())).unwrap(),
            "\"x\""
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(ConfigValue::Bool(false).as_bool(), Some(false));
        assert_eq!(ConfigValue::Int(7).as_int(), Some(7));
        assert_eq!(ConfigValue::Str("a".into()).as_str(), Some("a"));
        assert_eq!(ConfigValue::Int(7).as_bool(), None);
    }

    #[test]
    fn test_display_matches_scalar_form() {
        assert_eq!(ConfigValue::Bool(true).to_string(), "true");
        assert_eq!(ConfigValue::Int(1000).to_string(), "1000");
        assert_eq!(ConfigValue::Str("".into()).to_string(), "");
    }
}
