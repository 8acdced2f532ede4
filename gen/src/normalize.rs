//! Default-value normalization.
//!
//! Raw default literals arrive in heterogeneous syntaxes (quoted strings,
//! enum-qualified members, booleans, numbers, symbolic expressions). Two
//! normalizations are produced: a human-readable display string for the
//! Markdown reference, and a canonical typed value for the example
//! configs. Defaults that are not literals are never evaluated, only
//! copied through verbatim.

use std::sync::LazyLock;

use optdoc_core::ConfigValue;
use regex::Regex;

static ENUM_MEMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+::(\w+)$").expect("static regex must compile"));

/// Normalizes a raw default literal into its display form.
///
/// Rules apply in order, first match wins: empty stays empty, quoted
/// strings are unwrapped, `Enum::Member` keeps only the member, booleans
/// gain an enabled/disabled annotation, everything else passes through
/// verbatim.
///
/// # Examples
///
/// ```
/// use optdoc_gen::normalize::display_value;
///
/// assert_eq!(display_value(""), "");
/// assert_eq!(display_value("\"hello\""), "hello");
/// assert_eq!(display_value("Level::Warn"), "Warn");
/// assert_eq!(display_value("true"), "true (enabled)");
/// assert_eq!(display_value("false"), "false (disabled)");
/// assert_eq!(display_value("4 * 1024"), "4 * 1024");
/// ```
pub fn display_value(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return raw[1..raw.len() - 1].to_string();
    }
    if let Some(caps) = ENUM_MEMBER.captures(raw) {
        return caps[1].to_string();
    }
    if raw.eq_ignore_ascii_case("true") {
        return "true (enabled)".to_string();
    }
    if raw.eq_ignore_ascii_case("false") {
        return "false (disabled)".to_string();
    }
    raw.to_string()
}

/// Coerces a display string into its canonical typed value.
///
/// Applied to the *display* string, not the raw literal. Any display
/// beginning with `false` coerces to boolean `false`; this intentionally
/// drops the `(feature enabled)` annotation carried by negation-prefixed
/// flags — the annotation survives only in the display string.
///
/// # Examples
///
/// ```
/// use optdoc_core::ConfigValue;
/// use optdoc_gen::normalize::typed_value;
///
/// assert_eq!(typed_value("true (enabled)"), ConfigValue::Bool(true));
/// assert_eq!(typed_value("false (feature enabled)"), ConfigValue::Bool(false));
/// assert_eq!(typed_value("42"), ConfigValue::Int(42));
/// assert_eq!(typed_value("3.5"), ConfigValue::Float(3.5));
/// assert_eq!(typed_value("Warn"), ConfigValue::Str("Warn".into()));
/// ```
pub fn typed_value(display: &str) -> ConfigValue {
    if display.eq_ignore_ascii_case("true (enabled)") {
        return ConfigValue::Bool(true);
    }
    if display.eq_ignore_ascii_case("false (disabled)") {
        return ConfigValue::Bool(false);
    }
    if display.eq_ignore_ascii_case("true") {
        return ConfigValue::Bool(true);
    }
    if display.eq_ignore_ascii_case("false") {
        return ConfigValue::Bool(false);
    }
    if display.starts_with("false") {
        return ConfigValue::Bool(false);
    }
    if display.contains('.') {
        if let Ok(x) = display.parse::<f64>() {
            return ConfigValue::Float(x);
        }
    } else if let Ok(n) = display.parse::<i64>() {
        return ConfigValue::Int(n);
    }
    ConfigValue::Str(display.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_display() {
        assert_eq!(display_value(""), "");
    }

    #[test]
    fn test_quoted_string_unwrapped() {
        assert_eq!(display_value("\"hello\""), "hello");
        assert_eq!(display_value("\"\""), "");
    }

    #[test]
    fn test_quote_unwrap_wins_over_boolean_annotation() {
        // First match wins: a quoted "true" is a string, not a boolean.
        assert_eq!(display_value("\"true\""), "true");
    }

    #[test]
    fn test_enum_member_extraction() {
        assert_eq!(display_value("Level::Warn"), "Warn");
        assert_eq!(display_value("LogLevel::INFO"), "INFO");
    }

    #[test]
    fn test_boolean_annotations() {
        assert_eq!(display_value("true"), "true (enabled)");
        assert_eq!(display_value("TRUE"), "true (enabled)");
        assert_eq!(display_value("false"), "false (disabled)");
    }

    #[test]
    fn test_verbatim_passthrough() {
        assert_eq!(display_value("1000"), "1000");
        assert_eq!(display_value("4 * 1024"), "4 * 1024");
        assert_eq!(display_value("SIZE_MAX"), "SIZE_MAX");
    }

    #[test]
    fn test_typed_booleans() {
        assert_eq!(typed_value("true (enabled)"), ConfigValue::Bool(true));
        assert_eq!(typed_value("false (disabled)"), ConfigValue::Bool(false));
        assert_eq!(typed_value("true"), ConfigValue::Bool(true));
        assert_eq!(typed_value("false"), ConfigValue::Bool(false));
    }

    #[test]
    fn test_typed_negation_phrasing_coerced_to_false() {
        assert_eq!(
            typed_value("false (feature enabled)"),
            ConfigValue::Bool(false)
        );
    }

    #[test]
    fn test_typed_numbers() {
        assert_eq!(typed_value("42"), ConfigValue::Int(42));
        assert_eq!(typed_value("-7"), ConfigValue::Int(-7));
        assert_eq!(typed_value("3.5"), ConfigValue::Float(3.5));
    }

    #[test]
    fn test_typed_opaque_strings() {
        assert_eq!(typed_value(""), ConfigValue::Str(String::new()));
        assert_eq!(typed_value("Warn"), ConfigValue::Str("Warn".into()));
        assert_eq!(
            typed_value("3.5.1"),
            ConfigValue::Str("3.5.1".into())
        );
        assert_eq!(
            typed_value("4 * 1024"),
            ConfigValue::Str("4 * 1024".into())
        );
    }
}
