//! Display formatting for arbitrary JSON values
//!
//! `format_value` is a total function: any JSON-representable input produces a
//! display string, never an error. Search payloads come back with unknown keys
//! and value shapes, so everything a cell can hold must route through here.

use serde_json::Value;

/// Placeholder shown for null, empty strings, and empty arrays.
pub const PLACEHOLDER: &str = "—";

/// Convert a single JSON value into a display string.
///
/// Dispatch is exhaustive over the JSON union, in priority order:
/// 1. null / empty string → em-dash placeholder
/// 2. number → millions notation above |1e6|, grouped digits below
/// 3. array → elements stringified and comma-joined (empty → placeholder)
/// 4. object → pretty-printed JSON block
/// 5. bool → display coercion
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => PLACEHOLDER.to_string(),
        Value::String(text) => {
            if text.trim().is_empty() {
                PLACEHOLDER.to_string()
            } else {
                text.clone()
            }
        }
        Value::Number(number) => match number.as_f64() {
            Some(v) => format_number(v),
            // Arbitrary-precision numbers outside f64 range just print as-is.
            None => number.to_string(),
        },
        Value::Array(items) => {
            if items.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                items
                    .iter()
                    .map(stringify_element)
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }
        Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        Value::Bool(flag) => flag.to_string(),
    }
}

/// Array elements are stringified, not recursively formatted: a null inside a
/// list prints as "null", not as the placeholder.
fn stringify_element(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Numeric display policy: values at or above one million render as
/// "<millions to 2 decimals> M"; everything else gets comma-grouped digits
/// with no forced decimals.
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v.abs() >= 1_000_000.0 {
        return format!("{:.2} M", v / 1_000_000.0);
    }
    grouped_value(v)
}

/// Format a value that is already denominated in millions, for table columns:
/// grouped digits plus the unit. No re-thresholding, so a value at or above
/// 1e6 never picks up a second "M".
pub fn format_millions(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    format!("{} M", grouped_value(v))
}

fn grouped_value(v: f64) -> String {
    let sign = if v < 0.0 { "-" } else { "" };
    let magnitude = v.abs();
    if magnitude.fract() == 0.0 {
        format!("{}{}", sign, group_digits(&format!("{}", magnitude as u64)))
    } else {
        let text = magnitude.to_string();
        match text.split_once('.') {
            Some((whole, frac)) => format!("{}{}.{}", sign, group_digits(whole), frac),
            None => format!("{}{}", sign, group_digits(&text)),
        }
    }
}

/// Insert a comma every three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Turn an identifier-ish key into a human label: separators (`_`, `-`,
/// whitespace runs) become single spaces and every word gets a capital first
/// letter. `"release_year"` → `"Release Year"`.
pub fn humanize_key(key: &str) -> String {
    key.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_placeholder_for_null_and_empty() {
        assert_eq!(format_value(&Value::Null), PLACEHOLDER);
        assert_eq!(format_value(&json!("")), PLACEHOLDER);
        assert_eq!(format_value(&json!("   ")), PLACEHOLDER);
        assert_eq!(format_value(&json!([])), PLACEHOLDER);
    }

    #[test]
    fn test_millions_notation() {
        assert_eq!(format_value(&json!(165_000_000)), "165.00 M");
        assert_eq!(format_value(&json!(-2_500_000)), "-2.50 M");
        assert_eq!(format_value(&json!(1_000_000)), "1.00 M");
    }

    #[test]
    fn test_grouped_digits_below_a_million() {
        assert_eq!(format_value(&json!(999_999)), "999,999");
        assert_eq!(format_value(&json!(1234)), "1,234");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(-1234)), "-1,234");
        assert_eq!(format_value(&json!(1234.5)), "1,234.5");
    }

    #[test]
    fn test_format_millions_never_doubles_the_unit() {
        assert_eq!(format_millions(184.5), "184.5 M");
        assert_eq!(format_millions(2201.6), "2,201.6 M");
        assert_eq!(format_millions(-3.1), "-3.1 M");
        // Even an absurdly large millions figure keeps a single unit.
        assert_eq!(format_millions(2_201_600.0), "2,201,600 M");
    }

    #[test]
    fn test_arrays_join_without_recursion() {
        assert_eq!(format_value(&json!([1, 2])), "1, 2");
        assert_eq!(format_value(&json!(["space", "time"])), "space, time");
        // Inner nulls are stringified, not turned into placeholders.
        assert_eq!(format_value(&json!([null, 1])), "null, 1");
    }

    #[test]
    fn test_objects_pretty_print() {
        let text = format_value(&json!({ "a": 1 }));
        assert!(text.starts_with('{'));
        assert!(text.contains('\n'));
        assert!(text.contains("\"a\": 1"));
    }

    #[test]
    fn test_bool_coercion() {
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(false)), "false");
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("release_year"), "Release Year");
        assert_eq!(humanize_key("Movie Name"), "Movie Name");
        assert_eq!(humanize_key("genre"), "Genre");
        assert_eq!(humanize_key("box-office_gross"), "Box Office Gross");
        assert_eq!(humanize_key("  spaced   out  "), "Spaced Out");
        assert_eq!(humanize_key(""), "");
    }

    proptest! {
        // Totality: no JSON number may panic or produce an empty string.
        #[test]
        fn prop_format_number_is_total(v in proptest::num::f64::ANY) {
            let text = format_number(v);
            prop_assert!(!text.is_empty());
        }

        // Above |1e6| the rendering is always millions notation and the
        // numeric part round-trips to v/1e6 at 2 decimals.
        #[test]
        fn prop_millions_threshold(v in 1_000_000.0..1.0e12f64) {
            let text = format_number(v);
            prop_assert!(text.ends_with(" M"), "got {text}");
            let numeric: f64 = text.trim_end_matches(" M").parse().unwrap();
            let expected: f64 = format!("{:.2}", v / 1.0e6).parse().unwrap();
            prop_assert!((numeric - expected).abs() < 1e-9);
        }

        // Grouping never loses digits: stripping commas restores the input.
        #[test]
        fn prop_grouping_preserves_digits(n in 0u64..1_000_000) {
            let text = format_number(n as f64);
            prop_assert_eq!(text.replace(',', ""), n.to_string());
        }
    }
}
