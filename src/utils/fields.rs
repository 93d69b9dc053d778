//! Lenient JSON field extraction
//!
//! Catalog records, space records and provider responses all arrive as loose
//! JSON. These helpers resolve a canonical field from an ordered list of
//! accepted source keys, taking the first key that yields a usable value.
//! Nothing here fails: an unusable value is simply `None`.

use serde_json::Value;

/// Resolve the first key in `keys` whose value `parse` accepts
pub fn resolve<T>(raw: &Value, keys: &[&str], parse: impl Fn(&Value) -> Option<T>) -> Option<T> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find_map(|value| parse(value))
}

/// Finite number, or a string holding one
pub fn as_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Non-empty trimmed string
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Boolean, or one of the usual textual/numeric spellings of one
pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64()? {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Record identifier: a string, an integer, or a Mongo `{"$oid": "..."}` object
pub fn as_identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(_) => as_text(value),
        Value::Number(n) if n.is_u64() || n.is_i64() => Some(n.to_string()),
        Value::Object(map) => map.get("$oid").and_then(as_text),
        _ => None,
    }
}

/// Array of non-empty strings, trimmed and lowercased; other entries skipped
pub fn as_tag_list(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(as_text)
            .map(|t| t.to_lowercase())
            .collect(),
    )
}
