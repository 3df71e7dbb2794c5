//! Layering of a standards document over the preset it names.
//!
//! - Tables merge recursively, the document's values win
//! - Arrays append (preset + document) unless the document's array starts with `$reset`

/// Marker that discards the preset's array instead of appending to it.
pub const RESET_MARKER: &str = "$reset";

pub fn merge_toml_values(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml_values(base_val, overlay_val),
                    None => strip_reset_markers(overlay_val),
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (toml::Value::Array(base_arr), toml::Value::Array(overlay_arr)) => {
            merge_arrays(base_arr, overlay_arr)
        }
        (_, overlay) => strip_reset_markers(overlay),
    }
}

fn merge_arrays(base: Vec<toml::Value>, mut overlay: Vec<toml::Value>) -> toml::Value {
    if has_reset_marker(&overlay) {
        overlay.remove(0);
        toml::Value::Array(overlay)
    } else {
        let mut merged = base;
        merged.extend(overlay);
        toml::Value::Array(merged)
    }
}

fn has_reset_marker(arr: &[toml::Value]) -> bool {
    arr.first()
        .and_then(toml::Value::as_str)
        .is_some_and(|s| s == RESET_MARKER)
}

/// Removes leading `$reset` markers from arrays that had nothing to reset.
pub fn strip_reset_markers(value: toml::Value) -> toml::Value {
    match value {
        toml::Value::Array(mut arr) => {
            if has_reset_marker(&arr) {
                arr.remove(0);
            }
            toml::Value::Array(arr.into_iter().map(strip_reset_markers).collect())
        }
        toml::Value::Table(table) => toml::Value::Table(
            table
                .into_iter()
                .map(|(k, v)| (k, strip_reset_markers(v)))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
