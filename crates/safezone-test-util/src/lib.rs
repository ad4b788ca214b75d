//! Shared test utilities for the safezone workspace.
//!
//! `xtask` needs `normalize_nondeterministic` at runtime (not behind `#[cfg(test)]`),
//! so it lives in its own crate.

use serde_json::{Number, Value};

/// Decimal places kept for distances after normalization.
pub const DISTANCE_DECIMALS: i32 = 3;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Root-only**: `tool.version` becomes `"__VERSION__"` only when the root object
///    looks like a report envelope (`schema`, `tool`, `verdict`, `findings`, `data`).
/// 2. **Recursive**: `started_at` / `finished_at` become `"__TIMESTAMP__"`, and
///    `distance_m` / `nearest_distance_m` are rounded to [`DISTANCE_DECIMALS`] places so
///    last-ulp differences in platform trigonometry do not break comparisons.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "verdict", "findings", "data"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("name")
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_recursive(&mut value);
    value
}

fn normalize_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for key in ["distance_m", "nearest_distance_m"] {
                if let Some(v) = map.get_mut(key) {
                    round_number(v);
                }
            }
            for val in map.values_mut() {
                normalize_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_recursive(val);
            }
        }
        _ => {}
    }
}

fn round_number(value: &mut Value) {
    let Some(f) = value.as_f64() else {
        return;
    };
    let scale = 10f64.powi(DISTANCE_DECIMALS);
    if let Some(n) = Number::from_f64((f * scale).round() / scale) {
        *value = Value::Number(n);
    }
}

/// Pull `(verdict, hazards_total)` out of a report, for fixture assertions.
pub fn verdict_summary(report: &Value) -> (Option<&str>, Option<u64>) {
    (
        report["verdict"].as_str(),
        report["data"]["hazards_total"].as_u64(),
    )
}
