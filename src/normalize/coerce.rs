//! Total coercion helpers: every function here returns a usable value for any JSON input.

use crate::foundation::core::Vec3;
use serde_json::Value;

/// Read `v` as a finite number, or return `default`.
///
/// Numbers are used as-is, strings are parsed after trimming. Anything else, including values
/// that parse to `NaN`/infinity, yields `default`.
pub(crate) fn coerce_f64(v: Option<&Value>, default: f64) -> f64 {
    let parsed = match v {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(x) if x.is_finite() => x,
        _ => default,
    }
}

/// Read `v` as a vector, defaulting each missing or unusable component to `default`.
///
/// Accepts `{x, y, z}` objects and `[x, y, z]` arrays.
pub(crate) fn coerce_vec3(v: Option<&Value>, default: f64) -> Vec3 {
    match v {
        Some(Value::Object(m)) => Vec3::new(
            coerce_f64(m.get("x"), default),
            coerce_f64(m.get("y"), default),
            coerce_f64(m.get("z"), default),
        ),
        Some(Value::Array(a)) => Vec3::new(
            coerce_f64(a.first(), default),
            coerce_f64(a.get(1), default),
            coerce_f64(a.get(2), default),
        ),
        _ => Vec3::splat(default),
    }
}

/// Read `v` as a non-blank string.
pub(crate) fn coerce_string(v: Option<&Value>) -> Option<String> {
    match v {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/coerce.rs"]
mod tests;
