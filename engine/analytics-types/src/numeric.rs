//! Numeric safety layer.
//!
//! Player records arrive from feeds that routinely carry missing fields,
//! numeric strings, and outright garbage. Every calculator routes untrusted
//! numbers through this module before doing arithmetic; nothing here panics
//! and every function produces a usable default for bad input.

use serde_json::Value;

/// Coerce a float to a finite value, substituting `fallback` for NaN and
/// infinities.
pub fn safe_f64(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Coerce an optional float, substituting `fallback` for `None` and for
/// non-finite values.
pub fn safe_opt(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) => safe_f64(v, fallback),
        None => fallback,
    }
}

/// Coerce an untrusted JSON value to a finite number.
///
/// Accepts JSON numbers and numeric strings; everything else (null, bool,
/// arrays, objects, non-numeric strings) yields `fallback`.
pub fn safe_json(value: &Value, fallback: f64) -> f64 {
    match value {
        Value::Number(n) => safe_opt(n.as_f64(), fallback),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => fallback,
        },
        _ => fallback,
    }
}

/// Format a value with a fixed number of decimal places.
///
/// Falls back to `fallback` for non-finite input; a fallback that is itself
/// numeric is padded to the same precision so callers always see a
/// consistently shaped string.
pub fn fixed_safe(value: f64, decimals: usize, fallback: &str) -> String {
    if value.is_finite() {
        return format!("{:.*}", decimals, value);
    }
    match fallback.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => format!("{:.*}", decimals, v),
        _ => fallback.to_string(),
    }
}

/// Format a fraction as a percentage string, e.g. `0.235` -> `"23.5%"`.
///
/// Invalid input yields a zero percentage at the requested precision.
pub fn percent_text(value: f64, decimals: usize) -> String {
    let v = if value.is_finite() { value * 100.0 } else { 0.0 };
    format!("{:.*}%", decimals, v)
}
