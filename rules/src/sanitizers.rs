//! Input sanitization functions for the default rule catalogue.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    /// Pattern to match HTML tags
    static ref HTML_TAG_PATTERN: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Trim leading and trailing whitespace from a string
pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// Strip all HTML tags from a string
pub fn strip_html(value: &str) -> String {
    HTML_TAG_PATTERN.replace_all(value, "").to_string()
}

/// Coerce a JSON value to an integer.
///
/// Integer numbers pass through, floats are truncated toward zero, and
/// numeric strings are parsed after trimming. Anything else is rejected.
pub fn coerce_int(value: &Value) -> Result<i64, String> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            match number.as_f64() {
                Some(float) if float.is_finite() => Ok(float.trunc() as i64),
                _ => Err("must be an integer".to_string()),
            }
        }
        Value::String(text) => {
            let trimmed = text.trim();
            if let Ok(int) = trimmed.parse::<i64>() {
                return Ok(int);
            }
            match trimmed.parse::<f64>() {
                Ok(float) if float.is_finite() => Ok(float.trunc() as i64),
                _ => Err("must be an integer".to_string()),
            }
        }
        _ => Err("must be an integer".to_string()),
    }
}
