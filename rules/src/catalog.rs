//! The default [`RuleSet`] implementation.

use std::borrow::Cow;
use std::sync::Arc;

use binder::RuleSet;
use serde_json::Value;

use crate::{sanitizers, validators};

/// Stateless catalogue of the standard validation and sanitization
/// operations. A single shared instance serves every request; no per-chain
/// state survives between invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn shared() -> Arc<dyn RuleSet> {
        Arc::new(Catalog)
    }
}

/// View a resolved value as text.
///
/// Absent and null values carry no usable text and are rejected, as are
/// arrays and objects; booleans and numbers validate against their display
/// form the way loosely-typed query parameters usually arrive.
fn as_text(value: Option<&Value>) -> Result<Cow<'_, str>, String> {
    match value {
        None | Some(Value::Null) => Err("is required".to_string()),
        Some(Value::String(text)) => Ok(Cow::Borrowed(text.as_str())),
        Some(Value::Bool(flag)) => Ok(Cow::Owned(flag.to_string())),
        Some(Value::Number(number)) => Ok(Cow::Owned(number.to_string())),
        Some(Value::Array(_)) | Some(Value::Object(_)) => Err("must be a string".to_string()),
    }
}

fn present(value: Option<&Value>) -> Result<&Value, String> {
    match value {
        None | Some(Value::Null) => Err("is required".to_string()),
        Some(value) => Ok(value),
    }
}

impl RuleSet for Catalog {
    fn not_empty(&self, value: Option<&Value>) -> Result<(), String> {
        let text = as_text(value)?;
        validators::validate_not_empty(&text)
    }

    fn len(&self, value: Option<&Value>, min: usize, max: usize) -> Result<(), String> {
        let text = as_text(value)?;
        validators::validate_length(&text, min, max)
    }

    fn is_int(&self, value: Option<&Value>) -> Result<(), String> {
        let text = as_text(value)?;
        validators::validate_integer(&text)
    }

    fn contains(&self, value: Option<&Value>, needle: &str) -> Result<(), String> {
        let text = as_text(value)?;
        validators::validate_contains(&text, needle)
    }

    fn matches(&self, value: Option<&Value>, pattern: &str) -> Result<(), String> {
        let text = as_text(value)?;
        validators::validate_pattern(&text, pattern)
    }

    fn is_email(&self, value: Option<&Value>) -> Result<(), String> {
        let text = as_text(value)?;
        validators::validate_email(&text)
    }

    fn is_url(&self, value: Option<&Value>) -> Result<(), String> {
        let text = as_text(value)?;
        validators::validate_url(&text)
    }

    fn trim(&self, value: Option<&Value>) -> Result<Value, String> {
        match present(value)? {
            Value::String(text) => Ok(Value::String(sanitizers::trim(text))),
            other => Ok(other.clone()),
        }
    }

    fn to_int(&self, value: Option<&Value>) -> Result<Value, String> {
        let value = present(value)?;
        sanitizers::coerce_int(value).map(Value::from)
    }

    fn strip_tags(&self, value: Option<&Value>) -> Result<Value, String> {
        match present(value)? {
            Value::String(text) => Ok(Value::String(sanitizers::strip_html(text))),
            other => Ok(other.clone()),
        }
    }
}
