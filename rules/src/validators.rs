//! Field validators for the default rule catalogue.
//!
//! Reusable validation functions over plain text; the [`Catalog`]
//! adapts resolved request values onto these.
//!
//! [`Catalog`]: crate::Catalog

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Simple email shape: one `@`, a dot in the domain, no whitespace
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    /// URL pattern for http(s) URLs
    static ref URL_REGEX: Regex = Regex::new(
        r"^https?://[^\s/$.?#].[^\s]*$"
    ).unwrap();
}

/// Validate that a string is not empty after trimming
pub fn validate_not_empty(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("is required".to_string());
    }
    Ok(())
}

/// Validate string length within bounds
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min {
        return Err(format!("must be at least {} characters", min));
    }
    if len > max {
        return Err(format!("must be at most {} characters", max));
    }
    Ok(())
}

/// Validate that a string holds a (possibly signed) decimal integer
pub fn validate_integer(value: &str) -> Result<(), String> {
    if value.trim().parse::<i64>().is_err() {
        return Err("must be an integer".to_string());
    }
    Ok(())
}

/// Validate substring containment
pub fn validate_contains(value: &str, needle: &str) -> Result<(), String> {
    if !value.contains(needle) {
        return Err(format!("must contain '{}'", needle));
    }
    Ok(())
}

/// Validate a string against a caller-supplied regex pattern
///
/// Patterns come from handler code, not from request input, so a pattern
/// that fails to compile is reported as its own failure rather than a panic.
pub fn validate_pattern(value: &str, pattern: &str) -> Result<(), String> {
    let regex = Regex::new(pattern).map_err(|_| format!("invalid pattern `{}`", pattern))?;
    if !regex.is_match(value) {
        return Err("does not match the required pattern".to_string());
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(value: &str) -> Result<(), String> {
    if !EMAIL_REGEX.is_match(value.trim()) {
        return Err("must be a valid email address".to_string());
    }
    Ok(())
}

/// Validate URL format
pub fn validate_url(value: &str) -> Result<(), String> {
    if !URL_REGEX.is_match(value.trim()) {
        return Err("must be a valid URL (starting with http:// or https://)".to_string());
    }
    Ok(())
}
