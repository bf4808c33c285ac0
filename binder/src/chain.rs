//! Rule chains: fluent validation/sanitization over one resolved value.
//!
//! The chain itself never raises and never short-circuits. Every failing
//! operation appends one entry to the request's [`ErrorSink`], labeled with
//! the canonical path the value was resolved from, so a single `assert` call
//! reports every violated rule for a field rather than just the first.

use std::sync::Arc;

use serde_json::Value;

use crate::sink::ErrorSink;

/// The external rule capability set.
///
/// One method per catalogue operation. Validators return `Ok(())` or a
/// human-readable rejection message; sanitizers return the replacement
/// value. `value` is `None` when path resolution found nothing usable, a
/// state implementations are free to reject as they see fit.
///
/// Implementations must be stateless across chains: the same instance is
/// shared by every request through an `Arc`.
pub trait RuleSet: Send + Sync {
    fn not_empty(&self, value: Option<&Value>) -> Result<(), String>;
    fn len(&self, value: Option<&Value>, min: usize, max: usize) -> Result<(), String>;
    fn is_int(&self, value: Option<&Value>) -> Result<(), String>;
    fn contains(&self, value: Option<&Value>, needle: &str) -> Result<(), String>;
    fn matches(&self, value: Option<&Value>, pattern: &str) -> Result<(), String>;
    fn is_email(&self, value: Option<&Value>) -> Result<(), String>;
    fn is_url(&self, value: Option<&Value>) -> Result<(), String>;

    fn trim(&self, value: Option<&Value>) -> Result<Value, String>;
    fn to_int(&self, value: Option<&Value>) -> Result<Value, String>;
    fn strip_tags(&self, value: Option<&Value>) -> Result<Value, String>;
}

/// A bound, fluent sequence of rule operations over one resolved value.
///
/// Produced by [`crate::Validation::assert`]. Failures are recorded into the
/// sink with the chain's path label; a caller-supplied message override
/// replaces the rule-supplied message on every failure in the chain.
/// Sanitizers that succeed rebind the chain to the sanitized value, which
/// later operations then see.
pub struct RuleChain {
    value: Option<Value>,
    path: String,
    message: Option<String>,
    sink: ErrorSink,
    rules: Arc<dyn RuleSet>,
}

impl RuleChain {
    pub(crate) fn new(
        value: Option<Value>,
        path: String,
        message: Option<String>,
        sink: ErrorSink,
        rules: Arc<dyn RuleSet>,
    ) -> Self {
        Self {
            value,
            path,
            message,
            sink,
            rules,
        }
    }

    /// The currently bound value, reflecting any sanitization so far.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<Value> {
        self.value
    }

    pub fn not_empty(self) -> Self {
        let outcome = self.rules.not_empty(self.value.as_ref());
        self.check(outcome)
    }

    pub fn len(self, min: usize, max: usize) -> Self {
        let outcome = self.rules.len(self.value.as_ref(), min, max);
        self.check(outcome)
    }

    pub fn is_int(self) -> Self {
        let outcome = self.rules.is_int(self.value.as_ref());
        self.check(outcome)
    }

    pub fn contains(self, needle: &str) -> Self {
        let outcome = self.rules.contains(self.value.as_ref(), needle);
        self.check(outcome)
    }

    pub fn matches(self, pattern: &str) -> Self {
        let outcome = self.rules.matches(self.value.as_ref(), pattern);
        self.check(outcome)
    }

    pub fn is_email(self) -> Self {
        let outcome = self.rules.is_email(self.value.as_ref());
        self.check(outcome)
    }

    pub fn is_url(self) -> Self {
        let outcome = self.rules.is_url(self.value.as_ref());
        self.check(outcome)
    }

    pub fn trim(self) -> Self {
        let outcome = self.rules.trim(self.value.as_ref());
        self.rebind(outcome)
    }

    pub fn to_int(self) -> Self {
        let outcome = self.rules.to_int(self.value.as_ref());
        self.rebind(outcome)
    }

    pub fn strip_tags(self) -> Self {
        let outcome = self.rules.strip_tags(self.value.as_ref());
        self.rebind(outcome)
    }

    fn check(self, outcome: Result<(), String>) -> Self {
        if let Err(message) = outcome {
            self.record(message);
        }
        self
    }

    fn rebind(mut self, outcome: Result<Value, String>) -> Self {
        match outcome {
            Ok(value) => self.value = Some(value),
            Err(message) => self.record(message),
        }
        self
    }

    fn record(&self, message: String) {
        let message = self.message.clone().unwrap_or(message);
        self.sink.append(&self.path, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    /// Recording capability set: every invocation is logged, and validators
    /// fail on absent or empty-string values so tests can steer failures
    /// without real rule semantics.
    #[derive(Default)]
    struct MockRules {
        calls: Mutex<Vec<String>>,
    }

    impl MockRules {
        fn shared() -> Arc<MockRules> {
            Arc::new(MockRules::default())
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn log(&self, name: &str) {
            self.calls.lock().unwrap().push(name.to_string());
        }

        fn reject_unusable(value: Option<&Value>) -> Result<(), String> {
            match value {
                None => Err("is required".to_string()),
                Some(Value::String(text)) if text.is_empty() => Err("is empty".to_string()),
                Some(_) => Ok(()),
            }
        }
    }

    impl RuleSet for MockRules {
        fn not_empty(&self, value: Option<&Value>) -> Result<(), String> {
            self.log("not_empty");
            Self::reject_unusable(value)
        }

        fn len(&self, value: Option<&Value>, min: usize, _max: usize) -> Result<(), String> {
            self.log("len");
            Self::reject_unusable(value)?;
            match value {
                Some(Value::String(text)) if text.chars().count() < min => {
                    Err(format!("must be at least {} characters", min))
                }
                _ => Ok(()),
            }
        }

        fn is_int(&self, value: Option<&Value>) -> Result<(), String> {
            self.log("is_int");
            match value {
                Some(Value::Number(number)) if number.is_i64() => Ok(()),
                _ => Err("must be an integer".to_string()),
            }
        }

        fn contains(&self, value: Option<&Value>, _needle: &str) -> Result<(), String> {
            self.log("contains");
            Self::reject_unusable(value)
        }

        fn matches(&self, value: Option<&Value>, _pattern: &str) -> Result<(), String> {
            self.log("matches");
            Self::reject_unusable(value)
        }

        fn is_email(&self, value: Option<&Value>) -> Result<(), String> {
            self.log("is_email");
            Self::reject_unusable(value)
        }

        fn is_url(&self, value: Option<&Value>) -> Result<(), String> {
            self.log("is_url");
            Self::reject_unusable(value)
        }

        fn trim(&self, value: Option<&Value>) -> Result<Value, String> {
            self.log("trim");
            match value {
                Some(Value::String(text)) => Ok(Value::String(text.trim().to_string())),
                Some(other) => Ok(other.clone()),
                None => Err("is required".to_string()),
            }
        }

        fn to_int(&self, value: Option<&Value>) -> Result<Value, String> {
            self.log("to_int");
            match value {
                Some(Value::String(text)) => text
                    .parse::<i64>()
                    .map(Value::from)
                    .map_err(|_| "must be an integer".to_string()),
                Some(Value::Number(number)) if number.is_i64() => Ok(Value::Number(number.clone())),
                _ => Err("must be an integer".to_string()),
            }
        }

        fn strip_tags(&self, value: Option<&Value>) -> Result<Value, String> {
            self.log("strip_tags");
            match value {
                Some(other) => Ok(other.clone()),
                None => Err("is required".to_string()),
            }
        }
    }

    fn chain(value: Option<Value>, message: Option<&str>, sink: &ErrorSink, rules: &Arc<MockRules>) -> RuleChain {
        let rules: Arc<dyn RuleSet> = rules.clone();
        RuleChain::new(
            value,
            "field".to_string(),
            message.map(str::to_string),
            sink.clone(),
            rules,
        )
    }

    #[test]
    fn failures_do_not_short_circuit_later_operations() {
        let sink = ErrorSink::new();
        let rules = MockRules::shared();

        chain(Some(json!("")), None, &sink, &rules)
            .not_empty()
            .is_int();

        let errors = sink.all();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].path, "field");
        assert_eq!(errors[0].message, "is empty");
        assert_eq!(errors[1].path, "field");
        assert_eq!(errors[1].message, "must be an integer");
        assert_eq!(rules.calls(), vec!["not_empty", "is_int"]);
    }

    #[test]
    fn passing_operations_record_nothing() {
        let sink = ErrorSink::new();
        let rules = MockRules::shared();

        chain(Some(json!("bob")), None, &sink, &rules)
            .not_empty()
            .len(1, 6);

        assert!(sink.is_empty());
        assert_eq!(rules.calls(), vec!["not_empty", "len"]);
    }

    #[test]
    fn override_message_replaces_every_rule_message() {
        let sink = ErrorSink::new();
        let rules = MockRules::shared();

        chain(None, Some("username is unacceptable"), &sink, &rules)
            .not_empty()
            .is_int();

        let errors = sink.all();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|error| error.message == "username is unacceptable"));
    }

    #[test]
    fn successful_sanitizer_rebinds_the_value() {
        let sink = ErrorSink::new();
        let rules = MockRules::shared();

        let chain = chain(Some(json!("42")), None, &sink, &rules).to_int().is_int();

        assert!(sink.is_empty());
        assert_eq!(chain.value(), Some(&json!(42)));
    }

    #[test]
    fn failing_sanitizer_keeps_the_original_value() {
        let sink = ErrorSink::new();
        let rules = MockRules::shared();

        let chain = chain(Some(json!("nope")), None, &sink, &rules).to_int();

        assert_eq!(sink.len(), 1);
        assert_eq!(chain.value(), Some(&json!("nope")));
    }

    #[test]
    fn absent_value_reaches_the_rules_unchanged() {
        let sink = ErrorSink::new();
        let rules = MockRules::shared();

        chain(None, None, &sink, &rules).not_empty();

        let errors = sink.all();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "is required");
    }
}
