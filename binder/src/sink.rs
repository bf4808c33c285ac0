//! Per-request accumulation of validation failures.

use std::sync::{Arc, Mutex};

use serde::Serialize;

/// A single recorded validation failure, labeled with the canonical dotted
/// path of the parameter it was asserted against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Request-scoped, ordered list of validation failures.
///
/// Pure accumulation: insertion order is failure order, nothing is deduped,
/// reordered or capped. The backing list does not allocate until the first
/// append. Cloning the sink shares the same list, which is how every chain
/// spawned for one request writes into the same place.
#[derive(Debug, Clone, Default)]
pub struct ErrorSink {
    errors: Arc<Mutex<Vec<FieldError>>>,
}

impl ErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, path: impl Into<String>, message: impl Into<String>) {
        self.errors
            .lock()
            .expect("error sink mutex poisoned")
            .push(FieldError::new(path, message));
    }

    /// Snapshot of every failure recorded so far, in insertion order.
    pub fn all(&self) -> Vec<FieldError> {
        self.errors
            .lock()
            .expect("error sink mutex poisoned")
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.errors
            .lock()
            .expect("error sink mutex poisoned")
            .is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors
            .lock()
            .expect("error sink mutex poisoned")
            .len()
    }
}
