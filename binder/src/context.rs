//! Request-scoped validation context.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::chain::{RuleChain, RuleSet};
use crate::config::PresenceRule;
use crate::path::{self, PathSpec};
use crate::response::ValidationFailure;
use crate::sink::{ErrorSink, FieldError};

/// The merged, read-only view of a request's parameters.
///
/// `params` holds route and query parameters, already merged by an upstream
/// collaborator; `body` holds the parsed request body. Installed as a request
/// extension before the validation middleware runs.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    pub params: Map<String, Value>,
    pub body: Map<String, Value>,
}

impl ParameterStore {
    pub fn new(params: Map<String, Value>, body: Map<String, Value>) -> Self {
        Self { params, body }
    }

    /// Build a store from two JSON values. Non-object values yield an empty
    /// mapping for that side.
    pub fn from_values(params: Value, body: Value) -> Self {
        Self {
            params: into_map(params),
            body: into_map(body),
        }
    }
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// The per-request validation handle installed by the middleware.
///
/// Owns the parameter store, the error sink, and the shared rule set for one
/// request. Cloning shares the same request state; instances are never
/// reused across requests.
#[derive(Clone)]
pub struct Validation {
    inner: Arc<Inner>,
}

struct Inner {
    store: ParameterStore,
    rules: Arc<dyn RuleSet>,
    presence: PresenceRule,
    sink: ErrorSink,
}

impl Validation {
    pub fn new(store: ParameterStore, rules: Arc<dyn RuleSet>, presence: PresenceRule) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                rules,
                presence,
                sink: ErrorSink::new(),
            }),
        }
    }

    /// Resolve `path` against the store and return a rule chain bound to the
    /// resolved value. Failing rule operations on the chain accumulate in
    /// this request's error list; nothing is raised here.
    pub fn assert(&self, path: impl Into<PathSpec>) -> RuleChain {
        self.bind(path.into(), None)
    }

    /// Like [`assert`](Self::assert), but every failure in the returned
    /// chain is recorded with `message` instead of the rule-supplied one.
    pub fn assert_with(&self, path: impl Into<PathSpec>, message: impl Into<String>) -> RuleChain {
        self.bind(path.into(), Some(message.into()))
    }

    fn bind(&self, spec: PathSpec, message: Option<String>) -> RuleChain {
        let (value, canonical) = path::resolve(&spec, &self.inner.store, self.inner.presence);
        RuleChain::new(
            value,
            canonical,
            message,
            self.inner.sink.clone(),
            self.inner.rules.clone(),
        )
    }

    /// The aggregation checkpoint: `Ok(())` when no rule has failed,
    /// otherwise the complete ordered failure list. Calling this with an
    /// empty sink is a no-op; not calling it at all silently drops any
    /// accumulated failures with the request.
    pub fn check(&self) -> Result<(), ValidationFailure> {
        self.check_as::<ValidationFailure>()
    }

    /// [`check`](Self::check) with a caller-selected failure kind.
    pub fn check_as<E>(&self) -> Result<(), E>
    where
        E: From<Vec<FieldError>>,
    {
        if self.inner.sink.is_empty() {
            Ok(())
        } else {
            Err(E::from(self.inner.sink.all()))
        }
    }

    /// Snapshot of the failures recorded so far.
    pub fn errors(&self) -> Vec<FieldError> {
        self.inner.sink.all()
    }

    pub fn has_errors(&self) -> bool {
        !self.inner.sink.is_empty()
    }
}
