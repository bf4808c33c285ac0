//! Path specifiers and resolution against the merged parameter store.
//!
//! A path identifies a (possibly nested) parameter location:
//!
//! - `"blogpost"` resolves the top-level `blogpost` parameter
//! - `"login.username"` walks into the nested `login` object
//! - `2` resolves a pattern-match capture stored under the key `"2"`

use serde_json::Value;

use crate::context::ParameterStore;
use crate::config::PresenceRule;

/// One step of a path: a mapping key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Segment {
    fn as_key(&self) -> String {
        match self {
            Segment::Key(key) => key.clone(),
            Segment::Index(index) => index.to_string(),
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{}", key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// A parameter path in any of its accepted shapes: a pre-split segment
/// sequence, a single capture index, or a dot-delimited string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    Segments(Vec<Segment>),
    Index(usize),
    Dotted(String),
}

impl PathSpec {
    /// Normalize into an ordered segment sequence.
    ///
    /// Dotted strings are split on `.` and empty segments are dropped, so
    /// `"a..b"`, `".a.b"` and `"a.b"` all normalize identically. A pre-split
    /// sequence is used as-is.
    pub fn segments(&self) -> Vec<Segment> {
        match self {
            PathSpec::Segments(segments) => segments.clone(),
            PathSpec::Index(index) => vec![Segment::Index(*index)],
            PathSpec::Dotted(path) => path
                .split('.')
                .filter(|part| !part.is_empty())
                .map(|part| Segment::Key(part.to_string()))
                .collect(),
        }
    }
}

impl From<&str> for PathSpec {
    fn from(path: &str) -> Self {
        PathSpec::Dotted(path.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(path: String) -> Self {
        PathSpec::Dotted(path)
    }
}

impl From<usize> for PathSpec {
    fn from(index: usize) -> Self {
        PathSpec::Index(index)
    }
}

impl From<Vec<Segment>> for PathSpec {
    fn from(segments: Vec<Segment>) -> Self {
        PathSpec::Segments(segments)
    }
}

/// Resolve a path against the store.
///
/// Returns the resolved value together with the canonical dotted form of the
/// path. An absent value is a valid terminal state, not an error: rule
/// implementations decide what to do with it.
///
/// The first segment is looked up in `params` and falls back to `body` per
/// the configured presence rule. Later segments index into whatever the
/// previous step produced; a miss or a non-indexable intermediate value
/// short-circuits the walk to `None`.
///
/// A path that normalizes to zero segments (e.g. `""` or `"..."`) is treated
/// as a literal single empty key: canonical path `""`, value almost always
/// absent.
pub fn resolve(
    spec: &PathSpec,
    store: &ParameterStore,
    presence: PresenceRule,
) -> (Option<Value>, String) {
    let mut segments = spec.segments();
    if segments.is_empty() {
        segments.push(Segment::Key(String::new()));
    }

    let canonical = segments
        .iter()
        .map(Segment::to_string)
        .collect::<Vec<_>>()
        .join(".");

    let mut walk = segments.iter();
    let first = walk.next().expect("segments are non-empty after normalization");
    let mut current = lookup_root(first, store, presence);

    for segment in walk {
        current = match current {
            Some(value) => step(&value, segment),
            None => None,
        };
    }

    (current, canonical)
}

/// First-segment lookup: `params` wins over `body`.
///
/// Under [`PresenceRule::Truthy`] an entry only counts as present when its
/// value is usable (non-null, non-`false`, non-zero, non-empty-string),
/// matching what rule libraries expect for "no usable value". Under
/// [`PresenceRule::Exists`] any stored value counts.
fn lookup_root(segment: &Segment, store: &ParameterStore, presence: PresenceRule) -> Option<Value> {
    let key = segment.as_key();
    let usable = |value: &&Value| match presence {
        PresenceRule::Truthy => is_usable(value),
        PresenceRule::Exists => true,
    };

    store
        .params
        .get(&key)
        .filter(usable)
        .or_else(|| store.body.get(&key).filter(usable))
        .cloned()
}

fn step(value: &Value, segment: &Segment) -> Option<Value> {
    match (value, segment) {
        (Value::Object(map), Segment::Key(key)) => map.get(key).cloned(),
        (Value::Object(map), Segment::Index(index)) => map.get(&index.to_string()).cloned(),
        (Value::Array(items), Segment::Index(index)) => items.get(*index).cloned(),
        (Value::Array(items), Segment::Key(key)) => key
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index).cloned()),
        _ => None,
    }
}

fn is_usable(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
