//! Default rule catalogue for the request-validation binding layer.
//!
//! [`Catalog`] implements the binder's `RuleSet` capability set with the
//! standard operations: emptiness and length bounds, integer checks and
//! coercion, substring containment, pattern matching, email/URL formats,
//! whitespace trimming and markup stripping.

pub mod catalog;
pub mod sanitizers;
pub mod validators;

pub use catalog::Catalog;
