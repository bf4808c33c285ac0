//! Request-validation binding layer for axum middleware.
//!
//! Handlers declare validation and sanitization rules against request
//! parameters identified by a path expression: dot-notation for nested
//! values (`"login.username"`), or a numeric index for pattern-match
//! captures (`2`). The layer resolves the path against the merged parameter
//! store and accumulates failures into a per-request error list instead of
//! failing fast on the first violation.
//!
//! # Overview
//!
//! The layer consists of four pieces:
//!
//! 1. **Path resolution** - normalizes a path specifier and walks it against
//!    the [`ParameterStore`], with `params` taking precedence over `body`.
//! 2. **[`ErrorSink`]** - the request-scoped, ordered failure list.
//! 3. **[`RuleChain`]** - a fluent chain over the external [`RuleSet`]
//!    capability set, bound to one resolved value; every failing operation
//!    appends a labeled entry to the sink.
//! 4. **[`validation_middleware`]** - installs the [`Validation`] handle on
//!    the request and always passes control onward.
//!
//! # Usage
//!
//! ```ignore
//! use axum::{middleware, routing::post, Extension, Router};
//! use binder::{validation_middleware, Validation, ValidationFailure, ValidationState};
//!
//! async fn create_user(Extension(v): Extension<Validation>) -> Result<&'static str, ValidationFailure> {
//!     v.assert("login.username").not_empty().len(1, 6);
//!     v.assert_with("age", "age must be a number").is_int();
//!
//!     // Raises an aggregated 400 iff any rule above failed.
//!     v.check()?;
//!     Ok("created")
//! }
//!
//! let app: Router = Router::new()
//!     .route("/users", post(create_user))
//!     .layer(middleware::from_fn_with_state(
//!         ValidationState::from_env(rule_set),
//!         validation_middleware,
//!     ));
//! ```
//!
//! Rule failures never raise on their own. The only failure that crosses the
//! handler boundary is the aggregated one returned by [`Validation::check`]
//! (or [`Validation::check_as`] for a caller-selected kind); skipping the
//! checkpoint silently drops whatever accumulated.

pub mod chain;
pub mod config;
pub mod context;
pub mod middleware;
pub mod path;
pub mod response;
pub mod sink;

pub use chain::{RuleChain, RuleSet};
pub use config::{BinderConfig, PresenceRule};
pub use context::{ParameterStore, Validation};
pub use middleware::{validation_middleware, ValidationState};
pub use path::{resolve, PathSpec, Segment};
pub use response::ValidationFailure;
pub use sink::{ErrorSink, FieldError};
