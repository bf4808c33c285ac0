use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::chain::RuleSet;
use crate::config::BinderConfig;
use crate::context::{ParameterStore, Validation};

/// Shared middleware state: the stateless rule set plus the binder
/// configuration. Cheap to clone per request.
#[derive(Clone)]
pub struct ValidationState {
    rules: Arc<dyn RuleSet>,
    config: BinderConfig,
}

impl ValidationState {
    pub fn new(rules: Arc<dyn RuleSet>, config: BinderConfig) -> Self {
        Self { rules, config }
    }

    pub fn from_env(rules: Arc<dyn RuleSet>) -> Self {
        Self::new(rules, BinderConfig::from_env())
    }
}

/// Installs a fresh [`Validation`] extension on the request and passes
/// control onward. Never gates request flow: gating is the handler's
/// responsibility through an explicit `check` call.
pub async fn validation_middleware(
    State(state): State<ValidationState>,
    mut request: Request,
    next: Next,
) -> Response {
    let store = match request.extensions().get::<ParameterStore>() {
        Some(store) => store.clone(),
        None => {
            tracing::debug!("no ParameterStore extension on request, validating an empty store");
            ParameterStore::default()
        }
    };

    request.extensions_mut().insert(Validation::new(
        store,
        state.rules.clone(),
        state.config.presence,
    ));

    next.run(request).await
}
