//! Environment-driven configuration for the binding layer.

use std::env;

const PRESENCE_RULE_ENV: &str = "VALIDATION_PRESENCE_RULE";

/// How the first-segment lookup decides that a `params` entry is present.
///
/// `Truthy` treats falsy stored values (`null`, `false`, `0`, `""`) as
/// absent and falls back to `body`, which is what downstream rule libraries
/// expect when they ask for "no usable value". `Exists` falls back only when
/// the key is genuinely missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenceRule {
    #[default]
    Truthy,
    Exists,
}

#[derive(Debug, Clone, Default)]
pub struct BinderConfig {
    pub presence: PresenceRule,
}

impl BinderConfig {
    pub fn from_env() -> Self {
        let presence = match env::var(PRESENCE_RULE_ENV) {
            Ok(raw) => match parse_presence(&raw) {
                Some(rule) => rule,
                None => {
                    tracing::warn!(
                        "Invalid value for {PRESENCE_RULE_ENV} (`{raw}`), using default `truthy`"
                    );
                    PresenceRule::Truthy
                }
            },
            Err(_) => PresenceRule::Truthy,
        };

        Self { presence }
    }
}

fn parse_presence(raw: &str) -> Option<PresenceRule> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "truthy" => Some(PresenceRule::Truthy),
        "exists" => Some(PresenceRule::Exists),
        _ => None,
    }
}
