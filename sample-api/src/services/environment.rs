//! Read access to the environment variables a Kubernetes Deployment injects
//! (plain values, ConfigMap keys and Secret keys).
//!
//! Values are looked up on every call so changes become visible without a
//! restart. The lookup itself sits behind [`EnvSource`] so handlers can be
//! exercised against a fixed set of variables.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

/// Returned in place of a variable that is unset or empty.
pub const UNSET: &str = "未設定";
/// Returned in place of a secret that is set.
pub const MASKED: &str = "****MASKED****";

pub const PORT: &str = "PORT";
pub const CURRENT_ENV: &str = "CURRENT_ENV";
pub const CONFIG_MESSAGE: &str = "CONFIG_MESSAGE";
pub const SECRET_KEY: &str = "SECRET_KEY";
pub const NODE_ENV: &str = "NODE_ENV";

pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed set of variables.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSnapshot {
    #[schema(example = "8000")]
    pub port: String,
    #[schema(example = "development")]
    pub current_env: String,
    #[schema(example = "Hello from ConfigMap")]
    pub config_message: String,
    #[schema(example = "****MASKED****")]
    pub secret_key: String,
}

#[derive(Clone)]
pub struct EnvAccessor {
    source: Arc<dyn EnvSource>,
}

impl EnvAccessor {
    pub fn new(source: impl EnvSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn process() -> Self {
        Self::new(ProcessEnv)
    }

    /// Value of `key`, or `None` when it is unset or empty.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.source.var(key).filter(|v| !v.is_empty())
    }

    pub fn get_value(&self, key: &str) -> String {
        self.get_value_or(key, UNSET)
    }

    pub fn get_value_or(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// Reports only whether the variable is present, never its value.
    pub fn get_masked(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(_) => MASKED.to_string(),
            None => UNSET.to_string(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.lookup(NODE_ENV).as_deref() == Some("production")
    }

    pub fn snapshot(&self) -> EnvironmentSnapshot {
        EnvironmentSnapshot {
            port: self.get_value(PORT),
            current_env: self.get_value(CURRENT_ENV),
            config_message: self.get_value(CONFIG_MESSAGE),
            secret_key: self.get_masked(SECRET_KEY),
        }
    }
}

impl std::fmt::Debug for EnvAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvAccessor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_and_empty_values_use_the_sentinel() {
        let env = EnvAccessor::new(StaticEnv::new().with(CURRENT_ENV, ""));
        assert_eq!(env.get_value(PORT), UNSET);
        assert_eq!(env.get_value(CURRENT_ENV), UNSET);
        assert_eq!(env.get_value_or(CURRENT_ENV, "development"), "development");
    }

    #[test]
    fn set_values_are_returned_verbatim() {
        let env = EnvAccessor::new(StaticEnv::new().with(PORT, "8000"));
        assert_eq!(env.get_value(PORT), "8000");
    }

    #[test]
    fn secrets_are_masked() {
        let set = EnvAccessor::new(StaticEnv::new().with(SECRET_KEY, "s3cr3t"));
        assert_eq!(set.get_masked(SECRET_KEY), MASKED);

        let unset = EnvAccessor::new(StaticEnv::new());
        assert_eq!(unset.get_masked(SECRET_KEY), UNSET);

        let empty = EnvAccessor::new(StaticEnv::new().with(SECRET_KEY, ""));
        assert_eq!(empty.get_masked(SECRET_KEY), UNSET);
    }

    #[test]
    fn production_flag_requires_exact_value() {
        let prod = EnvAccessor::new(StaticEnv::new().with(NODE_ENV, "production"));
        assert!(prod.is_production());

        let dev = EnvAccessor::new(StaticEnv::new().with(NODE_ENV, "development"));
        assert!(!dev.is_production());
        assert!(!EnvAccessor::new(StaticEnv::new()).is_production());
    }

    #[test]
    fn snapshot_never_contains_the_secret() {
        let env: StaticEnv = [
            (PORT, "8000"),
            (CURRENT_ENV, "staging"),
            (CONFIG_MESSAGE, "hello"),
            (SECRET_KEY, "hunter2"),
        ]
        .into_iter()
        .collect();
        let snapshot = EnvAccessor::new(env).snapshot();

        assert_eq!(
            snapshot,
            EnvironmentSnapshot {
                port: "8000".into(),
                current_env: "staging".into(),
                config_message: "hello".into(),
                secret_key: MASKED.into(),
            }
        );
    }
}
