use service_core::config as core_config;
use service_core::error::AppError;
use service_core::observability::LogFormat;
use std::env;

pub const DEFAULT_SERVICE_NAME: &str = "k8s-sample-api";
pub const DEFAULT_DELAY_MS: u64 = 3000;
pub const DEFAULT_LOAD_TEST_DURATION_MS: u64 = 8000;
pub const DEFAULT_MEMORY_TEST_SIZE_MB: u64 = 100;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    pub log_format: LogFormat,
    pub delay_ms: u64,
    pub load_test: LoadTestConfig,
}

/// Defaults applied when the load-test query parameters are absent or invalid.
#[derive(Debug, Clone)]
pub struct LoadTestConfig {
    pub duration_ms: u64,
    pub memory_size_mb: u64,
}

impl Default for LoadTestConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_LOAD_TEST_DURATION_MS,
            memory_size_mb: DEFAULT_MEMORY_TEST_SIZE_MB,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            delay_ms: DEFAULT_DELAY_MS,
            load_test: LoadTestConfig::default(),
        }
    }
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common = core_config::Config::load()?;

        Ok(ApiConfig {
            common,
            service_name: get_env("SERVICE_NAME", DEFAULT_SERVICE_NAME),
            log_level: get_env("LOG_LEVEL", "info"),
            log_format: get_env("LOG_FORMAT", "json")
                .parse()
                .map_err(|e: String| AppError::Config(anyhow::anyhow!(e)))?,
            delay_ms: parse_env("DELAY_RESPONSE_MS", DEFAULT_DELAY_MS)?,
            load_test: LoadTestConfig {
                duration_ms: parse_env("LOAD_TEST_DURATION_MS", DEFAULT_LOAD_TEST_DURATION_MS)?,
                memory_size_mb: parse_env("LOAD_TEST_MEMORY_MB", DEFAULT_MEMORY_TEST_SIZE_MB)?,
            },
        })
    }

    pub fn port(&self) -> u16 {
        self.common.port
    }
}

fn get_env(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) if !val.is_empty() => val,
        _ => default.to_string(),
    }
}

fn parse_env(key: &str, default: u64) -> Result<u64, AppError> {
    match env::var(key) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e: std::num::ParseIntError| {
            AppError::Config(anyhow::anyhow!("{} must be a non-negative integer: {}", key, e))
        }),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ApiConfig::default();
        assert_eq!(config.port(), 8000);
        assert_eq!(config.delay_ms, 3000);
        assert_eq!(config.load_test.duration_ms, 8000);
        assert_eq!(config.load_test.memory_size_mb, 100);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        assert_eq!(get_env("SAMPLE_API_TEST_SURELY_UNSET", "x"), "x");
        assert_eq!(parse_env("SAMPLE_API_TEST_SURELY_UNSET", 7).unwrap(), 7);
    }
}
