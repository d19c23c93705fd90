use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default Gemini REST endpoint.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Flash-tier model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct SyllabusConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub assets: AssetSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetSettings {
    /// Directory served under `/static`.
    pub static_dir: String,
}

impl SyllabusConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(SyllabusConfig {
            common: common_config,
            gemini: GeminiSettings {
                api_key: get_env("GEMINI_API_KEY", None, is_prod)?,
                model: get_env("GEMINI_MODEL", Some(DEFAULT_GEMINI_MODEL), is_prod)?,
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE), is_prod)?,
                timeout_secs: parse_timeout_secs(&get_env(
                    "GEMINI_TIMEOUT_SECS",
                    Some(&DEFAULT_GEMINI_TIMEOUT_SECS.to_string()),
                    is_prod,
                )?)?,
            },
            assets: AssetSettings {
                static_dir: get_env("STATIC_DIR", Some(default_static_dir()), is_prod)?,
            },
        })
    }
}

fn default_static_dir() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/static")
}

/// Whole seconds, at least one.
fn parse_timeout_secs(raw: &str) -> Result<u64, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(AppError::ConfigError(anyhow::anyhow!(
            "GEMINI_TIMEOUT_SECS must be a positive number of seconds, got {:?}",
            raw
        ))),
    }
}

/// Blank values count as unset, so `GEMINI_API_KEY=` still fails fast.
fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_key_is_a_config_error() {
        let err = get_env("SYLLABUS_TEST_NEVER_SET", None, false).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("SYLLABUS_TEST_NEVER_SET"));
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        env::set_var("SYLLABUS_TEST_BLANK", "   ");
        let value = get_env("SYLLABUS_TEST_BLANK", Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn timeout_must_be_a_positive_integer() {
        assert_eq!(parse_timeout_secs("120").unwrap(), 120);
        assert_eq!(parse_timeout_secs(" 30 ").unwrap(), 30);

        for bad in ["0", "abc", "-5", "1.5"] {
            let err = parse_timeout_secs(bad).unwrap_err();
            assert!(matches!(err, AppError::ConfigError(_)), "value {bad}");
            assert!(err.to_string().contains("GEMINI_TIMEOUT_SECS"));
        }
    }

    #[test]
    fn production_ignores_defaults() {
        let err = get_env("SYLLABUS_TEST_NEVER_SET", Some("fallback"), true).unwrap_err();
        assert!(err.to_string().contains("required in production"));
    }
}
