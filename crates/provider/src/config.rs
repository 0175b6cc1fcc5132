use crate::ConfigError;
use reqwest::Url;
use std::fmt;
use std::time::Duration;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_ENV: &str = "SHADERFORGE_MODEL";
pub const UPSTREAM_URL_ENV: &str = "SHADERFORGE_UPSTREAM_URL";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Values from the command line; they win over the environment.
#[derive(Debug, Clone, Default)]
pub struct ProviderOverrides {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProviderConfig {
    pub fn from_env(overrides: ProviderOverrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    pub fn resolve(
        overrides: ProviderOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = non_blank(lookup(API_KEY_ENV)).ok_or(ConfigError::MissingApiKey(API_KEY_ENV))?;
        let model = non_blank(overrides.model)
            .or_else(|| non_blank(lookup(MODEL_ENV)))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = non_blank(overrides.base_url)
            .or_else(|| non_blank(lookup(UPSTREAM_URL_ENV)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_base_url(&base_url)?;

        let timeout = overrides.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout,
        })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_base_url(raw: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let cfg = ProviderConfig::resolve(
            ProviderOverrides::default(),
            env(&[(API_KEY_ENV, " secret ")]),
        )
        .unwrap();
        assert_eq!(cfg.api_key, "secret");
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, DEFAULT_TIMEOUT);
        assert_eq!(
            cfg.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn missing_or_blank_key_is_a_config_error() {
        let err = ProviderConfig::resolve(ProviderOverrides::default(), env(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey(API_KEY_ENV));
        let err = ProviderConfig::resolve(
            ProviderOverrides::default(),
            env(&[(API_KEY_ENV, "   ")]),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey(API_KEY_ENV));
    }

    #[test]
    fn overrides_beat_environment() {
        let cfg = ProviderConfig::resolve(
            ProviderOverrides {
                model: Some("flag-model".to_string()),
                base_url: Some("http://127.0.0.1:9000/v1/".to_string()),
                timeout: Some(Duration::from_secs(5)),
            },
            env(&[
                (API_KEY_ENV, "k"),
                (MODEL_ENV, "env-model"),
                (UPSTREAM_URL_ENV, "http://example.invalid"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.model, "flag-model");
        assert_eq!(
            cfg.endpoint(),
            "http://127.0.0.1:9000/v1/models/flag-model:generateContent"
        );
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn environment_model_is_used_without_flag() {
        let cfg = ProviderConfig::resolve(
            ProviderOverrides::default(),
            env(&[(API_KEY_ENV, "k"), (MODEL_ENV, "env-model")]),
        )
        .unwrap();
        assert_eq!(cfg.model, "env-model");
    }

    #[test]
    fn rejects_bad_url_and_zero_timeout() {
        let bad_scheme = ProviderConfig::resolve(
            ProviderOverrides {
                base_url: Some("ftp://example.com".to_string()),
                ..Default::default()
            },
            env(&[(API_KEY_ENV, "k")]),
        );
        assert!(matches!(bad_scheme, Err(ConfigError::InvalidUrl { .. })));

        let zero = ProviderConfig::resolve(
            ProviderOverrides {
                timeout: Some(Duration::ZERO),
                ..Default::default()
            },
            env(&[(API_KEY_ENV, "k")]),
        );
        assert_eq!(zero.unwrap_err(), ConfigError::ZeroTimeout);
    }

    #[test]
    fn debug_output_hides_the_key() {
        let cfg =
            ProviderConfig::resolve(ProviderOverrides::default(), env(&[(API_KEY_ENV, "hunter2")]))
                .unwrap();
        assert!(!format!("{cfg:?}").contains("hunter2"));
    }
}
