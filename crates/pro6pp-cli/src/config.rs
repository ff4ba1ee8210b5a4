use std::env;
use std::time::Duration;

use pro6pp_api::{ClientConfig, ResponseFormat};

use crate::error::{CliError, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Client settings parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub format: ResponseFormat,
    pub pretty: bool,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Config {
    /// Parse configuration from `PRO6PP_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("PRO6PP_API_KEY").filter(|k| !k.trim().is_empty());

        let format = match lookup("PRO6PP_FORMAT") {
            Some(f) => f.parse::<ResponseFormat>()?,
            None => ResponseFormat::default(),
        };

        let pretty = lookup("PRO6PP_PRETTY")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let base_url = lookup("PRO6PP_BASE_URL");

        let timeout_secs = match lookup("PRO6PP_TIMEOUT_SECS") {
            Some(v) => v.trim().parse::<u64>().map_err(|_| {
                CliError::Config(format!("PRO6PP_TIMEOUT_SECS is not a number: {}", v))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(CliError::Config(
                "PRO6PP_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            format,
            pretty,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Build the library config; an API key is required at this point
    pub fn client_config(&self) -> Result<ClientConfig> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            CliError::Config("PRO6PP_API_KEY or --api-key is required".to_string())
        })?;

        let mut config = ClientConfig::new(api_key)
            .with_format(self.format)
            .with_pretty(self.pretty)
            .with_timeout(self.timeout);
        if let Some(ref url) = self.base_url {
            config = config.with_base_url(url.clone());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.format, ResponseFormat::Json);
        assert!(!config.pretty);
        assert!(config.base_url.is_none());
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_reads_all_variables() {
        let config = config_from(&[
            ("PRO6PP_API_KEY", "secret"),
            ("PRO6PP_FORMAT", "XML"),
            ("PRO6PP_PRETTY", "true"),
            ("PRO6PP_BASE_URL", "http://localhost:8080/v1"),
            ("PRO6PP_TIMEOUT_SECS", "10"),
        ])
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.format, ResponseFormat::Xml);
        assert!(config.pretty);
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let config = config_from(&[("PRO6PP_API_KEY", "  ")]).unwrap();
        assert!(config.client_config().is_err());
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        assert!(matches!(
            config_from(&[("PRO6PP_FORMAT", "yaml")]),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        assert!(config_from(&[("PRO6PP_TIMEOUT_SECS", "soon")]).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(matches!(
            config_from(&[("PRO6PP_TIMEOUT_SECS", "0")]),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_client_config_carries_settings() {
        let config = config_from(&[("PRO6PP_API_KEY", "secret"), ("PRO6PP_PRETTY", "1")]).unwrap();
        let client_config = config.client_config().unwrap();
        assert_eq!(client_config.api_key, "secret");
        assert!(client_config.pretty);
        assert_eq!(client_config.base_url, "http://api.pro6pp.nl/v1/");
    }
}
