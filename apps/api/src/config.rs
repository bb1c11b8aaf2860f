use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_APP_NAME: &str = "Neuram PDF Summarizer";
const DEFAULT_MODEL: &str = "deepseek/deepseek-r1-0528:free";
const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
///
/// The OpenRouter key is optional at startup: a missing key only fails the
/// analysis request that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: String,
    pub openrouter_base_url: String,
    pub request_timeout: Duration,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let timeout_secs = optional_env("REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<f64>()
            .context("REQUEST_TIMEOUT_SECONDS must be a number of seconds")?;
        if !timeout_secs.is_finite() || timeout_secs <= 0.0 {
            bail!("REQUEST_TIMEOUT_SECONDS must be greater than zero, got {timeout_secs}");
        }

        Ok(Config {
            app_name: optional_env("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            openrouter_api_key: optional_env("OPENROUTER_API_KEY"),
            openrouter_model: optional_env("OPENROUTER_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openrouter_base_url: normalize_base_url(
                &optional_env("OPENROUTER_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            )?,
            request_timeout: Duration::from_secs_f64(timeout_secs),
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Configuration with every default applied and the given key, without
    /// touching the environment.
    #[cfg(test)]
    pub fn with_api_key(api_key: Option<String>) -> Self {
        Config {
            app_name: DEFAULT_APP_NAME.to_string(),
            openrouter_api_key: api_key,
            openrouter_model: DEFAULT_MODEL.to_string(),
            openrouter_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    /// The API key, if one is configured and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.openrouter_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

/// Reads an env var, treating empty values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let url = raw.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!("OPENROUTER_BASE_URL must be an http(s) URL, got '{raw}'");
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        assert_eq!(
            normalize_base_url("https://openrouter.ai/api/v1/").unwrap(),
            "https://openrouter.ai/api/v1"
        );
    }

    #[test]
    fn test_base_url_requires_scheme() {
        assert!(normalize_base_url("openrouter.ai/api/v1").is_err());
    }

    #[test]
    fn test_blank_api_key_is_treated_as_missing() {
        let config = Config::with_api_key(Some("   ".to_string()));
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_api_key_present() {
        let config = Config::with_api_key(Some("sk-or-test".to_string()));
        assert_eq!(config.api_key(), Some("sk-or-test"));
    }
}
