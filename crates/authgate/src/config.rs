use std::env;

use anyhow::Context;
use url::Url;

/// Application configuration loaded from environment variables.
///
/// The OAuth callback URLs are derived from the base URL once at load time;
/// handlers never recompute them.
#[derive(Debug, Clone)]
pub struct Config {
    /// Identity provider API root (default: "https://cloud.appwrite.io/v1")
    pub endpoint: Url,
    /// Provider project identifier
    pub project_id: String,
    /// Static service key backing administrative bindings
    pub api_key: String,
    /// Public base URL of this gateway (default: "http://localhost:5173")
    pub base_url: Url,
    /// OAuth success callback: this gateway's `/success` route
    pub success_url: Url,
    /// OAuth failure callback: this gateway's `/fail` route
    pub failure_url: Url,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `APPWRITE_ENDPOINT` - Provider API root (default: "https://cloud.appwrite.io/v1")
    /// - `APPWRITE_PROJECT_ID` - Provider project identifier (default: empty)
    /// - `APPWRITE_API_KEY` - Service API key (default: empty)
    /// - `BASE_URL` - Public base URL of this gateway (default: "http://localhost:5173")
    pub fn from_env() -> anyhow::Result<Self> {
        let endpoint = env::var("APPWRITE_ENDPOINT")
            .unwrap_or_else(|_| "https://cloud.appwrite.io/v1".to_string())
            .parse()
            .context("APPWRITE_ENDPOINT must be a valid URL")?;

        let base_url: Url = env::var("BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .parse()
            .context("BASE_URL must be a valid URL")?;

        Self::with_base_url(endpoint, base_url)
            .map(|config| Self {
                project_id: env::var("APPWRITE_PROJECT_ID").unwrap_or_default(),
                api_key: env::var("APPWRITE_API_KEY").unwrap_or_default(),
                ..config
            })
    }

    /// Build a config with derived callback URLs and empty credentials.
    pub fn with_base_url(endpoint: Url, base_url: Url) -> anyhow::Result<Self> {
        let success_url = base_url.join("/success").context("invalid BASE_URL")?;
        let failure_url = base_url.join("/fail").context("invalid BASE_URL")?;

        Ok(Self {
            endpoint,
            project_id: String::new(),
            api_key: String::new(),
            base_url,
            success_url,
            failure_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("APPWRITE_ENDPOINT");
        env::remove_var("APPWRITE_PROJECT_ID");
        env::remove_var("APPWRITE_API_KEY");
        env::remove_var("BASE_URL");

        let config = Config::from_env().unwrap();

        assert_eq!(config.endpoint.as_str(), "https://cloud.appwrite.io/v1");
        assert_eq!(config.project_id, "");
        assert_eq!(config.api_key, "");
        assert_eq!(config.base_url.as_str(), "http://localhost:5173/");
    }

    #[test]
    fn test_callback_urls_derived_from_base() {
        let config = Config::with_base_url(
            "https://cloud.appwrite.io/v1".parse().unwrap(),
            "http://localhost:5173".parse().unwrap(),
        )
        .unwrap();

        assert_eq!(config.success_url.as_str(), "http://localhost:5173/success");
        assert_eq!(config.failure_url.as_str(), "http://localhost:5173/fail");
    }
}
