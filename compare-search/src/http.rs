//! Shared HTTP client for the vendor search endpoints.

use crate::config::CompareConfig;
use crate::error::CompareError;
use std::time::Duration;

/// User-Agent sent when the config does not override it.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for the vendor endpoints.
///
/// The client has:
/// - Timeout from config, applied to every request
/// - The configured User-Agent, or [`DEFAULT_USER_AGENT`]
/// - gzip decompression
///
/// # Errors
///
/// Returns [`CompareError::Network`] if the client cannot be constructed.
pub fn build_client(config: &CompareConfig) -> Result<reqwest::Client, CompareError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .build()
        .map_err(|e| CompareError::Network(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_user_agent_names_crate() {
        assert!(DEFAULT_USER_AGENT.starts_with("compare-search/"));
    }

    #[test]
    fn build_client_with_default_config() {
        let client = build_client(&CompareConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn build_client_with_custom_ua() {
        let config = CompareConfig {
            user_agent: Some("StorefrontBot/1.0".into()),
            ..Default::default()
        };
        assert!(build_client(&config).is_ok());
    }
}
