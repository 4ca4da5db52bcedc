//! Comparison configuration with sensible defaults.
//!
//! [`CompareConfig`] controls where the two vendor endpoints live, how long
//! requests may take, and whether a single-vendor outage should still
//! produce results.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CompareError;
use crate::types::Vendor;

/// Configuration for a product comparison.
///
/// Use [`Default::default()`] for the storefront defaults, or construct
/// with field overrides. Deserialises from partial TOML/JSON; missing
/// fields take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Base address shared by both vendor endpoints.
    pub base_url: String,
    /// Path of the vendor A (Amazon) search endpoint.
    pub amazon_path: String,
    /// Path of the vendor B (Flipkart) search endpoint.
    pub flipkart_path: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, the crate name and version are sent.
    pub user_agent: Option<String>,
    /// Symbol prefixed to formatted prices.
    pub currency_symbol: String,
    /// When `true`, a failed vendor contributes zero listings instead of
    /// failing the whole comparison.
    pub allow_partial_results: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".into(),
            amazon_path: "/api/products/search".into(),
            flipkart_path: "/api/flipkart/search".into(),
            timeout_seconds: 10,
            user_agent: None,
            currency_symbol: "₹".into(),
            allow_partial_results: false,
        }
    }
}

impl CompareConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `base_url` must parse as an absolute http(s) URL
    /// - both vendor paths must start with `/`
    pub fn validate(&self) -> Result<(), CompareError> {
        if self.timeout_seconds == 0 {
            return Err(CompareError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        let base = Url::parse(&self.base_url)
            .map_err(|e| CompareError::Config(format!("invalid base_url: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(CompareError::Config(format!(
                "base_url must use http or https, got {}",
                base.scheme()
            )));
        }
        for (name, path) in [
            ("amazon_path", &self.amazon_path),
            ("flipkart_path", &self.flipkart_path),
        ] {
            if !path.starts_with('/') {
                return Err(CompareError::Config(format!(
                    "{name} must start with '/'"
                )));
            }
        }
        Ok(())
    }

    /// Full search endpoint URL for `vendor`.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Config`] if the base URL and path do not
    /// form a valid URL.
    pub fn endpoint(&self, vendor: Vendor) -> Result<Url, CompareError> {
        let path = match vendor {
            Vendor::Amazon => &self.amazon_path,
            Vendor::Flipkart => &self.flipkart_path,
        };
        let joined = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        Url::parse(&joined)
            .map_err(|e| CompareError::Config(format!("invalid {vendor} endpoint {joined}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_storefront_values() {
        let config = CompareConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.amazon_path, "/api/products/search");
        assert_eq!(config.flipkart_path, "/api/flipkart/search");
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.currency_symbol, "₹");
        assert!(!config.allow_partial_results);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(CompareConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = CompareConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn unparseable_base_url_rejected() {
        let config = CompareConfig {
            base_url: "not a url".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn non_http_base_url_rejected() {
        let config = CompareConfig {
            base_url: "ftp://localhost:5000".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn relative_vendor_path_rejected() {
        let config = CompareConfig {
            flipkart_path: "api/flipkart/search".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("flipkart_path"));
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let config = CompareConfig {
            base_url: "http://127.0.0.1:8080/".into(),
            ..Default::default()
        };
        let amazon = config.endpoint(Vendor::Amazon).expect("amazon endpoint");
        assert_eq!(amazon.as_str(), "http://127.0.0.1:8080/api/products/search");
        let flipkart = config.endpoint(Vendor::Flipkart).expect("flipkart endpoint");
        assert_eq!(flipkart.as_str(), "http://127.0.0.1:8080/api/flipkart/search");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: CompareConfig =
            serde_json::from_str(r#"{"timeout_seconds": 3}"#).expect("deserialize");
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.base_url, "http://localhost:5000");
    }
}
