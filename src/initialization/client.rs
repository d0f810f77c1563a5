//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::api::OvhClient;
use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for every API request.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Request timeout from the configuration
/// - TCP connect timeout of `TCP_CONNECT_TIMEOUT_SECS`
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

/// Initializes the OVH API client for the configured endpoint.
pub fn init_api_client(config: &Config) -> anyhow::Result<OvhClient> {
    let http = init_client(config)?;
    let client = OvhClient::new(http, config.api_base_url())?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_api_client_default_endpoint() {
        let client = init_api_client(&Config::default()).expect("client should build");
        assert_eq!(client.base_url(), "https://eu.api.ovh.com/v1");
    }

    #[test]
    fn test_init_api_client_rejects_invalid_base_url() {
        let config = Config {
            api_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(init_api_client(&config).is_err());
    }
}
