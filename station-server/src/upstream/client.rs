//! Shared HTTP plumbing for the DB API gateway.
//!
//! Both the station data and the facility status APIs sit behind the same
//! gateway, authenticate with the same pair of headers, and use 404 to mean
//! "nothing matched". This client handles those concerns once.

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::UpstreamError;

/// Default gateway base URL.
pub const DEFAULT_BASE_URL: &str = "https://apis.deutschebahn.com/db-api-marketplace/apis";

/// Configuration for the API gateway client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Gateway base URL, without trailing slash
    pub base_url: String,
    /// Sent as `DB-Client-Id`
    pub client_id: String,
    /// Sent as `DB-Api-Key`
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Create a new config with the given credentials and the default base URL.
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_id: client_id.into(),
            api_key: api_key.into(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Authenticated JSON client for the gateway.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client. Fails if the credentials are not valid header values.
    pub fn new(config: &ApiConfig) -> Result<Self, UpstreamError> {
        let mut headers = HeaderMap::new();

        let client_id = HeaderValue::from_str(&config.client_id)
            .map_err(|_| UpstreamError::InvalidCredentials)?;
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| UpstreamError::InvalidCredentials)?;
        headers.insert(HeaderName::from_static("db-client-id"), client_id);
        headers.insert(HeaderName::from_static("db-api-key"), api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// URL for a resource path relative to the gateway.
    pub fn url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }

    /// GET a JSON resource.
    ///
    /// Repeated keys in `query` are sent as repeated parameters.
    /// Returns `Ok(None)` when the gateway answers 404.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, UpstreamError> {
        let url = self.url(resource);
        debug!(%url, params = query.len(), "upstream request");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            debug!(%url, "upstream reported no data");
            return Ok(None);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(UpstreamError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Rejected {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| UpstreamError::Decode {
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ApiConfig::new("id", "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_with_base_url_strips_trailing_slash() {
        let config = ApiConfig::new("id", "secret").with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn url_joins_resource() {
        let config = ApiConfig::new("id", "secret").with_base_url("http://localhost:8080");
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(
            client.url("/station-data/v2/stations"),
            "http://localhost:8080/station-data/v2/stations"
        );
        assert_eq!(
            client.url("fasta/v2/stations/1071"),
            "http://localhost:8080/fasta/v2/stations/1071"
        );
    }

    #[test]
    fn rejects_non_header_credentials() {
        let config = ApiConfig::new("id\n", "secret");
        assert!(matches!(
            ApiClient::new(&config),
            Err(UpstreamError::InvalidCredentials)
        ));
    }
}
