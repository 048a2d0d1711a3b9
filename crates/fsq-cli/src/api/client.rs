//! HTTP API client for Foursquare
//!
//! Userless (client id + secret) access to the v2 venues endpoints.

use crate::api::{endpoints, types::ApiEnvelope};
use crate::config::Config;
use crate::error::{CliError, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("fsq-icons/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client used for API calls and icon downloads
pub fn build_http_client(timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// API client for the Foursquare v2 API
pub struct ApiClient {
    client: Client,
    api_url: String,
    client_id: String,
    client_secret: String,
    api_version: String,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// Fails with a configuration error when credentials are missing, before
    /// any request is made.
    pub fn new(config: &Config) -> Result<Self> {
        let (client_id, client_secret) = config.credentials()?;

        Ok(Self {
            client: build_http_client(config.timeout_secs)?,
            api_url: config.api_url.clone(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            api_version: config.api_version.clone(),
        })
    }

    /// Fetch the full venue-category taxonomy
    ///
    /// Returns the raw `response` object (`{"categories": [...]}`) so it can
    /// be cached without losing fields this tool does not model.
    pub async fn fetch_categories(&self) -> Result<Value> {
        let url = endpoints::categories_url(&self.api_url);
        debug!(url = %url, v = %self.api_version, "Requesting venue categories");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("v", self.api_version.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Errors come back as a regular envelope with a 4xx status
        let envelope: ApiEnvelope<Value> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(CliError::api(format!("HTTP {}", status)));
            },
            Err(e) => return Err(e.into()),
        };

        if !status.is_success() || !envelope.meta.is_success() {
            return Err(CliError::api(envelope.meta.describe_error()));
        }

        let taxonomy = envelope
            .response
            .filter(|r| r.get("categories").is_some_and(Value::is_array))
            .ok_or_else(|| CliError::api("response does not contain a 'categories' list"))?;

        info!(
            roots = taxonomy["categories"].as_array().map_or(0, Vec::len),
            "Fetched venue categories"
        );

        Ok(taxonomy)
    }

    /// Get the API root URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}
