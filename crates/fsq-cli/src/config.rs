//! Configuration management for the fsq CLI
//!
//! Settings come from environment variables (a `.env` file is loaded by
//! `main`), then command-line flags override individual fields.

use crate::error::{CliError, Result};
use crate::selection::DEFAULT_CATEGORY_IDS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Foursquare v2 API root
pub const DEFAULT_API_URL: &str = "https://api.foursquare.com/v2";

/// Root of the category icon images, including the trailing slash
pub const DEFAULT_ICON_BASE_URL: &str = "https://foursquare.com/img/categories_v2/";

/// Taxonomy cache file, relative to the working directory
pub const DEFAULT_CATEGORIES_FILE: &str = "categories.json";

/// Default timeout for API and icon requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Foursquare application client id
    pub client_id: Option<String>,

    /// Foursquare application client secret
    #[serde(skip_serializing)]
    pub client_secret: Option<String>,

    pub api_url: String,

    /// Value of the `v` versioning parameter (YYYYMMDD)
    pub api_version: String,

    pub icon_base_url: String,

    /// Where the fetched taxonomy is cached
    pub categories_file: PathBuf,

    /// Directory under which `icons/` or `icons_bg/` is created
    pub output_dir: PathBuf,

    /// Root category ids whose subtrees get icons downloaded
    pub category_ids: Vec<String>,

    pub timeout_secs: u64,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            api_url: DEFAULT_API_URL.to_string(),
            api_version: chrono::Utc::now().format("%Y%m%d").to_string(),
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
            categories_file: PathBuf::from(DEFAULT_CATEGORIES_FILE),
            output_dir: PathBuf::from("."),
            category_ids: DEFAULT_CATEGORY_IDS.iter().map(|id| id.to_string()).collect(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        config.client_id = non_empty_var("FSQ_CLIENT_ID");
        config.client_secret = non_empty_var("FSQ_CLIENT_SECRET");

        if let Some(url) = non_empty_var("FSQ_API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
        }

        if let Some(version) = non_empty_var("FSQ_API_VERSION") {
            if version.len() != 8 || !version.chars().all(|c| c.is_ascii_digit()) {
                return Err(CliError::config(format!(
                    "FSQ_API_VERSION must be a YYYYMMDD date, got '{}'",
                    version
                )));
            }
            config.api_version = version;
        }

        if let Some(url) = non_empty_var("FSQ_ICON_BASE_URL") {
            config.set_icon_base_url(url);
        }

        if let Some(file) = non_empty_var("FSQ_CATEGORIES_FILE") {
            config.categories_file = PathBuf::from(file);
        }

        if let Some(dir) = non_empty_var("FSQ_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        if let Some(ids) = non_empty_var("FSQ_CATEGORY_IDS") {
            config.category_ids = split_ids(&ids);
        }

        if let Some(secs) = non_empty_var("FSQ_TIMEOUT_SECS") {
            config.timeout_secs = secs.parse().map_err(|_| {
                CliError::config(format!("FSQ_TIMEOUT_SECS must be a number, got '{}'", secs))
            })?;
        }

        Ok(config)
    }

    /// Client id and secret, or a configuration error naming what is missing
    pub fn credentials(&self) -> Result<(&str, &str)> {
        match (self.client_id.as_deref(), self.client_secret.as_deref()) {
            (Some(id), Some(secret)) => Ok((id, secret)),
            (None, _) => Err(CliError::config("FSQ_CLIENT_ID is not set")),
            (_, None) => Err(CliError::config("FSQ_CLIENT_SECRET is not set")),
        }
    }

    /// Client secret with everything but the last four characters hidden
    pub fn masked_secret(&self) -> String {
        match self.client_secret.as_deref() {
            None => "(not set)".to_string(),
            Some(secret) => {
                let len = secret.chars().count();
                if len <= 4 {
                    return "****".to_string();
                }
                let tail: String = secret.chars().skip(len - 4).collect();
                format!("****{}", tail)
            },
        }
    }

    /// Set the icon base URL, normalizing the trailing slash
    pub fn set_icon_base_url(&mut self, url: String) {
        self.icon_base_url = if url.ends_with('/') {
            url
        } else {
            format!("{}/", url)
        };
    }

    pub fn set_categories_file(&mut self, file: PathBuf) {
        self.categories_file = file;
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) {
        self.output_dir = dir;
    }

    pub fn set_category_ids(&mut self, ids: Vec<String>) {
        self.category_ids = ids;
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Split a comma separated id list, dropping blanks
pub fn split_ids(ids: &str) -> Vec<String> {
    ids.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
