//! `fsq config` command implementation
//!
//! Shows the effective configuration.

use crate::config::Config;
use crate::error::{CliError, Result};
use colored::Colorize;

/// Config keys accepted by `fsq config get`
pub const KEYS: &[&str] = &[
    "client_id",
    "client_secret",
    "api_url",
    "api_version",
    "icon_base_url",
    "categories_file",
    "output_dir",
    "category_ids",
    "timeout_secs",
];

/// Value of a single key as displayed to the user
pub fn value_of(config: &Config, key: &str) -> Result<String> {
    let value = match key {
        "client_id" => config.client_id.clone().unwrap_or_else(|| "(not set)".to_string()),
        "client_secret" => config.masked_secret(),
        "api_url" => config.api_url.clone(),
        "api_version" => config.api_version.clone(),
        "icon_base_url" => config.icon_base_url.clone(),
        "categories_file" => config.categories_file.display().to_string(),
        "output_dir" => config.output_dir.display().to_string(),
        "category_ids" => config.category_ids.join(","),
        "timeout_secs" => config.timeout_secs.to_string(),
        _ => {
            return Err(CliError::config(format!(
                "Unknown config key: {}. Known keys: {}",
                key,
                KEYS.join(", ")
            )));
        },
    };
    Ok(value)
}

/// Get configuration value
pub async fn get(config: &Config, key: &str) -> Result<()> {
    println!("{}", value_of(config, key)?);
    Ok(())
}

/// Show all configuration
pub async fn show(config: &Config) -> Result<()> {
    println!("{}", "fsq Configuration:".cyan().bold());
    println!();
    for key in KEYS {
        println!("{:<17} {}", format!("{}:", key), value_of(config, key)?);
    }
    println!();
    println!("{}", "Environment Variables:".cyan());
    for key in KEYS {
        println!("  {}", format_env_var(key));
    }

    Ok(())
}

/// Format config key as environment variable name
fn format_env_var(key: &str) -> String {
    format!("FSQ_{}", key.to_uppercase())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_value_of_masks_secret() {
        let mut config = Config::new();
        config.client_secret = Some("abcdefgh1234".to_string());
        assert_eq!(value_of(&config, "client_secret").unwrap(), "****1234");
    }

    #[test]
    fn test_value_of_every_key() {
        let config = Config::new();
        for key in KEYS {
            assert!(value_of(&config, key).is_ok(), "key {key} should resolve");
        }
        assert_eq!(
            value_of(&config, "category_ids").unwrap().split(',').count(),
            4
        );
    }

    #[test]
    fn test_unknown_key() {
        let err = value_of(&Config::new(), "server_url").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
    }

    #[test]
    fn test_format_env_var() {
        assert_eq!(format_env_var("api_url"), "FSQ_API_URL");
        assert_eq!(format_env_var("categories_file"), "FSQ_CATEGORIES_FILE");
    }
}
