//! `fsq fetch` command implementation
//!
//! Downloads the venue-category taxonomy and caches it as JSON.

use crate::api::ApiClient;
use crate::cache::TaxonomyCache;
use crate::config::Config;
use crate::error::Result;
use crate::progress;
use colored::Colorize;
use fsq_common::CategoriesDocument;

/// Fetch the taxonomy and write it to the cache file
///
/// Returns the parsed document so callers can keep working with it.
pub async fn fetch_and_cache(config: &Config) -> Result<CategoriesDocument> {
    let api = ApiClient::new(config)?;

    let spinner = progress::create_spinner("Fetching venue categories...");
    let fetched = api.fetch_categories().await;
    spinner.finish_and_clear();
    let taxonomy = fetched?;

    let document = CategoriesDocument::from_json_value(taxonomy.clone())?;
    TaxonomyCache::new(&config.categories_file).save(&taxonomy)?;

    Ok(document)
}

/// Run `fsq fetch`
pub async fn run(config: &Config) -> Result<()> {
    let document = fetch_and_cache(config).await?;

    println!(
        "{} Saved {} categories ({} top-level) to {}",
        "✓".green(),
        document.total_count(),
        document.categories.len(),
        config.categories_file.display()
    );

    Ok(())
}
