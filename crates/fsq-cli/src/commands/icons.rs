//! `fsq icons` command implementation
//!
//! Collects the selected categories from the cached taxonomy and downloads
//! their icons one after another.

use crate::api::client::build_http_client;
use crate::cache::TaxonomyCache;
use crate::commands::fetch;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::icons::{DownloadOutcome, IconDownloader, IconSize};
use crate::progress::format_bytes;
use crate::queue::DownloadQueue;
use crate::selection::Selection;
use colored::Colorize;
use tracing::info;

/// Options of `fsq icons`
#[derive(Debug, Clone, Default)]
pub struct IconsOptions {
    /// Requested edge length in pixels; unsupported values fall back to 88
    pub size: u32,
    pub bg: bool,
    /// Tree levels to walk, 0 for all
    pub depth: usize,
    pub force: bool,
    /// Fetch a fresh taxonomy before collecting
    pub refresh: bool,
    /// List what would be downloaded and stop
    pub dry_run: bool,
}

/// Run `fsq icons`
pub async fn run(config: &Config, options: &IconsOptions) -> Result<()> {
    let categories = if options.refresh {
        fetch::fetch_and_cache(config).await?.categories
    } else {
        TaxonomyCache::new(&config.categories_file).load()?
    };

    let selection = Selection::new(config.category_ids.iter().cloned());
    if selection.is_empty() {
        return Err(CliError::config("no category ids selected"));
    }

    let queue = DownloadQueue::collect(&categories, &selection, options.depth)?;
    if queue.is_empty() {
        println!("No categories matched the selected ids.");
        println!("Run 'fsq tree --show-id' to look up category ids.");
        return Ok(());
    }

    let size = IconSize::from_px(options.size);
    let downloader = IconDownloader::new(
        build_http_client(config.timeout_secs)?,
        &config.icon_base_url,
        &config.output_dir,
    )
    .with_size(size)
    .with_background(options.bg)
    .with_force(options.force);

    println!(
        "{} {} icon(s) queued at {}px into {}",
        "→".cyan(),
        queue.len(),
        size,
        downloader.output_dir().display()
    );

    if options.dry_run {
        for category in &queue {
            let job = downloader.plan(category)?;
            println!("  {} -> {}", job.url, job.path.display());
        }
        return Ok(());
    }

    let summary = downloader
        .download_all(&queue, |_, outcome| match outcome {
            DownloadOutcome::Downloaded { path, bytes } => {
                println!("{} {} ({})", "↓".cyan(), path.display(), format_bytes(*bytes));
            },
            DownloadOutcome::Skipped { path } => {
                println!("{} {} (exists)", "✓".green(), path.display());
            },
        })
        .await?;

    info!(
        downloaded = summary.downloaded,
        skipped = summary.skipped,
        bytes = summary.bytes,
        "Icon download finished"
    );

    println!(
        "\n{} {} downloaded, {} already present ({})",
        "✓".green().bold(),
        summary.downloaded,
        summary.skipped,
        format_bytes(summary.bytes)
    );

    Ok(())
}
