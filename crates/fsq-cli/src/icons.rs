//! Category icon URLs and downloads
//!
//! Icons live under a fixed image root. The path below `categories_v2/` is
//! taken from the category's icon prefix, then the optional `bg_` marker (gray
//! background variant), the pixel size and the suffix are appended:
//!
//! ```text
//! prefix  https://ss3.4sqi.net/img/categories_v2/food/default_
//! url     https://foursquare.com/img/categories_v2/food/default_bg_32.png
//! file    icons_bg/food_default_bg_32.png
//! ```

use crate::error::{CliError, Result};
use crate::progress;
use crate::queue::DownloadQueue;
use fsq_common::{Category, Icon};
use futures::StreamExt;
use indicatif::ProgressBar;
use reqwest::Client;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Marker that separates the CDN host from the icon path in a prefix
const PATH_MARKER: &str = "categories_v2/";

/// Icon edge length in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconSize {
    Px32,
    Px44,
    Px64,
    #[default]
    Px88,
}

impl IconSize {
    pub const ALL: [IconSize; 4] = [IconSize::Px32, IconSize::Px44, IconSize::Px64, IconSize::Px88];

    /// Map a pixel count to a supported size, falling back to 88
    pub fn from_px(px: u32) -> Self {
        match Self::ALL.into_iter().find(|size| size.px() == px) {
            Some(size) => size,
            None => {
                warn!(requested = px, "Unsupported icon size, using 88");
                IconSize::Px88
            },
        }
    }

    pub fn px(self) -> u32 {
        match self {
            IconSize::Px32 => 32,
            IconSize::Px44 => 44,
            IconSize::Px64 => 64,
            IconSize::Px88 => 88,
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.px())
    }
}

/// Build the download URL for `icon`
///
/// `base_url` must end with `/` (see [`crate::config::Config::set_icon_base_url`]).
pub fn icon_url(base_url: &str, icon: &Icon, size: IconSize, bg: bool) -> Option<String> {
    let (_, path) = icon.prefix.split_once(PATH_MARKER)?;
    let bg = if bg { "bg_" } else { "" };
    Some(format!("{}{}{}{}{}", base_url, path, bg, size, icon.suffix))
}

/// Local file name for an icon URL: its last two path segments joined by `_`
pub fn icon_filename(url: &str) -> String {
    let mut segments = url.rsplit('/');
    let file = segments.next().unwrap_or_default();
    match segments.next() {
        Some(dir) if !dir.is_empty() => format!("{}_{}", dir, file),
        _ => file.to_string(),
    }
}

/// Directory icons are written to: `icons` or `icons_bg` under `root`
pub fn icon_dir(root: &Path, bg: bool) -> PathBuf {
    root.join(if bg { "icons_bg" } else { "icons" })
}

/// One planned icon download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconJob {
    pub category_id: String,
    pub category_name: String,
    pub url: String,
    pub path: PathBuf,
}

/// Result of downloading a single icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded { path: PathBuf, bytes: u64 },
    /// The file already existed and `force` was not set
    Skipped { path: PathBuf },
}

/// Totals for a whole queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub bytes: u64,
}

impl DownloadSummary {
    fn record(&mut self, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Downloaded { bytes, .. } => {
                self.downloaded += 1;
                self.bytes += bytes;
            },
            DownloadOutcome::Skipped { .. } => self.skipped += 1,
        }
    }
}

/// Sequential icon downloader
pub struct IconDownloader {
    client: Client,
    base_url: String,
    size: IconSize,
    bg: bool,
    output_root: PathBuf,
    force: bool,
}

impl IconDownloader {
    pub fn new(client: Client, base_url: impl Into<String>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            size: IconSize::default(),
            bg: false,
            output_root: output_root.into(),
            force: false,
        }
    }

    pub fn with_size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Download the gray background variant into `icons_bg`
    pub fn with_background(mut self, bg: bool) -> Self {
        self.bg = bg;
        self
    }

    /// Re-download icons that already exist on disk
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn output_dir(&self) -> PathBuf {
        icon_dir(&self.output_root, self.bg)
    }

    /// Work out URL and destination for `category` without downloading
    pub fn plan(&self, category: &Category) -> Result<IconJob> {
        let url = icon_url(&self.base_url, &category.icon, self.size, self.bg).ok_or_else(|| {
            CliError::invalid_icon(
                &category.name,
                format!("prefix '{}' has no '{}' path", category.icon.prefix, PATH_MARKER),
            )
        })?;
        let path = self.output_dir().join(icon_filename(&url));

        Ok(IconJob {
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            url,
            path,
        })
    }

    /// Download the icon of `category`
    pub async fn download(&self, category: &Category) -> Result<DownloadOutcome> {
        let job = self.plan(category)?;

        if !self.force && tokio::fs::try_exists(&job.path).await? {
            debug!(path = %job.path.display(), "Icon already present");
            return Ok(DownloadOutcome::Skipped { path: job.path });
        }

        if let Some(dir) = job.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        info!(category = %job.category_name, url = %job.url, "Downloading icon");
        let response = self.client.get(&job.url).send().await?.error_for_status()?;

        let label = job
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let pb = progress::create_download_progress(response.content_length(), &label);

        // Only a complete body is renamed to the final file name
        let partial = job.path.with_extension("part");
        let written = match save_body(response, &partial, &job.path, &pb).await {
            Ok(written) => written,
            Err(e) => {
                pb.abandon();
                if let Err(remove_err) = tokio::fs::remove_file(&partial).await {
                    if remove_err.kind() != std::io::ErrorKind::NotFound {
                        warn!(path = %partial.display(), error = %remove_err, "Failed to remove partial icon");
                    }
                }
                return Err(e);
            },
        };
        pb.finish_and_clear();

        debug!(path = %job.path.display(), bytes = written, "Icon saved");
        Ok(DownloadOutcome::Downloaded {
            path: job.path,
            bytes: written,
        })
    }

    /// Download every queued icon in order, stopping at the first failure
    ///
    /// `on_outcome` runs after each icon so the caller can report progress.
    pub async fn download_all<F>(&self, queue: &DownloadQueue, mut on_outcome: F) -> Result<DownloadSummary>
    where
        F: FnMut(&Category, &DownloadOutcome),
    {
        let mut summary = DownloadSummary::default();

        for category in queue {
            let outcome = self.download(category).await?;
            summary.record(&outcome);
            on_outcome(category, &outcome);
        }

        Ok(summary)
    }
}

/// Stream `response` into `partial`, then move it to `dest`
async fn save_body(
    response: reqwest::Response,
    partial: &Path,
    dest: &Path,
    pb: &ProgressBar,
) -> Result<u64> {
    let mut file = tokio::fs::File::create(partial).await?;
    let mut written = 0u64;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
        pb.set_position(written);
    }

    file.flush().await?;
    drop(file);
    tokio::fs::rename(partial, dest).await?;

    Ok(written)
}
