//! `fsq tree` command implementation
//!
//! Prints the cached category tree.

use crate::cache::TaxonomyCache;
use crate::config::Config;
use crate::error::Result;
use crate::taxonomy::{trace, TraceOptions};
use std::io::Write;

/// Print the cached taxonomy, `depth` levels deep (0 for all)
pub async fn run(config: &Config, depth: usize, show_id: bool) -> Result<()> {
    let categories = TaxonomyCache::new(&config.categories_file).load()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    trace(&categories, &TraceOptions::verbose(depth, show_id), &mut out, |_, _| {})?;
    out.flush()?;

    Ok(())
}
