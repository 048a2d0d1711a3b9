//! fsq CLI Library
//!
//! Fetches the Foursquare venue-category taxonomy and downloads category
//! icons.
//!
//! # Overview
//!
//! - **Taxonomy**: fetch and cache the category tree (`fsq fetch`)
//! - **Browsing**: print the cached tree with ids (`fsq tree`)
//! - **Icons**: download icons for selected categories and all of their
//!   descendants (`fsq icons`)
//! - **Configuration**: inspect the effective settings (`fsq config`)
//!
//! The walk itself lives in [`taxonomy`]; [`selection`] and [`queue`] decide
//! what is downloaded and [`icons`] does the downloading.

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod icons;
pub mod progress;
pub mod queue;
pub mod selection;
pub mod taxonomy;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fsq - Foursquare venue-category icon fetcher
#[derive(Parser, Debug)]
#[command(name = "fsq")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Taxonomy cache file (overrides FSQ_CATEGORIES_FILE)
    #[arg(long, global = true, value_name = "PATH")]
    pub categories_file: Option<PathBuf>,

    /// Print the CLI reference as Markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the category taxonomy from the API and cache it
    Fetch,

    /// Print the cached category tree
    Tree {
        /// Levels to print (0 for the whole tree)
        #[arg(short, long, default_value_t = 0)]
        depth: usize,

        /// Show category ids next to names
        #[arg(long)]
        show_id: bool,
    },

    /// Download icons of the selected categories and their descendants
    Icons {
        /// Icon size in pixels (32, 44, 64 or 88)
        #[arg(short, long, default_value_t = 88)]
        size: u32,

        /// Download the gray background variant
        #[arg(long)]
        bg: bool,

        /// Root category id to download (repeatable; overrides FSQ_CATEGORY_IDS)
        #[arg(short, long = "category", value_name = "ID")]
        categories: Vec<String>,

        /// Levels of the tree to walk (0 for all)
        #[arg(short, long, default_value_t = 0)]
        depth: usize,

        /// Directory to create icons/ or icons_bg/ in (overrides FSQ_OUTPUT_DIR)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Re-download icons that already exist
        #[arg(short, long)]
        force: bool,

        /// Fetch a fresh taxonomy first
        #[arg(long)]
        refresh: bool,

        /// Only list the icons that would be downloaded
        #[arg(long)]
        dry_run: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Get configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Show all configuration
    Show,
}
