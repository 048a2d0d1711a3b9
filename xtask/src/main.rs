//! Build automation tasks for fsq
//!
//! Currently generates the CLI reference from the clap definitions.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for fsq", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in Markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    let markdown = clap_markdown::help_markdown::<fsq_cli::Cli>();

    let content = format!(
        r#"# fsq CLI Reference

This documentation is auto-generated from the CLI source code. Last updated: {}.

## Overview

fsq downloads the Foursquare venue-category taxonomy, caches it as
`categories.json` and fetches the icons of selected categories together with
all of their descendants.

## Quick Start

```bash
export FSQ_CLIENT_ID=...
export FSQ_CLIENT_SECRET=...

# Cache the taxonomy
fsq fetch

# Look up category ids
fsq tree --depth 2 --show-id

# Download 64px icons on a gray background for the default categories
fsq icons --size 64 --bg
```

## Commands

{}

## Environment Variables

- `FSQ_CLIENT_ID` / `FSQ_CLIENT_SECRET` - API credentials (required by `fetch`)
- `FSQ_API_URL` - API base URL (default: `https://api.foursquare.com/v2`)
- `FSQ_API_VERSION` - `v` parameter as `YYYYMMDD` (default: today)
- `FSQ_ICON_BASE_URL` - Icon host (default: `https://foursquare.com/img/categories_v2/`)
- `FSQ_CATEGORIES_FILE` - Taxonomy cache (default: `categories.json`)
- `FSQ_OUTPUT_DIR` - Directory holding `icons/` and `icons_bg/` (default: `.`)
- `FSQ_CATEGORY_IDS` - Comma-separated root category ids
- `FSQ_TIMEOUT_SECS` - HTTP timeout in seconds (default: `60`)
- `LOG_LEVEL`, `LOG_OUTPUT`, `LOG_FORMAT`, `LOG_DIR` - Logging overrides

---

*To update, run `cargo xtask generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    let file_path = output_path.join("cli.md");
    fs::write(&file_path, content)?;

    println!("✅ Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
