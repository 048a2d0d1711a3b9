//! fsq CLI - Main entry point

use clap::Parser;
use fsq_cli::commands::icons::IconsOptions;
use fsq_cli::{Cli, Commands, Config, ConfigCommand};
use fsq_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    let Some(ref command) = cli.command else {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    };

    // Warnings only unless --verbose; LOG_* variables take precedence
    let builder = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .output(LogOutput::Console)
        .log_file_prefix("fsq-cli");
    let builder = if cli.verbose {
        builder.filter_directives("hyper=info,reqwest=info")
    } else {
        builder
    };
    let base = builder.build();
    let log_config = base.clone().merge_env().unwrap_or(base);

    // The CLI works without logging
    let _guard = init_logging(&log_config).ok().flatten();

    if let Err(e) = execute_command(&cli, command).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Build the effective configuration: environment first, then flags
fn load_config(cli: &Cli, command: &Commands) -> fsq_cli::Result<Config> {
    let mut config = Config::from_env()?;

    if let Some(ref file) = cli.categories_file {
        config.set_categories_file(file.clone());
    }

    if let Commands::Icons {
        categories,
        output_dir,
        ..
    } = command
    {
        if !categories.is_empty() {
            config.set_category_ids(categories.clone());
        }
        if let Some(dir) = output_dir {
            config.set_output_dir(dir.clone());
        }
    }

    debug!(
        api_url = %config.api_url,
        categories_file = %config.categories_file.display(),
        output_dir = %config.output_dir.display(),
        category_ids = ?config.category_ids,
        "Loaded configuration"
    );
    Ok(config)
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, command: &Commands) -> fsq_cli::Result<()> {
    let config = load_config(cli, command)?;

    match command {
        Commands::Fetch => fsq_cli::commands::fetch::run(&config).await,

        Commands::Tree { depth, show_id } => {
            fsq_cli::commands::tree::run(&config, *depth, *show_id).await
        },

        Commands::Icons {
            size,
            bg,
            depth,
            force,
            refresh,
            dry_run,
            ..
        } => {
            let options = IconsOptions {
                size: *size,
                bg: *bg,
                depth: *depth,
                force: *force,
                refresh: *refresh,
                dry_run: *dry_run,
            };
            fsq_cli::commands::icons::run(&config, &options).await
        },

        Commands::Config { command } => match command {
            ConfigCommand::Get { key } => fsq_cli::commands::config::get(&config, key).await,
            ConfigCommand::Show => fsq_cli::commands::config::show(&config).await,
        },
    }
}
