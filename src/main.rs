//! Influencer-Keywords main entry point
//!
//! This is the command-line interface for the keyword harvester.

use anyhow::Context;
use clap::Parser;
use influencer_keywords::config::{load_config, load_config_or_default, Config};
use influencer_keywords::menu::{parse_choice, render_menu, LineReader, MenuChoice};
use influencer_keywords::output::{save_keywords, OutputFormat};
use influencer_keywords::{Category, KeywordError, KeywordFetcher};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing_subscriber::EnvFilter;

/// Influencer-Keywords: a category and keyword harvester
///
/// Lists the platform's keyword categories and collects every keyword of a
/// category into a txt, tsv or csv file. Without `--list-categories` or
/// `--category` an interactive menu is shown.
#[derive(Parser, Debug)]
#[command(name = "influencer-keywords")]
#[command(version = "1.0.0")]
#[command(about = "A category and keyword harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the category catalog and exit
    #[arg(long, conflicts_with = "category")]
    list_categories: bool,

    /// Collect the keywords of this category ID and exit
    #[arg(long, value_name = "ID")]
    category: Option<String>,

    /// File name stem for --category (defaults to the category ID)
    #[arg(long, requires = "category")]
    name: Option<String>,

    /// Seconds to wait between keyword pages (0 to 10)
    #[arg(long, value_name = "SECS")]
    pace: Option<f64>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Put the recommended keywords at the top of the output
    #[arg(long)]
    include_recommended: bool,

    /// Directory for keyword files
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Print JSON to stdout instead of writing a file
    #[arg(long)]
    json: bool,
}

/// Output settings after applying command-line overrides
struct OutputSettings {
    directory: PathBuf,
    format: OutputFormat,
    include_recommended: bool,
}

impl OutputSettings {
    fn from_cli(cli: &Cli, config: &Config) -> Self {
        Self {
            directory: cli
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output.directory)),
            format: cli.format.unwrap_or(config.output.format),
            include_recommended: cli.include_recommended || config.output.include_recommended,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load(cli.config.as_deref())?;
    let settings = OutputSettings::from_cli(&cli, &config);
    let pace = cli.pace.unwrap_or(if cli.json {
        config.fetch.pace_secs_api
    } else {
        config.fetch.pace_secs_cli
    });

    let fetcher = KeywordFetcher::new(config).context("Failed to initialise fetcher")?;

    // Ctrl-C aborts whatever is in flight; a second one exits at once
    let cancel = fetcher.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, cancelling");
            cancel.cancel();
        }
        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(130);
        }
    });

    if cli.list_categories {
        handle_list_categories(&fetcher, cli.json).await
    } else if let Some(category_id) = &cli.category {
        let name = cli.name.as_deref().unwrap_or(category_id);
        handle_category(&fetcher, category_id, name, pace, cli.json, &settings).await
    } else {
        handle_interactive(&fetcher, pace, &settings).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("influencer_keywords=info,warn"),
            1 => EnvFilter::new("influencer_keywords=debug,info"),
            2 => EnvFilter::new("influencer_keywords=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let config = load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully");
            Ok(config)
        }
        None => Ok(load_config_or_default(None)?),
    }
}

/// Handles --list-categories
async fn handle_list_categories(fetcher: &KeywordFetcher, json: bool) -> anyhow::Result<()> {
    let categories = fetcher
        .fetch_categories()
        .await
        .map_err(describe_failure)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else {
        for category in &categories {
            println!(
                "{}\t{}\t{}",
                category.id, category.name, category.keyword_count
            );
        }
    }

    Ok(())
}

/// Handles --category
async fn handle_category(
    fetcher: &KeywordFetcher,
    category_id: &str,
    name: &str,
    pace: f64,
    json: bool,
    settings: &OutputSettings,
) -> anyhow::Result<()> {
    let set = fetcher
        .fetch_keyword_set(category_id, pace)
        .await
        .map_err(describe_failure)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&set)?);
        return Ok(());
    }

    let path = save_keywords(
        &settings.directory,
        name,
        &set,
        settings.format,
        settings.include_recommended,
    )?;
    println!(
        "Saved {} keywords ({} recommended) to {}",
        set.total(),
        set.recommended.len(),
        path.display()
    );

    Ok(())
}

/// Runs the interactive menu until the user exits or presses Ctrl-C
async fn handle_interactive(
    fetcher: &KeywordFetcher,
    pace: f64,
    settings: &OutputSettings,
) -> anyhow::Result<()> {
    println!("Loading categories...");
    let categories = match fetcher.fetch_categories().await {
        Ok(categories) if categories.is_empty() => {
            println!("No categories found.");
            return Ok(());
        }
        Ok(categories) => categories,
        Err(KeywordError::Cancelled) => return Ok(()),
        Err(e) => return Err(describe_failure(e)),
    };
    println!("Loaded {} categories.", categories.len());

    let cancel = fetcher.cancel_token();
    let mut lines = LineReader::spawn(std::io::BufReader::new(std::io::stdin()));

    loop {
        print!("\n{}", render_menu(&categories));
        prompt("Select a category number: ").await?;

        let Some(line) = lines.next_line(&cancel).await? else {
            println!("\nBye.");
            return Ok(());
        };

        let selected = match parse_choice(&line, categories.len()) {
            MenuChoice::Select(index) => &categories[index],
            MenuChoice::Exit => {
                println!("Bye.");
                return Ok(());
            }
            MenuChoice::Invalid(message) => {
                println!("{}", message);
                continue;
            }
        };

        match collect(fetcher, selected, pace, settings).await {
            Ok(()) => {}
            Err(KeywordError::Cancelled) => {
                println!("\nCancelled.");
                return Ok(());
            }
            Err(e) => println!("Failed to collect keywords: {:#}", describe_failure(e)),
        }
    }
}

async fn collect(
    fetcher: &KeywordFetcher,
    category: &Category,
    pace: f64,
    settings: &OutputSettings,
) -> Result<(), KeywordError> {
    println!(
        "Collecting keywords for '{}' (ID {})...",
        category.name, category.id
    );

    let set = fetcher.fetch_keyword_set(&category.id, pace).await?;
    println!(
        "Collected {} recommended and {} regular keywords.",
        set.recommended.len(),
        set.normal.len()
    );

    match save_keywords(
        &settings.directory,
        &category.name,
        &set,
        settings.format,
        settings.include_recommended,
    ) {
        Ok(path) => println!("Saved to {}", path.display()),
        Err(e) => println!("Failed to save keywords: {}", e),
    }

    Ok(())
}

async fn prompt(text: &str) -> std::io::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await
}

/// Adds a hint matching the failure class
fn describe_failure(error: KeywordError) -> anyhow::Error {
    let hint = match &error {
        KeywordError::Transport { .. } => "check the network connection or try again later",
        KeywordError::GraphQl(_) | KeywordError::Schema(_) => {
            "the upstream response changed or the category ID is wrong"
        }
        _ => "",
    };

    if error.is_upstream() {
        anyhow::Error::new(error).context(format!("Upstream failure ({})", hint))
    } else {
        anyhow::Error::new(error)
    }
}
