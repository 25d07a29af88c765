// ABOUTME: CLI for scraping a marketplace page once with mirror-extractor.
// ABOUTME: Fetches a URL or reads a local HTML file and prints the item records as JSON or HTML.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use mirror_extractor::render::render_page;
use mirror_extractor::{Client, ItemRecord, DEFAULT_MARKETPLACE_URL, DEFAULT_ORIGIN};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Html,
}

/// Scrape marketplace item cards and print them.
#[derive(Parser, Debug)]
#[command(name = "mirror-cli")]
#[command(about = "Scrape a marketplace listing page and print its items", long_about = None)]
struct Args {
    /// Marketplace page to fetch (ignored with --html)
    #[arg(default_value = DEFAULT_MARKETPLACE_URL)]
    url: String,

    /// Extract from a local HTML file instead of fetching
    #[arg(long)]
    html: Option<PathBuf>,

    /// Scheme and host prepended to relative item links
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Upstream request timeout in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "json")]
    format: Format,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn format_output(items: &[ItemRecord], format: Format, compact: bool) -> Result<String> {
    Ok(match format {
        Format::Html => render_page(items),
        Format::Json if compact => serde_json::to_string(items)?,
        Format::Json => serde_json::to_string_pretty(items)?,
    })
}

async fn run(args: Args) -> Result<()> {
    let client = Client::builder()
        .origin(args.origin.clone())
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()?;

    let items = match &args.html {
        Some(path) => {
            let html = fs::read_to_string(path)
                .map_err(|e| anyhow!("failed to read {}: {}", path.display(), e))?;
            client.extract_html(&html).into_items()
        }
        None => client.fetch_items(&args.url).await?,
    };

    println!("{}", format_output(&items, args.format, args.compact)?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
