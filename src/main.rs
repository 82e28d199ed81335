//! yt-harvest main entry point
//!
//! This is the command-line interface for the yt-harvest metadata harvester.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use yt_harvest::config::{load_config_with_hash, Config};
use yt_harvest::fetch::Fetcher;
use yt_harvest::harvest::load_input_urls;
use yt_harvest::output::{JsonFileSink, RecordSink};
use yt_harvest::transcript::WatchPageTranscripts;
use yt_harvest::youtube::YouTubeApi;
use yt_harvest::{resolve, HarvestError, Harvester};

/// yt-harvest: public video metadata harvester
///
/// Reads a list of channel and video URLs, pulls channel, video, comment and
/// caption metadata from the Data API, and writes one flat JSON record per
/// comment (or per video, when it has none).
#[derive(Parser, Debug)]
#[command(name = "yt-harvest")]
#[command(version)]
#[command(about = "Public video metadata harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Input URL list (overrides `[input] urls-path`)
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output JSON file (overrides `[output] path`)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Resolve the input URLs and show what would be harvested without any
    /// network access
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let loaded = load_config_with_hash(&cli.config);

    // Setup logging; the CLI flags override the configured level
    let base_level = loaded
        .as_ref()
        .map(|(config, _)| config.logging.level.to_lowercase())
        .unwrap_or_else(|_| "info".to_string());
    setup_logging(&base_level, cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let mut config = match loaded {
        Ok((config, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Some(input) = &cli.input {
        config.input.urls_path = input.display().to_string();
    }
    if let Some(output) = &cli.output {
        config.output.path = output.display().to_string();
    }

    let urls = load_input_urls(Path::new(&config.input.urls_path))?;
    if urls.is_empty() {
        let e = HarvestError::NoInputUrls {
            path: config.input.urls_path.clone(),
        };
        tracing::error!("{}", e);
        return Err(e.into());
    }

    if cli.dry_run {
        handle_dry_run(&config, &urls);
    } else {
        handle_harvest(&config, &urls).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber from the configured level and
/// the verbosity flags
fn setup_logging(base_level: &str, verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new(format!("yt_harvest={},warn", base_level)),
            1 => EnvFilter::new("yt_harvest=debug,info"),
            2 => EnvFilter::new("yt_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: resolves every URL without touching the network
fn handle_dry_run(config: &Config, urls: &[String]) {
    println!("=== yt-harvest Dry Run ===\n");

    println!("Limits:");
    println!(
        "  Max videos per channel: {}",
        config.harvest.max_videos_per_channel
    );
    println!("  Comments per video: {}", config.harvest.comment_limit);
    if config.captions.enabled {
        println!("  Captions: {}", config.captions.languages.join(", "));
    } else {
        println!("  Captions: disabled");
    }

    println!("\nOutput: {}", config.output.path);

    println!("\nInput URLs ({}):", urls.len());
    let mut recognized = 0;
    for url in urls {
        let identifier = resolve(url);
        if identifier.is_recognized() {
            recognized += 1;
        }
        println!("  - {} => {}", url, identifier);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would harvest {} of {} URLs",
        recognized,
        urls.len()
    );
}

/// Handles the main harvest operation
async fn handle_harvest(config: &Config, urls: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Harvesting {} URLs (max {} videos per channel, {} comments per video)",
        urls.len(),
        config.harvest.max_videos_per_channel,
        config.harvest.comment_limit
    );

    let fetcher = Fetcher::from_config(&config.http)?;
    let api = YouTubeApi::from_config(fetcher.clone(), &config.api);
    let transcripts = WatchPageTranscripts::new(fetcher, &config.captions.watch_base_url);
    let mut harvester = Harvester::new(
        api,
        transcripts,
        config.harvest.clone(),
        config.captions.clone(),
    );

    let records = harvester.run(urls).await;

    if records.is_empty() {
        tracing::warn!("No records produced; nothing written");
        return Ok(());
    }

    let sink = JsonFileSink::new(&config.output.path);
    if let Err(e) = sink.write_records(&records) {
        tracing::error!("Failed to write output to {}: {}", sink.describe(), e);
        return Err(e.into());
    }

    tracing::info!("Harvest completed successfully");
    Ok(())
}
