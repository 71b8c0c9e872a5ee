//! # playtime
//!
//! Prints how long it takes to watch a whole `YouTube` playlist: video count,
//! average video length, total length, and the total at faster playback
//! speeds.

mod report;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use playtime_core::{
    extract_playlist_id, Aggregator, PlaybackSpeed, DEFAULT_CONCURRENCY, DEFAULT_SPEEDS,
};
use playtime_youtube::{config::DEFAULT_BASE_URL, ClientConfig, YouTubeClient};
use report::Report;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the Data API key.
const API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "playtime")]
#[command(version)]
#[command(about = "Total watch time of a YouTube playlist", long_about = None)]
struct Cli {
    /// Playlist URL; prompted for when omitted
    url: Option<String>,

    /// Data API key
    #[arg(long, env = API_KEY_VAR, hide_env_values = true)]
    api_key: Option<String>,

    /// Read environment variables from this file instead of ./.env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Duration lookups in flight per page
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Playback speeds to project the total at
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SPEEDS)]
    speeds: Vec<f64>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Data API root
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli).await;
    if let Err(e) = &result {
        if is_user_error(e) {
            eprintln!("Run `playtime --help` for usage.");
        }
    }
    result
}

async fn run(cli: Cli) -> Result<()> {
    info!("Starting playtime v{}", env!("CARGO_PKG_VERSION"));

    load_env_file(cli.env_file.as_deref())?;

    let api_key = cli
        .api_key
        .clone()
        .or_else(|| std::env::var(API_KEY_VAR).ok())
        .filter(|key| !key.trim().is_empty())
        .with_context(|| {
            format!("Please set the {API_KEY_VAR} environment variable with your YouTube Data API key.")
        })?;

    let speeds = cli
        .speeds
        .iter()
        .map(|&s| PlaybackSpeed::new(s))
        .collect::<playtime_core::Result<Vec<_>>>()?;

    let url = match cli.url {
        Some(url) => url,
        None => prompt_url().context("Failed to read playlist URL")?,
    };
    let playlist = extract_playlist_id(&url)?;
    debug!("Playlist ID: {playlist}");

    let config = ClientConfig::default()
        .with_base_url(&cli.base_url)?
        .with_timeout(Duration::from_secs(cli.timeout))?;
    let client = YouTubeClient::with_config(api_key, config)?;

    let stats = Aggregator::new(client)
        .with_concurrency(cli.concurrency)
        .aggregate(&playlist)
        .await
        .with_context(|| format!("Failed to read playlist {playlist}"))?;

    let report = Report::new(stats, &speeds)?;
    print!("{report}");

    Ok(())
}

/// Whether `err` stems from bad input that a different invocation would fix.
fn is_user_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<playtime_core::Error>()
        .is_some_and(playtime_core::Error::is_user_error)
}

const fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "playtime=debug,playtime_core=debug,playtime_youtube=debug"
    } else {
        "playtime=info,playtime_core=info,playtime_youtube=info"
    }
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .init();
}

/// Load `path`, or `./.env` when no path is given. Only an explicitly
/// requested file is required to exist.
fn load_env_file(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Error loading {}", path.display()))?;
            debug!("Loaded environment from {}", path.display());
        }
        None => match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found"),
            Err(e) => return Err(e).context("Error loading .env file"),
        },
    }
    Ok(())
}

fn prompt_url() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter the YouTube playlist URL: ")?;
    stdout.flush()?;

    read_url(io::stdin().lock())
}

fn read_url(mut input: impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
