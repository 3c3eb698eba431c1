// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use news_search::utils::logging::{format_error, format_listening, format_success};
use news_search::{Config, CorpusLoader, ReadinessReport, server};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "news_search")]
#[command(author = "cipher")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Substring search over an in-memory CSV dataset", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the dataset and serve GET /search
    Serve {
        #[arg(short, long)]
        port: Option<u16>,

        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,
    },

    /// Run one query against the dataset and print the matches as JSON
    Search {
        /// Search query text
        query: String,

        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,
    },

    /// Report whether the dataset loads and the listen address is usable
    Check {
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    news_search::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Serve { port, data } => {
            cmd_serve(apply_overrides(config, port, data)?).await?;
        }
        Commands::Search { query, data } => {
            cmd_search(&apply_overrides(config, None, data)?, &query)?;
        }
        Commands::Check { data } => {
            cmd_check(&apply_overrides(config, None, data)?)?;
        }
    }

    Ok(())
}

fn apply_overrides(mut config: Config, port: Option<u16>, data: Option<PathBuf>) -> Result<Config> {
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(data) = data {
        config.dataset.path = data;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

async fn cmd_serve(config: Config) -> Result<()> {
    let addr = config.server.socket_addr()?;

    // Nothing is bound until the corpus is in memory.
    let corpus = CorpusLoader::new()
        .load(&config.dataset.path)
        .with_context(|| format!("Failed to load dataset {}", config.dataset.path.display()))?;

    let listener = server::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    eprintln!("{}", format_listening(&local_addr.to_string()));
    eprintln!("   Press Ctrl+C to stop");

    server::serve(listener, corpus, server::shutdown_signal())
        .await
        .context("Server failed")?;

    Ok(())
}

fn cmd_search(config: &Config, query: &str) -> Result<()> {
    let corpus = CorpusLoader::new()
        .load(&config.dataset.path)
        .with_context(|| format!("Failed to load dataset {}", config.dataset.path.display()))?;

    let started = Instant::now();
    let results = corpus.search(query);
    info!(
        "{} match(es) for {:?} in {:.2}ms",
        results.len(),
        query,
        started.elapsed().as_secs_f64() * 1000.0
    );

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

fn cmd_check(config: &Config) -> Result<()> {
    info!("Checking readiness");

    let report = ReadinessReport::run(config);
    println!("{}", report.format());

    if report.is_ready() {
        println!("{}", format_success("Ready to serve"));
        Ok(())
    } else {
        error!("Readiness check failed");
        println!("{}", format_error("Not ready to serve"));
        Err(anyhow::anyhow!("Readiness check failed"))
    }
}
