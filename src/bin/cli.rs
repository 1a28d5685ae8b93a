//! vitrine CLI
//!
//! Crawls the technology showcase and writes the extracted articles to JSON.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use vitrine::{
    error::Result,
    models::Config,
    pipeline,
    services::executor_for,
    storage::LocalStorage,
    utils::http::HttpFetcher,
};

/// vitrine - Technology Showcase Crawler
#[derive(Parser, Debug)]
#[command(name = "vitrine", version, about = "Technology Showcase Crawler")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl the showcase and write the articles file
    Crawl {
        /// Concurrent article workers (default: crawler.max_concurrent)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Extract articles one at a time, in listing order
        #[arg(long, conflicts_with = "workers")]
        sequential: bool,

        /// Output file (default: output.path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate configuration and selectors
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    log::debug!("Loaded configuration from {}", cli.config.display());

    match cli.command {
        Command::Crawl {
            workers,
            sequential,
            output,
        } => {
            if let Some(workers) = workers {
                config.crawler.max_concurrent = workers;
            }
            if let Some(path) = output {
                config.output.path = path.display().to_string();
            }
            config.validate()?;

            let fetcher = Arc::new(HttpFetcher::from_config(&config.crawler)?);
            let executor = executor_for(sequential, config.crawler.max_concurrent);
            let storage = LocalStorage::new(&config.output.path);

            pipeline::run_crawler(&config, fetcher, executor.as_ref(), &storage).await?;
        }

        Command::Validate => pipeline::run_validate(&config)?,
    }

    Ok(())
}
