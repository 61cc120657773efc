//! CDR Deduplication CLI
//!
//! Deduplicates one gzip NDJSON corpus shard per invocation. Point
//! shards of the same batch at a shared Redis prefix to deduplicate
//! across machines.

use std::path::PathBuf;

use cdr_dedupe::{
    checker::{DupeChecker, MemoryChecker, RedisChecker},
    error::Result,
    models::Config,
    pipeline, report,
};
use clap::Parser;

/// cdr-dedupe - CDR Corpus Deduplication
#[derive(Parser, Debug)]
#[command(
    name = "cdr-dedupe",
    version,
    about = "Streaming deduplication for CDR crawl corpora"
)]
struct Cli {
    /// Path to the gzip NDJSON input shard
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the deduped output file (appended, not overwritten)
    #[arg(short, long)]
    output: PathBuf,

    /// Redis key prefix for this batch. When not set, Redis is not
    /// used and the key set lives in process memory.
    #[arg(long)]
    redis_prefix: Option<String>,

    /// Redis host override
    #[arg(long)]
    redis_host: Option<String>,

    /// Redis port override
    #[arg(long)]
    redis_port: Option<u16>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    log::info!("CDR dedupe starting...");

    let mut config = match &cli.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    if let Some(host) = cli.redis_host {
        config.redis.host = host;
    }
    if let Some(port) = cli.redis_port {
        config.redis.port = port;
    }
    config.validate()?;

    let mut checker: Box<dyn DupeChecker> = match &cli.redis_prefix {
        Some(prefix) => {
            log::info!(
                "Using shared key set at {} under prefix '{}'",
                config.redis.url(),
                prefix
            );
            Box::new(RedisChecker::for_batch(&config.redis, prefix)?)
        }
        None => {
            log::info!("Using in-memory key set (single-shard run)");
            Box::new(MemoryChecker::new())
        }
    };

    let report = report::timed(|| {
        pipeline::dedupe_file(&cli.input, &cli.output, checker.as_mut(), &config.dedupe)
    })?;

    log::info!("{report}");
    log::info!("Done!");

    Ok(())
}
