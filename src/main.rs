use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chord_flashcards::config::{AppConfig, CliConfig, FileConfig};
use chord_flashcards::{run_server, ChordGenerator, RequestsLoggingLevel};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Values found there override the CLI.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 8875)]
    pub port: u16,

    /// The address to bind to.
    #[clap(long, default_value = "0.0.0.0")]
    pub bind: String,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Directory served under /static.
    #[clap(long, default_value = "static")]
    pub static_dir: PathBuf,

    /// The maximum age of static files in the cache in seconds.
    #[clap(long, default_value_t = 3600)]
    pub static_cache_age_sec: usize,

    /// Seed for a reproducible chord sequence.
    #[clap(long)]
    pub seed: Option<u64>,
}

impl From<&CliArgs> for CliConfig {
    fn from(args: &CliArgs) -> Self {
        CliConfig {
            bind: args.bind.clone(),
            port: args.port,
            logging_level: args.logging_level.clone(),
            static_dir: Some(args.static_dir.clone()),
            static_cache_age_sec: args.static_cache_age_sec,
            seed: args.seed,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&CliConfig::from(&cli_args), file_config)?;

    let generator = ChordGenerator::with_seed(config.seed);
    match config.seed {
        Some(seed) => info!("Generating chords from seed {}", seed),
        None => info!("Generating chords from the thread rng"),
    }

    info!("Ready to serve at port {}!", config.port);
    run_server(
        config.server_config(),
        generator,
        env!("GIT_HASH").to_string(),
    )
    .await
}
