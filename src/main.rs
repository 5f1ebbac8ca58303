use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use threatboard::config::Config;
use threatboard::web::AppState;

#[derive(Parser)]
#[command(name = "threatboard", about = "threatboard — demo security dashboard backend")]
struct Cli {
    /// TOML config file. Defaults to ./threatboard.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV file to normalize instead of the built-in sample data.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory the JSON snapshot files are written to.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Port to listen on.
    #[arg(long)]
    port: Option<u16>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref()).context("cannot load configuration")?;
    if let Some(input) = cli.input {
        config.data.input_csv = Some(input);
    }
    if let Some(dir) = cli.data_dir {
        config.data.data_dir = dir;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let snapshot = threatboard::build_snapshot(&config, &mut rand::thread_rng())?;

    // Persistence failure is fatal.
    let files = snapshot
        .persist(&config.data.data_dir)
        .context("cannot persist snapshot")?;
    tracing::debug!(?files, "snapshot files written");

    threatboard::web::serve(
        &config.bind_addr(),
        AppState::new(snapshot),
        &config.server.static_dir,
    )
    .await
}
