use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use clipgram::api::ApiServer;
use clipgram::config::{Config, ConfigOverrides};

/// clipgram - Telegram gateway that re-uploads TikTok links
#[derive(Parser)]
#[command(name = "clipgram", version, about)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "CLIPGRAM_PORT")]
    port: Option<u16>,

    /// Shared secret expected in X-Telegram-Bot-Api-Secret-Token
    #[arg(long, env = "CLIPGRAM_WEBHOOK_SECRET", hide_env_values = true)]
    webhook_secret: Option<String>,

    /// Delete the original message after a successful upload
    #[arg(long, env = "CLIPGRAM_DELETE_ORIGINAL")]
    delete_original: Option<bool>,

    /// Path to a TOML config file
    #[arg(short, long, env = "CLIPGRAM_CONFIG")]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,clipgram=info",
        1 => "info,clipgram=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::resolve(
        ConfigOverrides {
            port: cli.port,
            webhook_secret: cli.webhook_secret,
            delete_original: cli.delete_original,
        },
        cli.config.as_deref(),
    )?;

    tracing::info!(
        delete_original = config.delete_original,
        "starting clipgram gateway"
    );

    ApiServer::new(config).run().await?;
    Ok(())
}
