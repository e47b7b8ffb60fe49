use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use cosmicquery::{serve, Container, ContainerConfig};

#[derive(Parser)]
#[command(name = "cosmicquery")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    /// Address to bind the API server on.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Answer questions with a deterministic offline mock instead of the
    /// language-model provider.
    #[arg(long)]
    mock_llm: bool,

    /// Timeout in seconds for each outbound upstream call.
    #[arg(long, default_value = "30")]
    upstream_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment. Credentials themselves
    // are still resolved per request, not here.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = ContainerConfig {
        mock_llm: cli.mock_llm,
        upstream_timeout: Duration::from_secs(cli.upstream_timeout),
        ..ContainerConfig::default()
    };

    if let Ok(origins) = std::env::var("CORS_ALLOWED_ORIGINS") {
        config.cors_origins = origins
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
    }
    debug!("Allowed CORS origins: {:?}", config.cors_origins);

    let container = Container::new(config);
    serve(container, &cli.host, cli.port).await
}
