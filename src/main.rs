use anyhow::Result;
use clap::Parser;

use customizations_client::cli::{handle_command, Cli};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("customizations_client=info")),
        )
        .init();

    let cli = Cli::parse();
    let exit_code = handle_command(cli).await?;
    std::process::exit(exit_code);
}
