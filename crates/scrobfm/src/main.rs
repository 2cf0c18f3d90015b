//! Main entry point for scrobfm.

use clap::Parser;
use scrobfm::{App, AppResult, Cli};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrobfm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let app = App::from_config_path(&cli.config).await?;

    match app.run(cli.command).await {
        Ok(report) => {
            println!("{report}");
            Ok(())
        }
        Err(e) => {
            error!("analysis failed: {e}");
            Err(e)
        }
    }
}
