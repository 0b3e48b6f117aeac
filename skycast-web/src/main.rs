//! Binary entry point for the skycast web dashboard.

use clap::Parser;

use skycast_web::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A local .env may carry SKYCAST_API_KEY and friends.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skycast_web=info,skycast_core=info".into()),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
