use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use skycast_core::{Config, Translator, WeatherService, backend_from_config};

use crate::routes::{ServerContext, router};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the web server.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// Directory with the static front-end assets.
        #[arg(long, default_value = "skycast-web/assets")]
        assets: PathBuf,
    },

    /// Store the OpenWeather API key in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Serve { port, assets } => serve(port, assets).await,
            Command::Configure => configure(),
        }
    }
}

async fn serve(port: u16, assets: PathBuf) -> anyhow::Result<()> {
    let config = Config::load_with_env().context("Failed to load configuration")?;

    let backend = backend_from_config(&config)?;
    let service = Arc::new(WeatherService::new(backend));

    let translator = config.translate.as_ref().map(Translator::from_config);
    if let Some(ref translator) = translator {
        tracing::info!(lang = translator.target(), "page translation enabled");
    }

    let ctx = Arc::new(ServerContext { service, translator });
    let app = router(ctx, &assets);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("skycast listening on http://{addr}");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save().context("Failed to save configuration")?;

    let path = Config::config_file_path()?;
    println!("Saved {}", path.display());

    Ok(())
}
