#![recursion_limit = "256"]

mod assets;
mod config;
mod error;
mod routes;
mod state;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "mvs-site stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = SiteConfig::from_env()?;

    let report = assets::audit(&config.asset_dir, &client::content::assets::required_asset_paths());
    report.log();

    let state = state::AppState::new(report);
    let app = routes::site_app(state, &config.asset_dir)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, asset_dir = %config.asset_dir.display(), "mvs-site listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
