mod api;
mod middleware;

use std::sync::Arc;
use std::time::Duration;

use leadcheck_export::ReportMailer;
use leadcheck_scraper::{ScrapeConfig, ScrapeCoordinator};
use leadcheck_store::AnalysisStore;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = leadcheck_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let store = AnalysisStore::new(config.analysis_ttl_secs);
    let sweeper = store.spawn_sweeper(Duration::from_secs(config.sweep_interval_secs));

    let coordinator = Arc::new(ScrapeCoordinator::new(ScrapeConfig::from_app_config(
        &config,
    ))?);
    let mailer = ReportMailer::new(
        config.sendgrid_api_key.clone(),
        config.sendgrid_from_email.clone(),
    );

    let app = build_app(AppState {
        store,
        coordinator,
        mailer,
        product_url: config.product_url.clone(),
    });

    tracing::info!(addr = %config.bind_addr, env = %config.env, "starting lead verification server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
