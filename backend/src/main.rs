use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use biobrim_backend::{build_router, config::AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let port = config.port;
    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("serving on port {}", port);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
