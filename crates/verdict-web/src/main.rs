mod config;
mod handlers;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_livereload::LiveReloadLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        warn!("failed to load verdict.toml: {e:#}, using defaults");
        Config::default()
    });

    let table = verdict_ui::routes();
    info!("serving {} routes", table.len());
    for route in table.iter() {
        info!("  {} -> {}", route.pattern(), route.name().unwrap_or("page"));
    }

    let app = Router::new()
        .route("/", get(handlers::root))
        .nest_service("/assets", ServeDir::new(&config.assets.dir))
        .route("/*path", get(handlers::page));

    let app = if config.dev.live_reload {
        info!("live reload: enabled");
        app.layer(LiveReloadLayer::new())
    } else {
        app
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .context("server terminated")?;

    Ok(())
}
