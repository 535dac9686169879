mod config;
mod errors;
mod models;
mod routes;
mod state;
mod store;
mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::ResumeStore;
use crate::views::{DirViewLoader, EmbeddedViewLoader, ViewLoader};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Views come from disk when VIEWS_DIR is set, otherwise from the binary
    let loader: Arc<dyn ViewLoader> = match &config.views_dir {
        Some(dir) => {
            info!("Serving views from {}", dir.display());
            Arc::new(DirViewLoader::new(dir.clone()))
        }
        None => Arc::new(EmbeddedViewLoader),
    };

    let store = ResumeStore::new();
    info!("Resume store seeded (revision {})", store.revision());

    let state = AppState::new(config.clone(), store, loader);
    info!("Views mounted under base path {}", state.routes.base());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the editor is hosted separately

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
