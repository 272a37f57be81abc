use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

mod error;
mod handlers;
mod models;
mod state;
mod store;
mod upload;

use rigor_core::{Auditor, BibliographicLookup, CrossrefClient};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use state::AppState;
use store::SubmissionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = std::env::var("RIGOR_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
        .parse()?;

    let upload_dir =
        PathBuf::from(std::env::var("RIGOR_UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()));
    std::fs::create_dir_all(&upload_dir)?;

    let mut crossref = CrossrefClient::new(reqwest::Client::new());
    if let Ok(base_url) = std::env::var("CROSSREF_BASE_URL") {
        crossref = crossref.with_base_url(base_url);
    }
    crossref = crossref.with_mailto(std::env::var("CROSSREF_MAILTO").ok());
    if let Some(secs) = std::env::var("LOOKUP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
    {
        crossref = crossref.with_timeout(Duration::from_secs(secs));
    }

    let lookup: Arc<dyn BibliographicLookup> = Arc::new(crossref);
    let state = Arc::new(AppState {
        store: SubmissionStore::new(),
        auditor: Auditor::new(Arc::clone(&lookup)),
        lookup,
        upload_dir,
    });

    // Allow large paper uploads (50MB)
    let body_limit = axum::extract::DefaultBodyLimit::max(50 * 1024 * 1024);

    let app = axum::Router::new()
        .route(
            "/api/submissions",
            axum::routing::post(handlers::submissions::create)
                .get(handlers::submissions::list),
        )
        .route(
            "/api/submissions/{id}",
            axum::routing::get(handlers::submissions::show),
        )
        .route(
            "/api/submissions/{id}/report",
            axum::routing::get(handlers::submissions::report),
        )
        .route(
            "/api/submissions/{id}/corrections",
            axum::routing::get(handlers::assist::corrections),
        )
        .route(
            "/api/submissions/{id}/recommendations",
            axum::routing::get(handlers::assist::recommendations),
        )
        .layer(body_limit)
        .with_state(state);

    println!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
