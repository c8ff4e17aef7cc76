mod config;
mod errors;
mod jobs;
mod perf;
mod preferences;
mod provider;
mod resume;
mod routes;
mod session;
mod state;
mod view;

use anyhow::Result;
use std::net::SocketAddr;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::preferences::{open_store, theme::load_theme};
use crate::provider::{DataProvider, MockDataProvider, ProviderDelays};
use crate::routes::build_router;
use crate::session::{InactivityMonitor, SessionStore};
use crate::state::AppState;
use crate::view::PortalView;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch portal v{}", env!("CARGO_PKG_VERSION"));

    // Initialize preference store (file, Redis or in-memory)
    let preferences = open_store(&config.preferences).await?;

    // Build the view and apply the stored theme before the first request
    let mut portal = PortalView::default();
    let theme = load_theme(preferences.as_ref()).await?;
    portal.apply_theme(theme);
    info!("Theme restored: {}", theme.as_str());
    let view = Arc::new(Mutex::new(portal));

    // Initialize data provider (MockDataProvider until a real backend exists)
    let provider: Arc<dyn DataProvider> = Arc::new(MockDataProvider::new(ProviderDelays {
        api: config.api_delay,
        resume: config.resume_delay,
    }));
    info!(
        "Mock provider initialized (api {}ms, resume {}ms)",
        config.api_delay.as_millis(),
        config.resume_delay.as_millis()
    );

    // Session flags and inactivity logout
    let session = SessionStore::new(preferences.clone());
    let inactivity = InactivityMonitor {
        timeout: config.session_timeout,
        grace: config.logout_grace,
        session: session.clone(),
        view: view.clone(),
    }
    .spawn();

    // Build app state
    let state = AppState {
        config: config.clone(),
        view,
        preferences,
        provider,
        session,
        inactivity,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the page has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
